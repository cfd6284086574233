use clap::{Arg, Command};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("scroogecoin")
        .about("ScroogeCoin ledger CLI tools.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Logs every pass of the batch processor.")
                .global(true),
        )
        .subcommand(scroogecoin_lib::commands::validate_command())
        .subcommand(scroogecoin_lib::commands::handle_batch_command())
        .get_matches();

    let default_level = if matches.is_present("verbose") {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match matches.subcommand() {
        Some(("validate", matches)) => scroogecoin_lib::commands::run_validate_command(matches),
        Some(("handle-batch", matches)) => {
            scroogecoin_lib::commands::run_handle_batch_command(matches)
        }
        _ => Err("Should report help.".into()),
    }
}
