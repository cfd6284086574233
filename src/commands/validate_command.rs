use crate::{Epoch, TxHandler};
use clap::{Arg, ArgMatches, Command};
use std::error::Error;

struct ValidateCliOptions {
    epoch: String,
}

impl ValidateCliOptions {
    pub fn parse(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let epoch = matches
            .value_of("epoch")
            .ok_or("Missing required argument: --epoch")?
            .to_string();
        Ok(Self { epoch })
    }
}

pub fn validate_command() -> Command<'static> {
    Command::new("validate")
        .version("0.1")
        .about("Checks each transaction of an epoch on its own against the initial pool.")
        .arg(
            Arg::new("epoch")
                .long("epoch")
                .value_name("FILE")
                .help("JSON file with the UTXO pool snapshot and the proposed transactions.")
                .takes_value(true)
                .required(true),
        )
}

pub fn run_validate_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let options = ValidateCliOptions::parse(matches)?;
    let epoch = Epoch::load(&options.epoch)?;
    let handler = TxHandler::new(&epoch.utxo_pool());
    for transaction in &epoch.transactions {
        match handler.validate(transaction) {
            Ok(()) => println!("{} valid", transaction),
            Err(reason) => println!("{} invalid: {}", transaction, reason),
        }
    }
    Ok(())
}
