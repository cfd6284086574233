use crate::{pool_entries, Epoch, TxHandler};
use clap::{Arg, ArgMatches, Command};
use log::info;
use std::error::Error;
use std::fs;

struct HandleBatchCliOptions {
    epoch: String,
    output: Option<String>,
}

impl HandleBatchCliOptions {
    pub fn parse(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let epoch = matches
            .value_of("epoch")
            .ok_or("Missing required argument: --epoch")?
            .to_string();
        Ok(Self {
            epoch,
            output: matches.value_of("output").map(str::to_string),
        })
    }
}

pub fn handle_batch_command() -> Command<'static> {
    Command::new("handle-batch")
        .version("0.1")
        .about("Accepts a mutually valid subset of an epoch's transactions and updates the pool.")
        .arg(
            Arg::new("epoch")
                .long("epoch")
                .value_name("FILE")
                .help("JSON file with the UTXO pool snapshot and the proposed transactions.")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FILE")
                .help("Where to write the resulting UTXO pool. Defaults to stdout.")
                .takes_value(true)
                .required(false),
        )
}

pub fn run_handle_batch_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let options = HandleBatchCliOptions::parse(matches)?;
    let epoch = Epoch::load(&options.epoch)?;
    let mut handler = TxHandler::new(&epoch.utxo_pool());

    let accepted = handler.handle_batch(epoch.transactions);
    for transaction in &accepted {
        println!("accepted {}", transaction);
    }

    let json = serde_json::to_string_pretty(&pool_entries(handler.utxo_pool()))?;
    match &options.output {
        Some(path) => {
            fs::write(path, json)?;
            info!("Wrote {} unspent outputs to {}", handler.utxo_pool().len(), path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
