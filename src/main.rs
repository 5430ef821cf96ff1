use std::process::ExitCode;

use clap::Parser;
use modlang::cli::{Arguments, ExitStatus, logging, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();
    logging::init(args.verbose());

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
