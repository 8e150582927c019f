use clap::Parser;
use std::process;
use weatherman::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
