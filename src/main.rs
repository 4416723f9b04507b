use std::{io, process};

use clap::Parser;

mod app;
mod cli;
mod config;
mod errors;
mod models;
mod services;
mod types;
mod utils;
mod validations;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = app::start(cli) {
        let code = app::report(&err, &mut io::stdout(), &mut io::stderr());
        process::exit(code);
    }
}
