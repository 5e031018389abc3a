//! Melt & Munch command-line tool

use std::{io, process};

use crate::cli::Cli;

mod cli;
mod config;
mod errors;
mod logging;

#[tokio::main]
async fn main() {
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = logging::init_subscriber(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {error}");
        }

        process::exit(1);
    }

    if let Err(error) = cli.run(io::stdout()).await {
        #[expect(
            clippy::print_stderr,
            reason = "alert text is shown to the user as-is"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}
