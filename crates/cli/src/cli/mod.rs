use std::io;

use clap::{Parser, Subcommand};

use crate::{config::LoggingConfig, errors::CliError};

mod catalog;
mod order;
mod source;

#[derive(Debug, Parser)]
#[command(name = "meltmunch", about = "Melt & Munch storefront CLI", long_about = None)]
pub(crate) struct Cli {
    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the catalog
    Catalog(catalog::CatalogArgs),

    /// Compose an order and print its WhatsApp hand-off link
    Order(order::OrderArgs),
}

impl Cli {
    /// Load arguments from `.env`, the environment and the command line.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self, out: impl io::Write) -> Result<(), CliError> {
        match self.command {
            Commands::Catalog(args) => catalog::run(args, out).await,
            Commands::Order(args) => order::run(args, out).await,
        }
    }
}
