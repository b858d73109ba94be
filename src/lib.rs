pub mod aliases;
pub mod cli;
pub mod convert;
pub mod data;
pub mod error;
pub mod export;
pub mod io_utils;
pub mod preview;
pub mod provider;
pub mod reconcile;
pub mod session;
pub mod shell;
pub mod table;
pub mod workbook;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, debug};

use crate::cli::{Cli, Commands};

pub use crate::{
    data::{Column, RawTable, ReconciledTable, Value},
    error::{MissingColumns, MissingField, SimImportError, SimResult},
    export::ExportTable,
    provider::Provider,
    session::{ImportSession, ImportSummary},
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("sim_import", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    debug!("Parsed command: {:?}", cli.command);
    match cli.command {
        Commands::Convert(args) => convert::execute(&args),
        Commands::Preview(args) => preview::execute(&args),
        Commands::Aliases(args) => aliases::execute(&args),
    }
}
