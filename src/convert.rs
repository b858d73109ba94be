//! `convert` command: import a spreadsheet and write the provisioning CSV.
//!
//! The command-line arguments stand in for the interactive front end: the
//! provider flag answers the provider prompt and the input/output paths
//! answer the file dialogs.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use log::info;

use crate::{
    cli::ConvertArgs,
    io_utils,
    provider::Provider,
    session::ImportSession,
    shell::{self, Outcome, Shell},
};

struct CliShell<'a> {
    args: &'a ConvertArgs,
    errors: Vec<String>,
}

impl Shell for CliShell<'_> {
    fn current_provider(&self) -> Option<Provider> {
        self.args.provider
    }

    fn select_input_file(&mut self, _provider: Provider) -> Option<PathBuf> {
        Some(self.args.input.clone())
    }

    fn select_output_path(&mut self) -> Option<PathBuf> {
        Some(self.args.output.clone())
    }

    fn report_success(&mut self, message: &str) {
        // stdout carries the CSV itself when exporting to '-'.
        if io_utils::is_dash(&self.args.output) {
            info!("{message}");
        } else {
            println!("{message}");
        }
    }

    fn report_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

impl CliShell<'_> {
    fn into_error(self) -> anyhow::Error {
        anyhow!(self.errors.join("\n"))
    }
}

pub fn execute(args: &ConvertArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let mut session = ImportSession::new().with_input_encoding(encoding);
    let mut front_end = CliShell {
        args,
        errors: Vec::new(),
    };

    match shell::run_import(&mut front_end, &mut session) {
        Outcome::Completed(_) => {}
        Outcome::Cancelled => return Ok(()),
        Outcome::Failed(_) => return Err(front_end.into_error()),
    }
    match shell::run_export(&mut front_end, &session) {
        Outcome::Completed(_) | Outcome::Cancelled => Ok(()),
        Outcome::Failed(_) => Err(front_end.into_error()),
    }
}
