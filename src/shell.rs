//! Front-end collaborators and the import/export workflows that drive them.
//!
//! A [`Shell`] supplies the provider choice and file paths and receives the
//! user-facing result messages. [`run_import`] and [`run_export`] never
//! return errors; every outcome is reported through the shell exactly once.

use std::path::{Path, PathBuf};

use log::info;

use crate::{
    error::SimImportError,
    provider::Provider,
    session::{ImportSession, ImportSummary},
};

pub trait Shell {
    fn current_provider(&self) -> Option<Provider>;

    /// `None` means the user cancelled the selection.
    fn select_input_file(&mut self, provider: Provider) -> Option<PathBuf>;

    /// `None` means the user cancelled the selection.
    fn select_output_path(&mut self) -> Option<PathBuf>;

    fn report_success(&mut self, message: &str);

    fn report_error(&mut self, message: &str);
}

#[derive(Debug)]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
    Failed(SimImportError),
}

impl<T> Outcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }
}

pub fn run_import<S: Shell>(shell: &mut S, session: &mut ImportSession) -> Outcome<ImportSummary> {
    let Some(provider) = shell.current_provider() else {
        return fail(shell, SimImportError::ProviderNotSelected);
    };
    let Some(path) = shell.select_input_file(provider) else {
        info!("Import cancelled.");
        return Outcome::Cancelled;
    };
    match session.import_path(Some(provider), &path) {
        Ok(summary) => {
            shell.report_success(&summary.message());
            Outcome::Completed(summary)
        }
        Err(err) => fail(shell, err),
    }
}

pub fn run_export<S: Shell>(shell: &mut S, session: &ImportSession) -> Outcome<usize> {
    // NoData is reported before any destination prompt.
    if session.current().is_none_or(|table| table.is_empty()) {
        return fail(shell, SimImportError::NoData);
    }
    let Some(path) = shell.select_output_path() else {
        info!("Export cancelled.");
        return Outcome::Cancelled;
    };
    match session.export_to_path(&path) {
        Ok(rows) => {
            shell.report_success(&export_message(rows, &path));
            Outcome::Completed(rows)
        }
        Err(err) => fail(shell, err),
    }
}

pub fn export_message(rows: usize, path: &Path) -> String {
    format!(
        "File exported successfully!\n\n{rows} SIM cards exported to {}",
        path.display()
    )
}

fn fail<S: Shell, T>(shell: &mut S, err: SimImportError) -> Outcome<T> {
    shell.report_error(&err.to_string());
    Outcome::Failed(err)
}
