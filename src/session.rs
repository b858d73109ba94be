//! Import session: the caller-owned holder of the current reconciled table.
//!
//! A session starts empty. Each successful import replaces the stored table;
//! a failed import leaves it untouched. Exports read whatever the last
//! successful import stored and fail with [`SimImportError::NoData`] when
//! there is nothing (or only an empty table) to export.

use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use log::info;

use crate::{
    data::{RawTable, ReconciledTable},
    error::{SimImportError, SimResult},
    export::{self, ExportTable},
    provider::Provider,
    reconcile, workbook,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub provider: Provider,
    pub rows: usize,
    pub ip_columns: usize,
}

impl ImportSummary {
    pub fn message(&self) -> String {
        format!(
            "{} Sim's imported successfully!\n{} SIMs ({} IP cols).",
            self.provider, self.rows, self.ip_columns
        )
    }
}

#[derive(Debug)]
pub struct ImportSession {
    current: Option<(Provider, ReconciledTable)>,
    input_encoding: &'static Encoding,
}

impl Default for ImportSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportSession {
    pub fn new() -> Self {
        Self {
            current: None,
            input_encoding: UTF_8,
        }
    }

    /// Encoding used for delimited (CSV/TSV) inputs.
    pub fn with_input_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.input_encoding = encoding;
        self
    }

    pub fn current(&self) -> Option<&ReconciledTable> {
        self.current.as_ref().map(|(_, table)| table)
    }

    pub fn current_provider(&self) -> Option<Provider> {
        self.current.as_ref().map(|(provider, _)| *provider)
    }

    pub fn import_path(&mut self, provider: Option<Provider>, path: &Path) -> SimResult<ImportSummary> {
        let provider = provider.ok_or(SimImportError::ProviderNotSelected)?;
        info!("Importing {provider} SIMs from {path:?}");
        let raw = workbook::read_table(path, self.input_encoding)?;
        self.import_table(Some(provider), &raw)
    }

    pub fn import_table(&mut self, provider: Option<Provider>, raw: &RawTable) -> SimResult<ImportSummary> {
        let provider = provider.ok_or(SimImportError::ProviderNotSelected)?;
        let table = reconcile::reconcile(raw, provider)?;
        let summary = ImportSummary {
            provider,
            rows: table.row_count(),
            ip_columns: provider.profile().ip_fields.len(),
        };
        info!(
            "Imported {} {} SIM row(s) with {} IP column(s)",
            summary.rows, provider, summary.ip_columns
        );
        self.current = Some((provider, table));
        Ok(summary)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    fn current_or_no_data(&self) -> SimResult<&ReconciledTable> {
        match self.current() {
            Some(table) if !table.is_empty() => Ok(table),
            _ => Err(SimImportError::NoData),
        }
    }

    pub fn export_table(&self) -> SimResult<ExportTable> {
        export::build_export(self.current_or_no_data()?)
    }

    pub fn export_to_path(&self, path: &Path) -> SimResult<usize> {
        export::export_to_path(self.current_or_no_data()?, path)
    }

    pub fn export_to_string(&self) -> SimResult<String> {
        export::export_to_string(self.current_or_no_data()?)
    }
}
