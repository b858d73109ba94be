//! Error taxonomy for import and export operations.
//!
//! Every failure surfaces at the operation boundary as one of four kinds:
//! a missing provider selection, unresolved canonical columns, an export
//! attempted before any import, or a lower-level I/O or decoding failure
//! carrying its context chain.

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use crate::provider::Provider;

pub type SimResult<T> = Result<T, SimImportError>;

#[derive(Error, Debug)]
pub enum SimImportError {
    #[error("Please select a provider (Vodacom or MTN) first")]
    ProviderNotSelected,

    #[error("{0}")]
    MissingColumns(MissingColumns),

    #[error("No data available. Please import Sim's first.")]
    NoData,

    #[error("An error occurred: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

/// A canonical field that no header resolved to, with the aliases that
/// would have been accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    pub field: &'static str,
    pub aliases: &'static [&'static str],
}

/// Structured payload of a failed reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumns {
    pub provider: Provider,
    pub missing: Vec<MissingField>,
    /// Raw headers exactly as they appeared in the file.
    pub found_headers: Vec<String>,
}

impl MissingColumns {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.missing.iter().map(|m| m.field).collect()
    }
}

impl fmt::Display for MissingColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "File must contain columns: {}",
            self.missing.iter().map(|m| m.field).join(", ")
        )?;
        writeln!(f)?;
        writeln!(f, "Acceptable column name variations:")?;
        for missing in &self.missing {
            writeln!(
                f,
                "- {}: {}",
                missing.field,
                missing.aliases.iter().map(|alias| title_case(alias)).join(", ")
            )?;
        }
        writeln!(f)?;
        write!(
            f,
            "Columns found in file: {}",
            self.found_headers.iter().join(", ")
        )
    }
}

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
/// Separators are kept so the rendered alias is still what the user must type.
pub(crate) fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                output.extend(ch.to_uppercase());
            } else {
                output.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            output.push(ch);
            at_word_start = true;
        }
    }
    output
}
