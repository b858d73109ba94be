//! Column reconciliation.
//!
//! Maps the free-form headers of a [`RawTable`] onto the canonical schema of
//! a provider. Common fields are matched exactly against their aliases in
//! declared order; IP fields use the provider's [`MatchStrategy`].
//!
//! Resolution rules:
//!
//! - Headers are compared as `lower(trim(header))`.
//! - When several headers normalize to the same text, only the leftmost one
//!   takes part in matching.
//! - Every canonical field is searched independently, so one column may
//!   satisfy several slots (a bare `IP Address` header fills both MTN IP
//!   fields).
//! - Every unresolved field is collected before failing, so a single
//!   [`MissingColumns`] error names all of them.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::{
    data::{Column, RawTable, ReconciledTable},
    error::{MissingColumns, MissingField, SimImportError, SimResult},
    provider::Provider,
};

/// The header chosen for one canonical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMatch {
    pub field: &'static str,
    pub source_index: usize,
    pub source_header: String,
}

pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Resolves every canonical field for `provider` without touching cell data.
pub fn resolve_columns(headers: &[String], provider: Provider) -> SimResult<Vec<ColumnMatch>> {
    let profile = provider.profile();
    let normalized = headers
        .iter()
        .map(|header| normalize_header(header))
        .collect::<Vec<_>>();
    debug!("Headers for {provider} import: {headers:?}");
    debug!("Normalized headers: {normalized:?}");

    let shadowed = shadowed_duplicates(&normalized);
    for (idx, first) in &shadowed {
        warn!(
            "Header '{}' normalizes to the same name as '{}' and will be ignored",
            headers[*idx], headers[*first]
        );
    }

    let mut matches = Vec::new();
    let mut missing = Vec::new();

    for (entry, strategy) in profile.slots() {
        let found =
            strategy.locate(entry.aliases, &normalized, |idx| !shadowed.contains_key(&idx));
        match found {
            Some(idx) => {
                debug!(
                    "Resolved '{}' to column '{}' ({strategy} match)",
                    entry.field, headers[idx]
                );
                matches.push(ColumnMatch {
                    field: entry.field,
                    source_index: idx,
                    source_header: headers[idx].clone(),
                });
            }
            None => {
                debug!("No column found for '{}'", entry.field);
                missing.push(MissingField {
                    field: entry.field,
                    aliases: entry.aliases,
                });
            }
        }
    }

    if !missing.is_empty() {
        let error = MissingColumns {
            provider,
            missing,
            found_headers: headers.to_vec(),
        };
        info!(
            "{provider} import is missing column(s): {:?}",
            error.missing_fields()
        );
        return Err(SimImportError::MissingColumns(error));
    }
    Ok(matches)
}

/// Projects `raw` onto the canonical schema of `provider`.
pub fn reconcile(raw: &RawTable, provider: Provider) -> SimResult<ReconciledTable> {
    let headers = raw.headers();
    let matches = resolve_columns(&headers, provider)?;

    let mut columns = Vec::with_capacity(matches.len());
    let mut source_headers = Vec::with_capacity(matches.len());
    for column_match in matches {
        let values = raw
            .column(column_match.source_index)
            .map(|column| column.values.clone())
            .unwrap_or_default();
        columns.push(Column::new(column_match.field, values));
        source_headers.push(column_match.source_header);
    }
    Ok(ReconciledTable {
        columns,
        source_headers,
        row_count: raw.row_count(),
    })
}

/// Maps the index of every duplicate normalized header to the index of the
/// first header with the same normalized text.
fn shadowed_duplicates(normalized: &[String]) -> HashMap<usize, usize> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut shadowed = HashMap::new();
    for (idx, header) in normalized.iter().enumerate() {
        match first_seen.get(header.as_str()) {
            Some(first) => {
                shadowed.insert(idx, *first);
            }
            None => {
                first_seen.insert(header.as_str(), idx);
            }
        }
    }
    shadowed
}
