//! Export formatting for the provisioning CSV.
//!
//! The export table always starts with `Count`, `Cell Number` and
//! `Sim Number`, followed by `Ip Address1` and, when the reconciled table
//! has a secondary IP column, `Ip Address2`.

use std::{io::Write, path::Path};

use anyhow::Context;
use log::{info, warn};

use crate::{
    data::{Column, ReconciledTable},
    error::{SimImportError, SimResult},
    io_utils,
    provider::{CELL_NUMBER, IP_ADDRESS, IP_ADDRESS_1, IP_ADDRESS_2, SIM_NUMBER},
};

pub const COUNT_HEADER: &str = "Count";
pub const EXPORT_CELL_NUMBER: &str = "Cell Number";
pub const EXPORT_SIM_NUMBER: &str = "Sim Number";
pub const EXPORT_IP_1: &str = "Ip Address1";
pub const EXPORT_IP_2: &str = "Ip Address2";

pub const COUNTRY_PREFIX: &str = "27";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Prepends the South African country code unless the number already starts
/// with it. Purely textual: no length or digit checks are made.
pub fn normalize_cell_number(value: &str) -> String {
    if value.starts_with(COUNTRY_PREFIX) {
        value.to_string()
    } else {
        format!("{COUNTRY_PREFIX}{value}")
    }
}

pub fn build_export(table: &ReconciledTable) -> SimResult<ExportTable> {
    if table.is_empty() {
        return Err(SimImportError::NoData);
    }
    let cell_numbers = required(table, CELL_NUMBER)?;
    let sim_numbers = required(table, SIM_NUMBER)?;

    // Both primary sources map onto the same export column; a later source
    // replaces an earlier one.
    let mut ip_columns: Vec<(&str, &Column)> = Vec::new();
    for (source, target) in [
        (IP_ADDRESS, EXPORT_IP_1),
        (IP_ADDRESS_1, EXPORT_IP_1),
        (IP_ADDRESS_2, EXPORT_IP_2),
    ] {
        if let Some(column) = table.column(source) {
            match ip_columns.iter_mut().find(|(name, _)| *name == target) {
                Some(slot) => slot.1 = column,
                None => ip_columns.push((target, column)),
            }
        }
    }

    let mut headers = vec![
        COUNT_HEADER.to_string(),
        EXPORT_CELL_NUMBER.to_string(),
        EXPORT_SIM_NUMBER.to_string(),
    ];
    headers.extend(ip_columns.iter().map(|(name, _)| name.to_string()));

    let mut blank_cells = 0usize;
    let mut rows = Vec::with_capacity(table.row_count());
    for idx in 0..table.row_count() {
        let raw_cell = cell_text(cell_numbers, idx);
        if raw_cell.is_empty() {
            blank_cells += 1;
        }
        let cell = normalize_cell_number(&raw_cell);
        let mut row = Vec::with_capacity(headers.len());
        row.push((idx + 1).to_string());
        row.push(cell);
        row.push(cell_text(sim_numbers, idx));
        for (_, column) in &ip_columns {
            row.push(cell_text(column, idx));
        }
        rows.push(row);
    }
    if blank_cells > 0 {
        warn!("{blank_cells} row(s) have an empty Cell Number; exported as '{COUNTRY_PREFIX}'");
    }
    Ok(ExportTable { headers, rows })
}

/// Writes `export` as CSV and returns the number of data rows written.
pub fn write_csv<W: Write>(export: &ExportTable, writer: &mut csv::Writer<W>) -> SimResult<usize> {
    writer
        .write_record(export.headers.iter())
        .context("Writing export headers")?;
    for (idx, row) in export.rows.iter().enumerate() {
        writer
            .write_record(row.iter())
            .with_context(|| format!("Writing export row {}", idx + 1))?;
    }
    writer.flush().context("Flushing export writer")?;
    Ok(export.row_count())
}

pub fn export_to_path(table: &ReconciledTable, path: &Path) -> SimResult<usize> {
    let export = build_export(table)?;
    let mut writer = io_utils::open_csv_writer(path)?;
    let rows = write_csv(&export, &mut writer)?;
    info!("Exported {rows} SIM row(s) to {path:?}");
    Ok(rows)
}

pub fn export_to_string(table: &ReconciledTable) -> SimResult<String> {
    let export = build_export(table)?;
    let mut writer = io_utils::csv_writer(Vec::new());
    write_csv(&export, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("Finishing export buffer: {}", err.error()))?;
    let text = String::from_utf8(bytes).context("Export buffer is not valid UTF-8")?;
    Ok(text)
}

fn required<'a>(table: &'a ReconciledTable, name: &str) -> SimResult<&'a Column> {
    table
        .column(name)
        .ok_or_else(|| anyhow::anyhow!("Reconciled table has no '{name}' column").into())
}

fn cell_text(column: &Column, idx: usize) -> String {
    column
        .values
        .get(idx)
        .map(|value| value.as_display())
        .unwrap_or_default()
}
