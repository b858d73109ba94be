//! Input file loading.
//!
//! Spreadsheets (`.xlsx`, `.xlsm`, `.xls`, `.xlsb`, `.ods`) are opened with
//! `calamine`; only the first sheet is read and its first row supplies the
//! headers. Delimited text files (`.csv`, `.tsv`, or `-` for stdin) go through
//! the CSV reader instead.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use calamine::{Data, Reader, open_workbook_auto};
use encoding_rs::Encoding;
use log::{debug, info};

use crate::{
    data::{RawTable, Value},
    error::SimResult,
    io_utils,
};

/// Loads the first sheet (or the delimited file) at `path`.
///
/// `encoding` only applies to delimited inputs.
pub fn read_table(path: &Path, encoding: &'static Encoding) -> SimResult<RawTable> {
    let table = if is_delimited(path) {
        read_delimited(path, encoding)?
    } else {
        read_first_sheet(path)?
    };
    info!(
        "Read {} row(s) across {} column(s) from {:?}",
        table.row_count(),
        table.columns().len(),
        path
    );
    Ok(table)
}

fn is_delimited(path: &Path) -> bool {
    if io_utils::is_dash(path) {
        return true;
    }
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("tsv")
    )
}

fn read_first_sheet(path: &Path) -> Result<RawTable> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("Opening workbook {path:?}"))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("Workbook {path:?} contains no sheets"))?;
    debug!("Reading sheet '{sheet_name}' from {path:?}");
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Reading sheet '{sheet_name}' in {path:?}"))?;

    if range.is_empty() {
        return Ok(RawTable::new());
    }

    // The range starts at the first used cell; positions are kept relative
    // to A1 so blank leading rows and columns still count.
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let (start_row, start_col) = (start_row as usize, start_col as usize);
    if start_row > 0 || start_col > 0 {
        debug!("Sheet '{sheet_name}' data starts at row {start_row}, column {start_col}");
    }
    let width = start_col + range.width();
    let mut grid = std::iter::repeat_with(Vec::new)
        .take(start_row)
        .chain(range.rows().map(|row| {
            let mut cells = vec![Value::Empty; start_col];
            cells.extend(row.iter().map(cell_value));
            cells
        }));

    let header_cells = grid.next().unwrap_or_default();
    let headers = (0..width)
        .map(|idx| header_name(idx, header_cells.get(idx).unwrap_or(&Value::Empty)))
        .collect::<Vec<_>>();
    Ok(RawTable::from_rows(headers, grid.collect()))
}

fn read_delimited(path: &Path, encoding: &'static Encoding) -> Result<RawTable> {
    let delimiter = io_utils::resolve_input_delimiter(path);
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)
        .with_context(|| format!("Reading headers from {path:?}"))?
        .into_iter()
        .enumerate()
        .map(|(idx, header)| {
            if header.trim().is_empty() {
                unnamed(idx)
            } else {
                header
            }
        })
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for (idx, record) in reader.byte_records().enumerate() {
        let record = record.with_context(|| format!("Reading row {} in {path:?}", idx + 2))?;
        let decoded = io_utils::decode_record(&record, encoding)
            .with_context(|| format!("Decoding row {} in {path:?}", idx + 2))?;
        rows.push(decoded.into_iter().map(Value::from).collect());
    }
    Ok(RawTable::from_rows(headers, rows))
}

/// Blank header cells get a placeholder name that no alias can match.
fn unnamed(idx: usize) -> String {
    format!("Unnamed: {idx}")
}

fn header_name(idx: usize, cell: &Value) -> String {
    let text = cell.as_display();
    if text.trim().is_empty() {
        unnamed(idx)
    } else {
        text
    }
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Empty,
        Data::String(s) => Value::from(s.as_str()),
        Data::Int(i) => Value::Integer(*i),
        Data::Float(f) => Value::Float(*f),
        Data::Bool(b) => Value::Boolean(*b),
        other => Value::from(other.to_string()),
    }
}
