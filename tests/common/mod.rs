#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use sim_import::{RawTable, Value};
use tempfile::{TempDir, tempdir};

/// A spreadsheet cell for generated fixtures.
#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }

    /// Writes a single-sheet workbook whose first row is `headers`.
    pub fn write_xlsx(&self, name: &str, headers: &[&str], rows: &[Vec<Cell<'_>>]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, header) in headers.iter().enumerate() {
            if !header.is_empty() {
                sheet
                    .write_string(0, col as u16, *header)
                    .expect("write header");
            }
        }
        for (row_idx, row) in rows.iter().enumerate() {
            let row_num = row_idx as u32 + 1;
            for (col, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(text) => {
                        sheet
                            .write_string(row_num, col as u16, *text)
                            .expect("write text cell");
                    }
                    Cell::Number(number) => {
                        sheet
                            .write_number(row_num, col as u16, *number)
                            .expect("write number cell");
                    }
                    Cell::Blank => {}
                }
            }
        }
        workbook.save(&path).expect("save workbook");
        path
    }
}

/// Builds a raw table of text cells.
pub fn raw_table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::from_rows(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|cell| Value::from(*cell)).collect())
            .collect(),
    )
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
