//! In-memory tables: raw imports and their reconciled projection.

use std::fmt;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Empty,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

/// Floats at or above this magnitude lose integer precision, so they keep
/// their float rendering.
const INTEGRAL_FLOAT_LIMIT: f64 = 1e15;

impl Value {
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_display(&self) -> String {
        match self {
            Value::Empty => String::new(),
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < INTEGRAL_FLOAT_LIMIT {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            Value::Boolean(b) => b.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_display())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Value::Empty
        } else {
            Value::String(value.to_string())
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Value::Empty
        } else {
            Value::String(value)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Headers and cells exactly as read from the first sheet of an input file.
///
/// Columns are stored in file order. Every column holds `row_count` values;
/// short rows are padded with [`Value::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    columns: Vec<Column>,
    row_count: usize,
}

impl RawTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a header row and data rows. Rows shorter than the
    /// header are padded; cells beyond the header are dropped.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let row_count = rows.len();
        let mut columns = headers
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(row_count)))
            .collect::<Vec<_>>();
        for row in rows {
            let mut cells = row.into_iter();
            for column in &mut columns {
                column.values.push(cells.next().unwrap_or(Value::Empty));
            }
        }
        Self { columns, row_count }
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

/// A raw table projected onto a provider's canonical schema.
///
/// Columns carry canonical names in canonical order; `source_headers` keeps
/// the raw header each column came from, index for index.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledTable {
    pub(crate) columns: Vec<Column>,
    pub(crate) source_headers: Vec<String>,
    pub(crate) row_count: usize,
}

impl ReconciledTable {
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn source_headers(&self) -> &[String] {
        &self.source_headers
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}
