//! Cell-write instructions handed from the generator to a backend

use crate::column::ColumnAddress;
use std::fmt;

/// A scalar cell value
///
/// The cloud API and the XLSX writer both take plain scalars; nothing
/// structured ever crosses this boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetValue {
    /// Text content
    Text(String),
    /// Numeric content
    Number(f64),
    /// Checkbox content (rendered TRUE/FALSE)
    Bool(bool),
}

impl From<&str> for SheetValue {
    fn from(s: &str) -> Self {
        SheetValue::Text(s.to_string())
    }
}

impl From<String> for SheetValue {
    fn from(s: String) -> Self {
        SheetValue::Text(s)
    }
}

impl From<f64> for SheetValue {
    fn from(n: f64) -> Self {
        SheetValue::Number(n)
    }
}

impl From<i32> for SheetValue {
    fn from(n: i32) -> Self {
        SheetValue::Number(n as f64)
    }
}

impl From<bool> for SheetValue {
    fn from(b: bool) -> Self {
        SheetValue::Bool(b)
    }
}

impl fmt::Display for SheetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetValue::Text(s) => write!(f, "{s}"),
            SheetValue::Number(n) => write!(f, "{n}"),
            SheetValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

/// Quote a sheet name for use in an A1-style range
fn quote_sheet(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

/// One cell write: (sheet, column, row, value)
#[derive(Debug, Clone, PartialEq)]
pub struct CellWrite {
    /// Target sheet name
    pub sheet: String,
    /// Target column
    pub column: ColumnAddress,
    /// Target row (1-based)
    pub row: u32,
    /// The value to place
    pub value: SheetValue,
}

impl CellWrite {
    /// Create a cell write
    pub fn new(
        sheet: impl Into<String>,
        column: ColumnAddress,
        row: u32,
        value: impl Into<SheetValue>,
    ) -> Self {
        Self {
            sheet: sheet.into(),
            column,
            row,
            value: value.into(),
        }
    }

    /// Render the A1-style range string, e.g. `'ROUND 3'!C4`
    pub fn range(&self) -> String {
        format!("{}!{}{}", quote_sheet(&self.sheet), self.column, self.row)
    }
}

/// A textual range to clear, scoped to one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearRange {
    /// Target sheet name
    pub sheet: String,
    /// Range within the sheet, e.g. `B4:H31`
    pub range: String,
}

impl ClearRange {
    /// Create a clear range
    pub fn new(sheet: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            range: range.into(),
        }
    }

    /// Render the sheet-qualified range string, e.g. `'ROUND 3'!B4:H31`
    pub fn qualified(&self) -> String {
        format!("{}!{}", quote_sheet(&self.sheet), self.range)
    }
}
