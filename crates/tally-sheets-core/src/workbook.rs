//! In-memory workbook used by the file backend
//!
//! A deliberately small document model: sparse value cells, no styling.
//! The XLSX backend clones a template [`Workbook`] per export call so
//! concurrent exports never share document state.

use crate::column::ColumnAddress;
use crate::error::{Error, Result};
use crate::write::SheetValue;
use std::collections::BTreeMap;

/// A single sheet with sparse cell storage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Worksheet {
    name: String,
    /// (1-based row, 0-based column index) → value, ordered row-major
    cells: BTreeMap<(u32, u16), SheetValue>,
}

impl Worksheet {
    /// Create an empty worksheet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    /// The sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the sheet
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Place a value at (row, column); row is 1-based
    pub fn set_value(&mut self, row: u32, column: ColumnAddress, value: impl Into<SheetValue>) {
        self.cells.insert((row, column.index()), value.into());
    }

    /// Get the value at (row, column), if any
    pub fn value_at(&self, row: u32, column: ColumnAddress) -> Option<&SheetValue> {
        self.cells.get(&(row, column.index()))
    }

    /// Iterate over populated cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &SheetValue)> {
        self.cells.iter().map(|(&(row, col), v)| (row, col, v))
    }

    /// Number of populated cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// An ordered collection of worksheets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new empty worksheet, failing on a duplicate name
    pub fn add_worksheet(&mut self, name: impl Into<String>) -> Result<&mut Worksheet> {
        let name = name.into();
        if self.sheets.iter().any(|s| s.name() == name) {
            return Err(Error::DuplicateSheetName(name));
        }
        self.sheets.push(Worksheet::new(name));
        Ok(self.sheets.last_mut().unwrap())
    }

    /// Add an already-built worksheet, failing on a duplicate name
    pub fn push_worksheet(&mut self, sheet: Worksheet) -> Result<()> {
        if self.sheets.iter().any(|s| s.name() == sheet.name()) {
            return Err(Error::DuplicateSheetName(sheet.name().to_string()));
        }
        self.sheets.push(sheet);
        Ok(())
    }

    /// Look up a sheet by name
    pub fn worksheet(&self, name: &str) -> Option<&Worksheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Look up a sheet by name, mutably
    pub fn worksheet_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.sheets.iter_mut().find(|s| s.name() == name)
    }

    /// Look up a sheet by name, failing when absent
    pub fn expect_worksheet_mut(&mut self, name: &str) -> Result<&mut Worksheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    /// Iterate over sheets in insertion order
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.sheets.iter()
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn col(n: u32) -> ColumnAddress {
        ColumnAddress::new(n).unwrap()
    }

    #[test]
    fn set_and_get_values() {
        let mut book = Workbook::new();
        let sheet = book.add_worksheet("Round 1").unwrap();
        sheet.set_value(4, col(2), 10);
        sheet.set_value(1, col(2), "Team A");

        let sheet = book.worksheet("Round 1").unwrap();
        assert_eq!(sheet.value_at(4, col(2)), Some(&SheetValue::Number(10.0)));
        assert_eq!(sheet.value_at(4, col(3)), None);
        assert_eq!(sheet.cell_count(), 2);
    }

    #[test]
    fn iteration_is_row_major() {
        let mut sheet = Worksheet::new("s");
        sheet.set_value(2, col(1), 1);
        sheet.set_value(1, col(2), 2);
        sheet.set_value(1, col(1), 3);

        let order: Vec<(u32, u16)> = sheet.iter_cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order, vec![(1, 0), (1, 1), (2, 0)]);
    }

    #[test]
    fn duplicate_sheet_names_rejected() {
        let mut book = Workbook::new();
        book.add_worksheet("Round 1").unwrap();
        assert!(book.add_worksheet("Round 1").is_err());
    }
}
