//! # tally-sheets-xlsx
//!
//! File backend for scoresheet exports: a built-in workbook skeleton plus
//! a minimal OOXML writer. [`render_scoresheet`] clones the skeleton,
//! applies the generator's cell writes, and serializes the package to
//! bytes, so concurrent export calls never share document state.

pub mod error;
pub mod template;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use template::ScoresheetTemplate;
pub use writer::XlsxWriter;

use tally_sheets_core::{CellWrite, Workbook, Worksheet};

/// Render one scoresheet into an XLSX package
pub fn render_scoresheet(writes: &[CellWrite], sheet_name: &str) -> XlsxResult<Vec<u8>> {
    log::debug!(
        "rendering {} writes into sheet {sheet_name:?}",
        writes.len()
    );

    let template = ScoresheetTemplate::new();
    let mut workbook = Workbook::new();
    workbook.push_worksheet(template.instantiate(sheet_name))?;

    for write in writes {
        let sheet = workbook.expect_worksheet_mut(&write.sheet)?;
        sheet.set_value(write.row, write.column, write.value.clone());
    }

    XlsxWriter::write_bytes(&workbook)
}

/// Render a roster sheet into an XLSX package; rosters have no skeleton,
/// just the writes on a blank sheet
pub fn render_roster(writes: &[CellWrite], sheet_name: &str) -> XlsxResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    workbook.push_worksheet(Worksheet::new(sheet_name))?;

    for write in writes {
        let sheet = workbook.expect_worksheet_mut(&write.sheet)?;
        sheet.set_value(write.row, write.column, write.value.clone());
    }

    XlsxWriter::write_bytes(&workbook)
}
