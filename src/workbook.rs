use crate::cell::CellValue;
use crate::errors::CompareError;
use crate::paths::display_label;
use calamine::{Reader, SheetType, open_workbook_auto_from_rs};
use std::io::Cursor;
use std::path::Path;

/// A single worksheet as a dense grid of raw values. Every row is data; the
/// first row is not treated as a header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().flatten()
    }
}

/// Decoded workbook: worksheets in workbook order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Decode an in-memory spreadsheet container. The format (xlsx, xlsm,
    /// xlsb, xls, ods) is sniffed from the content, not from `label`.
    pub fn from_bytes(label: &str, bytes: &[u8]) -> Result<Self, CompareError> {
        let mut book = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| CompareError::parse(label, e))?;

        let names: Vec<String> = book
            .sheets_metadata()
            .iter()
            .filter(|meta| matches!(meta.typ, SheetType::WorkSheet))
            .map(|meta| meta.name.clone())
            .collect();

        let mut sheets = Vec::with_capacity(names.len());
        for name in names {
            let range = book
                .worksheet_range(&name)
                .map_err(|e| CompareError::parse(label, e))?;
            let rows: Vec<Vec<CellValue>> = range
                .rows()
                .map(|row| row.iter().map(CellValue::from).collect())
                .collect();
            tracing::debug!(
                workbook = label,
                sheet = %name,
                rows = rows.len(),
                "decoded worksheet"
            );
            sheets.push(Sheet::new(name, rows));
        }

        Ok(Self { sheets })
    }

    /// Blocking read-and-decode of a workbook on disk.
    pub fn open(path: &Path) -> Result<Self, CompareError> {
        let bytes = std::fs::read(path).map_err(|e| CompareError::io(path, e))?;
        Self::from_bytes(&display_label(path), &bytes)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str())
    }
}
