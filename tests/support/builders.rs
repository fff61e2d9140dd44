#![allow(dead_code)]
use umya_spreadsheet::{Spreadsheet, Worksheet};

#[derive(Clone, Debug)]
pub enum CellVal {
    Text(String),
    Num(f64),
    Bool(bool),
    Empty,
}

impl From<&str> for CellVal {
    fn from(s: &str) -> Self {
        CellVal::Text(s.to_string())
    }
}

impl From<f64> for CellVal {
    fn from(n: f64) -> Self {
        CellVal::Num(n)
    }
}

impl From<i32> for CellVal {
    fn from(n: i32) -> Self {
        CellVal::Num(n as f64)
    }
}

impl From<bool> for CellVal {
    fn from(b: bool) -> Self {
        CellVal::Bool(b)
    }
}

/// Text-only grid, the common case in tests.
pub fn text_rows(rows: &[&[&str]]) -> Vec<Vec<CellVal>> {
    rows.iter()
        .map(|row| row.iter().map(|value| CellVal::from(*value)).collect())
        .collect()
}

fn set_cell(sheet: &mut Worksheet, col: u32, row: u32, val: &CellVal) {
    match val {
        CellVal::Text(s) => {
            sheet.get_cell_mut((col, row)).set_value_string(s.clone());
        }
        CellVal::Num(n) => {
            sheet.get_cell_mut((col, row)).set_value_number(*n);
        }
        CellVal::Bool(b) => {
            sheet.get_cell_mut((col, row)).set_value_bool(*b);
        }
        CellVal::Empty => {}
    }
}

/// Write `rows` starting at A1.
pub fn fill_rows(sheet: &mut Worksheet, rows: &[Vec<CellVal>]) {
    for (row_idx, row_data) in rows.iter().enumerate() {
        let row = 1 + row_idx as u32;
        for (col_idx, val) in row_data.iter().enumerate() {
            let col = 1 + col_idx as u32;
            set_cell(sheet, col, row, val);
        }
    }
}

/// Fill `Sheet1` with the first grid and `Sheet2`, `Sheet3`, ... with the
/// rest.
pub fn fill_sheets(book: &mut Spreadsheet, sheets: &[Vec<Vec<CellVal>>]) {
    for (idx, rows) in sheets.iter().enumerate() {
        let name = format!("Sheet{}", idx + 1);
        let sheet = if idx == 0 {
            book.get_sheet_by_name_mut(&name)
                .expect("default sheet exists")
        } else {
            book.new_sheet(name).expect("add sheet")
        };
        fill_rows(sheet, rows);
    }
}
