use crate::errors::CompareError;
use crate::paths::display_label;
use crate::workbook::Workbook;
use indexmap::IndexSet;
use serde::Serialize;
use std::path::Path;

/// Distinct, trimmed, non-empty cell texts of a workbook.
///
/// Iteration follows first insertion (sheet order, then row-major), so two
/// extractions of the same workbook iterate identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValueSet(IndexSet<String>);

impl ValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim `value` and insert it unless nothing is left. Returns whether a
    /// new member was added.
    ///
    /// A byte-order mark counts as whitespace at either end.
    pub fn insert_trimmed(&mut self, value: &str) -> bool {
        let trimmed = trim_cell_text(value);
        if trimmed.is_empty() {
            return false;
        }
        if self.0.contains(trimmed) {
            return false;
        }
        self.0.insert(trimmed.to_string())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

fn trim_cell_text(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

impl<S: AsRef<str>> FromIterator<S> for ValueSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ValueSet::new();
        for value in iter {
            set.insert_trimmed(value.as_ref());
        }
        set
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Flatten every sheet of `workbook` into a [`ValueSet`].
pub fn extract_values(workbook: &Workbook) -> ValueSet {
    let mut set = ValueSet::new();
    for sheet in &workbook.sheets {
        for cell in sheet.cells() {
            if let Some(text) = cell.canonical_text() {
                set.insert_trimmed(&text);
            }
        }
    }
    set
}

pub fn extract_bytes(label: &str, bytes: &[u8]) -> Result<ValueSet, CompareError> {
    let workbook = Workbook::from_bytes(label, bytes)?;
    Ok(extract_values(&workbook))
}

/// Read `path` asynchronously and extract its values. Decoding runs on the
/// blocking pool.
pub async fn extract_file(path: &Path) -> Result<ValueSet, CompareError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CompareError::io(path, e))?;
    let label = display_label(path);
    tokio::task::spawn_blocking(move || extract_bytes(&label, &bytes)).await?
}
