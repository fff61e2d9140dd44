use crate::collation::sort_values;
use crate::errors::CompareError;
use crate::extract::{ValueSet, extract_bytes};
use crate::paths::display_label;
use serde::Serialize;
use std::path::Path;

/// One workbook handed to a comparison: a display label plus its raw bytes.
#[derive(Debug, Clone)]
pub struct WorkbookInput {
    pub label: String,
    pub bytes: Vec<u8>,
}

impl WorkbookInput {
    pub fn new(label: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            bytes,
        }
    }

    pub async fn load(path: &Path) -> Result<Self, CompareError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CompareError::io(path, e))?;
        Ok(Self::new(display_label(path), bytes))
    }
}

#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub source: WorkbookInput,
    pub reference: WorkbookInput,
}

impl CompareRequest {
    pub fn new(source: WorkbookInput, reference: WorkbookInput) -> Self {
        Self { source, reference }
    }

    pub async fn load(source: &Path, reference: &Path) -> Result<Self, CompareError> {
        let (source, reference) =
            tokio::try_join!(WorkbookInput::load(source), WorkbookInput::load(reference))?;
        Ok(Self::new(source, reference))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareOutcome {
    pub source_values: usize,
    pub reference_values: usize,
    pub invalid: Vec<String>,
}

impl CompareOutcome {
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }
}

/// Reference members missing from `source`, in reference iteration order.
/// Membership is exact string equality.
pub fn diff(source: &ValueSet, reference: &ValueSet) -> Vec<String> {
    reference
        .iter()
        .filter(|value| !source.contains(value))
        .map(str::to_string)
        .collect()
}

/// Extract both workbooks, diff them and sort the result.
///
/// Any decode failure aborts the whole comparison.
pub fn compare(request: &CompareRequest) -> Result<CompareOutcome, CompareError> {
    let source = extract_bytes(&request.source.label, &request.source.bytes)?;
    let reference = extract_bytes(&request.reference.label, &request.reference.bytes)?;
    Ok(outcome_for(&source, &reference))
}

/// Async variant of [`compare`] that decodes the two workbooks on the
/// blocking pool, concurrently.
pub async fn compare_async(request: CompareRequest) -> Result<CompareOutcome, CompareError> {
    let CompareRequest { source, reference } = request;
    let source_task =
        tokio::task::spawn_blocking(move || extract_bytes(&source.label, &source.bytes));
    let reference_task =
        tokio::task::spawn_blocking(move || extract_bytes(&reference.label, &reference.bytes));
    let (source, reference) = tokio::try_join!(source_task, reference_task)?;
    Ok(outcome_for(&source?, &reference?))
}

fn outcome_for(source: &ValueSet, reference: &ValueSet) -> CompareOutcome {
    let invalid = sort_values(diff(source, reference));
    tracing::info!(
        source_values = source.len(),
        reference_values = reference.len(),
        invalid = invalid.len(),
        "comparison finished"
    );
    CompareOutcome {
        source_values: source.len(),
        reference_values: reference.len(),
        invalid,
    }
}
