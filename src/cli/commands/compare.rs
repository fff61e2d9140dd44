use crate::config::CheckConfig;
use crate::export::write_export;
use crate::paths::{normalize_destination_path, normalize_workbook_path};
use crate::session::CompareSession;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct CompareResponse {
    source: String,
    reference: String,
    source_values: usize,
    reference_values: usize,
    invalid_count: usize,
    invalid: Vec<String>,
    clean: bool,
    exported: Option<String>,
}

pub async fn compare(
    source: PathBuf,
    reference: PathBuf,
    export: bool,
    config: &CheckConfig,
) -> Result<Value> {
    let source = normalize_workbook_path(&source, &config.extensions)?;
    let reference = normalize_workbook_path(&reference, &config.extensions)?;

    let mut session = CompareSession::new();
    session.select_source(&source)?;
    session.select_reference(&reference)?;
    let outcome = session.run_compare().await?;

    let exported = if !export {
        None
    } else if session.can_export() {
        let path = normalize_destination_path(&config.export_path)?;
        Some(write_export(&path, &outcome.invalid)?.display().to_string())
    } else {
        tracing::info!("all reference values are valid; nothing to export");
        None
    };

    Ok(serde_json::to_value(CompareResponse {
        source: source.display().to_string(),
        reference: reference.display().to_string(),
        source_values: outcome.source_values,
        reference_values: outcome.reference_values,
        invalid_count: outcome.invalid_count(),
        clean: outcome.is_clean(),
        invalid: outcome.invalid,
        exported,
    })?)
}
