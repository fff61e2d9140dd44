use crate::config::CheckConfig;
use crate::extract::extract_values;
use crate::paths::normalize_workbook_path;
use crate::workbook::Workbook;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct ExtractResponse {
    file: String,
    sheets: Vec<String>,
    value_count: usize,
    values: Vec<String>,
}

pub async fn extract(file: PathBuf, config: &CheckConfig) -> Result<Value> {
    let file = normalize_workbook_path(&file, &config.extensions)?;
    let path = file.clone();
    let workbook = tokio::task::spawn_blocking(move || Workbook::open(&path)).await??;
    let values = extract_values(&workbook);

    Ok(serde_json::to_value(ExtractResponse {
        file: file.display().to_string(),
        sheets: workbook.sheet_names().map(str::to_string).collect(),
        value_count: values.len(),
        values: values.iter().map(str::to_string).collect(),
    })?)
}
