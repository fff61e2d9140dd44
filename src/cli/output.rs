use crate::cli::OutputFormat;
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

pub const CLEAN_MESSAGE: &str = "All values in Reference are valid (exist in Source).";

pub fn emit_value(value: &Value, format: OutputFormat, compact: bool, quiet: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Json => {
            if compact || quiet {
                serde_json::to_writer(&mut handle, value)?;
            } else {
                serde_json::to_writer_pretty(&mut handle, value)?;
            }
            handle.write_all(b"\n")?;
        }
        OutputFormat::Text => {
            for line in render_text(value, quiet) {
                writeln!(handle, "{line}")?;
            }
        }
    }
    Ok(())
}

/// Human-readable lines for a command payload. With `quiet`, only the
/// values themselves are printed.
pub fn render_text(value: &Value, quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(invalid) = value.get("invalid").and_then(Value::as_array) {
        if !quiet {
            if invalid.is_empty() {
                lines.push(CLEAN_MESSAGE.to_string());
            } else {
                lines.push(format!(
                    "Found {} invalid value(s) in Reference:",
                    invalid.len()
                ));
            }
        }
        lines.extend(string_items(invalid));
        if !quiet && let Some(path) = value.get("exported").and_then(Value::as_str) {
            lines.push(format!("Exported to {path}"));
        }
        return lines;
    }

    if let Some(values) = value.get("values").and_then(Value::as_array) {
        if !quiet {
            lines.push(format!("{} distinct value(s):", values.len()));
        }
        lines.extend(string_items(values));
    }

    lines
}

fn string_items(items: &[Value]) -> impl Iterator<Item = String> + '_ {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
}
