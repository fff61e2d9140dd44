use crate::export::DEFAULT_EXPORT_FILE;
use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_EXTENSIONS: &[&str] = &["xls", "xlsx"];

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Lower-case, dot-less, sorted and deduplicated.
    pub extensions: Vec<String>,
    pub export_path: PathBuf,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl CheckConfig {
    /// Merge flags (and their environment variables) over the optional config
    /// file over defaults.
    pub fn from_args(args: ConfigArgs) -> Result<Self> {
        let ConfigArgs {
            config,
            extensions: cli_extensions,
            export_path: cli_export_path,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            extensions: file_extensions,
            export_path: file_export_path,
        } = file_config;

        let mut extensions = cli_extensions
            .or(file_extensions)
            .unwrap_or_else(default_extensions)
            .into_iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect::<Vec<_>>();

        extensions.sort();
        extensions.dedup();

        anyhow::ensure!(
            !extensions.is_empty(),
            "at least one file extension must be provided"
        );

        let export_path = cli_export_path
            .or(file_export_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));

        Ok(Self {
            extensions,
            export_path,
        })
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "CELLCHECK_EXTENSIONS",
        value_name = "EXT",
        value_delimiter = ',',
        help = "Comma-separated list of accepted workbook extensions (default: xlsx,xls)",
        global = true
    )]
    pub extensions: Option<Vec<String>>,

    #[arg(
        long,
        env = "CELLCHECK_EXPORT_PATH",
        value_name = "FILE",
        help = "Where `compare --export` writes invalid values (default: invalid-results.txt)",
        global = true
    )]
    pub export_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    extensions: Option<Vec<String>>,
    export_path: Option<PathBuf>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
