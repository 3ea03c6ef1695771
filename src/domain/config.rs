use crate::core::table::RenderOptions;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Cloudbit configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Catalog snapshot to load resources from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PathBuf>,
}

/// Output settings, each one can be overridden on the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Column separator, defaults depend on the format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    /// Align columns, defaults depend on the format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
    /// Use ANSI styling on terminals
    #[serde(default = "default_color")]
    pub color: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Table,
    /// Comma separated values
    Csv,
    /// JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl OutputConfig {
    /// Separator and alignment for the configured format
    pub fn render_options(&self) -> RenderOptions {
        let (separator, pretty) = match self.format {
            OutputFormat::Csv => (",", false),
            OutputFormat::Table | OutputFormat::Json => ("  ", true),
        };

        RenderOptions::new(
            self.separator.clone().unwrap_or_else(|| separator.to_string()),
            self.pretty.unwrap_or(pretty),
        )
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            snapshot: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            separator: None,
            pretty: None,
            color: default_color(),
        }
    }
}
