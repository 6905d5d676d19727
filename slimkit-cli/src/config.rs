//! `slimkit.toml` configuration

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use slimkit_analyzer::AnalyzerConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the project root
pub const CONFIG_FILE: &str = "slimkit.toml";

/// Output format of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// The `[report]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: OutputFormat,
    /// Size rows shown in tables (0 = all)
    pub top: usize,
    /// Print guidance text under tables
    pub guidance: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            top: 50,
            guidance: true,
        }
    }
}

/// Represents the structure of `slimkit.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub asset_root: String,
    pub excluded_roots: Vec<String>,
    pub report: ReportConfig,
}

impl Default for AuditConfig {
    fn default() -> Self {
        let analyzer = AnalyzerConfig::default();
        Self {
            asset_root: analyzer.asset_root,
            excluded_roots: analyzer.excluded_roots,
            report: ReportConfig::default(),
        }
    }
}

impl AuditConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Otherwise `slimkit.toml` in the project root
    /// is used when present, and the defaults when it is not.
    pub fn load(explicit: Option<&Path>, project: &Path) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = project.join(CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        info!("Loading configuration from {}", path.display());
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Failed to parse TOML from '{}'", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            asset_root: self.asset_root.clone(),
            excluded_roots: self.excluded_roots.clone(),
        }
    }
}
