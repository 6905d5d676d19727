//! slimkit Analyzer Library
//!
//! This library turns raw importer settings into normalized, flagged records,
//! ranks assets by their share of the tracked project size, and classifies
//! platform build settings. Every pass is synchronous and replaces the result of
//! any earlier pass; a single asset that cannot be read never aborts a pass.

pub mod audio_analyzer;
pub mod audit;
pub mod model_analyzer;
pub mod platform_analyzer;
pub mod size_aggregator;
pub mod texture_analyzer;

pub use audio_analyzer::AudioAnalyzer;
pub use audit::{AuditReport, ProjectAudit};
pub use model_analyzer::ModelAnalyzer;
pub use platform_analyzer::PlatformSettingsAnalyzer;
pub use size_aggregator::SizeAggregator;
pub use texture_analyzer::TextureAnalyzer;

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Primary asset root; paths outside it are ignored
    pub asset_root: String,
    /// Vendored or read-only roots that are never analyzed
    pub excluded_roots: Vec<String>,
}

impl AnalyzerConfig {
    /// Returns true if `path` lies under the asset root and outside every excluded root
    pub fn is_in_scope(&self, path: &str) -> bool {
        path.starts_with(&self.asset_root)
            && !self
                .excluded_roots
                .iter()
                .any(|root| path.starts_with(root.as_str()))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            asset_root: "Assets/".to_string(),
            excluded_roots: vec!["Packages/".to_string()],
        }
    }
}
