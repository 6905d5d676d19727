//! slimkit Core Library
//!
//! This library provides the data model shared by the slimkit auditor: normalized
//! asset records, size records, platform setting verdicts, the label tables for
//! importer enums, and the collaborator traits the analysis engine consumes.

pub mod asset;
pub mod catalog;
pub mod meta;
pub mod platform;
pub mod sink;
pub mod size;

pub use asset::{
    AnimationCompression, AssetKind, AssetRecord, AudioLoadType, AudioRecord, Check,
    MeshCompression, ModelRecord, Rule, TextureCompression, TextureRecord, TextureType,
};
pub use catalog::{
    AssetCatalogSource, MemoryCatalog, PlatformSettingsProvider, RawAudioImport, RawImport,
    RawModelImport, RawTextureImport, StaticPlatformSettings,
};
pub use meta::MetaDocument;
pub use platform::{BuildTarget, PlatformGroup, PlatformSetting, SettingId, Verdict};
pub use sink::ReportSink;
pub use size::{SizeRecord, SizeReport};

/// Result type for slimkit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for slimkit-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed meta document at line {line}: {reason}")]
    MalformedMeta { line: usize, reason: String },
}

/// Returns the file name component of a `/`-separated asset path
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("Assets/Art/hero.png"), "hero.png");
        assert_eq!(file_name("hero.png"), "hero.png");
        assert_eq!(file_name("Assets\\Audio\\theme.ogg"), "theme.ogg");
    }
}
