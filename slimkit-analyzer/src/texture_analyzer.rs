//! Texture importer analysis

use crate::AnalyzerConfig;
use log::{debug, info};
use slimkit_core::{
    file_name, AssetCatalogSource, AssetKind, RawImport, RawTextureImport, TextureCompression,
    TextureRecord, TextureType,
};

/// Normalizes texture importer settings and flags non-ideal max sizes
pub struct TextureAnalyzer {
    config: AnalyzerConfig,
}

impl TextureAnalyzer {
    /// Creates a new texture analyzer with the given configuration
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyzes every in-scope texture the catalog knows about.
    ///
    /// Textures whose importer settings cannot be read are left out.
    pub fn analyze<S: AssetCatalogSource + ?Sized>(&self, source: &S) -> Vec<TextureRecord> {
        let mut records = Vec::new();

        for path in source.find_assets(AssetKind::Texture) {
            if !self.config.is_in_scope(&path) {
                continue;
            }

            match source.read_import_metadata(&path, AssetKind::Texture) {
                Some(RawImport::Texture(raw)) => records.push(normalize(&path, &raw)),
                _ => debug!("No texture importer for {}, skipping", path),
            }
        }

        let flagged = records.iter().filter(|r| !r.is_max_size_ideal()).count();
        info!(
            "Analyzed {} textures ({} with non-ideal max size)",
            records.len(),
            flagged
        );
        records
    }
}

/// Builds a normalized record from raw texture importer settings
pub fn normalize(path: &str, raw: &RawTextureImport) -> TextureRecord {
    let texture_type = TextureType::from_code(raw.texture_type);
    if let TextureType::Unknown(code) = texture_type {
        debug!("Unknown texture type {} for {}", code, path);
    }

    let compression = TextureCompression::from_code(raw.texture_compression);
    if let TextureCompression::Unknown(code) = compression {
        debug!("Unknown texture compression {} for {}", code, path);
    }

    TextureRecord {
        name: file_name(path).to_string(),
        path: path.to_string(),
        texture_type,
        width: raw.width,
        height: raw.height,
        max_size: raw.max_texture_size,
        compression,
        crunch_enabled: raw.crunched_compression,
        crunch_quality: raw.compression_quality.clamp(0, 100) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slimkit_core::MemoryCatalog;

    fn raw(width: u32, height: u32, max_texture_size: u32) -> RawTextureImport {
        RawTextureImport {
            texture_type: 0,
            width,
            height,
            max_texture_size,
            texture_compression: 1,
            crunched_compression: true,
            compression_quality: 50,
        }
    }

    #[test]
    fn test_normalize_texture() {
        let record = normalize("Assets/UI/button.png", &raw(300, 120, 512));

        assert_eq!(record.name, "button.png");
        assert_eq!(record.path, "Assets/UI/button.png");
        assert_eq!(record.texture_type, TextureType::Default);
        assert_eq!(record.compression, TextureCompression::Normal);
        assert_eq!(record.ideal_max_size(), 512);
        assert!(record.is_max_size_ideal());
        assert!(record.crunch_enabled);
        assert_eq!(record.crunch_quality, 50);
    }

    #[test]
    fn test_flag_iff_max_size_differs() {
        let cases = [
            (raw(1, 1, 32), true),
            (raw(2048, 1024, 2048), true),
            (raw(2048, 1024, 4096), false),
            (raw(20000, 1, 16384), true),
            (raw(100, 100, 2048), false),
        ];

        for (raw, ideal) in cases {
            let record = normalize("Assets/t.png", &raw);
            assert_eq!(record.is_max_size_ideal(), ideal, "{:?}", raw);
        }
    }

    #[test]
    fn test_unknown_compression_is_kept() {
        let mut raw = raw(64, 64, 64);
        raw.texture_compression = 42;
        raw.compression_quality = 250;

        let record = normalize("Assets/t.png", &raw);
        assert_eq!(record.compression.label(), "Unknown");
        assert_eq!(record.crunch_quality, 100);
    }

    #[test]
    fn test_analyze_skips_unreadable_and_out_of_scope() {
        let catalog = MemoryCatalog::new()
            .with_asset("Assets/a.png", RawImport::Texture(raw(64, 64, 64)), 10)
            .with_unreadable("Assets/b.png", AssetKind::Texture, 10)
            .with_asset(
                "Packages/vendor/c.png",
                RawImport::Texture(raw(64, 64, 64)),
                10,
            )
            .with_asset("Assets/d.png", RawImport::Texture(raw(900, 10, 2048)), 10);

        let records = TextureAnalyzer::new(AnalyzerConfig::default()).analyze(&catalog);

        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["Assets/a.png", "Assets/d.png"]);
        assert!(records[0].is_max_size_ideal());
        assert!(!records[1].is_max_size_ideal());
    }
}
