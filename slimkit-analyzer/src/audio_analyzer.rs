//! Audio importer analysis

use crate::AnalyzerConfig;
use log::{debug, info};
use slimkit_core::{
    file_name, AssetCatalogSource, AssetKind, AudioLoadType, AudioRecord, RawAudioImport,
    RawImport,
};

/// Normalizes audio importer settings and flags clips not forced to mono
pub struct AudioAnalyzer {
    config: AnalyzerConfig,
}

impl AudioAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyzes every in-scope audio clip the catalog knows about
    pub fn analyze<S: AssetCatalogSource + ?Sized>(&self, source: &S) -> Vec<AudioRecord> {
        let records: Vec<AudioRecord> = source
            .find_assets(AssetKind::Audio)
            .into_iter()
            .filter(|path| self.config.is_in_scope(path))
            .filter_map(|path| match source.read_import_metadata(&path, AssetKind::Audio) {
                Some(RawImport::Audio(raw)) => Some(normalize(&path, &raw)),
                _ => {
                    debug!("No audio importer for {}, skipping", path);
                    None
                }
            })
            .collect();

        info!(
            "Analyzed {} audio clips ({} not forced to mono)",
            records.len(),
            records.iter().filter(|r| !r.force_to_mono).count()
        );
        records
    }
}

/// Builds a normalized record from raw audio importer settings
pub fn normalize(path: &str, raw: &RawAudioImport) -> AudioRecord {
    let load_type = AudioLoadType::from_code(raw.load_type);
    if let AudioLoadType::Unknown(code) = load_type {
        debug!("Unknown audio load type {} for {}", code, path);
    }

    AudioRecord {
        name: file_name(path).to_string(),
        path: path.to_string(),
        load_type,
        force_to_mono: raw.force_to_mono,
        quality: quality_percent(raw.quality),
    }
}

/// Converts a 0.0-1.0 quality ratio to a whole percentage
fn quality_percent(ratio: f64) -> u8 {
    if ratio.is_nan() {
        return 0;
    }
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
