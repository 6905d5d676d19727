//! Model importer analysis

use crate::AnalyzerConfig;
use log::{debug, info};
use slimkit_core::{
    file_name, AnimationCompression, AssetCatalogSource, AssetKind, MeshCompression, ModelRecord,
    RawImport, RawModelImport,
};

/// Normalizes model importer settings and flags read/write and unoptimized meshes
pub struct ModelAnalyzer {
    config: AnalyzerConfig,
}

impl ModelAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyzes every in-scope model the catalog knows about
    pub fn analyze<S: AssetCatalogSource + ?Sized>(&self, source: &S) -> Vec<ModelRecord> {
        let mut records = Vec::new();

        for path in source.find_assets(AssetKind::Model) {
            if !self.config.is_in_scope(&path) {
                continue;
            }

            match source.read_import_metadata(&path, AssetKind::Model) {
                Some(RawImport::Model(raw)) => records.push(normalize(&path, &raw)),
                _ => debug!("No model importer for {}, skipping", path),
            }
        }

        info!("Analyzed {} models", records.len());
        records
    }
}

/// Builds a normalized record from raw model importer settings
pub fn normalize(path: &str, raw: &RawModelImport) -> ModelRecord {
    let mesh_compression = MeshCompression::from_code(raw.mesh_compression);
    let animation_compression = AnimationCompression::from_code(raw.animation_compression);
    if matches!(mesh_compression, MeshCompression::Unknown(_))
        || matches!(animation_compression, AnimationCompression::Unknown(_))
    {
        debug!(
            "Unknown compression codes ({}, {}) for {}",
            raw.mesh_compression, raw.animation_compression, path
        );
    }

    ModelRecord {
        name: file_name(path).to_string(),
        path: path.to_string(),
        read_write_enabled: raw.is_readable,
        polygons_optimized: raw.optimize_mesh_polygons,
        vertices_optimized: raw.optimize_mesh_vertices,
        mesh_compression,
        animation_compression,
    }
}
