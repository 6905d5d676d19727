//! Importer settings read from `.meta` sidecars

use log::{debug, warn};
use slimkit_core::{
    AssetKind, MetaDocument, RawAudioImport, RawImport, RawModelImport, RawTextureImport,
};
use std::path::{Path, PathBuf};

const TEXTURE_IMPORTER: &str = "TextureImporter";
const AUDIO_IMPORTER: &str = "AudioImporter";
const MODEL_IMPORTER: &str = "ModelImporter";

/// Bits of `meshOptimizationFlags`; `-1` sets every bit
const MESH_OPTIMIZE_POLYGONS: i64 = 1;
const MESH_OPTIMIZE_VERTICES: i64 = 2;

/// Path of the sidecar that holds an asset's importer settings
pub fn meta_path(asset: &Path) -> PathBuf {
    let mut name = asset.as_os_str().to_owned();
    name.push(".meta");
    PathBuf::from(name)
}

/// Reads the importer settings of `asset` as `kind`.
///
/// Returns `None` when the sidecar is missing or malformed, or belongs to a
/// different importer.
pub fn read_import(asset: &Path, kind: AssetKind) -> Option<RawImport> {
    let meta = meta_path(asset);
    if !meta.is_file() {
        debug!("No sidecar for {}", asset.display());
        return None;
    }

    let doc = match MetaDocument::read(&meta) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Cannot read {}: {}", meta.display(), e);
            return None;
        }
    };

    match kind {
        AssetKind::Texture => texture_import(&doc, asset).map(RawImport::Texture),
        AssetKind::Audio => audio_import(&doc).map(RawImport::Audio),
        AssetKind::Model => model_import(&doc).map(RawImport::Model),
    }
}

/// Texture settings from the default platform entry, falling back to the
/// importer's top-level keys.
///
/// Width and height are those of the imported texture: the source image
/// scaled down to fit `maxTextureSize`.
pub fn texture_import(doc: &MetaDocument, asset: &Path) -> Option<RawTextureImport> {
    if doc.root_key() != Some(TEXTURE_IMPORTER) {
        return None;
    }

    let (source_width, source_height) = match image::image_dimensions(asset) {
        Ok(dimensions) => dimensions,
        Err(e) => {
            debug!("Cannot read dimensions of {}: {}", asset.display(), e);
            return None;
        }
    };

    let setting = |key: &str| {
        doc.get_i64(&format!("{}.platformSettings.{}", TEXTURE_IMPORTER, key))
            .or_else(|| doc.get_i64(&format!("{}.{}", TEXTURE_IMPORTER, key)))
    };

    let max_texture_size = setting("maxTextureSize")
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(2048);
    let (width, height) = imported_dimensions(source_width, source_height, max_texture_size);

    Some(RawTextureImport {
        texture_type: doc.get_i64("TextureImporter.textureType").unwrap_or(0),
        width,
        height,
        max_texture_size,
        texture_compression: setting("textureCompression").unwrap_or(1),
        crunched_compression: setting("crunchedCompression").map(|v| v != 0).unwrap_or(false),
        compression_quality: setting("compressionQuality").unwrap_or(50),
    })
}

/// Size of a texture after import: the larger side is capped at `max_size`
/// and the aspect ratio is kept. A cap of 0 leaves the source size.
pub fn imported_dimensions(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    let largest = width.max(height);
    if max_size == 0 || largest <= max_size {
        return (width, height);
    }

    let scale = |side: u32| {
        let scaled = (u64::from(side) * u64::from(max_size) + u64::from(largest) / 2)
            / u64::from(largest);
        (scaled as u32).max(1)
    };
    (scale(width), scale(height))
}

pub fn audio_import(doc: &MetaDocument) -> Option<RawAudioImport> {
    if doc.root_key() != Some(AUDIO_IMPORTER) {
        return None;
    }

    Some(RawAudioImport {
        load_type: doc
            .get_i64("AudioImporter.defaultSettings.loadType")
            .unwrap_or(0),
        force_to_mono: doc.get_bool("AudioImporter.forceToMono").unwrap_or(false),
        quality: doc
            .get_f64("AudioImporter.defaultSettings.quality")
            .unwrap_or(1.0),
    })
}

/// Model settings; newer sidecars nest them under `meshes` and `animations`
pub fn model_import(doc: &MetaDocument) -> Option<RawModelImport> {
    if doc.root_key() != Some(MODEL_IMPORTER) {
        return None;
    }

    let flag = |section: &str, key: &str, default: bool| {
        doc.get_bool(&format!("{}.{}.{}", MODEL_IMPORTER, section, key))
            .or_else(|| doc.get_bool(&format!("{}.{}", MODEL_IMPORTER, key)))
            .unwrap_or(default)
    };
    let code = |section: &str, key: &str, default: i64| {
        doc.get_i64(&format!("{}.{}.{}", MODEL_IMPORTER, section, key))
            .or_else(|| doc.get_i64(&format!("{}.{}", MODEL_IMPORTER, key)))
            .unwrap_or(default)
    };

    // Unity 2019.1+ replaced the two flags with a bitmask
    let optimization = doc
        .get_i64(&format!("{}.meshes.meshOptimizationFlags", MODEL_IMPORTER))
        .or_else(|| doc.get_i64(&format!("{}.meshOptimizationFlags", MODEL_IMPORTER)));
    let (optimize_mesh_polygons, optimize_mesh_vertices) = match optimization {
        Some(bits) => (
            bits & MESH_OPTIMIZE_POLYGONS != 0,
            bits & MESH_OPTIMIZE_VERTICES != 0,
        ),
        None => (
            flag("meshes", "optimizeMeshPolygons", true),
            flag("meshes", "optimizeMeshVertices", true),
        ),
    };

    Some(RawModelImport {
        is_readable: flag("meshes", "isReadable", false),
        optimize_mesh_polygons,
        optimize_mesh_vertices,
        mesh_compression: code("meshes", "meshCompression", 0),
        animation_compression: code("animations", "animationCompression", 3),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn test_meta_path() {
        assert_eq!(
            meta_path(Path::new("Assets/Art/hero.png")),
            PathBuf::from("Assets/Art/hero.png.meta")
        );
    }

    #[test]
    fn test_audio_import() {
        let doc = MetaDocument::parse(
            "fileFormatVersion: 2\nAudioImporter:\n  forceToMono: 1\n  defaultSettings:\n    loadType: 2\n    quality: 0.42\n",
        )
        .unwrap();

        let raw = audio_import(&doc).unwrap();
        assert_eq!(raw.load_type, 2);
        assert!(raw.force_to_mono);
        assert!((raw.quality - 0.42).abs() < 1e-9);
    }

    #[test]
    fn test_model_import_nested_and_flat() {
        let nested = MetaDocument::parse(
            "ModelImporter:\n  meshes:\n    meshCompression: 3\n    isReadable: 1\n    optimizeMeshPolygons: 0\n    optimizeMeshVertices: 1\n  animations:\n    animationCompression: 2\n",
        )
        .unwrap();
        let raw = model_import(&nested).unwrap();
        assert!(raw.is_readable);
        assert!(!raw.optimize_mesh_polygons);
        assert!(raw.optimize_mesh_vertices);
        assert_eq!(raw.mesh_compression, 3);
        assert_eq!(raw.animation_compression, 2);

        let flat = MetaDocument::parse("ModelImporter:\n  isReadable: 0\n  meshCompression: 1\n")
            .unwrap();
        let raw = model_import(&flat).unwrap();
        assert!(!raw.is_readable);
        assert_eq!(raw.mesh_compression, 1);
    }

    #[test]
    fn test_imported_dimensions() {
        assert_eq!(imported_dimensions(2048, 2048, 512), (512, 512));
        assert_eq!(imported_dimensions(4096, 1024, 1024), (1024, 256));
        assert_eq!(imported_dimensions(300, 120, 2048), (300, 120));
        assert_eq!(imported_dimensions(5000, 1, 32), (32, 1));
        assert_eq!(imported_dimensions(64, 64, 0), (64, 64));
    }

    #[test]
    fn test_deliberate_cap_below_source_is_ideal() {
        let (width, height) = imported_dimensions(2048, 2048, 512);
        assert_eq!(slimkit_core::asset::ideal_max_size(width, height), 512);
    }

    #[test]
    fn test_texture_import_reports_imported_size() {
        let dir = tempfile::tempdir().unwrap();
        let asset = dir.path().join("bg.png");
        let image: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(1024, 512, Rgba([0, 0, 255, 255]));
        image.save(&asset).unwrap();

        let doc = MetaDocument::parse(
            "TextureImporter:\n  platformSettings:\n  - buildTarget: DefaultTexturePlatform\n    maxTextureSize: 256\n",
        )
        .unwrap();

        let raw = texture_import(&doc, &asset).unwrap();
        assert_eq!((raw.width, raw.height), (256, 128));
        assert_eq!(raw.max_texture_size, 256);
    }

    #[test]
    fn test_model_optimization_bitmask() {
        let none = MetaDocument::parse(
            "ModelImporter:\n  meshes:\n    meshOptimizationFlags: 0\n",
        )
        .unwrap();
        let raw = model_import(&none).unwrap();
        assert!(!raw.optimize_mesh_polygons);
        assert!(!raw.optimize_mesh_vertices);

        let polygons = MetaDocument::parse(
            "ModelImporter:\n  meshes:\n    meshOptimizationFlags: 1\n",
        )
        .unwrap();
        let raw = model_import(&polygons).unwrap();
        assert!(raw.optimize_mesh_polygons);
        assert!(!raw.optimize_mesh_vertices);

        let everything = MetaDocument::parse(
            "ModelImporter:\n  meshes:\n    meshOptimizationFlags: -1\n    optimizeMeshPolygons: 0\n",
        )
        .unwrap();
        let raw = model_import(&everything).unwrap();
        assert!(raw.optimize_mesh_polygons);
        assert!(raw.optimize_mesh_vertices);
    }

    #[test]
    fn test_wrong_importer_is_missing() {
        let doc = MetaDocument::parse("DefaultImporter:\n  userData:\n").unwrap();
        assert!(audio_import(&doc).is_none());
        assert!(model_import(&doc).is_none());
        assert!(texture_import(&doc, Path::new("missing.png")).is_none());
    }
}
