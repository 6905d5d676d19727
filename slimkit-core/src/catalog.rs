//! Collaborator interfaces consumed by the analysis engine, plus in-memory
//! implementations used as fixtures.

use crate::asset::AssetKind;
use crate::platform::BuildTarget;
use std::collections::HashMap;

/// Texture importer settings as stored by the host project
#[derive(Debug, Clone, PartialEq)]
pub struct RawTextureImport {
    pub texture_type: i64,
    pub width: u32,
    pub height: u32,
    pub max_texture_size: u32,
    pub texture_compression: i64,
    pub crunched_compression: bool,
    pub compression_quality: i64,
}

/// Audio importer settings as stored by the host project
#[derive(Debug, Clone, PartialEq)]
pub struct RawAudioImport {
    pub load_type: i64,
    pub force_to_mono: bool,
    /// Compression quality ratio (0.0-1.0)
    pub quality: f64,
}

/// Model importer settings as stored by the host project
#[derive(Debug, Clone, PartialEq)]
pub struct RawModelImport {
    pub is_readable: bool,
    pub optimize_mesh_polygons: bool,
    pub optimize_mesh_vertices: bool,
    pub mesh_compression: i64,
    pub animation_compression: i64,
}

/// Raw importer settings for one asset
#[derive(Debug, Clone, PartialEq)]
pub enum RawImport {
    Texture(RawTextureImport),
    Audio(RawAudioImport),
    Model(RawModelImport),
}

impl RawImport {
    pub fn kind(&self) -> AssetKind {
        match self {
            RawImport::Texture(_) => AssetKind::Texture,
            RawImport::Audio(_) => AssetKind::Audio,
            RawImport::Model(_) => AssetKind::Model,
        }
    }
}

/// Enumerates a project's assets and reads their importer settings and sizes.
///
/// Paths are project-relative and `/`-separated.
pub trait AssetCatalogSource {
    /// Paths of every asset of the given kind, in discovery order
    fn find_assets(&self, kind: AssetKind) -> Vec<String>;

    /// Every path under the asset root, files and folders, in discovery order
    fn find_all_assets(&self) -> Vec<String>;

    /// Importer settings for an asset, or `None` if they cannot be read as `kind`
    fn read_import_metadata(&self, path: &str, kind: AssetKind) -> Option<RawImport>;

    /// Size of the asset file on disk
    fn file_size_bytes(&self, path: &str) -> Option<u64>;

    fn is_directory(&self, path: &str) -> bool;
}

/// Reads the project's global build and quality settings.
///
/// Enum-valued settings are returned as the raw integer codes the project stores.
pub trait PlatformSettingsProvider {
    fn incremental_gc(&self) -> bool;
    fn vsync_count(&self) -> i64;
    fn webgl_compression_format(&self) -> i64;
    fn webgl_name_files_as_hashes(&self) -> bool;
    fn webgl_exception_support(&self) -> i64;
    fn managed_stripping_level(&self, target: BuildTarget) -> i64;
    fn scripting_backend(&self, target: BuildTarget) -> i64;
    fn color_space(&self) -> i64;
}

#[derive(Debug, Clone)]
struct MemoryEntry {
    path: String,
    kind: Option<AssetKind>,
    import: Option<RawImport>,
    size: Option<u64>,
    directory: bool,
}

/// Asset catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: Vec<MemoryEntry>,
}

impl MemoryCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an asset with readable importer settings
    pub fn with_asset(mut self, path: &str, import: RawImport, size: u64) -> Self {
        self.entries.push(MemoryEntry {
            path: path.to_string(),
            kind: Some(import.kind()),
            import: Some(import),
            size: Some(size),
            directory: false,
        });
        self
    }

    /// Adds an asset of `kind` whose importer settings cannot be read
    pub fn with_unreadable(mut self, path: &str, kind: AssetKind, size: u64) -> Self {
        self.entries.push(MemoryEntry {
            path: path.to_string(),
            kind: Some(kind),
            import: None,
            size: Some(size),
            directory: false,
        });
        self
    }

    /// Adds a plain file that belongs to no analyzed kind
    pub fn with_file(mut self, path: &str, size: u64) -> Self {
        self.entries.push(MemoryEntry {
            path: path.to_string(),
            kind: None,
            import: None,
            size: Some(size),
            directory: false,
        });
        self
    }

    pub fn with_directory(mut self, path: &str) -> Self {
        self.entries.push(MemoryEntry {
            path: path.to_string(),
            kind: None,
            import: None,
            size: None,
            directory: true,
        });
        self
    }

    fn entry(&self, path: &str) -> Option<&MemoryEntry> {
        self.entries.iter().find(|e| e.path == path)
    }
}

impl AssetCatalogSource for MemoryCatalog {
    fn find_assets(&self, kind: AssetKind) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.kind == Some(kind))
            .map(|e| e.path.clone())
            .collect()
    }

    fn find_all_assets(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    fn read_import_metadata(&self, path: &str, kind: AssetKind) -> Option<RawImport> {
        self.entry(path)?
            .import
            .clone()
            .filter(|import| import.kind() == kind)
    }

    fn file_size_bytes(&self, path: &str) -> Option<u64> {
        self.entry(path)?.size
    }

    fn is_directory(&self, path: &str) -> bool {
        self.entry(path).map(|e| e.directory).unwrap_or(false)
    }
}

/// A fixed set of platform setting values
#[derive(Debug, Clone, PartialEq)]
pub struct StaticPlatformSettings {
    pub incremental_gc: bool,
    pub vsync_count: i64,
    pub webgl_compression_format: i64,
    pub webgl_name_files_as_hashes: bool,
    pub webgl_exception_support: i64,
    pub color_space: i64,
    /// Scripting backend code per target
    pub scripting_backends: HashMap<BuildTarget, i64>,
    /// Managed stripping level code per target
    pub stripping_levels: HashMap<BuildTarget, i64>,
}

impl StaticPlatformSettings {
    /// Scripting backend used when a target has no explicit entry
    pub const DEFAULT_SCRIPTING_BACKEND: i64 = 0;
    /// Stripping level used when a target has no explicit entry
    pub const DEFAULT_STRIPPING_LEVEL: i64 = 1;
}

impl Default for StaticPlatformSettings {
    /// Values a freshly created project starts with
    fn default() -> Self {
        Self {
            incremental_gc: true,
            vsync_count: 1,
            webgl_compression_format: 1,
            webgl_name_files_as_hashes: false,
            webgl_exception_support: 1,
            color_space: 0,
            scripting_backends: HashMap::new(),
            stripping_levels: HashMap::new(),
        }
    }
}

impl PlatformSettingsProvider for StaticPlatformSettings {
    fn incremental_gc(&self) -> bool {
        self.incremental_gc
    }

    fn vsync_count(&self) -> i64 {
        self.vsync_count
    }

    fn webgl_compression_format(&self) -> i64 {
        self.webgl_compression_format
    }

    fn webgl_name_files_as_hashes(&self) -> bool {
        self.webgl_name_files_as_hashes
    }

    fn webgl_exception_support(&self) -> i64 {
        self.webgl_exception_support
    }

    fn managed_stripping_level(&self, target: BuildTarget) -> i64 {
        self.stripping_levels
            .get(&target)
            .copied()
            .unwrap_or(Self::DEFAULT_STRIPPING_LEVEL)
    }

    fn scripting_backend(&self, target: BuildTarget) -> i64 {
        self.scripting_backends
            .get(&target)
            .copied()
            .unwrap_or(Self::DEFAULT_SCRIPTING_BACKEND)
    }

    fn color_space(&self) -> i64 {
        self.color_space
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio(force_to_mono: bool) -> RawImport {
        RawImport::Audio(RawAudioImport {
            load_type: 0,
            force_to_mono,
            quality: 1.0,
        })
    }

    #[test]
    fn test_memory_catalog_filters_by_kind() {
        let catalog = MemoryCatalog::new()
            .with_asset("Assets/a.wav", audio(true), 10)
            .with_unreadable("Assets/b.png", AssetKind::Texture, 20)
            .with_file("Assets/c.prefab", 30)
            .with_directory("Assets/Sounds");

        assert_eq!(catalog.find_assets(AssetKind::Audio), vec!["Assets/a.wav"]);
        assert_eq!(catalog.find_assets(AssetKind::Texture), vec!["Assets/b.png"]);
        assert!(catalog.find_assets(AssetKind::Model).is_empty());
        assert_eq!(catalog.find_all_assets().len(), 4);
        assert!(catalog.is_directory("Assets/Sounds"));
        assert!(!catalog.is_directory("Assets/c.prefab"));
        assert_eq!(catalog.file_size_bytes("Assets/c.prefab"), Some(30));
        assert_eq!(catalog.file_size_bytes("Assets/missing.png"), None);
    }

    #[test]
    fn test_memory_catalog_metadata_requires_matching_kind() {
        let catalog = MemoryCatalog::new()
            .with_asset("Assets/a.wav", audio(false), 10)
            .with_unreadable("Assets/b.png", AssetKind::Texture, 20);

        assert!(catalog
            .read_import_metadata("Assets/a.wav", AssetKind::Audio)
            .is_some());
        assert!(catalog
            .read_import_metadata("Assets/a.wav", AssetKind::Model)
            .is_none());
        assert!(catalog
            .read_import_metadata("Assets/b.png", AssetKind::Texture)
            .is_none());
    }

    #[test]
    fn test_static_settings_fall_back_per_target() {
        let mut settings = StaticPlatformSettings::default();
        settings.scripting_backends.insert(BuildTarget::Ios, 1);

        assert_eq!(settings.scripting_backend(BuildTarget::Ios), 1);
        assert_eq!(
            settings.scripting_backend(BuildTarget::Android),
            StaticPlatformSettings::DEFAULT_SCRIPTING_BACKEND
        );
        assert_eq!(
            settings.managed_stripping_level(BuildTarget::WebGl),
            StaticPlatformSettings::DEFAULT_STRIPPING_LEVEL
        );
    }
}
