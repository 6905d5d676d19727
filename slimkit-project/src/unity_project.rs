//! Asset catalog backed by a project directory on disk

use crate::{importer, Error, Result};
use log::{info, warn};
use slimkit_core::{AssetCatalogSource, AssetKind, RawImport};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Folder holding the project's own assets, relative to the project root
pub const ASSETS_DIR: &str = "Assets";

const TEXTURE_EXTENSIONS: [&str; 11] = [
    "png", "jpg", "jpeg", "tga", "psd", "bmp", "gif", "tif", "tiff", "exr", "hdr",
];
const AUDIO_EXTENSIONS: [&str; 10] = [
    "wav", "mp3", "ogg", "aif", "aiff", "flac", "mod", "it", "s3m", "xm",
];
const MODEL_EXTENSIONS: [&str; 9] = ["fbx", "dae", "obj", "3ds", "dxf", "blend", "max", "ma", "mb"];

/// Classifies an asset by its file extension
pub fn kind_for_path(path: &str) -> Option<AssetKind> {
    let (_, extension) = path.rsplit_once('.')?;
    let extension = extension.to_ascii_lowercase();
    let extension = extension.as_str();

    if TEXTURE_EXTENSIONS.contains(&extension) {
        Some(AssetKind::Texture)
    } else if AUDIO_EXTENSIONS.contains(&extension) {
        Some(AssetKind::Audio)
    } else if MODEL_EXTENSIONS.contains(&extension) {
        Some(AssetKind::Model)
    } else {
        None
    }
}

#[derive(Debug, Clone)]
struct ProjectEntry {
    path: String,
    directory: bool,
    kind: Option<AssetKind>,
}

/// Snapshot of the assets of a project directory.
///
/// The asset tree is enumerated once when the project is opened; importer
/// settings and sizes are read from disk on request.
#[derive(Debug, Clone)]
pub struct UnityProject {
    root: PathBuf,
    entries: Vec<ProjectEntry>,
    index: HashMap<String, usize>,
}

impl UnityProject {
    /// Opens the project at `root` and enumerates its `Assets` folder
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let assets_dir = root.join(ASSETS_DIR);
        if !assets_dir.is_dir() {
            return Err(Error::NotAProject(root));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&assets_dir).sort_by_file_name().min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let Some(path) = relative_asset_path(&root, entry.path()) else {
                continue;
            };
            if path.ends_with(".meta") {
                continue;
            }

            let directory = entry.file_type().is_dir();
            let kind = if directory { None } else { kind_for_path(&path) };
            entries.push(ProjectEntry {
                path,
                directory,
                kind,
            });
        }

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.path.clone(), i))
            .collect();

        info!(
            "Found {} entries under {}",
            entries.len(),
            assets_dir.display()
        );
        Ok(Self {
            root,
            entries,
            index,
        })
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a project-relative path
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    fn entry(&self, path: &str) -> Option<&ProjectEntry> {
        self.index.get(path).map(|&i| &self.entries[i])
    }
}

/// Converts an absolute path under `root` into a `/`-separated relative path
fn relative_asset_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    Some(parts?.join("/"))
}

impl AssetCatalogSource for UnityProject {
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
        self.entry(path).filter(|e| !e.directory)?;
        importer::read_import(&self.resolve(path), kind)
    }

    fn file_size_bytes(&self, path: &str) -> Option<u64> {
        match std::fs::metadata(self.resolve(path)) {
            Ok(metadata) if metadata.is_file() => Some(metadata.len()),
            Ok(_) => None,
            Err(e) => {
                warn!("Cannot stat {}: {}", path, e);
                None
            }
        }
    }

    fn is_directory(&self, path: &str) -> bool {
        match self.entry(path) {
            Some(entry) => entry.directory,
            None => self.resolve(path).is_dir(),
        }
    }
}
