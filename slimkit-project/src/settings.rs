//! Global build settings read from `ProjectSettings/`

use crate::{Error, Result};
use log::{info, warn};
use slimkit_core::{BuildTarget, MetaDocument, StaticPlatformSettings};
use std::path::Path;

/// Player settings file, relative to the project root
pub const PROJECT_SETTINGS: &str = "ProjectSettings/ProjectSettings.asset";
/// Quality settings file, relative to the project root
pub const QUALITY_SETTINGS: &str = "ProjectSettings/QualitySettings.asset";

const TARGETS: [BuildTarget; 3] = [BuildTarget::Android, BuildTarget::Ios, BuildTarget::WebGl];

/// Reads the platform settings of the project at `root`.
///
/// Keys missing from the files keep the values a new project starts with.
pub fn read_platform_settings(root: &Path) -> Result<StaticPlatformSettings> {
    let player_path = root.join(PROJECT_SETTINGS);
    if !player_path.is_file() {
        return Err(Error::MissingSettings(player_path));
    }

    let player = MetaDocument::read(&player_path)?;
    let mut settings = StaticPlatformSettings::default();
    apply_player_settings(&player, &mut settings);

    let quality_path = root.join(QUALITY_SETTINGS);
    if quality_path.is_file() {
        let quality = MetaDocument::read(&quality_path)?;
        if let Some(count) = current_vsync_count(&quality) {
            settings.vsync_count = count;
        }
    } else {
        warn!(
            "{} not found, assuming vSyncCount {}",
            quality_path.display(),
            settings.vsync_count
        );
    }

    info!("Read platform settings from {}", root.display());
    Ok(settings)
}

/// Copies every recognised player setting from `doc` into `settings`
pub fn apply_player_settings(doc: &MetaDocument, settings: &mut StaticPlatformSettings) {
    if let Some(value) = doc.get_bool("PlayerSettings.gcIncremental") {
        settings.incremental_gc = value;
    }
    if let Some(value) = doc.get_i64("PlayerSettings.m_ActiveColorSpace") {
        settings.color_space = value;
    }
    if let Some(value) = doc.get_i64("PlayerSettings.webGLCompressionFormat") {
        settings.webgl_compression_format = value;
    }
    if let Some(value) = doc.get_bool("PlayerSettings.webGLNameFilesAsHashes") {
        settings.webgl_name_files_as_hashes = value;
    }
    if let Some(value) = doc.get_i64("PlayerSettings.webGLExceptionSupport") {
        settings.webgl_exception_support = value;
    }

    for target in TARGETS {
        let key = target.settings_key();
        if let Some(value) = doc.get_i64(&format!("PlayerSettings.scriptingBackend.{}", key)) {
            settings.scripting_backends.insert(target, value);
        }
        if let Some(value) = doc.get_i64(&format!("PlayerSettings.managedStrippingLevel.{}", key))
        {
            settings.stripping_levels.insert(target, value);
        }
    }
}

/// vSyncCount of the quality level currently selected
pub fn current_vsync_count(doc: &MetaDocument) -> Option<i64> {
    let current = doc
        .get_i64("QualitySettings.m_CurrentQuality")
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(0);

    doc.all("QualitySettings.m_QualitySettings.vSyncCount")
        .nth(current)
        .and_then(|v| v.trim().parse().ok())
}
