//! Platform build setting verdicts and label tables

/// Classification of a platform setting value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Verdict {
    Good,
    Bad,
    /// Informational only; the right value depends on the project
    Neutral,
}

impl Verdict {
    pub fn from_bool(good: bool) -> Self {
        if good {
            Verdict::Good
        } else {
            Verdict::Bad
        }
    }
}

/// Build target a per-platform setting is read for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BuildTarget {
    Android,
    Ios,
    WebGl,
}

impl BuildTarget {
    /// Key used for this target in per-platform settings maps
    pub fn settings_key(&self) -> &'static str {
        match self {
            BuildTarget::Android => "Android",
            BuildTarget::Ios => "iPhone",
            BuildTarget::WebGl => "WebGL",
        }
    }
}

/// Group of settings reported together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PlatformGroup {
    Mobile,
    WebGl,
}

impl PlatformGroup {
    pub fn label(&self) -> &'static str {
        match self {
            PlatformGroup::Mobile => "Mobile",
            PlatformGroup::WebGl => "WebGL",
        }
    }
}

/// Stable identifier of an audited setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SettingId {
    IncrementalGc,
    ScriptingBackend(BuildTarget),
    ColorSpace,
    VSync,
    WebGlCompression,
    WebGlNameFilesAsHashes,
    WebGlExceptionSupport,
    ManagedStripping(BuildTarget),
}

impl SettingId {
    pub fn label(&self) -> &'static str {
        match self {
            SettingId::IncrementalGc => "Incremental GC",
            SettingId::ScriptingBackend(BuildTarget::Android) => "Scripting Backend (Android)",
            SettingId::ScriptingBackend(BuildTarget::Ios) => "Scripting Backend (iOS)",
            SettingId::ScriptingBackend(BuildTarget::WebGl) => "Scripting Backend (WebGL)",
            SettingId::ColorSpace => "Color Space",
            SettingId::VSync => "VSync",
            SettingId::WebGlCompression => "Brotli Compression",
            SettingId::WebGlNameFilesAsHashes => "Name Files As Hashes",
            SettingId::WebGlExceptionSupport => "Exception Support",
            SettingId::ManagedStripping(_) => "Strip Engine Code",
        }
    }
}

/// One audited platform setting
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlatformSetting {
    pub id: SettingId,
    pub name: &'static str,
    /// Display label of the configured value
    pub raw_value: String,
    pub verdict: Verdict,
}

impl PlatformSetting {
    pub fn new(id: SettingId, raw_value: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            id,
            name: id.label(),
            raw_value: raw_value.into(),
            verdict,
        }
    }

    /// Creates a setting that carries no verdict
    pub fn informational(id: SettingId, raw_value: impl Into<String>) -> Self {
        Self::new(id, raw_value, Verdict::Neutral)
    }
}

/// Label for a vertical sync count
pub fn vsync_label(count: i64) -> &'static str {
    match count {
        0 => "Don't Sync",
        1 => "Every V Blank",
        2 => "Every Second V Blank",
        _ => "Unknown",
    }
}

/// Label for a scripting backend code
pub fn scripting_backend_label(code: i64) -> &'static str {
    match code {
        0 => "Mono",
        1 => "IL2CPP",
        2 => "WinRT .NET",
        _ => "Unknown",
    }
}

/// Label for a color space code
pub fn color_space_label(code: i64) -> &'static str {
    match code {
        -1 => "Uninitialized",
        0 => "Gamma",
        1 => "Linear",
        _ => "Unknown",
    }
}

/// WebGL build compression format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebGlCompression {
    Brotli,
    Gzip,
    Disabled,
    Unknown(i64),
}

impl WebGlCompression {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => WebGlCompression::Brotli,
            1 => WebGlCompression::Gzip,
            2 => WebGlCompression::Disabled,
            other => WebGlCompression::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WebGlCompression::Brotli => "Brotli",
            WebGlCompression::Gzip => "Gzip",
            WebGlCompression::Disabled => "Disabled",
            WebGlCompression::Unknown(_) => "Unknown",
        }
    }
}

/// Label for a WebGL exception support code
pub fn exception_support_label(code: i64) -> &'static str {
    match code {
        0 => "None",
        1 => "Explicitly Thrown Exceptions Only",
        2 => "Full Without Stacktrace",
        3 => "Full With Stacktrace",
        _ => "Unknown",
    }
}

/// Label for a managed stripping level code
pub fn stripping_level_label(code: i64) -> &'static str {
    match code {
        0 => "Disabled",
        1 => "Low",
        2 => "Medium",
        3 => "High",
        4 => "Minimal",
        _ => "Unknown",
    }
}
