//! Normalized asset records and importer label tables

/// Texture max-size steps offered by the importer, ascending
pub const MAX_SIZE_STEPS: [u32; 10] = [32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384];

/// Returns the smallest max-size step that fits the largest dimension of a texture.
///
/// Dimensions above the last step clamp to 16384.
pub fn ideal_max_size(width: u32, height: u32) -> u32 {
    let largest = width.max(height);
    MAX_SIZE_STEPS
        .iter()
        .copied()
        .find(|&step| largest <= step)
        .unwrap_or(MAX_SIZE_STEPS[MAX_SIZE_STEPS.len() - 1])
}

/// Kind of asset an analyzer pass works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AssetKind {
    Texture,
    Audio,
    Model,
}

impl AssetKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Texture => "texture",
            AssetKind::Audio => "audio",
            AssetKind::Model => "model",
        }
    }
}

/// Texture usage as configured on the importer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TextureType {
    Default,
    NormalMap,
    Gui,
    Cookie,
    Lightmap,
    Cursor,
    Sprite,
    SingleChannel,
    Shadowmask,
    DirectionalLightmap,
    Unknown(i64),
}

impl TextureType {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => TextureType::Default,
            1 => TextureType::NormalMap,
            2 => TextureType::Gui,
            4 => TextureType::Cookie,
            6 => TextureType::Lightmap,
            7 => TextureType::Cursor,
            8 => TextureType::Sprite,
            10 => TextureType::SingleChannel,
            11 => TextureType::Shadowmask,
            12 => TextureType::DirectionalLightmap,
            other => TextureType::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextureType::Default => "Default",
            TextureType::NormalMap => "NormalMap",
            TextureType::Gui => "GUI",
            TextureType::Cookie => "Cookie",
            TextureType::Lightmap => "Lightmap",
            TextureType::Cursor => "Cursor",
            TextureType::Sprite => "Sprite",
            TextureType::SingleChannel => "SingleChannel",
            TextureType::Shadowmask => "Shadowmask",
            TextureType::DirectionalLightmap => "DirectionalLightmap",
            TextureType::Unknown(_) => "Unknown",
        }
    }
}

/// Texture compression level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TextureCompression {
    None,
    Low,
    Normal,
    High,
    Unknown(i64),
}

impl TextureCompression {
    /// Maps the importer's stored code (uncompressed, compressed, HQ, LQ) to a level
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => TextureCompression::None,
            1 => TextureCompression::Normal,
            2 => TextureCompression::High,
            3 => TextureCompression::Low,
            other => TextureCompression::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextureCompression::None => "None",
            TextureCompression::Low => "Low",
            TextureCompression::Normal => "Normal",
            TextureCompression::High => "High",
            TextureCompression::Unknown(_) => "Unknown",
        }
    }
}

/// How an audio clip is loaded at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AudioLoadType {
    DecompressOnLoad,
    CompressedInMemory,
    Streaming,
    Unknown(i64),
}

impl AudioLoadType {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => AudioLoadType::DecompressOnLoad,
            1 => AudioLoadType::CompressedInMemory,
            2 => AudioLoadType::Streaming,
            other => AudioLoadType::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AudioLoadType::DecompressOnLoad => "DecompressOnLoad",
            AudioLoadType::CompressedInMemory => "CompressedInMemory",
            AudioLoadType::Streaming => "Streaming",
            AudioLoadType::Unknown(_) => "Unknown",
        }
    }
}

/// Mesh compression level of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MeshCompression {
    Off,
    Low,
    Medium,
    High,
    Unknown(i64),
}

impl MeshCompression {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => MeshCompression::Off,
            1 => MeshCompression::Low,
            2 => MeshCompression::Medium,
            3 => MeshCompression::High,
            other => MeshCompression::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeshCompression::Off => "Off",
            MeshCompression::Low => "Low",
            MeshCompression::Medium => "Medium",
            MeshCompression::High => "High",
            MeshCompression::Unknown(_) => "Unknown",
        }
    }
}

/// Animation compression mode of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AnimationCompression {
    Off,
    KeyframeReduction,
    KeyframeReductionAndCompression,
    Optimal,
    Unknown(i64),
}

impl AnimationCompression {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => AnimationCompression::Off,
            1 => AnimationCompression::KeyframeReduction,
            2 => AnimationCompression::KeyframeReductionAndCompression,
            3 => AnimationCompression::Optimal,
            other => AnimationCompression::Unknown(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnimationCompression::Off => "Off",
            AnimationCompression::KeyframeReduction => "KeyframeReduction",
            AnimationCompression::KeyframeReductionAndCompression => {
                "KeyframeReductionAndCompression"
            }
            AnimationCompression::Optimal => "Optimal",
            AnimationCompression::Unknown(_) => "Unknown",
        }
    }
}

/// A heuristic rule evaluated against an asset record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rule {
    /// Configured max size matches the ideal step for the texture's dimensions
    MaxSize,
    /// Audio is forced to mono
    ForceToMono,
    /// Mesh read/write access is disabled
    ReadWriteDisabled,
    /// Polygon order is optimized
    PolygonsOptimized,
    /// Vertex order is optimized
    VerticesOptimized,
}

/// Outcome of one rule for one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Check {
    pub rule: Rule,
    pub ideal: bool,
}

impl Check {
    pub fn new(rule: Rule, ideal: bool) -> Self {
        Self { rule, ideal }
    }
}

/// Normalized texture import settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextureRecord {
    /// File name
    pub name: String,
    /// Project-relative path
    pub path: String,
    pub texture_type: TextureType,
    /// Source width in pixels
    pub width: u32,
    /// Source height in pixels
    pub height: u32,
    /// Configured max size cap
    pub max_size: u32,
    pub compression: TextureCompression,
    pub crunch_enabled: bool,
    /// Crunch quality (0-100)
    pub crunch_quality: u8,
}

impl TextureRecord {
    /// Ideal max size for this texture's dimensions
    pub fn ideal_max_size(&self) -> u32 {
        ideal_max_size(self.width, self.height)
    }

    pub fn is_max_size_ideal(&self) -> bool {
        self.max_size == self.ideal_max_size()
    }

    pub fn checks(&self) -> Vec<Check> {
        vec![Check::new(Rule::MaxSize, self.is_max_size_ideal())]
    }
}

/// Normalized audio import settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AudioRecord {
    /// File name
    pub name: String,
    /// Project-relative path
    pub path: String,
    pub load_type: AudioLoadType,
    pub force_to_mono: bool,
    /// Compression quality as a percentage (0-100)
    pub quality: u8,
}

impl AudioRecord {
    pub fn checks(&self) -> Vec<Check> {
        vec![Check::new(Rule::ForceToMono, self.force_to_mono)]
    }
}

/// Normalized model import settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelRecord {
    /// File name
    pub name: String,
    /// Project-relative path
    pub path: String,
    pub read_write_enabled: bool,
    pub polygons_optimized: bool,
    pub vertices_optimized: bool,
    pub mesh_compression: MeshCompression,
    pub animation_compression: AnimationCompression,
}

impl ModelRecord {
    pub fn checks(&self) -> Vec<Check> {
        vec![
            Check::new(Rule::ReadWriteDisabled, !self.read_write_enabled),
            Check::new(Rule::PolygonsOptimized, self.polygons_optimized),
            Check::new(Rule::VerticesOptimized, self.vertices_optimized),
        ]
    }
}

/// A normalized record of any asset kind
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AssetRecord {
    Texture(TextureRecord),
    Audio(AudioRecord),
    Model(ModelRecord),
}

impl AssetRecord {
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetRecord::Texture(_) => AssetKind::Texture,
            AssetRecord::Audio(_) => AssetKind::Audio,
            AssetRecord::Model(_) => AssetKind::Model,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AssetRecord::Texture(t) => &t.name,
            AssetRecord::Audio(a) => &a.name,
            AssetRecord::Model(m) => &m.name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            AssetRecord::Texture(t) => &t.path,
            AssetRecord::Audio(a) => &a.path,
            AssetRecord::Model(m) => &m.path,
        }
    }

    pub fn checks(&self) -> Vec<Check> {
        match self {
            AssetRecord::Texture(t) => t.checks(),
            AssetRecord::Audio(a) => a.checks(),
            AssetRecord::Model(m) => m.checks(),
        }
    }

    /// Returns true if any rule for this record is not ideal
    pub fn has_issues(&self) -> bool {
        self.checks().iter().any(|c| !c.ideal)
    }
}
