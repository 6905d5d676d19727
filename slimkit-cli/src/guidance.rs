//! Explanatory text printed under each report

use slimkit_core::{PlatformGroup, SettingId};

pub const TEXTURE_GUIDANCE: &[(&str, &str)] = &[
    (
        "Max Size",
        "Pick the smallest max size that still looks acceptable. The recommended value is the smallest step that fits the source image.",
    ),
    (
        "Compression",
        "Controls how texture data is compressed on disk. Lower quality levels shrink the file at some cost in visual fidelity.",
    ),
    (
        "Crunch Compression",
        "An extra lossy pass over already compressed textures. Produces much smaller files, which matters most on mobile.",
    ),
    (
        "Crunch Quality",
        "Higher values keep more detail and produce larger files. Tune it per project against storage limits.",
    ),
];

pub const AUDIO_GUIDANCE: &[(&str, &str)] = &[
    (
        "Format",
        "Compressed formats such as Ogg Vorbis reduce the total bundle size.",
    ),
    (
        "Load Type",
        "Decompress On Load suits short effects. Compressed In Memory suits music and longer clips.",
    ),
    (
        "Force To Mono",
        "Enable it to halve file size and memory use of stereo clips.",
    ),
    (
        "Quality",
        "Higher compression quality improves fidelity and increases file size. Adjust per clip and device budget.",
    ),
];

pub const MODEL_GUIDANCE: &[(&str, &str)] = &[
    (
        "Read/Write",
        "Keeps a second copy of the mesh in CPU memory. Disable it unless scripts read or modify the mesh at runtime.",
    ),
    (
        "Polygons Optimized",
        "Reorders polygons for better use of the GPU's caches.",
    ),
    (
        "Vertices Optimized",
        "Reorders vertices for better use of the GPU's caches.",
    ),
    (
        "Mesh Compression",
        "Stronger compression saves disk space but can introduce visible inaccuracy. Try levels per model.",
    ),
    (
        "Animation Compression",
        "Reduces build size at the risk of animation errors.",
    ),
];

pub const SIZE_GUIDANCE: &[(&str, &str)] = &[(
    "Share",
    "Percentages are relative to the tracked asset types only (prefab, fbx, dae, obj, png, jpg, mp3, wav, ogg), not to the whole repository.",
)];

/// Guidance for one platform setting
pub fn setting_guidance(id: SettingId, group: PlatformGroup) -> &'static str {
    match id {
        SettingId::IncrementalGc => {
            "Splits garbage collection into small slices and avoids long pauses. Leave it enabled."
        }
        SettingId::ScriptingBackend(_) => {
            "Mono builds faster and is smaller. IL2CPP runs faster but grows the binary; iOS requires it."
        }
        SettingId::ColorSpace => {
            "Gamma renders roughly 10-30% faster than Linear at the cost of some visual quality."
        }
        SettingId::VSync => match group {
            PlatformGroup::Mobile => {
                "VSync on mobile can cause input lag and faster battery drain. Leave it on Don't Sync."
            }
            PlatformGroup::WebGl => {
                "The browser already paces frames. Leave VSync on Don't Sync."
            }
        },
        SettingId::WebGlCompression => {
            "Brotli gives the smallest downloads and the shortest load times."
        }
        SettingId::WebGlNameFilesAsHashes => {
            "Content-hashed file names let browsers cache builds safely."
        }
        SettingId::WebGlExceptionSupport => {
            "Explicitly thrown exceptions only is usually the best tradeoff between safety and speed."
        }
        SettingId::ManagedStripping(_) => {
            "Medium or High stripping removes more unused code and shrinks the bundle further."
        }
    }
}
