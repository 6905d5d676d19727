//! Size aggregation and ranking
//!
//! Sizes are collected for every tracked asset first; percentages are only
//! computed once the tracked total is known. The denominator covers tracked
//! assets alone, so percentages are shares of the tracked set rather than of
//! the whole repository.

use crate::AnalyzerConfig;
use log::{debug, info, warn};
use slimkit_core::{file_name, AssetCatalogSource, SizeRecord, SizeReport};
use std::collections::HashSet;

/// Extensions counted by the size ranking
pub const TRACKED_EXTENSIONS: [&str; 9] = [
    ".prefab", ".fbx", ".dae", ".obj", ".png", ".jpg", ".mp3", ".wav", ".ogg",
];

/// Returns true if the path ends with a tracked extension (case-insensitive)
pub fn is_tracked(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    TRACKED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Share of `total` taken by `size`, as a percentage; 0 when `total` is 0
pub fn percentage(size: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        size as f64 / total as f64 * 100.0
    }
}

/// Ranks tracked assets by their share of the tracked total
pub struct SizeAggregator {
    config: AnalyzerConfig,
}

impl SizeAggregator {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Aggregates every candidate path the catalog enumerates
    pub fn aggregate<S: AssetCatalogSource + ?Sized>(&self, source: &S) -> SizeReport {
        self.aggregate_paths(source, source.find_all_assets())
    }

    /// Aggregates the given candidate paths, in discovery order
    pub fn aggregate_paths<S, I>(&self, source: &S, candidates: I) -> SizeReport
    where
        S: AssetCatalogSource + ?Sized,
        I: IntoIterator<Item = String>,
    {
        // First pass: sizes and the tracked total
        let mut seen = HashSet::new();
        let mut sized: Vec<(String, u64)> = Vec::new();
        let mut total: u64 = 0;

        for path in candidates {
            // `is_tracked` ignores case, so `hero.JPG` counts toward the total
            if !is_tracked(&path) || !self.config.is_in_scope(&path) {
                continue;
            }
            if source.is_directory(&path) {
                debug!("Skipping folder {}", path);
                continue;
            }
            if !seen.insert(path.clone()) {
                continue;
            }

            let Some(size) = source.file_size_bytes(&path) else {
                warn!("Could not read size of {}, skipping", path);
                continue;
            };

            total = total.saturating_add(size);
            sized.push((path, size));
        }

        if sized.is_empty() {
            info!("No tracked assets found");
            return SizeReport::default();
        }

        // Second pass: shares of the now complete total
        let mut records: Vec<SizeRecord> = sized
            .into_iter()
            .map(|(path, size)| SizeRecord {
                name: file_name(&path).to_string(),
                size_bytes: size,
                size_percentage: percentage(size, total),
                path,
            })
            .collect();

        // Stable, so equal shares keep discovery order
        records.sort_by(|a, b| b.size_percentage.total_cmp(&a.size_percentage));

        info!("Ranked {} assets totalling {} bytes", records.len(), total);
        SizeReport {
            total_tracked_bytes: total,
            records,
        }
    }
}
