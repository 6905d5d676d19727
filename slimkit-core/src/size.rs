//! Size ranking data structures

/// One asset's share of the tracked project size
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizeRecord {
    /// File name
    pub name: String,
    /// Project-relative path
    pub path: String,
    /// Size on disk in bytes
    pub size_bytes: u64,
    /// Share of the tracked total (0-100)
    pub size_percentage: f64,
}

/// Result of one size aggregation pass, ranked by size descending
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizeReport {
    /// Sum of the sizes of every record in this report
    pub total_tracked_bytes: u64,
    pub records: Vec<SizeRecord>,
}

impl SizeReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns the `n` heaviest records (all of them when `n` is 0)
    pub fn top(&self, n: usize) -> &[SizeRecord] {
        if n == 0 || n >= self.records.len() {
            &self.records
        } else {
            &self.records[..n]
        }
    }
}
