//! Drift check types
//!
//! A check renders every output and compares it with what is on disk,
//! ignoring the generation timestamp line.

/// Overall result of a drift check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Every generated file matches a fresh render
    Healthy,
    /// Some generated files do not exist
    Missing,
    /// Some generated files differ from a fresh render
    Drifted,
}

/// A generated file that is missing or out of date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftItem {
    /// Target that owns the file
    pub target: String,
    /// Project-relative path
    pub file: String,
}

/// Report from a drift check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub status: CheckStatus,
    pub drifted: Vec<DriftItem>,
    pub missing: Vec<DriftItem>,
    /// Outputs that matched
    pub fresh: usize,
    /// Display names of topics that could not be loaded
    pub skipped_topics: Vec<String>,
}

impl CheckReport {
    /// Build a report, deriving the status from the item lists.
    ///
    /// Drift takes precedence over missing files.
    pub fn new(
        drifted: Vec<DriftItem>,
        missing: Vec<DriftItem>,
        fresh: usize,
        skipped_topics: Vec<String>,
    ) -> Self {
        let status = if !drifted.is_empty() {
            CheckStatus::Drifted
        } else if !missing.is_empty() {
            CheckStatus::Missing
        } else {
            CheckStatus::Healthy
        };
        Self {
            status,
            drifted,
            missing,
            fresh,
            skipped_topics,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == CheckStatus::Healthy
    }
}
