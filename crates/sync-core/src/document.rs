//! Canonical instructions document
//!
//! The canonical document carries the core standards between a pair of HTML
//! comment markers:
//!
//! ```text
//! <!-- VERSION: 2.0.0 -->
//! <!-- LAST_UPDATED: 2026-10-01 -->
//! <!-- SYNC_START -->
//! core standards copied into every generated file
//! <!-- INCLUDE_RULES_START -->
//! placeholder that is never copied
//! <!-- INCLUDE_RULES_END -->
//! <!-- SYNC_END -->
//! ```

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use sync_fs::{NormalizedPath, io};

use crate::error::{Error, MalformedReason, Result};

pub const CORE_START_MARKER: &str = "<!-- SYNC_START -->";
pub const CORE_END_MARKER: &str = "<!-- SYNC_END -->";
pub const INCLUDE_START_MARKER: &str = "<!-- INCLUDE_RULES_START -->";
pub const INCLUDE_END_MARKER: &str = "<!-- INCLUDE_RULES_END -->";

/// Version used when the document has no `VERSION` marker.
pub const DEFAULT_VERSION: &str = "1.0.0";

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*VERSION:\s*(.*?)\s*-->").expect("Invalid version marker regex")
});

static LAST_UPDATED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*LAST_UPDATED:\s*(.*?)\s*-->").expect("Invalid last-updated marker regex")
});

/// Version and last-updated date of the canonical document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub version: String,
    pub last_updated: String,
}

/// The core standards region, markers and include placeholder removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreStandards(String);

impl CoreStandards {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoreStandards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw text of the canonical instructions file.
#[derive(Debug, Clone)]
pub struct CanonicalDocument {
    path: NormalizedPath,
    text: String,
}

impl CanonicalDocument {
    /// Read the canonical document.
    ///
    /// Any read failure is fatal for the run.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let text = io::read_text(path).map_err(|source| Error::MissingSourceFile {
            path: path.to_native(),
            source,
        })?;
        tracing::debug!(path = %path, bytes = text.len(), "loaded canonical document");
        Ok(Self::from_text(path.clone(), text))
    }

    pub fn from_text(path: NormalizedPath, text: impl Into<String>) -> Self {
        Self {
            path,
            text: text.into(),
        }
    }

    pub fn metadata(&self, today: NaiveDate) -> Metadata {
        extract_metadata(&self.text, today)
    }

    pub fn core_standards(&self) -> Result<CoreStandards> {
        extract_core_standards(&self.text).map_err(|reason| Error::MalformedSourceDocument {
            path: self.path.to_native(),
            reason,
        })
    }
}

/// Read the version and last-updated markers, defaulting silently.
pub fn extract_metadata(text: &str, today: NaiveDate) -> Metadata {
    let version = capture(&VERSION_REGEX, text).unwrap_or_else(|| {
        tracing::debug!(fallback = DEFAULT_VERSION, "no VERSION marker");
        DEFAULT_VERSION.to_string()
    });
    let last_updated = capture(&LAST_UPDATED_REGEX, text).unwrap_or_else(|| {
        let date = today.format("%Y-%m-%d").to_string();
        tracing::debug!(fallback = %date, "no LAST_UPDATED marker");
        date
    });
    Metadata {
        version,
        last_updated,
    }
}

fn capture(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|value| !value.is_empty())
}

/// Extract the text between the first start and first end marker.
///
/// The first include placeholder inside that region is cut out, and the
/// result is trimmed. A region that is blank after this counts as malformed.
pub fn extract_core_standards(text: &str) -> std::result::Result<CoreStandards, MalformedReason> {
    let start = text
        .find(CORE_START_MARKER)
        .ok_or(MalformedReason::MissingStartMarker(CORE_START_MARKER))?;
    let end = text
        .find(CORE_END_MARKER)
        .ok_or(MalformedReason::MissingEndMarker(CORE_END_MARKER))?;

    let body_start = start + CORE_START_MARKER.len();
    if end < body_start {
        return Err(MalformedReason::EndBeforeStart);
    }

    let block = remove_include_region(&text[body_start..end]);
    let block = block.trim();
    if block.is_empty() {
        return Err(MalformedReason::EmptyBlock);
    }
    Ok(CoreStandards(block.to_string()))
}

fn remove_include_region(block: &str) -> String {
    let Some(start) = block.find(INCLUDE_START_MARKER) else {
        return block.to_string();
    };
    let after_start = start + INCLUDE_START_MARKER.len();
    match block[after_start..].find(INCLUDE_END_MARKER) {
        Some(offset) => {
            let end = after_start + offset + INCLUDE_END_MARKER.len();
            format!("{}{}", &block[..start], &block[end..])
        }
        None => block.to_string(),
    }
}
