//! Shared test utilities for the rules-sync workspace.
//!
//! Provides [`TestProject`], a temporary project directory with helpers for
//! writing a canonical document and rule topics and asserting on generated
//! files. Dev-dependency only, never published.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Canonical document path used by the default configuration.
pub const CANONICAL: &str = "AI_INSTRUCTIONS.md";

/// Rules directory used by the default configuration.
pub const RULES_DIR: &str = "docs/rules";

/// A canonical document with version, date, core block and include placeholder.
pub const SAMPLE_CANONICAL: &str = "\
# AI Instructions

<!-- VERSION: 2.1.0 -->
<!-- LAST_UPDATED: 2026-09-30 -->

Preamble that is not synced.

<!-- SYNC_START -->
## Core Standards

- Use functional components.
- Keep files under 300 lines.

<!-- INCLUDE_RULES_START -->
Topic rules are appended here by the sync tool.
<!-- INCLUDE_RULES_END -->
<!-- SYNC_END -->

Trailing notes that are not synced.
";

/// A temporary project directory.
///
/// # Example
///
/// ```rust,no_run
/// use sync_test_utils::TestProject;
///
/// let project = TestProject::new()
///     .with_canonical("<!-- SYNC_START -->core text<!-- SYNC_END -->")
///     .with_topic("testing.md", "# Testing\nWrite tests.");
/// project.assert_file_exists("AI_INSTRUCTIONS.md");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestProject::new: failed to create temp dir"),
        }
    }

    /// A project with [`SAMPLE_CANONICAL`] and every default topic except
    /// those listed in `absent`.
    pub fn sample(absent: &[&str]) -> Self {
        let mut project = Self::new().with_canonical(SAMPLE_CANONICAL);
        for (file, heading) in DEFAULT_TOPIC_FILES {
            if !absent.contains(&file) {
                let body = format!("# {heading}\n\nFollow the {file} conventions.\n");
                project = project.with_topic(file, &body);
            }
        }
        project
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the canonical document at its default path.
    pub fn with_canonical(self, content: &str) -> Self {
        self.write_file(CANONICAL, content);
        self
    }

    /// Write a topic file under the default rules directory.
    pub fn with_topic(self, file_name: &str, content: &str) -> Self {
        self.write_file(&format!("{RULES_DIR}/{file_name}"), content);
        self
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("TestProject: failed to create parent dir");
        }
        fs::write(&path, content).expect("TestProject: failed to write file");
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Read a file relative to the project root.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("TestProject: failed to read {rel}: {e}"))
    }

    pub fn assert_file_exists(&self, rel: &str) {
        assert!(self.path(rel).exists(), "expected {rel} to exist");
    }

    pub fn assert_file_missing(&self, rel: &str) {
        assert!(!self.path(rel).exists(), "expected {rel} not to exist");
    }

    pub fn assert_file_contains(&self, rel: &str, needle: &str) {
        let content = self.read(rel);
        assert!(
            content.contains(needle),
            "expected {rel} to contain {needle:?}, got:\n{content}"
        );
    }
}

/// (file name, heading) of the seven default topics.
pub const DEFAULT_TOPIC_FILES: [(&str, &str); 7] = [
    ("component-standards.md", "Component Standards"),
    ("folder-structure.md", "Folder Structure"),
    ("styling.md", "Styling"),
    ("testing.md", "Testing"),
    ("api-integration.md", "API Integration"),
    ("accessibility.md", "Accessibility"),
    ("git-workflow.md", "Git Workflow"),
];

/// Project-relative paths of the three aggregate outputs.
pub const AGGREGATE_OUTPUTS: [&str; 3] = [
    ".github/copilot-instructions.md",
    "CLAUDE.md",
    ".cursor/rules/project-standards.mdc",
];
