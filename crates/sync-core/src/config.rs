//! Sync configuration
//!
//! [`SyncConfig::default`] is the reference setup: one canonical document,
//! seven rule topics and three render targets. A `rules-sync.toml` at the
//! project root may override any part of it; omitted keys keep their defaults.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sync_fs::{ConfigStore, NormalizedPath};

use crate::{Error, Result};

/// File name looked up at the project root when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = "rules-sync.toml";

/// One rule topic: a markdown file under the rules directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTopic {
    /// File name relative to the rules directory (e.g. "testing.md")
    pub file_name: String,
    /// Human-readable name used in indexes and frontmatter descriptions
    pub display_name: String,
    /// Identifier used to name per-topic output files
    pub short_key: String,
}

impl RuleTopic {
    pub fn new(file_name: &str, display_name: &str, short_key: &str) -> Self {
        Self {
            file_name: file_name.into(),
            display_name: display_name.into(),
            short_key: short_key.into(),
        }
    }
}

/// Preamble written at the very top of a rendered file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum Preamble {
    /// No preamble; the file starts with the generated-file banner
    #[default]
    Plain,
    /// A `---` delimited frontmatter block with `description`, `globs` and
    /// `alwaysApply` keys
    Frontmatter { description: String },
}

/// Per-topic emission settings for a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFiles {
    /// Directory (relative to the project root) receiving one file per topic
    pub dir: String,
    /// Extension of each per-topic file, without the dot
    pub extension: String,
}

impl TopicFiles {
    /// Project-relative path of the file written for `short_key`.
    pub fn output_path(&self, short_key: &str) -> String {
        format!(
            "{}/{}.{}",
            self.dir.trim_end_matches('/'),
            short_key,
            self.extension
        )
    }
}

/// A render target: one aggregate file, optionally with per-topic files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Short identifier used in logs and reports (e.g. "cursor")
    pub name: String,
    /// Aggregate output path relative to the project root
    pub path: String,
    /// Heading written above the metadata lines
    pub title: String,
    #[serde(default)]
    pub preamble: Preamble,
    /// Embed a full generation timestamp line
    #[serde(default)]
    pub stamp_generated_at: bool,
    #[serde(default)]
    pub topic_files: Option<TopicFiles>,
}

/// Complete configuration for one sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Canonical instructions document, relative to the project root
    pub canonical: String,
    /// Directory holding the topic files, relative to the project root
    pub rules_dir: String,
    /// Source file patterns written into every frontmatter `globs` key
    pub globs: Vec<String>,
    pub topics: Vec<RuleTopic>,
    pub targets: Vec<TargetSpec>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            canonical: "AI_INSTRUCTIONS.md".into(),
            rules_dir: "docs/rules".into(),
            globs: default_globs(),
            topics: default_topics(),
            targets: default_targets(),
        }
    }
}

fn default_globs() -> Vec<String> {
    ["**/*.ts", "**/*.tsx", "**/*.js", "**/*.jsx"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// The reference topic table.
pub fn default_topics() -> Vec<RuleTopic> {
    vec![
        RuleTopic::new("component-standards.md", "Component Standards", "components"),
        RuleTopic::new("folder-structure.md", "Folder Structure", "folder-structure"),
        RuleTopic::new("styling.md", "Styling Guidelines", "styling"),
        RuleTopic::new("testing.md", "Testing Standards", "testing"),
        RuleTopic::new("api-integration.md", "API Integration", "api"),
        RuleTopic::new("accessibility.md", "Accessibility", "accessibility"),
        RuleTopic::new("git-workflow.md", "Git Workflow", "git-workflow"),
    ]
}

/// The reference targets: Copilot, Claude and Cursor.
pub fn default_targets() -> Vec<TargetSpec> {
    vec![
        TargetSpec {
            name: "copilot".into(),
            path: ".github/copilot-instructions.md".into(),
            title: "GitHub Copilot Instructions".into(),
            preamble: Preamble::Plain,
            stamp_generated_at: true,
            topic_files: None,
        },
        TargetSpec {
            name: "claude".into(),
            path: "CLAUDE.md".into(),
            title: "Claude Project Instructions".into(),
            preamble: Preamble::Plain,
            stamp_generated_at: true,
            topic_files: None,
        },
        TargetSpec {
            name: "cursor".into(),
            path: ".cursor/rules/project-standards.mdc".into(),
            title: "Project Standards".into(),
            preamble: Preamble::Frontmatter {
                description: "Core project standards and coding conventions".into(),
            },
            stamp_generated_at: false,
            topic_files: Some(TopicFiles {
                dir: ".cursor/rules".into(),
                extension: "mdc".into(),
            }),
        },
    ]
}

impl SyncConfig {
    /// Resolve the configuration for a project.
    ///
    /// An explicit path must exist. Otherwise `rules-sync.toml` at `root` is
    /// used when present, and the reference configuration when not.
    pub fn load(root: &NormalizedPath, explicit: Option<&NormalizedPath>) -> Result<Self> {
        let store = ConfigStore::new();
        let config: Self = match explicit {
            Some(path) => {
                tracing::debug!(path = %path, "loading explicit config");
                store.load(path)?
            }
            None => {
                let path = root.join(CONFIG_FILE_NAME);
                match store.load_optional(&path)? {
                    Some(config) => {
                        tracing::debug!(path = %path, "loaded project config");
                        config
                    }
                    None => {
                        tracing::debug!("no project config, using defaults");
                        Self::default()
                    }
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make outputs collide or point nowhere.
    pub fn validate(&self) -> Result<()> {
        if self.canonical.trim().is_empty() {
            return Err(Error::invalid_config("canonical path is empty"));
        }
        if self.targets.is_empty() {
            return Err(Error::invalid_config("no targets configured"));
        }

        let mut keys = HashSet::new();
        for topic in &self.topics {
            if topic.file_name.trim().is_empty() || topic.short_key.trim().is_empty() {
                return Err(Error::invalid_config(format!(
                    "topic '{}' needs both a file name and a short key",
                    topic.display_name
                )));
            }
            if !is_plain_key(&topic.short_key) {
                return Err(Error::invalid_config(format!(
                    "topic short key '{}' must not contain path separators or '..'",
                    topic.short_key
                )));
            }
            if !keys.insert(topic.short_key.as_str()) {
                return Err(Error::invalid_config(format!(
                    "duplicate topic short key '{}'",
                    topic.short_key
                )));
            }
        }

        let mut paths = HashSet::new();
        for target in &self.targets {
            if target.path.trim().is_empty() {
                return Err(Error::invalid_config(format!(
                    "target '{}' has no output path",
                    target.name
                )));
            }
            claim_path(&mut paths, target.path.clone())?;

            let Some(files) = &target.topic_files else {
                continue;
            };
            if files.dir.trim_end_matches('/').trim().is_empty() {
                return Err(Error::invalid_config(format!(
                    "target '{}' has an empty topic file directory",
                    target.name
                )));
            }
            for topic in &self.topics {
                claim_path(&mut paths, files.output_path(&topic.short_key))?;
            }
        }
        Ok(())
    }

    /// The globs value as written into frontmatter: single-quoted, comma-joined.
    pub fn globs_value(&self) -> String {
        format!("'{}'", self.globs.join(","))
    }
}

fn is_plain_key(key: &str) -> bool {
    !key.contains(['/', '\\']) && !key.contains("..")
}

fn claim_path(paths: &mut HashSet<String>, path: String) -> Result<()> {
    let key = path.trim_start_matches("./").to_string();
    if paths.insert(key) {
        Ok(())
    } else {
        Err(Error::invalid_config(format!(
            "output path '{path}' would be written more than once"
        )))
    }
}
