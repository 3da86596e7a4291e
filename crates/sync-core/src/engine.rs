//! SyncEngine - load, extract, render and write in one pass
//!
//! A run is strictly linear:
//!
//! 1. read the canonical document (fatal if unreadable)
//! 2. extract metadata (defaulted) and core standards (fatal if malformed)
//! 3. read the topic files (missing ones are skipped)
//! 4. render every target
//! 5. write every output
//!
//! Nothing is written before step 4 completes, so a fatal condition never
//! leaves partial output behind. Outputs are independent: a failed write is
//! recorded and the remaining outputs are still written.

use chrono::{DateTime, Local};
use sync_fs::{NormalizedPath, io};

use crate::Result;
use crate::check::{CheckReport, DriftItem};
use crate::config::SyncConfig;
use crate::document::{CanonicalDocument, Metadata};
use crate::render::{RenderContext, RenderedOutput, render_target, transform};
use crate::topics::load_rule_topics;

/// Whether a sync writes its outputs or only reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    #[default]
    Write,
    DryRun,
}

/// Everything rendered for one run, not yet written.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub metadata: Metadata,
    pub outputs: Vec<RenderedOutput>,
    /// Display names of topics whose files could not be read
    pub skipped_topics: Vec<String>,
}

/// An output that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub target: String,
    pub path: String,
    pub message: String,
}

/// Outcome of a sync run
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub metadata: Metadata,
    /// Project-relative paths written (or, for a dry run, that would be)
    pub written: Vec<String>,
    pub skipped_topics: Vec<String>,
    pub failures: Vec<WriteFailure>,
    pub mode: SyncMode,
}

impl SyncReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The rules sync engine.
///
/// The project root is fixed at construction; every configured path is
/// resolved against it.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    root: NormalizedPath,
    config: SyncConfig,
}

impl SyncEngine {
    pub fn new(root: NormalizedPath, config: SyncConfig) -> Self {
        Self { root, config }
    }

    /// Create an engine with configuration resolved from `root`.
    pub fn from_root(root: NormalizedPath, config_path: Option<&NormalizedPath>) -> Result<Self> {
        let config = SyncConfig::load(&root, config_path)?;
        Ok(Self::new(root, config))
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn canonical_path(&self) -> NormalizedPath {
        self.root.join(&self.config.canonical)
    }

    /// Load, extract and render, without touching the filesystem for writes.
    pub fn render_at(&self, now: DateTime<Local>) -> Result<RenderPlan> {
        let document = CanonicalDocument::load(&self.canonical_path())?;
        let metadata = document.metadata(now.date_naive());
        let core = document.core_standards()?;
        tracing::debug!(version = %metadata.version, "extracted core standards");

        let rules = load_rule_topics(&self.config.topics, &self.root, &self.config.rules_dir);
        let skipped_topics: Vec<String> = rules
            .iter()
            .filter(|rule| !rule.is_loaded())
            .map(|rule| rule.topic.display_name.clone())
            .collect();

        let canonical = NormalizedPath::new(&self.config.canonical);
        let globs = self.config.globs_value();
        let ctx = RenderContext {
            core: &core,
            rules: &rules,
            metadata: &metadata,
            canonical: canonical.as_str(),
            globs: &globs,
            generated_at: now,
        };

        let mut outputs = Vec::new();
        for (i, target) in self.config.targets.iter().enumerate() {
            tracing::debug!(index = i, target = %target.name, "rendering target");
            outputs.extend(render_target(target, &ctx));
        }

        Ok(RenderPlan {
            metadata,
            outputs,
            skipped_topics,
        })
    }

    /// Run a sync stamped with the current time.
    pub fn sync(&self, mode: SyncMode) -> Result<SyncReport> {
        self.sync_at(Local::now(), mode)
    }

    /// Run a sync stamped with `now`.
    pub fn sync_at(&self, now: DateTime<Local>, mode: SyncMode) -> Result<SyncReport> {
        let plan = self.render_at(now)?;

        let mut written = Vec::new();
        let mut failures = Vec::new();
        for output in &plan.outputs {
            if mode == SyncMode::DryRun {
                tracing::debug!(path = %output.path, "dry run, not writing");
                written.push(output.path.clone());
                continue;
            }
            match self.write_output(output) {
                Ok(()) => written.push(output.path.clone()),
                Err(e) => {
                    tracing::error!(path = %output.path, error = %e, "failed to write output");
                    failures.push(WriteFailure {
                        target: output.target.clone(),
                        path: output.path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(SyncReport {
            metadata: plan.metadata,
            written,
            skipped_topics: plan.skipped_topics,
            failures,
            mode,
        })
    }

    /// Write one output, creating parent directories and replacing any
    /// existing file.
    pub fn write_output(&self, output: &RenderedOutput) -> sync_fs::Result<()> {
        let path = self.root.join(&output.path);
        io::write_text(&path, &output.content)?;
        tracing::info!(target_name = %output.target, path = %output.path, "wrote output");
        Ok(())
    }

    /// Compare a fresh render with the files on disk.
    pub fn check(&self) -> Result<CheckReport> {
        self.check_at(Local::now())
    }

    pub fn check_at(&self, now: DateTime<Local>) -> Result<CheckReport> {
        let plan = self.render_at(now)?;

        let mut drifted = Vec::new();
        let mut missing = Vec::new();
        let mut fresh = 0;
        for output in &plan.outputs {
            let item = DriftItem {
                target: output.target.clone(),
                file: output.path.clone(),
            };
            match io::read_text_if_exists(&self.root.join(&output.path)) {
                Ok(None) => missing.push(item),
                Ok(Some(on_disk)) if matches_render(output, &on_disk) => fresh += 1,
                Ok(Some(_)) => drifted.push(item),
                Err(e) => {
                    tracing::warn!(
                        path = %output.path,
                        error = %e,
                        "unreadable output counted as drifted"
                    );
                    drifted.push(item);
                }
            }
        }

        Ok(CheckReport::new(drifted, missing, fresh, plan.skipped_topics))
    }
}

/// Whether a file on disk matches a fresh render, ignoring only the
/// render's own generation timestamp.
fn matches_render(output: &RenderedOutput, on_disk: &str) -> bool {
    if output.stamped {
        transform::without_generated_stamp(on_disk)
            == transform::without_generated_stamp(&output.content)
    } else {
        on_disk == output.content
    }
}
