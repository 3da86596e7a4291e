//! Rules synchronization engine
//!
//! Reads a canonical AI-instructions document and a table of rule topics,
//! and fans them out into tool-specific configuration files.
//!
//! # Architecture
//!
//! - [`document`] extracts metadata and the core standards block
//! - [`topics`] loads the rule topic files, skipping missing ones
//! - [`render`] turns both into [`RenderedOutput`]s, one parameterized
//!   renderer driven by [`TargetSpec`]s
//! - [`SyncEngine`] runs the pipeline and writes, dry-runs or checks drift

pub mod check;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod render;
pub mod topics;

pub use check::{CheckReport, CheckStatus, DriftItem};
pub use config::{CONFIG_FILE_NAME, Preamble, RuleTopic, SyncConfig, TargetSpec, TopicFiles};
pub use document::{CanonicalDocument, CoreStandards, Metadata};
pub use engine::{RenderPlan, SyncEngine, SyncMode, SyncReport, WriteFailure};
pub use error::{Error, MalformedReason, Result};
pub use render::{RenderContext, RenderedOutput, render_target};
pub use topics::{LoadedRule, load_rule_topics};
