//! Renderers
//!
//! Every target is produced by the same parameterized renderer
//! ([`render_target`]) driven by a [`TargetSpec`](crate::config::TargetSpec).
//! The text transforms it shares live in [`transform`].

mod target;
pub mod transform;

pub use target::{GENERATED_BANNER, RenderContext, RenderedOutput, render_target};
