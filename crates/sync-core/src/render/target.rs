//! The parameterized target renderer

use chrono::{DateTime, Local, SecondsFormat};

use super::transform::{GENERATED_AT_LABEL, strip_leading_heading, with_frontmatter};
use crate::config::{Preamble, TargetSpec, TopicFiles};
use crate::document::{CoreStandards, Metadata};
use crate::topics::{LoadedRule, loaded};

/// First line of every generated aggregate (after any frontmatter).
pub const GENERATED_BANNER: &str = "<!-- AUTO-GENERATED FILE: DO NOT EDIT DIRECTLY -->";

/// Everything a renderer reads. Built once per run and shared by all targets.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub core: &'a CoreStandards,
    pub rules: &'a [LoadedRule],
    pub metadata: &'a Metadata,
    /// Canonical document path, relative to the project root
    pub canonical: &'a str,
    /// Frontmatter `globs` value, already quoted
    pub globs: &'a str,
    pub generated_at: DateTime<Local>,
}

/// One file to write: a project-relative path and its full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    /// Name of the target that produced it
    pub target: String,
    pub path: String,
    pub content: String,
    /// Whether `content` embeds a generation timestamp
    pub stamped: bool,
}

/// Render one target: its aggregate file first, then any per-topic files in
/// topic-table order.
pub fn render_target(target_spec: &TargetSpec, ctx: &RenderContext<'_>) -> Vec<RenderedOutput> {
    let mut outputs = vec![RenderedOutput {
        target: target_spec.name.clone(),
        path: target_spec.path.clone(),
        content: render_aggregate(target_spec, ctx),
        stamped: target_spec.stamp_generated_at,
    }];
    if let Some(files) = &target_spec.topic_files {
        outputs.extend(render_topic_files(target_spec, files, ctx));
    }
    outputs
}

fn render_aggregate(target_spec: &TargetSpec, ctx: &RenderContext<'_>) -> String {
    let mut lines = vec![
        GENERATED_BANNER.to_string(),
        format!(
            "<!-- Source: {}. Edit that file and run `rules-sync` to regenerate. -->",
            ctx.canonical
        ),
        String::new(),
        format!("# {}", target_spec.title),
        String::new(),
        format!(
            "> Version: {} | Last updated: {}",
            ctx.metadata.version, ctx.metadata.last_updated
        ),
    ];
    if target_spec.stamp_generated_at {
        lines.push(format!(
            "{GENERATED_AT_LABEL}{}",
            ctx.generated_at.to_rfc3339_opts(SecondsFormat::Secs, false)
        ));
    }
    lines.push(String::new());
    lines.push(ctx.core.to_string());

    let index: Vec<String> = loaded(ctx.rules)
        .map(|(rule, _)| format!("- **{}**: `{}`", rule.topic.display_name, rule.source))
        .collect();
    if !index.is_empty() {
        lines.push(String::new());
        lines.push("## Rule Topics".to_string());
        lines.push(String::new());
        lines.extend(index);
    }

    let mut body = lines.join("\n");
    body.push('\n');

    match &target_spec.preamble {
        Preamble::Plain => body,
        Preamble::Frontmatter { description } => with_frontmatter(description, ctx.globs, &body),
    }
}

fn render_topic_files(
    target_spec: &TargetSpec,
    files: &TopicFiles,
    ctx: &RenderContext<'_>,
) -> Vec<RenderedOutput> {
    loaded(ctx.rules)
        .map(|(rule, content)| RenderedOutput {
            target: target_spec.name.clone(),
            path: files.output_path(&rule.topic.short_key),
            content: with_frontmatter(
                &rule.topic.display_name,
                ctx.globs,
                strip_leading_heading(content),
            ),
            stamped: false,
        })
        .collect()
}
