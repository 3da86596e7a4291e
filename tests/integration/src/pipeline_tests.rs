//! End-to-end pipeline tests: canonical document and topic files in, every
//! generated file out, checked byte for byte where the output is stable.

use chrono::{Local, TimeZone};
use pretty_assertions::assert_eq;
use regex::Regex;
use sync_core::{CheckStatus, RuleTopic, SyncConfig, SyncEngine, SyncMode};
use sync_fs::NormalizedPath;
use sync_test_utils::{AGGREGATE_OUTPUTS, TestProject};

const CANONICAL: &str = "\
# Instructions
<!-- VERSION: 2.0.0 -->
<!-- LAST_UPDATED: 2026-10-01 -->
<!-- SYNC_START -->
core text
<!-- INCLUDE_RULES_START -->
(topic list goes here)
<!-- INCLUDE_RULES_END -->
<!-- SYNC_END -->
";

fn three_topic_config() -> SyncConfig {
    SyncConfig {
        topics: vec![
            RuleTopic::new("testing.md", "Testing Standards", "testing"),
            RuleTopic::new("styling.md", "Styling Guidelines", "styling"),
            RuleTopic::new("accessibility.md", "Accessibility", "accessibility"),
        ],
        ..SyncConfig::default()
    }
}

fn project() -> TestProject {
    TestProject::new()
        .with_canonical(CANONICAL)
        .with_topic("testing.md", "# Testing\nWrite tests first.\n")
        .with_topic("styling.md", "Use design tokens.\n")
}

#[test]
fn cursor_outputs_are_exact() {
    let project = project();
    let engine = SyncEngine::new(NormalizedPath::new(project.root()), three_topic_config());
    engine.sync(SyncMode::Write).unwrap();

    assert_eq!(
        project.read(".cursor/rules/project-standards.mdc"),
        "\
---
description: Core project standards and coding conventions
globs: '**/*.ts,**/*.tsx,**/*.js,**/*.jsx'
alwaysApply: true
---
<!-- AUTO-GENERATED FILE: DO NOT EDIT DIRECTLY -->
<!-- Source: AI_INSTRUCTIONS.md. Edit that file and run `rules-sync` to regenerate. -->

# Project Standards

> Version: 2.0.0 | Last updated: 2026-10-01

core text

## Rule Topics

- **Testing Standards**: `docs/rules/testing.md`
- **Styling Guidelines**: `docs/rules/styling.md`
"
    );

    assert_eq!(
        project.read(".cursor/rules/testing.mdc"),
        "\
---
description: Testing Standards
globs: '**/*.ts,**/*.tsx,**/*.js,**/*.jsx'
alwaysApply: true
---
Write tests first.
"
    );

    assert_eq!(
        project.read(".cursor/rules/styling.mdc"),
        "\
---
description: Styling Guidelines
globs: '**/*.ts,**/*.tsx,**/*.js,**/*.jsx'
alwaysApply: true
---
Use design tokens.
"
    );
    project.assert_file_missing(".cursor/rules/accessibility.mdc");
}

#[test]
fn plain_outputs_are_exact_apart_from_timestamp() {
    let project = project();
    let engine = SyncEngine::new(NormalizedPath::new(project.root()), three_topic_config());
    let now = Local.with_ymd_and_hms(2026, 10, 19, 8, 15, 0).unwrap();
    engine.sync_at(now, SyncMode::Write).unwrap();

    let stamp = Regex::new(r"(?m)^> Generated: 2026-10-19T08:15:00[+-]\d{2}:\d{2}$").unwrap();
    let claude = project.read("CLAUDE.md");
    assert!(stamp.is_match(&claude), "{claude}");

    assert_eq!(
        stamp.replace(&claude, "> Generated: <now>"),
        "\
<!-- AUTO-GENERATED FILE: DO NOT EDIT DIRECTLY -->
<!-- Source: AI_INSTRUCTIONS.md. Edit that file and run `rules-sync` to regenerate. -->

# Claude Project Instructions

> Version: 2.0.0 | Last updated: 2026-10-01
> Generated: <now>

core text

## Rule Topics

- **Testing Standards**: `docs/rules/testing.md`
- **Styling Guidelines**: `docs/rules/styling.md`
"
    );

    let copilot = project.read(".github/copilot-instructions.md");
    assert!(copilot.contains("# GitHub Copilot Instructions\n"));
    assert!(stamp.is_match(&copilot));
}

#[test]
fn two_present_one_absent_topic() {
    let project = project();
    let engine = SyncEngine::new(NormalizedPath::new(project.root()), three_topic_config());
    let report = engine.sync(SyncMode::Write).unwrap();

    assert!(report.is_success());
    assert_eq!(report.skipped_topics, vec!["Accessibility".to_string()]);

    let listed = Regex::new(r"(?m)^- \*\*(.+?)\*\*: `(.+?)`$").unwrap();
    for path in AGGREGATE_OUTPUTS {
        let content = project.read(path);
        assert!(content.contains("core text"), "{path}");
        let names: Vec<_> = listed
            .captures_iter(&content)
            .map(|c| c[1].to_string())
            .collect();
        assert_eq!(names, vec!["Testing Standards", "Styling Guidelines"], "{path}");
    }
}

#[test]
fn sync_then_check_is_healthy_and_rerun_is_stable() {
    let project = TestProject::sample(&["git-workflow.md"]);
    let engine = SyncEngine::new(NormalizedPath::new(project.root()), SyncConfig::default());

    engine.sync(SyncMode::Write).unwrap();
    let first = project.read(".cursor/rules/project-standards.mdc");

    let report = engine.check().unwrap();
    assert_eq!(report.status, CheckStatus::Healthy);
    assert_eq!(report.skipped_topics, vec!["Git Workflow".to_string()]);

    engine.sync(SyncMode::Write).unwrap();
    assert_eq!(first, project.read(".cursor/rules/project-standards.mdc"));
}
