//! Rule topic loading

use sync_fs::{NormalizedPath, io};

use crate::config::RuleTopic;

/// A rule topic and its file content, if the file could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRule {
    pub topic: RuleTopic,
    /// Topic file path relative to the project root (e.g. `docs/rules/testing.md`)
    pub source: NormalizedPath,
    pub content: Option<String>,
}

impl LoadedRule {
    pub fn is_loaded(&self) -> bool {
        self.content.is_some()
    }
}

/// Read every topic file under `root/rules_dir`, in table order.
///
/// A topic whose file cannot be read is kept with `content: None` and a
/// warning; renderers leave it out.
pub fn load_rule_topics(
    topics: &[RuleTopic],
    root: &NormalizedPath,
    rules_dir: &str,
) -> Vec<LoadedRule> {
    let rules_dir = NormalizedPath::new(rules_dir);
    topics
        .iter()
        .map(|topic| {
            let source = rules_dir.join(&topic.file_name);
            let content = match io::read_text(&root.join(source.as_str())) {
                Ok(content) => Some(content),
                Err(e) => {
                    tracing::warn!(
                        topic = %topic.display_name,
                        path = %source,
                        error = %e,
                        "skipping rule topic"
                    );
                    None
                }
            };
            LoadedRule {
                topic: topic.clone(),
                source,
                content,
            }
        })
        .collect()
}

/// Iterate over the topics that loaded, paired with their content.
pub fn loaded(rules: &[LoadedRule]) -> impl Iterator<Item = (&LoadedRule, &str)> {
    rules
        .iter()
        .filter_map(|rule| rule.content.as_deref().map(|content| (rule, content)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_topic_is_kept_unloaded() {
        let temp = TempDir::new().unwrap();
        let rules = temp.path().join("docs").join("rules");
        fs::create_dir_all(&rules).unwrap();
        fs::write(rules.join("testing.md"), "# Testing\nWrite tests.").unwrap();

        let topics = vec![
            RuleTopic::new("testing.md", "Testing Standards", "testing"),
            RuleTopic::new("styling.md", "Styling Guidelines", "styling"),
        ];
        let root = NormalizedPath::new(temp.path());
        let loaded_rules = load_rule_topics(&topics, &root, "docs/rules");

        assert_eq!(loaded_rules.len(), 2);
        assert!(loaded_rules[0].is_loaded());
        assert_eq!(loaded_rules[0].source.as_str(), "docs/rules/testing.md");
        assert!(!loaded_rules[1].is_loaded());

        let names: Vec<_> = loaded(&loaded_rules)
            .map(|(rule, _)| rule.topic.short_key.as_str())
            .collect();
        assert_eq!(names, vec!["testing"]);
    }
}
