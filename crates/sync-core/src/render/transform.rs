//! Pure text transforms shared by the renderers

/// Label of the generation timestamp line.
///
/// The renderer writes it directly below the version line of the header.
pub const GENERATED_AT_LABEL: &str = "> Generated: ";

/// Label of the version line in a rendered header.
pub const VERSION_LABEL: &str = "> Version: ";

/// Remove a single leading `# ` heading line, if the content starts with one.
///
/// Everything after that line is returned untouched.
pub fn strip_leading_heading(content: &str) -> &str {
    if !content.starts_with("# ") {
        return content;
    }
    match content.find('\n') {
        Some(idx) => &content[idx + 1..],
        None => "",
    }
}

/// Build a frontmatter block, including its trailing newline.
///
/// ```text
/// ---
/// description: <description>
/// globs: <globs>
/// alwaysApply: true
/// ---
/// ```
pub fn frontmatter(description: &str, globs: &str) -> String {
    format!("---\ndescription: {description}\nglobs: {globs}\nalwaysApply: true\n---\n")
}

/// Prepend a frontmatter block to `body`.
pub fn with_frontmatter(description: &str, globs: &str, body: &str) -> String {
    let mut out = frontmatter(description, globs);
    out.push_str(body);
    out
}

/// Drop the header's generation timestamp so two renders can be compared.
///
/// Only the stamp line directly after the first version line is removed.
/// Every other byte, including line endings, is kept.
pub fn without_generated_stamp(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut lines = text.split_inclusive('\n');
    let mut header_seen = false;
    while let Some(line) = lines.next() {
        out.push_str(line);
        if !header_seen && line.starts_with(VERSION_LABEL) {
            header_seen = true;
            match lines.next() {
                Some(next) if next.starts_with(GENERATED_AT_LABEL) => {}
                Some(next) => out.push_str(next),
                None => {}
            }
        }
    }
    out
}
