//! Parse the model's plain-text reply into post fields.
//!
//! Each field is located by its label and runs until the next known label.
//! Labels are case-insensitive and may sit on the same line as their value
//! or the line above it.

use std::sync::LazyLock;

use regex::Regex;

/// Fields recovered from one model reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPost {
    pub headline: String,
    pub caption: String,
    pub cta: String,
    pub hashtags: Vec<String>,
    pub design_prompt: String,
}

impl ParsedPost {
    /// `true` when none of headline, caption or design prompt were found.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.headline.is_empty() && self.caption.is_empty() && self.design_prompt.is_empty()
    }
}

// =============================================================================
// PATTERNS
// =============================================================================

fn field(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid field pattern {pattern}: {e}"))
}

static HEADLINE: LazyLock<Regex> =
    LazyLock::new(|| field(r"(?is)Headline:\s*(.*?)(?:\n(?:Caption:|CTA:|Hashtags:|IMAGE PROMPT)|\z)"));
static CAPTION: LazyLock<Regex> =
    LazyLock::new(|| field(r"(?is)Caption:\s*(.*?)(?:\n(?:CTA:|Hashtags:|IMAGE PROMPT)|\z)"));
static CTA: LazyLock<Regex> = LazyLock::new(|| field(r"(?is)CTA:\s*(.*?)(?:\n(?:Hashtags:|IMAGE PROMPT)|\z)"));
static HASHTAGS: LazyLock<Regex> = LazyLock::new(|| field(r"(?is)Hashtags:\s*(.*?)(?:\nIMAGE PROMPT|\z)"));
static DESIGN_PROMPT: LazyLock<Regex> = LazyLock::new(|| field(r"(?is)IMAGE PROMPT:?\s*(.*)"));
static TAG_SPLIT: LazyLock<Regex> = LazyLock::new(|| field(r"[\s,]+"));

const SECTION_MARKERS: [&str; 6] = ["POST TEXT", "HEADLINE:", "CAPTION:", "CTA:", "HASHTAGS:", "IMAGE PROMPT"];

// =============================================================================
// PARSING
// =============================================================================

/// Extract post fields from `content`.
///
/// When no labelled headline, caption or design prompt is present, the
/// first unlabelled lines become the headline and caption.
#[must_use]
pub fn parse_post(content: &str) -> ParsedPost {
    let content = content.trim();
    let mut post = ParsedPost {
        headline: capture(&HEADLINE, content).map(collapse).unwrap_or_default(),
        caption: capture(&CAPTION, content).map(collapse).unwrap_or_default(),
        cta: capture(&CTA, content).map(collapse).unwrap_or_default(),
        hashtags: capture(&HASHTAGS, content).map(split_hashtags).unwrap_or_default(),
        design_prompt: capture(&DESIGN_PROMPT, content).map(collapse).unwrap_or_default(),
    };

    if post.is_blank() {
        tracing::warn!(len = content.len(), "reply had no recognizable sections; using line fallback");
        let mut loose = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !is_marker_line(line));
        post.headline = loose.next().unwrap_or_default().to_owned();
        post.caption = loose.next().unwrap_or_default().to_owned();
    }

    post
}

fn capture<'a>(re: &Regex, content: &'a str) -> Option<&'a str> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

fn collapse(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn split_hashtags(value: &str) -> Vec<String> {
    TAG_SPLIT
        .split(value)
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != "#")
        .map(|tag| tag.trim_start_matches('#'))
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

fn is_marker_line(line: &str) -> bool {
    let upper = line.to_uppercase();
    SECTION_MARKERS.iter().any(|marker| upper.contains(marker))
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;
