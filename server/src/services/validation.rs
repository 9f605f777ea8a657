//! Content checks on a parsed post.
//!
//! Failures are advisory: the caller logs them and still returns the post.

use schema::{ContentCategory, Profile};

use super::parse::ParsedPost;

const PLACEHOLDERS: [&str; 6] = ["xxxxx", "xxxx", "placeholder", "dummy", "[insert", "[add"];
const SELLING_WORDS: [&str; 6] = ["buy", "purchase", "sale", "discount", "offer", "limited time"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("forbidden word found: {0}")]
    ForbiddenWord(String),

    #[error("placeholder text found: {0}")]
    Placeholder(&'static str),

    #[error("festival post contains selling language: {0}")]
    SellingLanguage(&'static str),
}

/// Check headline, caption and CTA against the brand's rules.
///
/// Matching is case-insensitive substring search. Checks run in order
/// (forbidden words, placeholders, selling language) and the first hit wins.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
pub fn validate_post(post: &ParsedPost, profile: &Profile, category: ContentCategory) -> Result<(), ValidationError> {
    let text = format!("{} {} {}", post.headline, post.caption, post.cta).to_lowercase();

    if let Some(word) = profile
        .forbidden_words
        .iter()
        .find(|w| !w.is_empty() && text.contains(&w.to_lowercase()))
    {
        return Err(ValidationError::ForbiddenWord(word.clone()));
    }

    if let Some(p) = PLACEHOLDERS.iter().find(|p| text.contains(**p)) {
        return Err(ValidationError::Placeholder(p));
    }

    if category.is_festival() {
        if let Some(w) = SELLING_WORDS.iter().find(|w| text.contains(**w)) {
            return Err(ValidationError::SellingLanguage(w));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;
