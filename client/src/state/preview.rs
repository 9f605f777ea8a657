//! Preview panel view-model.
//!
//! DESIGN
//! ======
//! `PreviewModel::render` is a pure mapping from a `GenerationResult` to the
//! strings the preview card shows. The view only binds these fields to their
//! elements, so initials, hashtag and image-URL rules are testable without a
//! browser.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use schema::GenerationResult;

/// Route that serves generated images.
pub const OUTPUT_ROUTE: &str = "/output";

/// Which region of the page is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    /// Placeholder shown until the first successful generation.
    #[default]
    Welcome,
    /// Rendered post preview.
    Result,
}

/// Everything the preview card displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewModel {
    pub brand_name: String,
    pub avatar: String,
    pub headline: String,
    pub caption: String,
    pub cta: String,
    pub design_prompt: String,
    /// Display-ready tags, each with exactly one leading `#`.
    pub hashtags: Vec<String>,
    /// Browser URL of the generated image; `None` hides the image region.
    pub image_src: Option<String>,
}

impl PreviewModel {
    /// Map a generation result to preview content for `brand_name`.
    pub fn render(result: &GenerationResult, brand_name: &str) -> Self {
        Self {
            brand_name: brand_name.to_owned(),
            avatar: avatar_initials(brand_name),
            headline: result.headline.clone(),
            caption: result.caption.clone(),
            cta: result.cta.clone(),
            design_prompt: result.design_prompt.clone(),
            hashtags: result.hashtags.iter().map(|tag| display_hashtag(tag)).collect(),
            image_src: result
                .image_url
                .as_deref()
                .filter(|path| !path.is_empty())
                .map(image_src),
        }
    }

    /// Tags as shown in `res-hashtags`: space separated, order preserved.
    pub fn hashtag_line(&self) -> String {
        self.hashtags.join(" ")
    }
}

/// First letter of up to two whitespace-separated words, uppercased.
pub fn avatar_initials(brand_name: &str) -> String {
    let initials: String = brand_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    initials.to_uppercase()
}

/// Drop every `#` from `tag` and prefix a single one.
///
/// Embedded marks are removed too, so `##tag` and `ta#g` render as `#tag`.
pub fn display_hashtag(tag: &str) -> String {
    format!("#{}", tag.replace('#', ""))
}

/// Browser URL for a server-side image path (either slash style).
pub fn image_src(path: &str) -> String {
    let filename = path.rsplit(['/', '\\']).next().unwrap_or(path);
    format!("{OUTPUT_ROUTE}/{filename}")
}
