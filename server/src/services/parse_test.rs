use super::*;

const WELL_FORMED: &str = "\
POST TEXT
Headline:
Fresh Sourdough Every Morning

Caption:
Our bakers start at 4am so your
loaf is still warm at breakfast.

CTA:
Order today: 555-0100

Hashtags:
#sourdough #bakery, #fresh

IMAGE PROMPT
Create a professional 1080x1080 social media post design with
a rustic loaf on a wooden board.
";

#[test]
fn parses_next_line_layout() {
    let post = parse_post(WELL_FORMED);
    assert_eq!(post.headline, "Fresh Sourdough Every Morning");
    assert_eq!(post.caption, "Our bakers start at 4am so your loaf is still warm at breakfast.");
    assert_eq!(post.cta, "Order today: 555-0100");
    assert_eq!(post.hashtags, vec!["sourdough", "bakery", "fresh"]);
    assert!(post.design_prompt.starts_with("Create a professional 1080x1080"));
    assert!(post.design_prompt.ends_with("wooden board."));
}

#[test]
fn parses_same_line_and_mixed_case_labels() {
    let text = "headline: Big News\ncaption: We moved.\ncta: Visit us\nhashtags: #move\nImage Prompt: A map";
    let post = parse_post(text);
    assert_eq!(post.headline, "Big News");
    assert_eq!(post.caption, "We moved.");
    assert_eq!(post.cta, "Visit us");
    assert_eq!(post.hashtags, vec!["move"]);
    assert_eq!(post.design_prompt, "A map");
}

#[test]
fn missing_cta_leaves_it_empty() {
    let text = "Headline: Happy Diwali\nCaption: Warm wishes to all.\nHashtags: #diwali\nIMAGE PROMPT: Lamps";
    let post = parse_post(text);
    assert_eq!(post.caption, "Warm wishes to all.");
    assert_eq!(post.cta, "");
    assert_eq!(post.hashtags, vec!["diwali"]);
}

#[test]
fn hashtags_drop_bare_marks_and_repeated_hashes() {
    let post = parse_post("Headline: H\nHashtags: ##one , # two,,#three\nIMAGE PROMPT: x");
    assert_eq!(post.hashtags, vec!["one", "two", "three"]);
}

#[test]
fn unlabelled_reply_falls_back_to_lines() {
    let post = parse_post("\n  A plain first line  \n\nSecond line here\nThird line\n");
    assert!(!post.is_blank());
    assert_eq!(post.headline, "A plain first line");
    assert_eq!(post.caption, "Second line here");
    assert!(post.hashtags.is_empty());
}

#[test]
fn fallback_skips_marker_lines() {
    let post = parse_post("POST TEXT\nJust words");
    assert_eq!(post.headline, "Just words");
    assert_eq!(post.caption, "");
}

#[test]
fn empty_reply_parses_to_default() {
    assert_eq!(parse_post("   "), ParsedPost::default());
}
