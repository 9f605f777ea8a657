use super::*;

fn post(headline: &str, caption: &str, cta: &str) -> ParsedPost {
    ParsedPost {
        headline: headline.into(),
        caption: caption.into(),
        cta: cta.into(),
        hashtags: vec!["tag".into()],
        design_prompt: "A design".into(),
    }
}

fn profile(forbidden: &[&str]) -> Profile {
    Profile {
        forbidden_words: forbidden.iter().map(|w| (*w).to_owned()).collect(),
        ..Profile::default()
    }
}

#[test]
fn clean_post_passes() {
    let p = post("Fresh bread", "Baked daily.", "Call us");
    assert_eq!(validate_post(&p, &profile(&["cheap"]), ContentCategory::ServicePromotion), Ok(()));
}

#[test]
fn forbidden_word_is_case_insensitive() {
    let p = post("CHEAP bread", "", "");
    assert_eq!(
        validate_post(&p, &profile(&["Cheap"]), ContentCategory::Educational),
        Err(ValidationError::ForbiddenWord("Cheap".into()))
    );
}

#[test]
fn empty_forbidden_word_is_ignored() {
    let p = post("Fresh bread", "", "");
    assert_eq!(validate_post(&p, &profile(&[""]), ContentCategory::Educational), Ok(()));
}

#[test]
fn placeholder_in_cta_is_flagged() {
    let p = post("Open now", "Visit us", "Call XXXXX");
    assert_eq!(
        validate_post(&p, &profile(&[]), ContentCategory::ServicePromotion),
        Err(ValidationError::Placeholder("xxxxx"))
    );
}

#[test]
fn selling_language_only_flags_festival_posts() {
    let p = post("Happy Diwali", "Huge discount today", "");
    assert_eq!(validate_post(&p, &profile(&[]), ContentCategory::ServicePromotion), Ok(()));
    assert_eq!(
        validate_post(&p, &profile(&[]), ContentCategory::FestivalOccasion),
        Err(ValidationError::SellingLanguage("discount"))
    );
}

#[test]
fn hashtags_and_design_prompt_are_not_checked() {
    let mut p = post("Hello", "World", "");
    p.design_prompt = "placeholder art".into();
    p.hashtags = vec!["dummy".into()];
    assert_eq!(validate_post(&p, &profile(&[]), ContentCategory::Educational), Ok(()));
}

#[test]
fn error_messages_name_the_hit() {
    assert_eq!(ValidationError::ForbiddenWord("cheap".into()).to_string(), "forbidden word found: cheap");
    assert_eq!(
        ValidationError::SellingLanguage("sale").to_string(),
        "festival post contains selling language: sale"
    );
}
