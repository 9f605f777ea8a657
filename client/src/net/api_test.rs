#![cfg(not(feature = "hydrate"))]

use super::*;
use schema::{Brief, ContentCategory, FestivalDetails, Profile};

fn request() -> GenerationRequest {
    GenerationRequest {
        profile: Profile::default(),
        brief: Brief::new("Instagram".into(), "Launch".into(), ContentCategory::default(), FestivalDetails::default),
        instructions: None,
    }
}

#[test]
fn generate_post_is_unavailable_without_browser() {
    let result = futures::executor::block_on(generate_post(request()));
    assert_eq!(result, Err(GenerateError::Unavailable));
}

#[test]
fn every_error_reads_as_generation_failure() {
    let errors = [
        GenerateError::Encode("bad".into()),
        GenerateError::Network("offline".into()),
        GenerateError::Status(500),
        GenerateError::Parse("missing field `headline`".into()),
        GenerateError::Unavailable,
    ];
    for err in errors {
        assert!(err.to_string().starts_with("generation failed"), "{err}");
    }
}

#[test]
fn status_error_reports_code() {
    assert_eq!(GenerateError::Status(422).to_string(), "generation failed: server returned status 422");
}
