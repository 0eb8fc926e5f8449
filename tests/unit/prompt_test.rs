//! Unit tests for prompt building and request validation

use idea_gen_gateway::prompt::{self, GenerationRequest};
use idea_gen_gateway::AppError;

#[test]
fn test_prompt_mentions_every_parameter() {
    let text = prompt::build("remote work productivity", 5, true, "humorous");

    assert!(text.contains("5 blog ideas"));
    assert!(text.contains("remote work productivity"));
    assert!(text.contains("humorous tone"));
    assert!(text.contains("RESPOND ONLY WITH THE BLOG IDEAS"));
}

#[test]
fn test_request_prompt_matches_builder() {
    let request =
        GenerationRequest::new("remote work productivity", 3, false, "casual", "llama3").unwrap();

    assert_eq!(
        request.prompt(),
        prompt::build("remote work productivity", 3, false, "casual")
    );
}

#[test]
fn test_short_niche_rejected() {
    let result = GenerationRequest::new("ai", 3, true, "professional", "gemma2:2b");
    assert!(matches!(result, Err(AppError::InvalidRequest(_))));
}

#[test]
fn test_num_ideas_out_of_range_rejected() {
    for n in [0, 11, 100] {
        let result = GenerationRequest::new("cooking", n, true, "professional", "gemma2:2b");
        assert!(matches!(result, Err(AppError::InvalidRequest(_))), "num_ideas {}", n);
    }
}
