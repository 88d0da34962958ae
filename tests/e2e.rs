//! End-to-end tests against the live Gemini API.
//!
//! These tests make real API calls. They are gated behind the `E2E_ENABLED`
//! environment variable and need `GEMINI_API_KEY`, so they do not run in CI
//! unless explicitly requested.
//!
//! Run with:
//!   E2E_ENABLED=1 GEMINI_API_KEY=... cargo test --test e2e -- --nocapture

use namesift::{extract, export, ExtractionConfig, ExtractionOutcome};

/// Skip this test unless E2E_ENABLED and GEMINI_API_KEY are both set.
macro_rules! e2e_skip_unless_ready {
    () => {{
        if std::env::var("E2E_ENABLED").is_err() {
            println!("SKIP — set E2E_ENABLED=1 to run e2e tests");
            return;
        }
        let config = ExtractionConfig::from_env().expect("GEMINI_* variables are invalid");
        if config.credential().is_none() {
            println!("SKIP — GEMINI_API_KEY is not set");
            return;
        }
        config
    }};
}

const SAMPLE: &str = "The Rust Foundation announced its 2024 fellows. \
Mentors for the compiler project are Niko Matsakis and Esteban Küber, \
while the documentation track is led by Carol Nichols. The Apache Software \
Foundation and Mozilla sponsored the event, hosted at the Linux Foundation office.";

#[tokio::test]
async fn test_live_extraction_finds_people() {
    let config = e2e_skip_unless_ready!();

    let outcome = extract(SAMPLE, &config).await;
    println!("{}", outcome.message());

    let ExtractionOutcome::Names(names) = outcome else {
        panic!("expected names, got {outcome:?}");
    };
    println!("{}", export::copy_line(&names));

    assert!(names.contains("Carol Nichols"), "got {names:?}");
    for name in &names {
        assert!(
            name.split_whitespace().count() >= 2,
            "single-word token slipped through: {name:?}"
        );
        assert!(!name.contains("Foundation"), "organisation in result: {name:?}");
    }
}

#[tokio::test]
async fn test_live_invalid_key_is_failure() {
    let config = e2e_skip_unless_ready!();
    let config = ExtractionConfig {
        api_key: Some("definitely-not-a-valid-key".into()),
        ..config
    };

    let outcome = extract(SAMPLE, &config).await;
    assert!(outcome.is_failure(), "got {outcome:?}");
    assert!(outcome.into_names().is_empty());
}
