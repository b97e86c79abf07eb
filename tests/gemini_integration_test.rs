use fortune_common::{AnalysisClient, CategoryAnalyzer, CategoryKey, Locale, UserInput};
use fortune_teller::transport::GeminiTransport;

#[tokio::test]
async fn gemini_single_category_integration() {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    };

    let transport = GeminiTransport::new(Some(api_key), "gemini-2.5-flash", 120)
        .expect("failed to build transport");
    let client = AnalysisClient::new(transport);

    let input = UserInput {
        name: "Integration Test".into(),
        dob: "1990-07-15".into(),
        tob: None,
        face_photo: None,
    };

    let result = client
        .analyze(CategoryKey::Personality, &input, Locale::En, None)
        .await
        .expect("analysis failed");

    assert!(!result.summary.trim().is_empty());
    assert!(result.details.contains("### "));
}
