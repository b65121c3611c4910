use krishibot::ai::{self, AiError, GeminiConfig};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> GeminiConfig {
    GeminiConfig {
        api_key: "k".to_string(),
        model: "gemini-2.5-flash".to_string(),
        base_url: Some(server.uri()),
    }
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!(r#"{{"candidates":[{{"content":{{"parts":[{{"text":"{text}"}}]}}}}]}}"#),
        "application/json",
    )
}

#[tokio::test]
async fn answer_question_returns_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(query_param("key", "k"))
        .respond_with(text_response("Use drip irrigation."))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server);
    let answer = ai::text::answer_question(&config, "How can I save water?")
        .await
        .unwrap();
    assert_eq!(answer, "Use drip irrigation.");
    server.verify().await;
}

#[tokio::test]
async fn request_body_embeds_the_question() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("Farmer's Question: Why are my wheat leaves yellow?"))
        .respond_with(text_response("Likely nitrogen deficiency."))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server);
    ai::text::answer_question(&config, "Why are my wheat leaves yellow?")
        .await
        .unwrap();
    server.verify().await;
}

#[tokio::test]
async fn vision_request_carries_the_encoded_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("inline_data"))
        .and(body_string_contains("aW1n"))
        .and(body_string_contains("Crop type: Tomato"))
        .respond_with(text_response("Early blight."))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server);
    let analysis = ai::vision::analyze_crop_disease(&config, b"img", "Tomato")
        .await
        .unwrap();
    assert_eq!(analysis, "Early blight.");
    server.verify().await;
}

#[tokio::test]
async fn api_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_raw("model overloaded", "text/plain"))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let err = ai::text::analyze_soil_description(&config, "red and sandy")
        .await
        .unwrap_err();
    match err {
        AiError::Api { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("model overloaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidates_are_an_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"candidates":[]}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let config = test_config(&server);
    let err = ai::text::answer_question(&config, "anything").await.unwrap_err();
    assert!(matches!(err, AiError::EmptyResponse));
}
