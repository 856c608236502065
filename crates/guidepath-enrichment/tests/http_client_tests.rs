use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use guidepath_core::{EngineError, ExplanationService, ResourceRecommender};
use guidepath_enrichment::{EnrichmentClient, EnrichmentConfig};

async fn client_for(server: &MockServer) -> EnrichmentClient {
    let config = EnrichmentConfig {
        base_url: server.uri(),
        request_timeout_secs: 5,
    };
    EnrichmentClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_generate_explanation_sends_topic_and_context() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-explanation"))
        .and(body_partial_json(json!({
            "topic": "Fill Personal Details",
            "context": "Apply for PAN Card"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explanation": "Enter your name exactly as on Aadhaar.\n\nDouble-check the date of birth."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let explanation = client
        .generate_explanation("Fill Personal Details", "Apply for PAN Card")
        .await
        .unwrap();

    assert!(explanation.text.starts_with("Enter your name"));
    assert_eq!(explanation.paragraphs().count(), 2);
}

#[tokio::test]
async fn test_missing_explanation_field_defaults_to_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-explanation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let explanation = client.generate_explanation("Step", "Workflow").await.unwrap();
    assert!(explanation.is_empty());
}

#[tokio::test]
async fn test_explanation_server_error_maps_to_enrichment_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-explanation"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.generate_explanation("Step", "Workflow").await;

    match result {
        Err(EngineError::EnrichmentUnavailable(msg)) => {
            assert!(msg.contains("500"));
        }
        other => panic!("Expected EnrichmentUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_recommend_resources_parses_groups() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend-resources"))
        .and(body_partial_json(json!({
            "topic": "Income Tax and ITR guide official"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": {
                "articles": [
                    {"title": "ClearTax Guide: Income Tax", "url": "https://cleartax.in/s/income-tax"}
                ],
                "videos": [
                    {"title": "Income Tax Basics", "url": "https://www.youtube.com/results?search_query=income+tax+basics"}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let resources = client
        .recommend_resources("Income Tax and ITR guide official")
        .await
        .unwrap();

    assert_eq!(resources.articles.len(), 1);
    assert_eq!(resources.videos.len(), 1);
    assert_eq!(resources.articles[0].title, "ClearTax Guide: Income Tax");
}

#[tokio::test]
async fn test_missing_resources_field_yields_empty_groups() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend-resources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "no results"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let resources = client.recommend_resources("anything").await.unwrap();
    assert!(resources.is_empty());
}

#[tokio::test]
async fn test_malformed_resources_field_yields_empty_groups() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend-resources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": "not an object"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let resources = client.recommend_resources("anything").await.unwrap();
    assert!(resources.is_empty());
}

#[tokio::test]
async fn test_recommendation_server_error_maps_to_enrichment_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend-resources"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.recommend_resources("anything").await;
    assert!(matches!(
        result,
        Err(EngineError::EnrichmentUnavailable(_))
    ));
}

#[tokio::test]
async fn test_unreachable_service_maps_to_enrichment_unavailable() {
    let config = EnrichmentConfig {
        // Nothing listens here
        base_url: "http://127.0.0.1:1".to_string(),
        request_timeout_secs: 1,
    };
    let client = EnrichmentClient::new(&config).unwrap();

    let result = client.generate_explanation("Step", "Workflow").await;
    assert!(matches!(
        result,
        Err(EngineError::EnrichmentUnavailable(_))
    ));
}
