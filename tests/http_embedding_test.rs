//! End-to-end tests of the embedding service over the reqwest transport,
//! against a local wiremock server standing in for the embeddings API.

use pmp_embeddings::domain::ProviderError;
use pmp_embeddings::infrastructure::{HttpClient, HttpClientTrait};
use pmp_embeddings::{DomainError, EmbeddingEnv, EmbeddingService, EmbeddingSettings};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Answers every embeddings request with one vector per input, listed in
/// reverse index order. Each vector is `[input length, index]`.
struct ReversedEmbeddings;

impl Respond for ReversedEmbeddings {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = request.body_json().expect("request body is JSON");
        let inputs = body["input"].as_array().cloned().unwrap_or_default();

        let data: Vec<Value> = inputs
            .iter()
            .enumerate()
            .rev()
            .map(|(i, text)| {
                let len = text.as_str().map(str::len).unwrap_or_default();
                json!({"object": "embedding", "index": i, "embedding": [len as f64, i as f64]})
            })
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "model": body["model"],
            "data": data,
            "usage": {"prompt_tokens": 3, "total_tokens": 3}
        }))
    }
}

fn settings_for(server: &MockServer) -> EmbeddingSettings {
    EmbeddingSettings::resolve(EmbeddingEnv {
        openai_api_key: Some("sk-test".into()),
        openai_base_url: Some(format!("{}/v1", server.uri())),
        ..Default::default()
    })
}

#[tokio::test]
async fn test_embed_over_http_preserves_order_across_batches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ReversedEmbeddings)
        .expect(2)
        .mount(&server)
        .await;

    let service = EmbeddingService::from_settings(settings_for(&server)).unwrap();
    let texts: Vec<String> = (0..150).map(|i| "x".repeat(i + 1)).collect();

    let vectors = service.embed(&texts).await.unwrap();

    assert_eq!(vectors.len(), 150);
    for (i, vector) in vectors.iter().enumerate() {
        assert_eq!(vector[0], (i + 1) as f64, "vector {} is out of place", i);
        assert_eq!(vector[1], (i % 100) as f64);
    }

    let requests = server.received_requests().await.unwrap();
    let first: Value = requests[0].body_json().unwrap();
    assert_eq!(first["model"], "text-embedding-3-small");
    assert_eq!(first["input"].as_array().unwrap().len(), 100);
}

#[tokio::test]
async fn test_http_failure_surfaces_batch_offset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let service = EmbeddingService::from_settings(settings_for(&server)).unwrap();
    let texts: Vec<String> = (0..250).map(|i| format!("text {}", i)).collect();

    let err = service.embed(&texts).await.unwrap_err();

    match err {
        DomainError::Provider { offset, source } => {
            assert_eq!(offset, 0);
            assert!(matches!(
                source,
                ProviderError::Status { status: 500, ref body } if body == "upstream exploded"
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_embed_single_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .respond_with(ReversedEmbeddings)
        .mount(&server)
        .await;

    let service = EmbeddingService::from_settings(settings_for(&server)).unwrap();

    let vector = service.embed_single("hello").await.unwrap();

    assert_eq!(vector, vec![5.0, 0.0]);
}

#[tokio::test]
async fn test_http_client_maps_unparseable_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpClient::new();
    let url = format!("{}/v1/embeddings", server.uri());

    let err = client
        .post_json(&url, vec![("Content-Type", "application/json")], &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_http_client_maps_connection_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/v1/embeddings", listener.local_addr().unwrap());
    drop(listener);

    let err = HttpClient::new()
        .post_json(&url, vec![], &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Request { .. }));
}
