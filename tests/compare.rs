mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use comparator::config::{ComparatorConfig, HostedProviderConfig, LocalConfig};
use comparator::history::search;
use comparator::llm::Router as ModelRouter;
use comparator::models::is_error_response;
use comparator::{Comparator, ComparatorError, HistoryStore, Prompt};
use common::serve;
use serde_json::{json, Value};
use tempfile::TempDir;

async fn chat_echo(Json(body): Json<Value>) -> Json<Value> {
    let model = body["model"].as_str().unwrap_or("?").to_string();
    Json(json!({"choices": [{"message": {"content": format!("answer from {}", model)}}]}))
}

async fn always_500() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": {"message": "internal failure"}})))
}

async fn local_ok() -> Json<Value> {
    Json(json!({"completion": "local answer"}))
}

/// OpenAI and local succeed, Mistral returns 500, Anthropic has no key.
async fn mixed_config() -> ComparatorConfig {
    let openai = serve(Router::new().route("/v1/chat/completions", post(chat_echo))).await;
    let mistral = serve(Router::new().route("/v1/chat/completions", post(always_500))).await;
    let local = serve(Router::new().route("/completions", post(local_ok))).await;

    ComparatorConfig {
        openai: HostedProviderConfig {
            api_key: Some("sk-openai".into()),
            base_url: Some(format!("{}/v1", openai)),
        },
        mistral: HostedProviderConfig {
            api_key: Some("sk-mistral".into()),
            base_url: Some(format!("{}/v1", mistral)),
        },
        anthropic: HostedProviderConfig::default(),
        local: LocalConfig { endpoint: format!("{}/completions", local) },
        ..Default::default()
    }
}

#[tokio::test]
async fn test_compare_against_live_adapters() {
    let config = mixed_config().await;
    let comparator = Comparator::new(ModelRouter::new(&config));
    let prompt = Prompt::new("  Name a prime.  ").unwrap();
    let labels = [
        "Local endpoint (example)",
        "Mistral-small-latest (Mistral)",
        "GPT-4o (OpenAI)",
        "Claude 3 Opus (Anthropic)",
        "GPT-3.5-turbo (OpenAI)",
    ];

    let entry = comparator.compare(&prompt, &labels).await.unwrap();

    assert_eq!(entry.prompt, "Name a prime.");
    assert_eq!(entry.responses.labels().collect::<Vec<_>>(), labels.to_vec());
    assert_eq!(entry.responses.get("Local endpoint (example)"), Some("local answer"));
    assert_eq!(entry.responses.get("GPT-4o (OpenAI)"), Some("answer from gpt-4o"));
    assert_eq!(entry.responses.get("GPT-3.5-turbo (OpenAI)"), Some("answer from gpt-3.5-turbo"));

    let mistral = entry.responses.get("Mistral-small-latest (Mistral)").unwrap();
    assert!(is_error_response(mistral));
    assert!(mistral.contains("HTTP 500"));

    let anthropic = entry.responses.get("Claude 3 Opus (Anthropic)").unwrap();
    assert_eq!(anthropic, "❌ Error: Configuration error: ANTHROPIC_API_KEY not set");
    assert_eq!(entry.responses.error_count(), 2);
}

#[tokio::test]
async fn test_every_model_failing_still_yields_full_entry() {
    let config = ComparatorConfig::default();
    let comparator = Comparator::new(ModelRouter::new(&config));
    let prompt = Prompt::new("hello").unwrap();
    let labels = ["GPT-4o (OpenAI)", "Mistral-large-latest (Mistral)"];

    let entry = comparator.compare(&prompt, &labels).await.unwrap();
    assert_eq!(entry.responses.len(), 2);
    assert!(entry.responses.iter().all(|(_, text)| is_error_response(text)));
}

#[tokio::test]
async fn test_unknown_label_is_input_error() {
    let config = ComparatorConfig::default();
    let comparator = Comparator::new(ModelRouter::new(&config));
    let prompt = Prompt::new("hello").unwrap();
    let err = comparator.compare(&prompt, &["GPT-9 (OpenAI)"]).await.unwrap_err();
    assert!(matches!(err, ComparatorError::UnknownModel(_)));
}

#[tokio::test]
async fn test_compare_save_and_search() {
    let config = mixed_config().await;
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"));
    let comparator = Comparator::new(ModelRouter::new(&config));

    let first = comparator
        .compare(&Prompt::new("Capital of France?").unwrap(), &["GPT-4o (OpenAI)"])
        .await
        .unwrap();
    let second = comparator
        .compare(&Prompt::new("Largest ocean?").unwrap(), &["Local endpoint (example)"])
        .await
        .unwrap();
    store.append(first.clone()).await.unwrap();
    store.append(second.clone()).await.unwrap();

    let history = store.load().await.unwrap();
    assert_eq!(history, vec![second.clone(), first.clone()]);

    let found = search(&history, "FRANCE");
    assert_eq!(found, vec![&first]);
    let found = search(&history, "local ANSWER");
    assert_eq!(found, vec![&second]);
}
