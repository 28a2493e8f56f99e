//! Relay HTTP contract tests
//!
//! Boots the relay on an ephemeral port around a scripted upstream and
//! drives it with a real HTTP client, asserting the 400/500/streaming
//! semantics of the palette endpoint.

use async_trait::async_trait;
use futures::stream;
use huesmith_core::error::{HuesmithError, HuesmithResult};
use huesmith_core::llm::{ChatMessage, ChatStreamClient, TokenStream};
use huesmith_relay::{RelayState, router};
use std::sync::{Arc, Mutex};

/// Scripted upstream: records the messages it was sent and replays a fixed
/// outcome
struct ScriptedUpstream {
    outcome: Outcome,
    seen_messages: Mutex<Option<Vec<ChatMessage>>>,
    seen_key: Mutex<Option<String>>,
}

enum Outcome {
    Tokens(Vec<&'static str>),
    Failure(HuesmithError),
}

impl ScriptedUpstream {
    fn streaming(tokens: Vec<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Outcome::Tokens(tokens),
            seen_messages: Mutex::new(None),
            seen_key: Mutex::new(None),
        })
    }

    fn failing(error: HuesmithError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Outcome::Failure(error),
            seen_messages: Mutex::new(None),
            seen_key: Mutex::new(None),
        })
    }
}

#[async_trait]
impl ChatStreamClient for ScriptedUpstream {
    async fn stream_chat(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> HuesmithResult<TokenStream> {
        *self.seen_messages.lock().unwrap() = Some(messages.to_vec());
        *self.seen_key.lock().unwrap() = Some(api_key.to_string());
        match &self.outcome {
            Outcome::Tokens(tokens) => {
                let items: Vec<HuesmithResult<String>> =
                    tokens.iter().map(|t| Ok(t.to_string())).collect();
                Ok(Box::pin(stream::iter(items)))
            }
            Outcome::Failure(error) => Err(error.clone()),
        }
    }
}

async fn spawn_relay(upstream: Arc<ScriptedUpstream>) -> String {
    let app = router(RelayState::new(upstream));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_missing_cookie_is_rejected_with_400() {
    let upstream = ScriptedUpstream::streaming(vec!["never"]);
    let base = spawn_relay(upstream.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/palette"))
        .json(&serde_json::json!({ "prompt": "surfing vibes tropical theme" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "No token was provided");
    // The upstream was never contacted
    assert!(upstream.seen_messages.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_stream_passes_through_and_forwards_the_cookie_token() {
    let upstream = ScriptedUpstream::streaming(vec!["blue", ": {50: ", "\"#eff6ff\"}"]);
    let base = spawn_relay(upstream.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/palette"))
        .header("Cookie", "palette_token=sk-live-token")
        .json(&serde_json::json!({ "prompt": "surfing vibes tropical theme" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "blue: {50: \"#eff6ff\"}");
    assert_eq!(
        upstream.seen_key.lock().unwrap().as_deref(),
        Some("sk-live-token")
    );

    let messages = upstream.seen_messages.lock().unwrap().clone().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[1].content.contains("surfing vibes tropical theme"));
    assert!(!messages[1].content.contains("reference for the palette"));
}

#[tokio::test]
async fn test_reference_colors_reach_the_upstream_as_bullets() {
    let upstream = ScriptedUpstream::streaming(vec!["ok"]);
    let base = spawn_relay(upstream.clone()).await;

    reqwest::Client::new()
        .post(format!("{base}/api/palette"))
        .header("Cookie", "palette_token=sk-live-token")
        .json(&serde_json::json!({
            "prompt": "surfing vibes tropical theme",
            "colors": ["#eff6ff", "#1d4ed8"],
        }))
        .send()
        .await
        .unwrap();

    let messages = upstream.seen_messages.lock().unwrap().clone().unwrap();
    let user = &messages[1].content;
    assert!(user.contains("- #eff6ff"));
    assert!(user.contains("- #1d4ed8"));
}

#[tokio::test]
async fn test_upstream_failure_becomes_500_with_raw_payload() {
    let upstream = ScriptedUpstream::failing(HuesmithError::upstream(
        401,
        "Incorrect API key provided",
    ));
    let base = spawn_relay(upstream).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/palette"))
        .header("Cookie", "palette_token=sk-bad-token")
        .json(&serde_json::json!({ "prompt": "surfing vibes tropical theme" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "Incorrect API key provided");
}

#[tokio::test]
async fn test_healthz_answers() {
    let base = spawn_relay(ScriptedUpstream::streaming(vec![])).await;

    let response = reqwest::Client::new()
        .get(format!("{base}/healthz"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}
