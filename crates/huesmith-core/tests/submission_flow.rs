//! End-to-end submission flow against a fake upstream
//!
//! Exercises the session guardrails, prompt construction and the streaming
//! consumer together, the way the CLI drives them.

use async_trait::async_trait;
use futures::stream;
use huesmith_core::error::{HuesmithError, HuesmithResult};
use huesmith_core::llm::{consumer, prompt};
use huesmith_core::{ChatMessage, ChatStreamClient, PaletteSession, TokenStream};
use std::convert::Infallible;

/// Fake upstream that streams a fixed token sequence
struct FixedTokens(Vec<&'static str>);

#[async_trait]
impl ChatStreamClient for FixedTokens {
    async fn stream_chat(
        &self,
        _api_key: &str,
        _messages: &[ChatMessage],
    ) -> HuesmithResult<TokenStream> {
        let tokens: Vec<HuesmithResult<String>> =
            self.0.iter().map(|t| Ok(t.to_string())).collect();
        Ok(Box::pin(stream::iter(tokens)))
    }
}

#[tokio::test]
async fn test_prompt_only_submission_drains_token_by_token() {
    let mut session = PaletteSession::new(true);

    let request = session
        .begin_submission("surfing vibes tropical theme")
        .unwrap();
    let messages = prompt::build_messages(&request);
    assert!(messages[1].content.contains("surfing vibes tropical theme"));
    assert!(!messages[1].content.contains("reference for the palette"));

    let upstream = FixedTokens(vec![
        "blue",
        ": {50: ",
        "\"#eff6ff\"",
        ", 100: \"#dbeafe\"}",
    ]);
    let mut tokens = upstream.stream_chat("sk-test", &messages).await.unwrap();

    // The relay forwards tokens as body chunks; the consumer drains them
    use futures::StreamExt;
    let mut chunks: Vec<Result<Vec<u8>, Infallible>> = Vec::new();
    while let Some(token) = tokens.next().await {
        chunks.push(Ok(token.unwrap().into_bytes()));
    }
    consumer::drain_into(stream::iter(chunks), session.transcript_mut())
        .await
        .unwrap();
    session.finish_submission();

    assert_eq!(
        session.transcript().as_str(),
        "blue: {50: \"#eff6ff\", 100: \"#dbeafe\"}"
    );
}

#[tokio::test]
async fn test_short_prompt_never_reaches_the_client() {
    let mut session = PaletteSession::new(true);
    let result = session.begin_submission("x");
    assert!(matches!(result, Err(HuesmithError::Validation(_))));
    // Nothing was armed, nothing to finish
    assert!(!session.is_in_flight());
    assert!(session.transcript().is_empty());
}

#[tokio::test]
async fn test_missing_credential_refuses_before_any_stream() {
    let mut session = PaletteSession::new(false);
    let result = session.begin_submission("surfing vibes tropical theme");
    assert!(matches!(result, Err(HuesmithError::Auth(_))));
}

#[tokio::test]
async fn test_resubmission_replaces_the_previous_transcript() {
    let mut session = PaletteSession::new(true);

    session.begin_submission("surfing vibes tropical theme").unwrap();
    session.transcript_mut().append("first response");
    session.finish_submission();

    session.begin_submission("calm nordic winter palette").unwrap();
    assert!(session.transcript().is_empty());
    session.transcript_mut().append("second response");
    session.finish_submission();

    assert_eq!(session.transcript().as_str(), "second response");
}
