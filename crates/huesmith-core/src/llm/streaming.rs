//! Streaming response support

use crate::error::HuesmithResult;
use crate::llm::messages::ChatMessage;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

/// Stream of decoded text tokens from a completion request
///
/// Tokens arrive in generation order; the stream ends when the upstream
/// signals completion. Dropping the stream releases the underlying reader.
pub type TokenStream = Pin<Box<dyn Stream<Item = HuesmithResult<String>> + Send>>;

/// Trait for clients that stream chat completions
///
/// The credential travels per request: the relay extracts it from the
/// incoming cookie and passes it through without storing it.
#[async_trait]
pub trait ChatStreamClient: Send + Sync {
    /// Issue a streaming chat-completion request and return the token stream
    async fn stream_chat(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> HuesmithResult<TokenStream>;
}
