//! Upstream chat-completion client

use crate::config::ModelParameters;
use crate::error::{HuesmithError, HuesmithResult};
use crate::llm::messages::ChatMessage;
use crate::llm::sse::SseParser;
use crate::llm::streaming::{ChatStreamClient, TokenStream};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::instrument;

/// Client for an OpenAI-compatible chat-completion endpoint
///
/// Issues a single streaming request per call; no buffering of the response,
/// no retries. Failures carry the upstream status and raw payload.
pub struct CompletionClient {
    base_url: String,
    params: ModelParameters,
    http_client: Client,
}

impl CompletionClient {
    /// Create a new client for the given endpoint and model parameters
    pub fn new(base_url: impl Into<String>, params: ModelParameters) -> Self {
        Self {
            base_url: base_url.into(),
            params,
            http_client: Client::new(),
        }
    }

    /// The model parameters this client sends
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    fn request_body(&self, messages: &[ChatMessage]) -> Value {
        let mut body = json!({
            "model": self.params.model,
            "messages": messages,
            "stream": true,
        });

        if let Some(temperature) = self.params.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(top_p) = self.params.top_p {
            body["top_p"] = json!(top_p);
        }
        if let Some(max_tokens) = self.params.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        body
    }
}

#[async_trait]
impl ChatStreamClient for CompletionClient {
    /// Send a streaming chat-completion request
    ///
    /// Returns a stream of decoded content tokens. A non-2xx upstream status
    /// surfaces as [`HuesmithError::Upstream`] with the raw response body.
    #[instrument(skip(self, api_key, messages), fields(model = %self.params.model))]
    async fn stream_chat(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> HuesmithResult<TokenStream> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.request_body(messages))
            .send()
            .await
            .map_err(|e| HuesmithError::Http(format!("completion request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HuesmithError::upstream(status.as_u16(), body));
        }

        tracing::debug!("streaming response initiated");
        Ok(token_stream(response.bytes_stream()))
    }
}

/// Turn an SSE byte stream into a stream of content tokens
///
/// OpenAI-compatible format: `data: ` lines carrying JSON with
/// `choices[0].delta.content`, terminated by a `[DONE]` marker.
fn token_stream(
    byte_stream: impl futures::Stream<Item = Result<impl AsRef<[u8]> + Send + 'static, reqwest::Error>>
    + Send
    + 'static,
) -> TokenStream {
    let mut parser = SseParser::new();
    let mut finished = false;

    let stream = byte_stream
        .map(move |chunk_result| match chunk_result {
            Ok(chunk) => {
                let mut tokens = Vec::new();
                if finished {
                    return tokens;
                }
                for event in parser.feed(chunk.as_ref()) {
                    if event.is_done() {
                        finished = true;
                        break;
                    }
                    if let Some(content) = delta_content(&event.data) {
                        tokens.push(Ok(content));
                    }
                }
                tokens
            }
            Err(e) => vec![Err(HuesmithError::Http(format!("stream error: {e}")))],
        })
        .map(futures::stream::iter)
        .flatten();

    Box::pin(stream)
}

fn delta_content(data: &str) -> Option<String> {
    let json_data: Value = serde_json::from_str(data).ok()?;
    json_data["choices"]
        .as_array()?
        .first()?
        .get("delta")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}
