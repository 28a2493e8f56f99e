//! Upstream client, prompt construction and stream handling

pub mod client;
pub mod consumer;
pub mod messages;
pub mod prompt;
pub mod sse;
pub mod streaming;
pub mod utf8;

pub use client::CompletionClient;
pub use messages::{ChatMessage, MessageRole};
pub use streaming::{ChatStreamClient, TokenStream};
