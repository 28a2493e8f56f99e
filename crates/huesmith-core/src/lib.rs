//! Huesmith core library
//!
//! Provides the domain of the huesmith palette generator: the hex-color data
//! model, prompt construction, the streaming chat-completion client, the
//! client-side stream consumer, image color extraction, and the submission
//! session that ties them together.

pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod session;
pub mod transcript;
pub mod types;

// Re-export commonly used types
pub use config::{Config, ModelParameters, ProviderConfig};
pub use error::{HuesmithError, HuesmithResult};
pub use llm::{ChatMessage, ChatStreamClient, CompletionClient, TokenStream};
pub use session::PaletteSession;
pub use transcript::Transcript;
pub use types::{HexColor, PaletteRequest};
