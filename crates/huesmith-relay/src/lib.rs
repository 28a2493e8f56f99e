//! HTTP relay for the palette generator
//!
//! A thin boundary between the UI and the completion provider: it checks the
//! credential cookie, builds the chat request and streams the provider's
//! tokens back unmodified. It holds no state across requests and never
//! retries.

mod routes;

pub use routes::router;

use huesmith_core::error::HuesmithResult;
use huesmith_core::llm::ChatStreamClient;
use huesmith_core::{CompletionClient, Config};
use std::sync::Arc;
use tracing::info;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct RelayState {
    pub(crate) client: Arc<dyn ChatStreamClient>,
}

impl RelayState {
    /// Create state around any streaming client (tests inject fakes here)
    pub fn new(client: Arc<dyn ChatStreamClient>) -> Self {
        Self { client }
    }

    /// Create state from configuration, with the real upstream client
    pub fn from_config(config: &Config) -> Self {
        let client = CompletionClient::new(config.provider.base_url.clone(), config.model.clone());
        Self::new(Arc::new(client))
    }
}

/// Run the relay until the process is stopped
pub async fn serve(config: &Config) -> HuesmithResult<()> {
    let state = RelayState::from_config(config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.relay.bind_addr).await?;
    info!(addr = %config.relay.bind_addr, "relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}
