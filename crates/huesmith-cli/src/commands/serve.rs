//! Relay service command

use crate::console::Console;
use huesmith_core::Config;
use huesmith_core::error::HuesmithResult;

pub async fn run(config: &Config, console: &Console) -> HuesmithResult<()> {
    console.success(&format!("relay starting on {}", config.relay.bind_addr));
    huesmith_relay::serve(config).await
}
