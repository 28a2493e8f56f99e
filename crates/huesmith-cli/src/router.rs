//! Dispatch of parsed CLI arguments to commands

use crate::args::{Cli, Commands};
use crate::commands;
use crate::console::Console;
use huesmith_core::Config;
use huesmith_core::error::HuesmithResult;

/// Route a parsed invocation to its command
pub async fn route(mut cli: Cli) -> HuesmithResult<()> {
    let console = Console::new(cli.verbose);

    let mut config = Config::load(cli.config_file.as_deref())?;
    if let Some(url) = &cli.relay_url {
        config.relay.url = url.clone();
    }
    tracing::debug!(relay = %config.relay.url, "configuration resolved");

    match cli.command.take() {
        Some(Commands::Serve { bind }) => {
            if let Some(bind) = bind {
                config.relay.bind_addr = bind;
            }
            commands::serve::run(&config, &console).await
        }
        Some(Commands::Config { action }) => commands::config_cmd::run(action, &config, &console),
        None => commands::generate::run(cli, config, &console).await,
    }
}
