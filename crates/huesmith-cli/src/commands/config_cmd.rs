//! Configuration subcommands

use crate::args::ConfigAction;
use crate::console::Console;
use huesmith_core::Config;
use huesmith_core::config::{DEFAULT_CONFIG_FILE, format_api_key_status};
use huesmith_core::error::{HuesmithError, HuesmithResult};
use std::path::PathBuf;

pub fn run(action: ConfigAction, config: &Config, console: &Console) -> HuesmithResult<()> {
    match action {
        ConfigAction::Init { path } => init(path, console),
        ConfigAction::Show => show(config, console),
    }
}

fn init(path: Option<PathBuf>, console: &Console) -> HuesmithResult<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    if path.exists() {
        return Err(HuesmithError::config(format!(
            "refusing to overwrite {}",
            path.display()
        )));
    }
    Config::default().save_to_file(&path)?;
    console.success(&format!("wrote {}", path.display()));
    Ok(())
}

fn show(config: &Config, console: &Console) -> HuesmithResult<()> {
    println!("provider : {}", config.provider.base_url);
    println!("model    : {}", config.model.model);
    println!("relay    : {}", config.relay.url);
    println!("{}", format_api_key_status(&config.provider.api_key_info()));
    console.info("environment variables override the config file credential");
    Ok(())
}
