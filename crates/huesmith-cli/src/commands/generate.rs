//! Palette generation command
//!
//! The CLI counterpart of the submission form: validates the prompt, gates
//! on the saved credential, extracts colors from any given images, then
//! calls the relay and prints the response as it streams in.

use crate::args::Cli;
use crate::console::Console;
use huesmith_core::config::CREDENTIAL_COOKIE;
use huesmith_core::error::{HuesmithError, HuesmithResult};
use huesmith_core::llm::consumer;
use huesmith_core::{Config, PaletteSession};
use std::io::Write;

pub async fn run(cli: Cli, config: Config, console: &Console) -> HuesmithResult<()> {
    let credential = config.provider.api_key_info();
    let mut session = PaletteSession::new(credential.is_valid());

    for image in &cli.images {
        session.add_upload(image.clone());
    }
    if !session.uploads().is_empty() {
        console.info(&format!("extracting colors from {} file(s)", session.uploads().len()));
        let appended = session.extract_uploads().await;
        if appended > 0 {
            console.success(&format!("picked {appended} color(s) from your images"));
            console.print_colors(session.colors());
        } else {
            console.warn("no colors could be extracted from the given images");
        }
    }

    let prompt_text = match cli.prompt {
        Some(prompt) => prompt,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Palette prompt")
            .interact_text()
            .map_err(|e| HuesmithError::Io(e.to_string()))?,
    };

    let request = session.begin_submission(&prompt_text)?;
    // begin_submission gated on the flag; the value itself goes in the cookie
    let token = credential
        .key
        .ok_or_else(|| HuesmithError::auth("no credential saved"))?;

    let url = format!("{}/api/palette", config.relay.url.trim_end_matches('/'));
    let spinner = console.start_spinner("Generating palette...");

    let sent = reqwest::Client::new()
        .post(&url)
        .header(reqwest::header::COOKIE, format!("{CREDENTIAL_COOKIE}={token}"))
        .json(&request)
        .send()
        .await;
    let response = match sent {
        Ok(response) => response,
        Err(e) => {
            spinner.finish_and_clear();
            session.finish_submission();
            return Err(HuesmithError::Http(format!("relay unreachable at {url}: {e}")));
        }
    };

    let status = response.status();
    if !status.is_success() {
        spinner.finish_and_clear();
        let body = response.text().await.unwrap_or_default();
        session.finish_submission();
        // Upstream failures are surfaced, not swallowed
        return Err(HuesmithError::upstream(status.as_u16(), body));
    }

    let mut waiting = true;
    let body = Box::pin(response.bytes_stream());
    let drained = consumer::drain_observed(
        body,
        session.transcript_mut(),
        |text| {
            if waiting {
                spinner.finish_and_clear();
                waiting = false;
            }
            print!("{text}");
            std::io::stdout().flush().ok();
        },
    )
    .await;
    spinner.finish_and_clear();
    session.finish_submission();
    drained?;

    println!();
    console.info(&format!(
        "received {} bytes of palette",
        session.transcript().as_str().len()
    ));
    Ok(())
}
