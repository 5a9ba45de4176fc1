//! Host entry point: one render cycle per invocation.
//!
//! The widget host (or a curious human) runs the binary; it fetches the
//! status once, selects the display state, and writes the layout to stdout.
//! A fetch failure is not a process failure — the `ConnectionError` layout
//! is a valid render, so the exit code stays 0. Only usage errors exit 1.

mod args;
mod console;

use std::time::Duration;

use anyhow::Result;
use leavetime_client::StatusClient;
use leavetime_render::select;

pub use args::{Cli, OutputFormat};

pub async fn run(cli: Cli) -> Result<()> {
    let client = StatusClient::with_timeout(&cli.endpoint, Duration::from_millis(cli.timeout_ms));

    let result = client.fetch_status().await;
    let rendered = select(&result, cli.dark);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rendered)?),
        OutputFormat::Text => console::render(&rendered),
    }

    Ok(())
}
