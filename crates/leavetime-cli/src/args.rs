use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "leavetime")]
#[command(about = "Fetch commute status and build the widget layout tree", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Status endpoint, e.g. http://192.168.1.163:5000/status
    #[arg(long, env = "LEAVETIME_ENDPOINT")]
    pub endpoint: String,

    /// Use the dark appearance palette
    #[arg(long)]
    pub dark: bool,

    /// Request timeout in milliseconds
    #[arg(long, default_value = "10000")]
    pub timeout_ms: u64,

    #[arg(long, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The host envelope: state, background, and the node stack
    Json,
    /// ANSI preview for a terminal
    Text,
}
