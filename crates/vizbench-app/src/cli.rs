use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// vizbench: load visualization bundles into pane grids.
#[derive(Parser, Debug)]
#[command(name = "vizbench", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a bundle into an in-memory grid and print the load report as JSON.
    Load {
        /// Bundle file location, or the bundle text itself with --inline.
        bundle: String,

        /// Treat BUNDLE as bundle text rather than a file location.
        #[arg(long)]
        inline: bool,

        /// Variable substituted for `${KEY}` in the bundle text.
        #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
        vars: Vec<(String, String)>,

        /// Panes the grid starts with.
        #[arg(long)]
        panes: Option<usize>,

        /// Keep the grid at its starting size.
        #[arg(long)]
        fixed: bool,
    },
    /// Print the effective configuration as JSON.
    Config,
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

pub fn parse() -> Args {
    Args::parse()
}
