mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use vizbench_config::schema::VizbenchConfig;

use cli::Command;

fn load_config(args: &cli::Args) -> VizbenchConfig {
    let loaded = match args.config {
        Some(ref path) => vizbench_config::toml_loader::load_from_path(path),
        None => vizbench_config::load_config(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("vizbench: config load failed, using defaults: {e}");
        VizbenchConfig::default()
    })
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config first: the log level may come from it.
    let config = load_config(&args);

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("vizbench={}", config.logging.level.as_directive()));
    let filter = match log_directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("vizbench v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("using config override: {}", path.display());
    }

    match args.command {
        Command::Config => {
            println!("{}", vizbench_config::config_to_json(&config));
            ExitCode::SUCCESS
        }
        Command::Load {
            bundle,
            inline,
            vars,
            panes,
            fixed,
        } => {
            let opts = commands::LoadOptions {
                bundle,
                inline,
                vars,
                panes,
                fixed,
            };
            match commands::load(&config, &opts) {
                Ok(report) => {
                    println!("{}", commands::report_to_json(&report));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    tracing::error!("{e}");
                    eprintln!("vizbench: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
