use clap::Parser;
use memora::cli::{Cli, Commands};
use memora::types::config::Config;
use memora::MemoResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> MemoResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet); a malformed file aborts
    let config = Config::load_or_default(&cli.config)?;

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("memora={}", log_level)
            .parse()
            .unwrap_or_else(|_| "memora=info".parse().expect("fallback directive is valid")),
    );

    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            memora::cli::commands::init(path)?;
        }
        Commands::Simulate {
            calls,
            strategy,
            capacity,
            json,
        } => {
            memora::cli::commands::simulate(&calls, strategy, capacity, json, &config)?;
        }
        Commands::Config => {
            memora::cli::commands::config_cmd(&config)?;
        }
        Commands::Version => {
            memora::cli::commands::version();
        }
    }

    Ok(())
}
