//! Main entry point for the charging console
//!
//! Loads configuration, sets up logging, wires the REST client and the
//! view-models together, and runs either the interactive shell or a single
//! command.

use anyhow::Result;
use charging_console::api::HttpChargingApi;
use charging_console::config::{validate_config, AppConfig};
use charging_console::console::{Command, Flow, PromptConfirmer, PromptInput, Shell};
use charging_console::controller::UsersListController;
use charging_console::notify::FlashService;
use charging_console::routing::Route;
use charging_console::view::{Confirmation, Confirmer, FixedConfirmer};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Charging Console - manage prepaid subscriber balances
#[derive(Parser)]
#[command(
    name = "charging-console",
    version,
    about = "Administrative console for a prepaid charging server",
    long_about = "Lists subscribers of a charging server, edits their balances, creates and \
                 deletes users, and folds reserved units back into balances through the \
                 charging management REST API."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Charging server URL override
    #[arg(long, value_name = "URL", help = "Override the charging server URL")]
    server_url: Option<String>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Answer every confirmation dialog with yes
    #[arg(short, long, help = "Confirm deletes and sanitizes without asking")]
    yes: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit")]
    dry_run: bool,

    /// Run one console command and exit, e.g. `sanitize 00351910000001`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    command: Vec<String>,
}

/// Initialize structured logging on stderr with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file/environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(server_url) = &args.server_url {
        config.backend.server_url = server_url.clone();
    }

    validate_config(&config)?;
    Ok(config)
}

fn display_startup_banner(config: &AppConfig) {
    info!("Charging Console v{}", charging_console::VERSION);
    info!("   Service: {}", config.service.name);
    info!("   Backend: {}", config.backend.base_url());
    info!(
        "   Page size: {}, page buttons: {}",
        config.ui.entry_limit, config.ui.max_size
    );
    info!("   Banner lifetime: {}ms", config.ui.flash_duration_ms);
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    if args.dry_run {
        info!("Configuration validation successful");
        println!("Configuration OK, backend {}", config.backend.base_url());
        return Ok(());
    }

    let input = Arc::new(PromptInput::stdin());
    let confirmer: Arc<dyn Confirmer> = if args.yes {
        Arc::new(FixedConfirmer(Confirmation::Confirmed))
    } else {
        Arc::new(PromptConfirmer::new(input.clone()))
    };

    let api = Arc::new(HttpChargingApi::from_settings(&config.backend));
    let flash = Arc::new(FlashService::new(config.flash_duration()));
    let list = UsersListController::new(api, flash, confirmer).with_ui_settings(&config.ui);
    let mut shell = Shell::new(list);

    if args.command.is_empty() {
        if let Err(e) = shell.run(&input).await {
            error!("Console failed: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    let line = args.command.join(" ");
    let command = match Command::parse(&line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    // Per-row actions need the list loaded first
    shell.navigate(&Route::Users.path()).await;
    if let Flow::Continue(output) = shell.execute(command).await {
        println!("{}", output);
    }

    Ok(())
}
