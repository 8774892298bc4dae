//! signin - terminal sign-in form

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use signin::auth::{AuthService, MemoryAuthService};
use signin::config::Config;
use signin::form::LoginForm;
use signin::{App, paths};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Account accepted when running with `--offline`
const OFFLINE_EMAIL: &str = "demo@example.com";
const OFFLINE_PASSWORD: &str = "password123";

/// Terminal sign-in form
#[derive(Parser)]
#[command(name = "signin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Sign-in endpoint (overrides the config file)
    #[arg(long, global = true)]
    auth_url: Option<String>,

    /// Check credentials against a built-in demo account instead of the network
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in without the TUI (the password is read from stdin)
    Login {
        /// Email address
        #[arg(long)]
        email: String,
        /// Ask the service to keep the session
        #[arg(long)]
        remember_me: bool,
    },
    /// Print the effective configuration as JSON
    Config,
}

fn main() -> Result<()> {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Log to <tmp>/signin.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender =
            tracing_appender::rolling::never(std::env::temp_dir(), paths::LOG_FILE_NAME);
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.auth_url {
        config.auth_url = url;
    }

    let service: Arc<dyn AuthService> = if cli.offline {
        info!(email = OFFLINE_EMAIL, "Using offline demo account");
        Arc::new(MemoryAuthService::new().with_account(OFFLINE_EMAIL, OFFLINE_PASSWORD))
    } else {
        info!(url = %config.auth_url, "Using HTTP sign-in service");
        Arc::new(config.auth_service())
    };

    match cli.command {
        Some(Commands::Login { email, remember_me }) => {
            cmd_login(&config, service.as_ref(), &email, remember_me)
        }
        Some(Commands::Config) => cmd_config(&config),
        None => signin::tui::run(&mut App::new(config, service)),
    }
}

fn cmd_login(
    config: &Config,
    service: &dyn AuthService,
    email: &str,
    remember_me: bool,
) -> Result<()> {
    let mut password = String::new();
    io::stdin()
        .lock()
        .read_line(&mut password)
        .context("Failed to read password from stdin")?;
    let password = password.trim_end_matches(['\r', '\n']);

    let schema = &config.validation;
    let mut form = LoginForm::new();
    form.email.set(email);
    form.password.set(password);
    form.set_remember_me(remember_me, schema);

    if let Err(err) = form.submit(schema, service) {
        bail!("Sign in failed: {err}");
    }

    println!("Signed in as {email}");
    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{json}");
    Ok(())
}
