use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use qrdesk::config::{self, ClientConfig};
use qrdesk::remote::QrClient;

use crate::Commands;

#[derive(Parser)]
#[command(name = "qrdesk", version)]
#[command(about = "Client for the QR code generation service", long_about = None)]
pub(crate) struct Cli {
    /// Service base URL; overrides the config file
    #[arg(long, env = "QRDESK_URL", value_name = "URL")]
    url: Option<String>,

    /// Write JSON logs to this file while the TUI runs
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// What a subcommand needs to reach the service.
pub(crate) struct CliContext {
    url_override: Option<String>,
    pub(crate) config_path: PathBuf,
}

impl CliContext {
    pub(crate) fn config(&self) -> Result<ClientConfig> {
        config::resolve(self.url_override.as_deref(), &self.config_path)
    }

    pub(crate) fn client(&self) -> Result<QrClient> {
        let cfg = self.config()?;
        QrClient::new(&cfg.base_url)
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = config::config_path()?;

    match cli.command {
        None => {
            qrdesk::logging::init_tui(cli.log_file.as_deref())?;
            let cfg = config::resolve(cli.url.as_deref(), &config_path)?;
            qrdesk::tui::run_with_options(qrdesk::tui::TuiRunOptions {
                base_url: cfg.base_url,
            })?;
        }
        Some(command) => {
            if cli.log_file.is_some() {
                anyhow::bail!("`--log-file` is only supported when running the TUI (no subcommand)");
            }
            qrdesk::logging::init_cli();
            let ctx = CliContext {
                url_override: cli.url,
                config_path,
            };
            crate::cli_exec::handle_command(&ctx, command)?
        }
    }

    Ok(())
}
