//! CLI commands for keyqueue using clap.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{load_settings, Settings};
use crate::web::run_server;

/// keyqueue - FIFO queue-per-key store over HTTP.
#[derive(Parser)]
#[command(name = "keyqueue")]
#[command(version)]
#[command(about = "FIFO queue-per-key store over HTTP", long_about = None)]
pub struct Commands {
    /// Settings file (JSON)
    #[arg(long, global = true, env = "KEYQUEUE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, global = true, env = "KEYQUEUE_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short, global = true, env = "KEYQUEUE_PORT")]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Start the queue server (default)
    Serve,

    /// Print the effective settings as JSON
    Config,
}

impl Commands {
    /// Resolve settings from file, environment and flags.
    pub fn settings(&self) -> crate::Result<Settings> {
        load_settings(self.config.as_deref())?.with_overrides(self.host.clone(), self.port)
    }

    /// Run the selected command.
    pub async fn run(self, settings: Settings) -> Result<()> {
        match self.command.unwrap_or(Command::Serve) {
            Command::Serve => cmd_serve(&settings).await,
            Command::Config => cmd_config(&settings),
        }
    }
}

async fn cmd_serve(settings: &Settings) -> Result<()> {
    run_server(&settings.server).await?;
    Ok(())
}

fn cmd_config(settings: &Settings) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_serve() {
        let args = Commands::try_parse_from(["keyqueue"]).unwrap();

        assert!(args.command.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn test_parse_flags_after_subcommand() {
        let args =
            Commands::try_parse_from(["keyqueue", "serve", "--port", "9000", "--host", "127.0.0.1"])
                .unwrap();

        assert_eq!(args.command, Some(Command::Serve));
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Commands::try_parse_from(["keyqueue", "--port", "http"]).is_err());
        assert!(Commands::try_parse_from(["keyqueue", "--port", "70000"]).is_err());
    }
}
