//! Command-line argument parsing
//!
//! Supports:
//! - Replaying a script against a page fixture
//! - Checking a page fixture's trigger bundles
//! - Writing a default widget config

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::replay::Format;

/// Click-to-edit widget driver
#[derive(Parser, Debug)]
#[command(name = "inplace", version, about = "Drive the click-to-edit widget from scripts")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a script against a page and print what happened
    Replay {
        /// Page fixture (YAML)
        #[arg(long, value_name = "FILE")]
        page: PathBuf,

        /// Script of user and server events (YAML)
        #[arg(long, value_name = "FILE")]
        script: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Widget config instead of ~/.config/inplace/config.yaml
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Validate every trigger bundle on a page
    Check {
        /// Page fixture (YAML)
        #[arg(long, value_name = "FILE")]
        page: PathBuf,
    },

    /// Write the default widget config
    InitConfig {
        /// Target file instead of ~/.config/inplace/config.yaml
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
    },
}

/// What the binary should do, with paths resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Replay {
        page: PathBuf,
        script: PathBuf,
        format: Format,
        config: Option<PathBuf>,
    },
    Check {
        page: PathBuf,
    },
    InitConfig {
        path: Option<PathBuf>,
    },
}

impl CliArgs {
    /// Convert parsed CLI args into a run mode
    pub fn into_mode(self) -> Result<RunMode, String> {
        match self.command {
            Command::Replay {
                page,
                script,
                format,
                config,
            } => {
                if page == script {
                    return Err("Page and script must be different files".to_string());
                }
                Ok(RunMode::Replay {
                    page,
                    script,
                    format,
                    config,
                })
            }
            Command::Check { page } => Ok(RunMode::Check { page }),
            Command::InitConfig { path } => Ok(RunMode::InitConfig { path }),
        }
    }
}
