use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "stockboard")]
#[command(about = "Render inventory records as chat-sized text tables")]
#[command(version)]
pub struct CliArgs {
    /// Inventory file with stock types, mates and records (.toml or .json)
    #[arg(long, short = 'd', value_name = "PATH")]
    pub data: PathBuf,

    /// Resource table TOML layered over the built-in strings
    /// Default: ~/.config/stockboard/strings.toml if it exists
    #[arg(long, value_name = "PATH")]
    pub strings: Option<PathBuf>,

    /// Response locale (e.g. "en", "de-DE")
    /// Default: $STOCKBOARD_LOCALE, then "en"
    #[arg(long, short = 'l', value_name = "TAG")]
    pub locale: Option<String>,

    /// Reference time for record ages, RFC 3339 (default: now)
    #[arg(long, value_name = "TIMESTAMP")]
    pub now: Option<String>,

    /// Maximum report size in characters
    #[arg(long, default_value = "2000")]
    pub max_len: usize,

    #[command(subcommand)]
    pub command: ReportCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ReportCommand {
    /// One table per stock type with every owner's amount and a total
    ByType {
        /// Stock types to show, by key or display name (default: all)
        names: Vec<String>,
    },
    /// List the known stock types
    Types,
    /// One table per owner with every stock type they hold
    ByOwner {
        /// Owners to show (default: all)
        names: Vec<String>,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.max_len == 0 {
            return Err("--max-len must be greater than zero".to_string());
        }
        if let Some(locale) = &self.locale
            && locale.trim().is_empty()
        {
            return Err("--locale must not be empty".to_string());
        }
        Ok(())
    }
}
