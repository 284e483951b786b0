//! CLI argument parsing for promptkit

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "pk")]
#[command(author, version, about = "Fill prompt kit templates from comma-separated values", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill a kit's placeholders, in order, from comma-separated values
    Render {
        /// Values separated by commas, e.g. "John Doe, Downtown, Condo, $300-400k, Jane Smith"
        #[arg(required = true, allow_hyphen_values = true)]
        input: String,

        /// Kit to render (default: from config)
        #[arg(short, long)]
        kit: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a kit's raw template and its input format
    Show {
        /// Kit to show (default: from config)
        #[arg(short, long)]
        kit: Option<String>,
    },

    /// List available kits
    Kits,

    /// List gallery projects
    Projects {
        /// Only show projects in this category
        #[arg(short = 'C', long, default_value = "All")]
        category: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List gallery filter categories
    Categories,
}

/// Output format for render and projects
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => {
                debug!(%s, "OutputFormat::from_str: unknown format");
                Err(format!("Unknown format: {}. Use: text or json", s))
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
