use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::models::CaseStyle;

/// Detect and convert the case style of text
#[derive(Debug, Parser)]
#[command(name = "case-style", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the case style of each input
    Detect {
        /// Text to inspect; lines are read from stdin when omitted
        text: Vec<String>,
    },

    /// Convert each input to a case style
    Convert {
        /// Target style (defaults to the style in the config file)
        #[arg(short, long, value_parser = parse_style)]
        style: Option<CaseStyle>,

        /// Path to the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Text to convert; lines are read from stdin when omitted
        text: Vec<String>,
    },

    /// Invert the case of every letter
    Flip {
        /// Text to flip; lines are read from stdin when omitted
        text: Vec<String>,
    },

    /// List the available styles with an example
    Styles {
        /// Phrase rendered in each style
        #[arg(long, default_value = "the quick brown fox")]
        sample: String,
    },

    /// Write a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_style(s: &str) -> Result<CaseStyle, String> {
    match s.parse::<CaseStyle>() {
        Ok(CaseStyle::None) => Err("'none' is not a target style".to_string()),
        Ok(style) => Ok(style),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
