//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::domain::TreeStyle;

/// Render indentation-delimited outlines as tree diagrams
#[derive(Parser, Debug)]
#[command(name = "treeify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Connector glyphs: unicode or ascii (overrides config)
    #[arg(short, long, global = true)]
    pub style: Option<TreeStyle>,

    /// Directory holding a local .treeify.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render outline as tree
    Render {
        /// Outline file (stdin when omitted or "-")
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// List parsed nodes with their generation
    Inspect {
        /// Outline file (stdin when omitted or "-")
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// List raw lines instead of nodes
        #[arg(short, long)]
        lines: bool,
    },

    /// Validate outline indentation
    Check {
        /// Outline file (stdin when omitted or "-")
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
