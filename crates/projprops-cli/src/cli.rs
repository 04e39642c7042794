//! CLI argument definitions for projprops.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "projprops",
    version,
    about = "Read and edit a project's default.properties"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Project directory (defaults to the nearest directory containing default.properties)
    #[arg(short = 'C', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create default.properties in the project directory
    Init {
        /// Build target, e.g. android-10
        #[arg(short, long)]
        target: Option<String>,
        /// Location of the SDK
        #[arg(long)]
        sdk: Option<String>,
        /// Overwrite an existing default.properties
        #[arg(long)]
        force: bool,
    },

    /// Print the value of a property
    Get {
        /// Property name
        key: String,
    },

    /// Set a property and save the file
    Set {
        /// Property name
        key: String,
        /// Property value
        value: String,
    },

    /// Remove a property and save the file
    Unset {
        /// Property name
        key: String,
    },

    /// List all properties
    List {
        /// Show values that are masked by the global config
        #[arg(long)]
        reveal: bool,
    },

    /// Print the file exactly as it would be saved
    Show,
}

pub fn parse() -> Cli {
    Cli::parse()
}
