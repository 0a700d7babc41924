// src/cli/args.rs
use crate::constants::ENDPOINT_ENV_VAR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// GraphQL endpoint URL (overrides config file)
    #[arg(short, long, value_name = "URL", global = true, env = ENDPOINT_ENV_VAR)]
    pub endpoint: Option<String>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Fetch and print the note list after a mutation
    #[arg(long, global = true)]
    pub refresh: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Store a new note
    Send {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Mark every note with exactly this text as "changed"
    Change {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Delete every note with exactly this text
    Delete {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Replace the text of the note with the given ID
    Update {
        #[arg(value_name = "NOTE_ID")]
        id: i64,

        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Delete the note with the given ID
    Remove {
        #[arg(value_name = "NOTE_ID")]
        id: i64,
    },

    /// List notes with ID and first line of text
    Fetch {
        /// Output notes as JSON
        #[arg(long, conflicts_with = "keys")]
        json: bool,

        /// Print the keys of the raw response payload, one per line
        #[arg(long)]
        keys: bool,
    },

    /// Write a config file with default values
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
