use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "inkpost", version, about = "Share and discover creative writing on this device")]
pub struct Cli {
    /// Data directory holding the writings store (defaults to the
    /// platform data dir).
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish a new piece
    Publish {
        #[arg(long)]
        title: String,

        /// Category: poem, story, essay or other
        #[arg(long, default_value = "other")]
        kind: String,

        /// Inline content
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,

        /// Read the content from a file
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// List published writings, newest first
    List {
        /// Only show this category
        #[arg(long)]
        kind: Option<String>,

        /// Case-insensitive match against title or content
        #[arg(long, value_name = "QUERY")]
        search: Option<String>,
    },

    /// Show one writing in full, with its comments
    Show { id: String },

    /// Rate a writing from 1 to 5 stars
    Rate { id: String, stars: u8 },

    /// Comment on a writing
    Comment { id: String, text: String },

    /// List writings published from this device
    Mine,

    /// Print this device's identity
    Whoami,
}
