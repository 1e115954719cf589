use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todoz")]
#[command(about = "A filterable, persistent todo list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the todo store (defaults to the OS data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item at the top of the list
    #[command(alias = "a")]
    Add {
        /// The item text
        text: String,

        /// Free-form detail; may span multiple lines
        #[arg(short, long, default_value = "")]
        detail: String,
    },

    /// List items
    #[command(alias = "ls")]
    List {
        /// View filter: all, active, or completed (unrecognized values are ignored)
        filter: Option<String>,
    },

    /// Mark an item as completed
    #[command(alias = "d")]
    Done {
        /// Index of the item as shown by `todoz list`
        index: usize,
    },

    /// Mark an item as not completed
    Undone {
        /// Index of the item as shown by `todoz list`
        index: usize,
    },

    /// Remove an item permanently
    #[command(alias = "rm")]
    Remove {
        /// Index of the item as shown by `todoz list`
        index: usize,
    },

    /// Remove all completed items
    Clear,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
