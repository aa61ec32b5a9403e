use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactz", bin_name = "contactz", version)]
#[command(
    about = "Keep contacts in a flat binary file",
    long_about = "Keep contacts in a flat binary file.\n\nRun without a command to start the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (default: $CONTACTZ_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Verbose logging on stderr (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (the default)
    #[command(alias = "m", display_order = 1)]
    Menu,

    /// Add a contact
    #[command(alias = "n", display_order = 2)]
    Add {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        address: String,
    },

    /// List all contacts
    #[command(alias = "ls", display_order = 3)]
    List,

    /// Search contacts by name or phone (case-insensitive)
    #[command(alias = "s", display_order = 4)]
    Search {
        /// Text to look for; words are joined with spaces
        #[arg(num_args = 0.., trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Show one contact
    #[command(alias = "v", display_order = 5)]
    View { id: u32 },

    /// Change fields of a contact; omitted fields keep their value
    #[command(alias = "e", display_order = 6)]
    Edit {
        id: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a contact
    #[command(alias = "rm", display_order = 7)]
    Delete { id: u32 },

    /// Print the id the next added contact will get
    #[command(display_order = 8)]
    NextId,

    /// Check the store file for inconsistencies
    #[command(display_order = 9)]
    Doctor {
        /// Truncate a partial record at the end of the store
        #[arg(long)]
        fix: bool,
    },

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (data-file, strict-records)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
