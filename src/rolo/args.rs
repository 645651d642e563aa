use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "A small, file-backed phone book for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the phone book data (defaults to the user data dir)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all contacts
    #[command(alias = "ls")]
    List,

    /// Search contacts by name, phone, or group
    #[command(alias = "s")]
    Search {
        /// Search term (substring)
        term: String,

        /// Field to search
        #[arg(short, long, value_enum, default_value = "name")]
        by: SearchBy,
    },

    /// Add a new contact
    #[command(alias = "a")]
    Add {
        /// Contact name
        name: String,

        /// Phone number, exactly 10 digits
        #[arg(short, long)]
        phone: String,

        /// Email address, or NA for none
        #[arg(short, long, default_value = "NA")]
        email: String,

        /// Group label (new labels join this run's choices)
        #[arg(short, long, default_value = "Other")]
        group: String,
    },

    /// Modify the first contact whose name matches exactly
    #[command(alias = "m")]
    Modify {
        /// Name of the contact to modify (case-insensitive, whole string)
        name: String,

        /// New name
        #[arg(long)]
        new_name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New group label
        #[arg(long)]
        group: Option<String>,
    },

    /// Delete every contact matching a name exactly
    #[command(alias = "rm")]
    Delete {
        /// Name to delete (case-insensitive, whole string)
        name: String,
    },

    /// Delete all contacts
    Purge {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Sort contacts by name (uppercase sorts before lowercase)
    Sort,

    /// Show the group choices for this run
    Groups,

    /// Check the data file and drop trailing garbage
    Doctor,

    /// Print the path to the data file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SearchBy {
    Name,
    Phone,
    Group,
}
