use clap::{Parser, Subcommand};

use crate::storage::{DEFAULT_STORAGE_KEY, DEFAULT_STORAGE_PATH};

#[derive(Parser, Debug)]
#[command(
    name = "letterbook",
    version,
    about = "Contact book grouped by the first letter of each name"
)]
pub struct Cli {
    /// Storage choice (file, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("file"))]
    pub storage_choice: String,

    /// Local storage file holding the contacts key
    #[arg(long, env = "LETTERBOOK_STORAGE_PATH", default_value_t = String::from(DEFAULT_STORAGE_PATH))]
    pub storage_path: String,

    /// Key the contact list is stored under
    #[arg(long, env = "LETTERBOOK_STORAGE_KEY", default_value_t = String::from(DEFAULT_STORAGE_KEY))]
    pub storage_key: String,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name, e.g. "Иван"
        #[arg(long)]
        name: String,

        /// Role or job title
        #[arg(long)]
        vacancy: String,

        /// Phone number in the format "+X XXX XXX XX XX"
        #[arg(long)]
        phone: String,
    },
    /// Edit an existing contact by id
    /// Omitted fields keep their current value
    Edit {
        /// Id of the contact to edit
        #[arg(long)]
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New role or job title
        #[arg(long)]
        vacancy: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete
        #[arg(long)]
        id: String,
    },
    /// Delete all contacts
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show every letter with its number of contacts
    Letters,
    /// Show the contacts filed under one letter
    Show {
        /// Letter to browse (case-insensitive)
        #[arg(short, long)]
        letter: char,
    },
    /// Search name, role and phone
    Search {
        /// Text to look for (case-insensitive)
        #[arg(default_value_t = String::new())]
        query: String,
    },
    /// List all contacts in the order they were added
    List,
}
