use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(about = "Command-line client for the contacts directory", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the contacts server (falls back to CONTACTS_SERVER,
    /// then http://localhost:8080)
    #[arg(long, global = true)]
    pub server: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new contact
    Add {
        name: String,
        last_name: String,
        email: String,
    },

    /// Delete a contact by id
    Delete { id: i64 },

    /// Replace a contact's fields by id
    Update {
        id: i64,
        name: String,
        last_name: String,
        email: String,
    },

    /// List every contact
    List,

    /// Find contacts by exact email
    #[command(name = "find-by-email", alias = "findByEmail")]
    FindByEmail { email: String },

    /// Find contacts whose last name contains the given part
    #[command(name = "find-by-last-name-part", alias = "findByLastNamePart")]
    FindByLastNamePart { part: String },
}
