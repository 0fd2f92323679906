use clap::{Parser, Subcommand};

use crate::domain::contact::PhoneType;

#[derive(Parser, Debug)]
#[command(name = "address-book", version, about = "Typed in-memory address book")]
pub struct Cli {
    /// Simulated fetch delay in milliseconds
    #[arg(long, env = "FETCH_DELAY_MS", default_value_t = 0)]
    pub fetch_delay_ms: u64,

    /// Print query results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the loaded contacts
    List {
        /// Show names only
        #[arg(long)]
        names: bool,

        /// Show addresses only
        #[arg(long)]
        addresses: bool,
    },
    /// Find contacts by exact name, exact address, or a phone number
    /// filed under a specific phone type
    Find {
        /// Contact name (exact, case-sensitive)
        #[arg(long)]
        name: Option<String>,

        /// Contact address (exact)
        #[arg(long)]
        address: Option<String>,

        /// Phone number to match
        #[arg(long, requires = "phone_type")]
        phone: Option<u64>,

        /// Phone type the number must be filed under (home, office, studio)
        #[arg(long, value_enum, requires = "phone")]
        phone_type: Option<PhoneType>,
    },
    /// Add a contact, then list the resulting book
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact address
        #[arg(long)]
        address: String,

        /// Home phone number
        #[arg(long)]
        home: Option<u64>,

        /// Office phone number
        #[arg(long)]
        office: Option<u64>,

        /// Studio phone number
        #[arg(long)]
        studio: Option<u64>,
    },
}
