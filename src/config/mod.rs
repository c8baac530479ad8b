pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::validation::parse_room_number;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "hotel-desk")]
#[command(about = "Front desk tracker for a single hotel")]
pub struct CliConfig {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the data file from the configuration
    #[arg(long)]
    pub data_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the current occupancy of every room
    List,

    /// Check a guest into a room
    CheckIn {
        #[arg(short, long, value_parser = parse_room_number)]
        room: u32,

        #[arg(short, long)]
        guest: String,
    },

    /// Check a guest out and print the bill
    CheckOut {
        #[arg(short, long, value_parser = parse_room_number)]
        room: u32,
    },

    /// Add a room (no-op when the number already exists)
    AddRoom {
        #[arg(long, value_parser = parse_room_number)]
        number: u32,

        #[arg(long, default_value = "2")]
        capacity: u32,

        #[arg(long)]
        price: f64,

        #[arg(long)]
        suite: bool,

        #[arg(long, requires = "suite")]
        whirlpool: bool,
    },
}
