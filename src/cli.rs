// src/cli.rs
use crate::config::{parse_host, DEFAULT_COLLECTION, DEFAULT_DB, DEFAULT_HOST, HOST_ENV};
use clap::{ArgAction, Parser};

/// Show the type of a Wekan board and optionally change it.
///
/// Connects to the Wekan MongoDB database, prints the type of the board
/// titled TITLE and, if NEWTYPE is given, sets the type to NEWTYPE.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// MongoDB host or URI
    #[arg(
        short = 'h',
        long,
        env = HOST_ENV,
        default_value = DEFAULT_HOST,
        value_parser = parse_host
    )]
    pub host: String,

    /// Database name
    #[arg(long, default_value = DEFAULT_DB)]
    pub db: String,

    /// Collection holding the boards
    #[arg(long, default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Title of the board to look up
    #[arg(allow_hyphen_values = true)]
    pub title: String,

    /// New type to set, e.g. "board"
    #[arg(allow_hyphen_values = true)]
    pub new_type: Option<String>,
}
