//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for photos using the `clap` crate.
//! Every command other than `config` runs as a logged-in user: the username comes
//! from `--user` and the password from `--password` or an interactive prompt.
//!
//! # Commands
//!
//! - **albums**: List the user's albums with photo counts and date ranges
//! - **album**: Create, rename or delete an album
//! - **photos**: List the photos of an album or the inbox
//! - **add / remove / caption / tag / untag / edit / sort**: Photo editing
//! - **search**: Search by date and tags, optionally saving results as an album
//! - **copy / move / send**: Transfer a photo between albums or to another user
//! - **view**: Show a photo's details, stepping through the album like a slideshow
//! - **admin**: Manage the user roster (admin account only)
//! - **config**: Show or change configuration settings

use crate::db::Backend;
use crate::library::Container;
use crate::model::SortOrder;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Parse a date given as `MM/DD/YYYY` or `YYYY-MM-DD`
///
/// # Errors
/// Returns a message naming the accepted formats.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|_| format!("invalid date '{raw}' (expected MM/DD/YYYY or YYYY-MM-DD)"))
}

/// Parse a `name=value` pair
///
/// # Errors
/// Returns a message if there is no `=`.
pub fn parse_tag_arg(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("invalid tag '{raw}' (expected NAME=VALUE)"))
}

/// Sort order as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortArg {
    /// Caption, A to Z
    Caption,
    /// Caption, Z to A
    CaptionDesc,
    /// Date, oldest first
    Date,
    /// Date, newest first
    DateDesc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Caption => Self::CaptionAscending,
            SortArg::CaptionDesc => Self::CaptionDescending,
            SortArg::Date => Self::DateAscending,
            SortArg::DateDesc => Self::DateDescending,
        }
    }
}

/// An album or the inbox
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ContainerArgs {
    /// Album name
    #[arg(short = 'a', long = "album", value_name = "ALBUM", conflicts_with = "inbox")]
    pub album: Option<String>,

    /// Use the inbox instead of an album
    #[arg(long = "inbox")]
    pub inbox: bool,
}

impl ContainerArgs {
    /// The selected container, `None` if neither `--album` nor `--inbox` was given
    #[must_use]
    pub fn container(&self) -> Option<Container> {
        if self.inbox {
            Some(Container::Inbox)
        } else {
            self.album.clone().map(Container::Album)
        }
    }
}

/// Album management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum AlbumCommands {
    /// Create an empty album
    Create {
        name: String,
    },

    /// Rename an album
    #[command(visible_alias = "mv")]
    Rename {
        current: String,
        new_name: String,
    },

    /// Delete an album (its photos stay in other albums)
    #[command(visible_alias = "rm")]
    Delete {
        name: String,
    },
}

/// User roster subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum AdminCommands {
    /// List all usernames
    #[command(visible_alias = "ls")]
    Users,

    /// Create a user
    CreateUser {
        username: String,
        /// Password for the new user (prompted if omitted)
        #[arg(long = "new-password")]
        new_password: Option<String>,
    },

    /// Delete a user
    DeleteUser {
        username: String,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., backend=json)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., data_dir)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the whole configuration
    Show,
}

/// Search parameters
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Search only this album (default: all of the user's albums)
    #[arg(short = 'a', long = "album", value_name = "ALBUM")]
    pub album: Option<String>,

    /// Photos taken on this day
    #[arg(
        long = "on",
        value_name = "DATE",
        value_parser = parse_date,
        conflicts_with_all = ["from", "to"]
    )]
    pub on: Option<NaiveDate>,

    /// Start of a date range (exclusive)
    #[arg(long = "from", value_name = "DATE", value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// End of a date range (exclusive)
    #[arg(long = "to", value_name = "DATE", value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Comma-separated person values
    #[arg(long = "person", value_name = "VALUES")]
    pub person: Option<String>,

    /// Comma-separated location values
    #[arg(long = "location", value_name = "VALUES")]
    pub location: Option<String>,

    /// Other tag filters as NAME=VALUES (can specify multiple)
    #[arg(short = 't', long = "tag", value_name = "NAME=VALUES", value_parser = parse_tag_arg)]
    pub tags: Vec<(String, String)>,

    /// Save the results as a new album
    #[arg(long = "save-as", value_name = "ALBUM")]
    pub save_as: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List albums with photo counts and date ranges
    #[command(visible_alias = "ls")]
    Albums,

    /// Manage albums
    Album {
        #[command(subcommand)]
        command: AlbumCommands,
    },

    /// List the photos of an album or the inbox
    Photos {
        #[command(flatten)]
        container: ContainerArgs,
    },

    /// Add an image file to an album
    Add {
        /// Album to add to
        album: String,

        /// Image file
        file: PathBuf,

        /// Caption (default: file name without extension)
        #[arg(short = 'c', long = "caption")]
        caption: Option<String>,

        /// Tags as NAME=VALUE (can specify multiple)
        #[arg(short = 't', long = "tag", value_name = "NAME=VALUE", value_parser = parse_tag_arg)]
        tags: Vec<(String, String)>,
    },

    /// Remove a photo from an album or the inbox
    #[command(visible_alias = "rm")]
    Remove {
        file: PathBuf,
        #[command(flatten)]
        container: ContainerArgs,
    },

    /// Set a photo's caption
    Caption {
        file: PathBuf,
        caption: String,
    },

    /// Add a tag to a photo
    #[command(visible_alias = "t")]
    Tag {
        file: PathBuf,
        name: String,
        value: String,
    },

    /// Remove a tag from a photo
    Untag {
        file: PathBuf,
        name: String,
        value: String,
    },

    /// Replace a photo's caption and all of its tags
    Edit {
        file: PathBuf,

        #[arg(short = 'c', long = "caption")]
        caption: String,

        /// Tag rows as NAME=VALUES, values comma-separated
        #[arg(short = 't', long = "tag", value_name = "NAME=VALUES", value_parser = parse_tag_arg)]
        rows: Vec<(String, String)>,
    },

    /// Sort the photos of an album or the inbox
    Sort {
        #[arg(value_enum)]
        order: SortArg,
        #[command(flatten)]
        container: ContainerArgs,
    },

    /// Search photos by date and tags
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Copy a photo to another album
    #[command(visible_alias = "cp")]
    Copy {
        file: PathBuf,
        /// Target album
        target: String,
        #[command(flatten)]
        source: ContainerArgs,
    },

    /// Move a photo to another album
    #[command(visible_alias = "mv")]
    Move {
        file: PathBuf,
        /// Target album
        target: String,
        #[command(flatten)]
        source: ContainerArgs,
    },

    /// Send a photo to another user's inbox
    Send {
        file: PathBuf,
        /// Recipient username
        recipient: String,
        #[command(flatten)]
        source: ContainerArgs,
    },

    /// Show photo details, stepping through the album like a slideshow
    View {
        #[command(flatten)]
        container: ContainerArgs,

        /// Photo to start at (default: first photo)
        file: Option<PathBuf>,

        /// Step forward this many photos
        #[arg(short = 'n', long = "next", default_value_t = 0, conflicts_with = "previous")]
        next: usize,

        /// Step back this many photos
        #[arg(short = 'p', long = "previous", default_value_t = 0)]
        previous: usize,
    },

    /// Manage users (admin only)
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Photo library manager
#[derive(Parser, Debug)]
#[command(name = "photos", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Username to log in as
    #[arg(short = 'u', long = "user", global = true)]
    pub user: Option<String>,

    /// Password (prompted if omitted)
    #[arg(short = 'P', long = "password", global = true)]
    pub password: Option<String>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Library directory (overrides config)
    #[arg(long = "data-dir", global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Storage backend (overrides config)
    #[arg(long = "backend", global = true, value_name = "BACKEND")]
    pub backend: Option<Backend>,

    /// Stock photos folder used when seeding a new library (overrides config)
    #[arg(long = "stock-dir", global = true, value_name = "DIR")]
    pub stock_dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(parse_date("01/10/2024").unwrap(), expected);
        assert_eq!(parse_date("2024-01-10").unwrap(), expected);
        assert!(parse_date("10.01.2024").is_err());
    }

    #[test]
    fn test_parse_tag_arg() {
        assert_eq!(
            parse_tag_arg("person=alice, bob").unwrap(),
            ("person".to_string(), "alice, bob".to_string())
        );
        assert_eq!(parse_tag_arg("mood=").unwrap(), ("mood".to_string(), String::new()));
        assert!(parse_tag_arg("person").is_err());
    }

    #[test]
    fn test_parse_add_with_tags() {
        let cli = Cli::parse_from([
            "photos",
            "-u",
            "bob",
            "add",
            "Trip",
            "a.jpg",
            "-c",
            "Arrival",
            "-t",
            "person=alice",
            "-t",
            "location=nyc",
        ]);
        assert_eq!(cli.user.as_deref(), Some("bob"));
        if let Commands::Add { album, caption, tags, .. } = cli.command {
            assert_eq!(album, "Trip");
            assert_eq!(caption.as_deref(), Some("Arrival"));
            assert_eq!(tags.len(), 2);
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from([
            "photos", "search", "--from", "01/01/2024", "--to", "2024-02-01", "--person", "alice",
            "--save-as", "Found",
        ]);
        let Commands::Search(args) = &cli.command else {
            panic!("Expected Search command");
        };
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(args.to, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(args.person.as_deref(), Some("alice"));
        assert_eq!(args.save_as.as_deref(), Some("Found"));
    }

    #[test]
    fn test_search_on_conflicts_with_range() {
        let result = Cli::try_parse_from([
            "photos",
            "search",
            "--on",
            "01/01/2024",
            "--from",
            "01/01/2024",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_container_args() {
        let cli = Cli::parse_from(["photos", "photos", "--inbox"]);
        let Commands::Photos { container } = cli.command else {
            panic!("Expected Photos command");
        };
        assert_eq!(container.container(), Some(Container::Inbox));

        let cli = Cli::parse_from(["photos", "copy", "a.jpg", "Home", "--album", "Trip"]);
        let Commands::Copy { source, target, .. } = cli.command else {
            panic!("Expected Copy command");
        };
        assert_eq!(source.container(), Some(Container::Album("Trip".into())));
        assert_eq!(target, "Home");

        assert!(Cli::try_parse_from(["photos", "photos", "--inbox", "--album", "x"]).is_err());
    }

    #[test]
    fn test_sort_arg_maps_to_order() {
        let cli = Cli::parse_from(["photos", "sort", "date-desc", "-a", "Trip"]);
        let Commands::Sort { order, .. } = cli.command else {
            panic!("Expected Sort command");
        };
        assert_eq!(SortOrder::from(order), SortOrder::DateDescending);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["photos", "albums", "-vv", "--backend", "json", "-q"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.backend, Some(Backend::Json));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Albums));
    }

    #[test]
    fn test_admin_commands() {
        let cli = Cli::parse_from([
            "photos",
            "-u",
            "admin",
            "admin",
            "create-user",
            "dave",
            "--new-password",
            "pw",
        ]);
        let Commands::Admin { command } = &cli.command else {
            panic!("Expected Admin command");
        };
        assert!(matches!(
            command,
            AdminCommands::CreateUser { username, .. } if username == "dave"
        ));
    }
}
