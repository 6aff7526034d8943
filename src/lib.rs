//! Photos - a multi-user photo library
//!
//! Users own named albums plus an inbox that other users send photos to.
//! A photo is identified by the canonical path of its image file and is
//! shared, not copied, between every album that holds it. Photos carry a
//! caption, the file's modification date and a set of name/value tags, and
//! can be searched by date and tag.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod library;
pub mod model;
pub mod output;
pub mod search;
pub mod slideshow;
pub mod transfer;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PhotosError {
    /// Storage error
    #[error("Database error: {0}")]
    DbError(#[from] db::DbError),
    /// Loading or seeding the library failed
    #[error(transparent)]
    BootstrapError(#[from] db::BootstrapError),
    /// A library workflow was rejected
    #[error("{0}")]
    LibraryError(#[from] library::LibraryError),
    /// Photo or resource error
    #[error("{0}")]
    ModelError(#[from] model::ModelError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Copy, move or send was rejected
    #[error("Transfer error: {0}")]
    TransferError(#[from] transfer::TransferError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
