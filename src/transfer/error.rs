//! Transfer-specific error types
//!
//! All of these are validation outcomes checked before anything is mutated:
//! a failed copy, move or send leaves both containers as they were.

use crate::library::LibraryError;
use thiserror::Error;

/// Errors from copy, move and send
#[derive(Debug, Error)]
pub enum TransferError {
    /// No photo was selected
    #[error("No photo selected")]
    NoSelection,

    /// The candidate target list is empty
    #[error("There is nowhere to put the photo")]
    NoEligibleTargets,

    /// The chosen target is not one of the candidates
    #[error("'{0}' is not an eligible destination")]
    TargetNotFound(String),

    /// The selected photo is not in the source container
    #[error("Photo '{photo}' is not in '{source_name}'")]
    NotInSource { photo: String, source_name: String },

    /// The target already holds the photo
    #[error("'{target}' already contains photo '{photo}'")]
    DuplicatePhoto { photo: String, target: String },

    #[error(transparent)]
    Library(#[from] LibraryError),
}
