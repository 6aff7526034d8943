//! Copy, move and send commands

use super::photo_key;
use crate::PhotosError;
use crate::library::{Container, Library};
use crate::model::Resources;
use crate::output;
use crate::transfer::{copy_targets, send_targets};
use std::path::Path;

type Result<T> = std::result::Result<T, PhotosError>;

/// What to do with the selected photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Copy,
    Move,
    Send,
}

/// Execute a transfer of `file` from `source` to `target`
///
/// `target` is an album name for copy and move, a username for send. When
/// the target is not eligible the eligible ones are listed.
///
/// # Errors
/// Returns `PhotosError::TransferError` when the transfer is rejected.
pub fn execute(
    library: &mut Library,
    username: &str,
    kind: TransferKind,
    source: &Container,
    file: &Path,
    target: &str,
    resources: &dyn Resources,
    quiet: bool,
) -> Result<()> {
    let key = photo_key(file, resources);
    let result = match kind {
        TransferKind::Copy => library.copy_photo(username, source, Some(&key), target),
        TransferKind::Move => library.move_photo(username, source, Some(&key), target),
        TransferKind::Send => library.send_photo(username, source, Some(&key), target),
    };

    if let Err(error) = result {
        if !quiet && matches!(error, crate::transfer::TransferError::TargetNotFound(_)) {
            let candidates = eligible_targets(library, username, kind, source);
            if !candidates.is_empty() {
                eprintln!("Eligible: {}", candidates.join(", "));
            }
        }
        return Err(error.into());
    }

    if !quiet {
        let verb = match kind {
            TransferKind::Copy => "Copied",
            TransferKind::Move => "Moved",
            TransferKind::Send => "Sent",
        };
        println!("{}", output::success(&format!("{verb} {key} to {target}")));
    }
    Ok(())
}

/// Names of the albums or users a photo in `source` could go to
#[must_use]
pub fn eligible_targets(
    library: &Library,
    username: &str,
    kind: TransferKind,
    source: &Container,
) -> Vec<String> {
    match kind {
        TransferKind::Copy | TransferKind::Move => library
            .user(username)
            .map(|user| {
                copy_targets(user, source)
                    .iter()
                    .map(|a| a.name().to_string())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default(),
        TransferKind::Send => send_targets(library, username)
            .iter()
            .map(|u| u.username().to_string())
            .collect(),
    }
}
