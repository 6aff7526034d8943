//! Album listing and management commands

use crate::PhotosError;
use crate::cli::AlbumCommands;
use crate::library::{Container, Library};
use crate::model::SortOrder;
use crate::output;

type Result<T> = std::result::Result<T, PhotosError>;

/// List the user's albums
///
/// # Errors
/// Returns a lookup error for an unknown user.
pub fn list(library: &Library, username: &str, quiet: bool) -> Result<()> {
    let summaries = library.album_summaries(username)?;
    if summaries.is_empty() {
        if !quiet {
            println!("No albums yet.");
        }
        return Ok(());
    }
    if !quiet {
        println!("Albums:");
    }
    for summary in &summaries {
        println!("{}", output::album_row(summary, quiet));
    }
    Ok(())
}

/// Execute an album subcommand
///
/// # Errors
/// Returns the library's validation error.
pub fn execute(
    library: &mut Library,
    username: &str,
    command: &AlbumCommands,
    quiet: bool,
) -> Result<()> {
    let message = match command {
        AlbumCommands::Create { name } => {
            library.create_album(username, name)?;
            format!("Created album {name}")
        }
        AlbumCommands::Rename { current, new_name } => {
            library.rename_album(username, current, new_name)?;
            format!("Renamed album {current} to {new_name}")
        }
        AlbumCommands::Delete { name } => {
            library.delete_album(username, name)?;
            format!("Deleted album {name}")
        }
    };
    if !quiet {
        println!("{}", output::success(&message));
    }
    Ok(())
}

/// List the photos of an album or the inbox, in stored order
///
/// # Errors
/// Returns a lookup error.
pub fn photos(library: &Library, username: &str, container: &Container, quiet: bool) -> Result<()> {
    let album = library.container(username, container)?;
    if album.is_empty() {
        if !quiet {
            println!("{container} is empty.");
        }
        return Ok(());
    }
    for photo in library.photos.resolve(album.photos()) {
        println!("{}", output::photo_line(photo, quiet));
    }
    Ok(())
}

/// Sort an album or the inbox
///
/// # Errors
/// Returns a lookup error.
pub fn sort(
    library: &mut Library,
    username: &str,
    container: &Container,
    order: SortOrder,
    quiet: bool,
) -> Result<()> {
    library.sort_album(username, container, order)?;
    if !quiet {
        println!("{}", output::success(&format!("Sorted {container}")));
    }
    Ok(())
}
