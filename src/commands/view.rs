//! View command - photo details with slideshow stepping

use super::photo_key;
use crate::PhotosError;
use crate::library::{Container, Library};
use crate::model::Resources;
use crate::output;
use crate::slideshow::{PhotoDetails, Slideshow};
use std::path::Path;

type Result<T> = std::result::Result<T, PhotosError>;

/// Open a slideshow over `container`, step it, and print the current photo
///
/// # Errors
/// Returns an error if the container is unknown or empty.
pub fn execute(
    library: &Library,
    username: &str,
    container: &Container,
    start: Option<&Path>,
    next: usize,
    previous: usize,
    resources: &dyn Resources,
) -> Result<()> {
    let album = library.container(username, container)?;
    let start = start.map(|path| photo_key(path, resources));
    let mut show = Slideshow::new(album.photos().to_vec(), start.as_ref())
        .ok_or_else(|| PhotosError::InvalidInput(format!("{container} has no photos")))?;

    for _ in 0..next {
        show.next();
    }
    for _ in 0..previous {
        show.previous();
    }

    let details = PhotoDetails::of(library.photo(show.current())?);
    println!("{}", output::details_block(&details, show.position(), show.len()));
    Ok(())
}
