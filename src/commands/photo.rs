//! Photo editing commands

use super::photo_key;
use crate::PhotosError;
use crate::library::{Container, Library};
use crate::model::{Resources, Tag};
use crate::output;
use std::path::Path;

type Result<T> = std::result::Result<T, PhotosError>;

/// Execute the add command - add an image file to an album
///
/// # Errors
/// Returns an error if the file is missing, the caption is empty or the
/// album already holds the photo.
pub fn add(
    library: &mut Library,
    username: &str,
    album: &str,
    file: &Path,
    caption: Option<&str>,
    tags: &[(String, String)],
    resources: &dyn Resources,
    quiet: bool,
) -> Result<()> {
    let tags = tags
        .iter()
        .map(|(name, value)| {
            if name.trim().is_empty() || value.trim().is_empty() {
                Err(PhotosError::InvalidInput(format!("incomplete tag '{name}={value}'")))
            } else {
                Ok(Tag::normalized(name, value))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let path = resources.canonicalize(file);
    let key = library.add_photo(username, album, &path, caption, tags, resources)?;
    if !quiet {
        let caption = library.photo(&key)?.caption();
        println!("{}", output::success(&format!("Added {caption} to {album}")));
    }
    Ok(())
}

/// Execute the remove command
///
/// # Errors
/// Returns an error if the container does not hold the photo.
pub fn remove(
    library: &mut Library,
    username: &str,
    container: &Container,
    file: &Path,
    resources: &dyn Resources,
    quiet: bool,
) -> Result<()> {
    let key = photo_key(file, resources);
    library.remove_photo(username, container, &key)?;
    if !quiet {
        println!("{}", output::success(&format!("Removed {key} from {container}")));
    }
    Ok(())
}

/// Execute the caption command
///
/// # Errors
/// Returns an error if the caption is empty or the photo is unknown.
pub fn caption(
    library: &mut Library,
    file: &Path,
    caption: &str,
    resources: &dyn Resources,
    quiet: bool,
) -> Result<()> {
    if caption.is_empty() {
        return Err(crate::library::LibraryError::EmptyCaption.into());
    }
    let key = photo_key(file, resources);
    library.set_caption(&key, caption)?;
    if !quiet {
        println!("{}", output::success(&format!("Captioned {key}: {caption}")));
    }
    Ok(())
}

/// Execute the tag command - add one tag to a photo
///
/// # Errors
/// Returns an error if the tag is incomplete or the photo is unknown.
pub fn tag(
    library: &mut Library,
    file: &Path,
    name: &str,
    value: &str,
    resources: &dyn Resources,
    quiet: bool,
) -> Result<()> {
    let key = photo_key(file, resources);
    let added = library.add_tag(&key, name, value)?;
    if !quiet {
        let tag = Tag::normalized(name, value);
        if added {
            println!("{}", output::success(&format!("Tagged {key} with {tag}")));
        } else {
            println!("{}", output::notice(&format!("{key} already has {tag}")));
        }
    }
    Ok(())
}

/// Execute the untag command - remove one tag from a photo
///
/// # Errors
/// Returns an error if the photo is unknown.
pub fn untag(
    library: &mut Library,
    file: &Path,
    name: &str,
    value: &str,
    resources: &dyn Resources,
    quiet: bool,
) -> Result<()> {
    let key = photo_key(file, resources);
    let tag = Tag::normalized(name, value);
    let removed = library.remove_tag(&key, &tag)?;
    if !quiet {
        if removed {
            println!("{}", output::success(&format!("Removed {tag} from {key}")));
        } else {
            println!("{}", output::notice(&format!("{key} does not have {tag}")));
        }
    }
    Ok(())
}

/// Execute the edit command - new caption and a full tag replacement
///
/// # Errors
/// Returns an error if a row is incomplete or the photo is unknown.
pub fn edit(
    library: &mut Library,
    file: &Path,
    caption: &str,
    rows: &[(String, String)],
    resources: &dyn Resources,
    quiet: bool,
) -> Result<()> {
    if caption.is_empty() {
        return Err(crate::library::LibraryError::EmptyCaption.into());
    }
    let key = photo_key(file, resources);
    library.edit_photo(&key, caption, rows)?;
    if !quiet {
        println!("{}", output::photo_line(library.photo(&key)?, false));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::LibraryError;
    use crate::testing::{key, sample_library};

    #[test]
    fn test_add_with_tags() {
        let (mut library, resources) = sample_library();
        let tags = vec![("Person".to_string(), " Dana ".to_string())];
        let file = Path::new("/d.jpg");
        add(&mut library, "bob", "Home", file, Some("Desk"), &tags, &resources, true).unwrap();

        let photo = library.photo(&key("/d.jpg")).unwrap();
        assert_eq!(photo.caption(), "Desk");
        assert_eq!(photo.tags(), &[Tag::new("person", "dana")]);
    }

    #[test]
    fn test_add_with_incomplete_tag() {
        let (mut library, resources) = sample_library();
        let tags = vec![("person".to_string(), String::new())];
        let file = Path::new("/d.jpg");
        let result = add(&mut library, "bob", "Home", file, None, &tags, &resources, true);
        assert!(matches!(result, Err(PhotosError::InvalidInput(_))));
        assert!(!library.photos.contains(&key("/d.jpg")));
    }

    #[test]
    fn test_caption_rejects_empty() {
        let (mut library, resources) = sample_library();
        let result = caption(&mut library, Path::new("/a.jpg"), "", &resources, true);
        assert!(matches!(result, Err(PhotosError::LibraryError(LibraryError::EmptyCaption))));
    }

    #[test]
    fn test_tag_and_untag() {
        let (mut library, resources) = sample_library();
        tag(&mut library, Path::new("/a.jpg"), "Mood", "Happy", &resources, true).unwrap();
        assert!(library.photo(&key("/a.jpg")).unwrap().has_tag(&Tag::new("mood", "happy")));

        untag(&mut library, Path::new("/a.jpg"), "mood", "happy", &resources, true).unwrap();
        assert!(!library.photo(&key("/a.jpg")).unwrap().has_tag(&Tag::new("mood", "happy")));
    }

    #[test]
    fn test_remove_and_edit() {
        let (mut library, resources) = sample_library();
        let rows = vec![("weather".to_string(), "sunny".to_string())];
        edit(&mut library, Path::new("/b.jpg"), "Times Square", &rows, &resources, true).unwrap();
        assert_eq!(library.photo(&key("/b.jpg")).unwrap().caption(), "Times Square");

        remove(
            &mut library,
            "bob",
            &Container::Album("Trip".into()),
            Path::new("/b.jpg"),
            &resources,
            true,
        )
        .unwrap();
        let trip = library.container("bob", &Container::Album("Trip".into())).unwrap();
        assert!(!trip.contains(&key("/b.jpg")));
    }
}
