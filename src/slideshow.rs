//! Stepping through an album one photo at a time

use crate::model::{DATE_FORMAT, Photo, PhotoKey};

/// Cursor over an album's photo keys that wraps at both ends
#[derive(Debug, Clone)]
pub struct Slideshow {
    keys: Vec<PhotoKey>,
    position: usize,
}

impl Slideshow {
    /// Start at `start`, or at the first photo if `start` is not in `keys`
    ///
    /// Returns `None` for an empty album.
    #[must_use]
    pub fn new(keys: Vec<PhotoKey>, start: Option<&PhotoKey>) -> Option<Self> {
        if keys.is_empty() {
            return None;
        }
        let position = start
            .and_then(|start| keys.iter().position(|key| key == start))
            .unwrap_or(0);
        Some(Self { keys, position })
    }

    #[must_use]
    pub fn current(&self) -> &PhotoKey {
        &self.keys[self.position]
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Advance, wrapping from the last photo to the first
    pub fn next(&mut self) -> &PhotoKey {
        self.position = (self.position + 1) % self.keys.len();
        self.current()
    }

    /// Step back, wrapping from the first photo to the last
    pub fn previous(&mut self) -> &PhotoKey {
        self.position = self.position.checked_sub(1).unwrap_or(self.keys.len() - 1);
        self.current()
    }
}

/// What the slideshow shows alongside the image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDetails {
    /// Caption followed by the resource's extension
    pub title: String,
    pub caption: String,
    pub date: String,
    pub time: String,
    pub tags: String,
}

impl PhotoDetails {
    #[must_use]
    pub fn of(photo: &Photo) -> Self {
        let extension = photo
            .key()
            .as_path()
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let mut tags: Vec<_> = photo.tags().iter().collect();
        tags.sort_by(|a, b| a.name().cmp(b.name()));
        let tags = if tags.is_empty() {
            "None".to_string()
        } else {
            tags.iter().fold("| ".to_string(), |line, tag| format!("{line}{tag} | "))
        };

        Self {
            title: format!("{}{extension}", photo.caption()),
            caption: photo.caption().to_string(),
            date: photo.date().format(DATE_FORMAT).to_string(),
            time: photo.date().format("%I:%M:%S %p").to_string(),
            tags,
        }
    }
}
