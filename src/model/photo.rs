//! Photos and their identity keys

use super::error::ModelError;
use super::resources::Resources;
use super::tag::Tag;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Identity of a photo: the canonical path of its image resource
///
/// Albums and inboxes store keys rather than photos, so a photo referenced
/// from several containers is one logical photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhotoKey(PathBuf);

impl PhotoKey {
    /// Wrap an already-canonical path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self(path.as_ref().to_path_buf())
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for PhotoKey {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for PhotoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A photo in the library
///
/// Equality compares the key only: caption, date and tags are ignored, so two
/// photos built from the same canonical path are interchangeable in every
/// membership test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    key: PhotoKey,
    caption: String,
    date: DateTime<Local>,
    tags: Vec<Tag>,
}

impl Photo {
    /// Create a photo for the resource at `path`
    ///
    /// The resource's last-modified time is captured once as the photo's date
    /// and never recomputed. Duplicate tags in `tags` are dropped.
    ///
    /// # Errors
    /// Returns `ModelError::ResourceNotFound` if the resource does not exist,
    /// or `ModelError::Metadata` if its modification time cannot be read.
    pub fn new(
        path: impl AsRef<Path>,
        caption: impl Into<String>,
        tags: Vec<Tag>,
        resources: &dyn Resources,
    ) -> Result<Self, ModelError> {
        let path = path.as_ref();
        if !resources.exists(path) {
            return Err(ModelError::ResourceNotFound(path.display().to_string()));
        }

        let date = resources.last_modified(path)?;
        let mut photo = Self {
            key: PhotoKey::new(resources.canonicalize(path)),
            caption: caption.into(),
            date,
            tags: Vec::with_capacity(tags.len()),
        };
        for tag in tags {
            photo.add_tag(tag);
        }
        Ok(photo)
    }

    #[must_use]
    pub const fn key(&self) -> &PhotoKey {
        &self.key
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub const fn date(&self) -> DateTime<Local> {
        self.date
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// Append a tag unless an equal one is already present
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove the first tag equal to `tag`
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace every tag, then sort by name
    ///
    /// The sort is stable and keyed on the name only, so values under one name
    /// keep the order they were given in.
    pub fn replace_tags(&mut self, tags: impl IntoIterator<Item = Tag>) {
        self.tags.clear();
        for tag in tags {
            self.add_tag(tag);
        }
        self.sort_tags();
    }

    pub fn sort_tags(&mut self) {
        self.tags.sort_by(|a, b| a.name().cmp(b.name()));
    }

    #[must_use]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Whether the photo carries at least one of `candidates`
    #[must_use]
    pub fn has_any_tag(&self, candidates: &[Tag]) -> bool {
        candidates.iter().any(|tag| self.has_tag(tag))
    }

    /// Tag values grouped per name, values joined with `", "`
    ///
    /// Names appear in first-seen order. This is the shape an edit form is
    /// pre-filled with.
    #[must_use]
    pub fn tags_by_name(&self) -> Vec<(String, String)> {
        let mut grouped: Vec<(String, String)> = Vec::new();
        for tag in &self.tags {
            match grouped.iter_mut().find(|(name, _)| name == tag.name()) {
                Some((_, values)) => {
                    values.push_str(", ");
                    values.push_str(tag.value());
                }
                None => grouped.push((tag.name().to_string(), tag.value().to_string())),
            }
        }
        grouped
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Photo {}

#[cfg(test)]
#[path = "photo_tests.rs"]
mod photo_tests;
