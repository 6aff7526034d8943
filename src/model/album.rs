//! Albums: named, ordered collections of photo keys

use super::index::PhotoIndex;
use super::photo::{Photo, PhotoKey};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Name of the distinguished per-user receive tray
pub const INBOX_NAME: &str = "Inbox";

/// Date format used in album summaries and photo details
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Ways an album's photos can be ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    CaptionAscending,
    CaptionDescending,
    DateAscending,
    DateDescending,
}

/// A named, ordered collection of photos
///
/// Equality compares names only. Two albums called "X" are the same album for
/// duplicate checks even when their contents differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    name: String,
    photos: Vec<PhotoKey>,
}

impl Album {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photos: Vec::new(),
        }
    }

    /// A fresh, empty inbox
    #[must_use]
    pub fn inbox() -> Self {
        Self::new(INBOX_NAME)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn photos(&self) -> &[PhotoKey] {
        &self.photos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &PhotoKey) -> bool {
        self.photos.contains(key)
    }

    /// Append a photo unless an equal one is already present
    pub fn add_photo(&mut self, key: PhotoKey) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.photos.push(key);
        true
    }

    pub fn remove_photo(&mut self, key: &PhotoKey) -> bool {
        match self.photos.iter().position(|k| k == key) {
            Some(index) => {
                self.photos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Change the album's name
    ///
    /// No collision check happens here; the owning user's workflow checks
    /// sibling names before calling this.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Oldest and newest photo dates in the album, as text
    ///
    /// Empty for an empty album, a single `MM/DD/YYYY` date for one photo, and
    /// `"MM/DD/YYYY - MM/DD/YYYY"` otherwise. Photos are scanned linearly, the
    /// album does not need to be sorted.
    #[must_use]
    pub fn date_range(&self, index: &PhotoIndex) -> String {
        let mut dates = index.resolve(&self.photos).map(Photo::date);
        let Some(first) = dates.next() else {
            return String::new();
        };

        if self.photos.len() == 1 {
            return format_date(first);
        }

        let (oldest, newest) = dates.fold((first, first), |(oldest, newest), date| {
            (oldest.min(date), newest.max(date))
        });
        format!("{} - {}", format_date(oldest), format_date(newest))
    }

    /// Reorder the album's photos in place (stable)
    pub fn sort_photos(&mut self, order: SortOrder, index: &PhotoIndex) {
        self.photos.sort_by(|a, b| match (index.get(a), index.get(b)) {
            (Some(a), Some(b)) => compare(a, b, order),
            _ => Ordering::Equal,
        });
    }
}

fn compare(a: &Photo, b: &Photo, order: SortOrder) -> Ordering {
    match order {
        SortOrder::CaptionAscending => a.caption().cmp(b.caption()),
        SortOrder::CaptionDescending => b.caption().cmp(a.caption()),
        SortOrder::DateAscending => a.date().cmp(&b.date()),
        SortOrder::DateDescending => b.date().cmp(&a.date()),
    }
}

#[must_use]
pub fn format_date(date: DateTime<Local>) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl PartialEq for Album {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Album {}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
#[path = "album_tests.rs"]
mod album_tests;
