//! Testing utilities for photos
//!
//! Provides an in-memory [`Resources`] implementation so model and search
//! tests can build photos with fixed dates, plus fixtures for a small library.
//!
//! Only available when compiled with `cfg(test)`.

use crate::library::Library;
use crate::model::{Album, ModelError, Photo, PhotoKey, Resources, Tag, User};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resources that exist only in memory, each with a fixed modification time
#[derive(Debug, Default, Clone)]
pub struct MemoryResources {
    files: HashMap<PathBuf, DateTime<Local>>,
}

impl MemoryResources {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource modified at noon local time on the given day
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, year: i32, month: u32, day: u32) -> Self {
        self.add_file(path, year, month, day);
        self
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, year: i32, month: u32, day: u32) {
        self.files.insert(path.into(), noon(year, month, day));
    }
}

impl Resources for MemoryResources {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }

    fn last_modified(&self, path: &Path) -> Result<DateTime<Local>, ModelError> {
        self.files
            .get(path)
            .copied()
            .ok_or_else(|| ModelError::ResourceNotFound(path.display().to_string()))
    }
}

/// Noon local time on the given day
///
/// # Panics
/// Panics if the date is invalid.
#[must_use]
pub fn noon(year: i32, month: u32, day: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid local test date")
}

/// # Panics
/// Panics if the date is invalid.
#[must_use]
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Build a photo from `resources`, panicking on failure
///
/// # Panics
/// Panics if the resource is not registered.
#[must_use]
pub fn photo(
    resources: &MemoryResources,
    path: &str,
    caption: &str,
    tags: &[(&str, &str)],
) -> Photo {
    let tags = tags.iter().map(|(n, v)| Tag::new(*n, *v)).collect();
    Photo::new(path, caption, tags, resources).expect("test photo resource registered")
}

/// A library with `admin`, `bob` and `carol`
///
/// `bob` owns album `Trip` with `/a.jpg` (2024-01-10, person alice) and
/// `/b.jpg` (2024-02-01, location nyc), and album `Home` with `/c.jpg`
/// (2024-03-15, person alice, location home). `carol` has no albums.
///
/// # Panics
/// Panics only if the fixture itself is inconsistent.
#[must_use]
pub fn sample_library() -> (Library, MemoryResources) {
    let resources = MemoryResources::new()
        .with_file("/a.jpg", 2024, 1, 10)
        .with_file("/b.jpg", 2024, 2, 1)
        .with_file("/c.jpg", 2024, 3, 15)
        .with_file("/d.jpg", 2024, 4, 20);

    let mut library = Library::new();
    library.users.push(User::new("admin", "admin"));

    let mut bob = User::new("bob", "secret");
    let mut trip = Album::new("Trip");
    let mut home = Album::new("Home");

    let a = library.photos.insert(photo(&resources, "/a.jpg", "Arrival", &[("person", "alice")]));
    let b = library.photos.insert(photo(&resources, "/b.jpg", "Broadway", &[("location", "nyc")]));
    let c = library.photos.insert(photo(
        &resources,
        "/c.jpg",
        "Couch",
        &[("location", "home"), ("person", "alice")],
    ));
    trip.add_photo(a);
    trip.add_photo(b);
    home.add_photo(c);
    bob.add_album(trip);
    bob.add_album(home);
    library.users.push(bob);
    library.users.push(User::new("carol", "pw"));

    (library, resources)
}

#[must_use]
pub fn key(path: &str) -> PhotoKey {
    PhotoKey::new(path)
}
