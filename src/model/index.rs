//! Shared photo storage
//!
//! Every photo in the library lives exactly once in a [`PhotoIndex`], keyed by
//! its canonical path. Albums and inboxes hold [`PhotoKey`]s into the index,
//! so a caption or tag edit made through the index is seen from every
//! container that references the photo.

use super::photo::{Photo, PhotoKey};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Arena of photos keyed by canonical path
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Photo>", into = "Vec<Photo>")]
pub struct PhotoIndex {
    photos: HashMap<PhotoKey, Photo>,
}

impl PhotoIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a photo and return its key
    ///
    /// If a photo with the same key is already registered it is the same
    /// logical photo; the existing entry, with its caption and tags, is kept.
    pub fn insert(&mut self, photo: Photo) -> PhotoKey {
        let key = photo.key().clone();
        self.photos.entry(key.clone()).or_insert(photo);
        key
    }

    #[must_use]
    pub fn get(&self, key: &PhotoKey) -> Option<&Photo> {
        self.photos.get(key)
    }

    pub fn get_mut(&mut self, key: &PhotoKey) -> Option<&mut Photo> {
        self.photos.get_mut(key)
    }

    #[must_use]
    pub fn contains(&self, key: &PhotoKey) -> bool {
        self.photos.contains_key(key)
    }

    /// Resolve keys in order, skipping any that are not registered
    pub fn resolve<'a>(&'a self, keys: &'a [PhotoKey]) -> impl Iterator<Item = &'a Photo> + 'a {
        keys.iter().filter_map(|key| self.photos.get(key))
    }

    /// Drop every photo whose key is not in `referenced`, returning how many went
    pub fn retain_referenced(&mut self, referenced: &HashSet<&PhotoKey>) -> usize {
        let before = self.photos.len();
        self.photos.retain(|key, _| referenced.contains(key));
        before - self.photos.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.values()
    }
}

impl From<Vec<Photo>> for PhotoIndex {
    fn from(photos: Vec<Photo>) -> Self {
        let mut index = Self::new();
        for photo in photos {
            index.insert(photo);
        }
        index
    }
}

impl From<PhotoIndex> for Vec<Photo> {
    fn from(index: PhotoIndex) -> Self {
        let mut photos: Vec<Photo> = index.photos.into_values().collect();
        photos.sort_by(|a, b| a.key().cmp(b.key()));
        photos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryResources, key, photo};

    fn resources() -> MemoryResources {
        MemoryResources::new()
            .with_file("/a.jpg", 2024, 1, 10)
            .with_file("/b.jpg", 2024, 1, 11)
    }

    #[test]
    fn test_insert_keeps_existing_entry() {
        let resources = resources();
        let mut index = PhotoIndex::new();

        index.insert(photo(&resources, "/a.jpg", "first", &[]));
        let key = index.insert(photo(&resources, "/a.jpg", "second", &[]));

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&key).unwrap().caption(), "first");
    }

    #[test]
    fn test_edit_through_index_is_shared() {
        let resources = resources();
        let mut index = PhotoIndex::new();
        let key = index.insert(photo(&resources, "/a.jpg", "first", &[]));

        index.get_mut(&key).unwrap().set_caption("edited");
        assert_eq!(index.get(&key).unwrap().caption(), "edited");
    }

    #[test]
    fn test_resolve_skips_unknown_keys() {
        let resources = resources();
        let mut index = PhotoIndex::new();
        index.insert(photo(&resources, "/a.jpg", "a", &[]));

        let keys = vec![key("/missing.jpg"), key("/a.jpg")];
        let captions: Vec<&str> = index.resolve(&keys).map(Photo::caption).collect();
        assert_eq!(captions, vec!["a"]);
    }

    #[test]
    fn test_retain_referenced() {
        let resources = resources();
        let mut index = PhotoIndex::new();
        let a = index.insert(photo(&resources, "/a.jpg", "a", &[]));
        index.insert(photo(&resources, "/b.jpg", "b", &[]));

        let referenced: HashSet<&PhotoKey> = [&a].into_iter().collect();
        assert_eq!(index.retain_referenced(&referenced), 1);
        assert!(index.contains(&key("/a.jpg")));
        assert!(!index.contains(&key("/b.jpg")));
    }
}
