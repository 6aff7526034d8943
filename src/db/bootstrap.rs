//! First-run seeding
//!
//! When no snapshot exists yet the library starts with the reserved admin
//! account and a demonstration user whose only album is filled from a
//! directory of stock images.

use super::{DbError, Persistence};
use crate::library::{Library, LibraryError};
use crate::model::{ADMIN_USERNAME, Resources, Tag};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

pub const STOCK_USERNAME: &str = "stock";
pub const STOCK_ALBUM: &str = "Stock Photos";

/// One of the images shipped in the stock directory
struct StockPhoto {
    file: &'static str,
    caption: &'static str,
    tags: &'static [(&'static str, &'static str)],
}

const STOCK_PHOTOS: &[StockPhoto] = &[
    StockPhoto {
        file: "beebop.gif",
        caption: "Beebop",
        tags: &[
            ("person", "ed"),
            ("animal", "dog"),
            ("location", "mars"),
            ("show", "cowboy beebop"),
        ],
    },
    StockPhoto {
        file: "celtics.png",
        caption: "The Big Three",
        tags: &[
            ("person", "kevin garnett"),
            ("person", "paul pierce"),
            ("person", "ray allen"),
            ("location", "boston"),
            ("team", "celtics"),
        ],
    },
    StockPhoto {
        file: "snowboard.jpeg",
        caption: "Snowboard",
        tags: &[
            ("person", "mark"),
            ("location", "mountain creek"),
            ("weather", "cloudy"),
            ("season", "winter"),
            ("activity", "snowboarding"),
        ],
    },
    StockPhoto {
        file: "ssj1.gif",
        caption: "Super Saiyan",
        tags: &[
            ("person", "goku"),
            ("show", "dragon ball z"),
            ("form", "ssj1"),
            ("location", "earth"),
        ],
    },
    StockPhoto {
        file: "supra.jpg",
        caption: "Toyota Supra",
        tags: &[
            ("make", "toyota"),
            ("model", "supra"),
            ("transmission", "manual"),
            ("color", "red"),
            ("object", "car"),
        ],
    },
];

/// Errors while loading or seeding a library
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error("Could not seed library: {0}")]
    Seed(#[from] LibraryError),
}

/// Inputs for seeding a fresh library
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Directory holding the stock images
    pub stock_dir: PathBuf,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            stock_dir: PathBuf::from("stock"),
        }
    }
}

/// Load the stored library, or seed a new one if nothing was saved yet
///
/// Stock images missing from `options.stock_dir` are skipped with a warning;
/// the library still starts.
///
/// # Errors
/// Returns `BootstrapError::Db` if a stored snapshot cannot be read.
pub fn load_or_bootstrap(
    store: &dyn Persistence,
    options: &BootstrapOptions,
    resources: &dyn Resources,
) -> Result<Library, BootstrapError> {
    if let Some(library) = store.load()? {
        info!(users = library.users.len(), photos = library.photos.len(), "loaded library");
        return Ok(library);
    }

    info!(stock_dir = %options.stock_dir.display(), "no saved library, seeding a new one");
    seed(options, resources)
}

fn seed(options: &BootstrapOptions, resources: &dyn Resources) -> Result<Library, BootstrapError> {
    let mut library = Library::new();
    library.create_user(ADMIN_USERNAME, ADMIN_USERNAME)?;
    library.create_user(STOCK_USERNAME, "")?;
    library.create_album(STOCK_USERNAME, STOCK_ALBUM)?;

    let mut skipped = 0;
    for stock in STOCK_PHOTOS {
        let path = options.stock_dir.join(stock.file);
        if !resources.exists(&path) {
            warn!(path = %path.display(), "stock photo missing, skipping it");
            skipped += 1;
            continue;
        }
        let tags = stock
            .tags
            .iter()
            .map(|(name, value)| Tag::new(*name, *value))
            .collect();
        let caption = Some(stock.caption);
        library.add_photo(STOCK_USERNAME, STOCK_ALBUM, &path, caption, tags, resources)?;
    }

    if skipped > 0 {
        warn!(
            skipped,
            "could not load every stock photo, make sure the stock photos folder is present"
        );
    }
    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::JsonStore;
    use crate::testing::MemoryResources;
    use tempfile::TempDir;

    fn stock_resources(dir: &str) -> MemoryResources {
        let mut resources = MemoryResources::new();
        for stock in STOCK_PHOTOS {
            resources.add_file(PathBuf::from(dir).join(stock.file), 2020, 5, 1);
        }
        resources
    }

    #[test]
    fn test_bootstrap_seeds_admin_and_stock_user() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("library.json"));
        let options = BootstrapOptions {
            stock_dir: PathBuf::from("/stock"),
        };

        let library = load_or_bootstrap(&store, &options, &stock_resources("/stock")).unwrap();

        assert!(library.login("admin", "admin").is_ok());
        let stock = library.login("stock", "").unwrap();
        let album = stock.album(STOCK_ALBUM).unwrap();
        assert_eq!(album.len(), 5);

        let captions: Vec<&str> = library
            .photos
            .resolve(album.photos())
            .map(|p| p.caption())
            .collect();
        assert_eq!(
            captions,
            vec!["Beebop", "The Big Three", "Snowboard", "Super Saiyan", "Toyota Supra"]
        );

        let celtics = library.photos.resolve(album.photos()).nth(1).unwrap();
        let names: Vec<&str> = celtics.tags().iter().map(Tag::name).collect();
        assert_eq!(names, vec!["location", "person", "person", "person", "team"]);
    }

    #[test]
    fn test_bootstrap_skips_missing_stock_files() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("library.json"));
        let resources = MemoryResources::new().with_file("/stock/supra.jpg", 2020, 5, 1);
        let options = BootstrapOptions {
            stock_dir: PathBuf::from("/stock"),
        };

        let library = load_or_bootstrap(&store, &options, &resources).unwrap();
        let album = library.user(STOCK_USERNAME).unwrap().album(STOCK_ALBUM).unwrap();
        assert_eq!(album.len(), 1);
    }

    #[test]
    fn test_existing_snapshot_is_loaded_not_seeded() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("library.json"));
        let mut saved = Library::new();
        saved.create_user("admin", "admin").unwrap();
        saved.create_user("zoe", "pw").unwrap();
        store.save(&saved).unwrap();

        let options = BootstrapOptions::default();
        let library = load_or_bootstrap(&store, &options, &MemoryResources::new()).unwrap();
        assert_eq!(library.usernames(), vec!["admin", "zoe"]);
    }
}
