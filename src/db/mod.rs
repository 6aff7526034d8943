//! Library persistence
//!
//! A library is stored as one snapshot: the whole user roster plus the photo
//! index, written in a single step and read back in a single step. Albums
//! store photo keys, so a photo shared by several albums is written once and
//! comes back shared.
//!
//! Two backends implement [`Persistence`]:
//! - [`SledStore`]: embedded sled database, snapshot encoded with bincode
//! - [`JsonStore`]: pretty-printed JSON file, replaced atomically

use crate::library::Library;
use serde::{Deserialize, Serialize};
use sled::{Db, Tree};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod bootstrap;
pub mod error;

pub use bootstrap::{BootstrapError, BootstrapOptions, load_or_bootstrap};
pub use error::DbError;

const LIBRARY_TREE: &str = "library";
const SNAPSHOT_KEY: &[u8] = b"snapshot";

/// Where a library snapshot lives
pub trait Persistence {
    /// Replace the stored snapshot with `library`
    ///
    /// # Errors
    /// Returns `DbError` if the snapshot cannot be encoded or written.
    fn save(&self, library: &Library) -> Result<(), DbError>;

    /// Read the stored snapshot, `None` if nothing has been saved yet
    ///
    /// # Errors
    /// Returns `DbError` if the snapshot exists but cannot be read or decoded.
    fn load(&self) -> Result<Option<Library>, DbError>;
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sled,
    Json,
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sled" => Ok(Self::Sled),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown backend '{other}' (expected sled or json)")),
        }
    }
}

/// Open the store for `backend` inside `data_dir`
///
/// # Errors
/// Returns `DbError` if the directory or the sled database cannot be opened.
pub fn open_store(backend: Backend, data_dir: &Path) -> Result<Box<dyn Persistence>, DbError> {
    fs::create_dir_all(data_dir).map_err(|e| DbError::io(data_dir, e))?;
    let store: Box<dyn Persistence> = match backend {
        Backend::Sled => Box::new(SledStore::open(data_dir.join("library.db"))?),
        Backend::Json => Box::new(JsonStore::new(data_dir.join("library.json")).with_backup(true)),
    };
    debug!(?backend, dir = %data_dir.display(), "opened store");
    Ok(store)
}

/// Prune unreferenced photos, then save
///
/// # Errors
/// Returns `DbError` if the store fails.
pub fn save_library(store: &dyn Persistence, library: &mut Library) -> Result<(), DbError> {
    library.prune_unreferenced();
    store.save(library)?;
    info!(users = library.users.len(), photos = library.photos.len(), "saved library");
    Ok(())
}

/// Snapshot store backed by an embedded sled database
///
/// The snapshot is a single value in the `library` tree, so each save either
/// replaces the previous snapshot entirely or leaves it untouched.
pub struct SledStore {
    db: Db,
    library: Tree,
}

impl SledStore {
    /// Opens or creates a database at the specified path
    ///
    /// Periodic background flushing is off; every save flushes explicitly.
    ///
    /// # Errors
    /// Returns `DbError` if the database or its tree cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let db = sled::Config::new()
            .path(path)
            .flush_every_ms(None)
            .open()?;
        let library = db.open_tree(LIBRARY_TREE)?;
        Ok(Self { db, library })
    }

    /// Flush pending writes to disk
    ///
    /// # Errors
    /// Returns `DbError` if the flush fails.
    pub fn flush(&self) -> Result<(), DbError> {
        self.db.flush()?;
        Ok(())
    }

    /// Remove the stored snapshot
    ///
    /// # Errors
    /// Returns `DbError` if the tree cannot be cleared.
    pub fn clear(&self) -> Result<(), DbError> {
        self.library.clear()?;
        self.flush()
    }
}

impl Persistence for SledStore {
    fn save(&self, library: &Library) -> Result<(), DbError> {
        let bytes = bincode::serde::encode_to_vec(library, bincode::config::standard())?;
        self.library.insert(SNAPSHOT_KEY, bytes)?;
        self.flush()
    }

    fn load(&self) -> Result<Option<Library>, DbError> {
        match self.library.get(SNAPSHOT_KEY)? {
            Some(bytes) => {
                let (library, _): (Library, usize) =
                    bincode::serde::decode_from_slice(&bytes, bincode::config::standard())?;
                Ok(Some(library))
            }
            None => Ok(None),
        }
    }
}

/// Snapshot store backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    keep_backup: bool,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            keep_backup: false,
        }
    }

    /// Copy the previous snapshot to `<file>.backup` before replacing it
    #[must_use]
    pub const fn with_backup(mut self, keep_backup: bool) -> Self {
        self.keep_backup = keep_backup;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(suffix);
        PathBuf::from(name)
    }

    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        self.sibling(".backup")
    }
}

impl Persistence for JsonStore {
    fn save(&self, library: &Library) -> Result<(), DbError> {
        let json = serde_json::to_string_pretty(library)?;

        if self.keep_backup && self.path.exists() {
            let backup = self.backup_path();
            fs::copy(&self.path, &backup).map_err(|e| DbError::io(&backup, e))?;
        }

        let tmp = self.sibling(".tmp");
        fs::write(&tmp, json).map_err(|e| DbError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| DbError::io(&self.path, e))?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Library>, DbError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DbError::io(&self.path, e)),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }
}
