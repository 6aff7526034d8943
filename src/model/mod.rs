//! Domain model for the photo library
//!
//! The object graph is Users → Albums → Photos → Tags. Photos live once in a
//! [`PhotoIndex`]; albums and inboxes hold [`PhotoKey`]s into it.
//!
//! Equality is partial on most types:
//! - [`Tag`]: name and value
//! - [`Photo`]: canonical path only
//! - [`Album`]: name only
//! - [`User`]: username and password

pub mod album;
pub mod error;
pub mod index;
pub mod photo;
pub mod resources;
pub mod tag;
pub mod user;

pub use album::{Album, DATE_FORMAT, INBOX_NAME, SortOrder, format_date};
pub use error::ModelError;
pub use index::PhotoIndex;
pub use photo::{Photo, PhotoKey};
pub use resources::{FsResources, Resources};
pub use tag::{Tag, incomplete_row, parse_values};
pub use user::{ADMIN_USERNAME, User};
