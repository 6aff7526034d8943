//! Model-level error types
//!
//! Errors raised while constructing or mutating photos, albums and users.
//! These only cover the environment boundary (resources that do not exist or
//! cannot be inspected); duplicate guards on the model types report through
//! `bool` return values instead.

use thiserror::Error;

/// Errors produced by the domain model
#[derive(Debug, Error)]
pub enum ModelError {
    /// The image resource does not exist or cannot be read
    #[error("Photo resource not found: {0}")]
    ResourceNotFound(String),

    /// The resource exists but its metadata could not be read
    #[error("Could not read metadata for {path}: {source}")]
    Metadata {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_resource_not_found_display() {
        let error = ModelError::ResourceNotFound("/missing.jpg".to_string());
        assert_eq!(error.to_string(), "Photo resource not found: /missing.jpg");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_metadata_error_has_source() {
        let error = ModelError::Metadata {
            path: "/a.jpg".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("/a.jpg"));
        assert!(error.source().is_some());
    }
}
