//! Utility functions for error handling
//!
//! File access helpers that attach the path and the purpose of the access to
//! any failure, so loader errors read well at the console.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.is_file() {
        let context = if path.exists() {
            format!("Path is not a file - expected a file for: {purpose}")
        } else {
            format!("File not found - needed for: {purpose}")
        };
        return Err(CatalogError::Io {
            path: path.to_path_buf(),
            context,
            source: io::Error::from(io::ErrorKind::NotFound),
        });
    }

    fs::read_to_string(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };
        CatalogError::Io {
            path: path.to_path_buf(),
            context,
            source: e,
        }
    })
}
