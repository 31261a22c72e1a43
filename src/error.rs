// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Error taxonomy shared by packaging, submission and download.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while packaging, submitting or downloading proposal content.
#[derive(Debug, Error)]
pub enum ProposalError {
    /// A relative attachment path appeared but no attachments directory is known.
    #[error(
        "The attachment path {} is relative, but no attachments directory is available to resolve it",
        .path
    )]
    Configuration { path: String },

    /// A referenced attachment does not exist or is not a regular file.
    #[error("The attachment {} does not exist or is not a file", .path.display())]
    NotFound { path: PathBuf },

    /// Input is neither a zip archive nor acceptable XML.
    #[error("Invalid proposal content: {0}")]
    Validation(String),

    /// The server answered with a non-success status.
    #[error("{0}")]
    Submission(String),

    /// Invalid arguments passed to a client operation.
    #[error("{0}")]
    InvalidArgument(String),

    /// Filesystem error on a submitted, packaged or downloaded file.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O on an in-memory stream or temporary file.
    #[error("I/O error: {0}")]
    Stream(#[from] io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The rewritten XML could not be serialized.
    #[error("XML serialization failed: {0}")]
    Xml(String),

    /// The request never produced an HTTP response.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Unexpected response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ProposalError {
    /// Attach `path` to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ProposalError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProposalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_names_relative_path() {
        let err = ProposalError::Configuration {
            path: "a/relative/path".into(),
        };
        assert!(err.to_string().contains("a/relative/path"));
    }

    #[test]
    fn not_found_error_names_path() {
        let err = ProposalError::NotFound {
            path: PathBuf::from("/abc/chy46/ght33.png"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/abc/chy46/ght33.png"));
        assert!(msg.contains("does not exist"));
    }

    #[test]
    fn io_error_embeds_path() {
        let err = ProposalError::io(
            "/abc/xft/6786.zip",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert!(err.to_string().contains("/abc/xft/6786.zip"));
    }
}
