// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Inputs and outputs of client operations: named files or open streams.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{ProposalError, Result};

/// Anything that can be read from and rewound.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

/// Proposal content to package or submit.
pub enum ProposalInput<'a> {
    /// A file on disk. Its parent directory is the default attachments directory.
    Path(PathBuf),
    /// An in-memory or already-open stream. Read from its start.
    Stream(Box<dyn ReadSeek + 'a>),
}

impl<'a> ProposalInput<'a> {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        ProposalInput::Path(path.into())
    }

    pub fn stream(stream: impl ReadSeek + 'a) -> Self {
        ProposalInput::Stream(Box::new(stream))
    }

    /// Parent directory of a named file input.
    pub fn default_attachments_dir(&self) -> Option<&Path> {
        match self {
            ProposalInput::Path(path) => path.parent(),
            ProposalInput::Stream(_) => None,
        }
    }

    /// Read the complete content. Open failures carry the file's path.
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        match self {
            ProposalInput::Path(path) => {
                let mut file = File::open(&*path).map_err(|err| ProposalError::io(&*path, err))?;
                file.read_to_end(&mut bytes)
                    .map_err(|err| ProposalError::io(&*path, err))?;
            }
            ProposalInput::Stream(stream) => {
                stream.seek(SeekFrom::Start(0))?;
                stream.read_to_end(&mut bytes)?;
            }
        }
        Ok(bytes)
    }
}

/// Where downloaded content ends up.
pub enum DownloadTarget<'a> {
    /// Created or truncated before writing.
    Path(PathBuf),
    /// Written from its current position; prior content is not cleared, so
    /// pass an empty or truncated sink.
    Writer(&'a mut dyn Write),
}

impl DownloadTarget<'_> {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        DownloadTarget::Path(path.into())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn stream_is_read_from_start() {
        let mut cursor = Cursor::new(b"<A/>".to_vec());
        cursor.seek(SeekFrom::End(0)).unwrap();

        let mut input = ProposalInput::stream(cursor);
        assert_eq!(input.read_all().unwrap(), b"<A/>");
        assert_eq!(input.default_attachments_dir(), None);
    }

    #[test]
    fn path_input_defaults_attachments_dir_to_parent() {
        let input = ProposalInput::path("/proposals/2018/content.xml");
        assert_eq!(
            input.default_attachments_dir(),
            Some(Path::new("/proposals/2018"))
        );
    }

    #[test]
    fn missing_path_reports_the_path() {
        let mut input = ProposalInput::path("/abc/xft/6786.zip");
        let err = input.read_all().unwrap_err();

        match &err {
            ProposalError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("/abc/xft/6786.zip"));
    }
}
