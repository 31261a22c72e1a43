// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Attachment map linking source files on disk to their archive locations.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use uuid::Uuid;

/// Directory inside the archive holding every attachment.
pub const INCLUDED_PREFIX: &str = "Included/";

/// Absolute source path to archive-relative destination, in first-seen order.
///
/// Keys compare by path equality as given. Two spellings of the same file
/// (a symlink, `a/../a.pdf`) are distinct attachments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttachmentMap {
    entries: IndexMap<PathBuf, String>,
}

impl AttachmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination for `source`, minting a fresh one on first sight.
    pub fn destination_for(&mut self, source: &Path) -> &str {
        self.entries
            .entry(source.to_path_buf())
            .or_insert_with(|| mint_destination(source))
            .as_str()
    }

    pub fn get(&self, source: &Path) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(source, destination)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries
            .iter()
            .map(|(source, dest)| (source.as_path(), dest.as_str()))
    }
}

/// `Included/<uuid><.ext>`, keeping the source file's extension if it has one.
fn mint_destination(source: &Path) -> String {
    let token = Uuid::new_v4();
    match source.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{INCLUDED_PREFIX}{token}.{ext}"),
        _ => format!("{INCLUDED_PREFIX}{token}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_source_reuses_destination() {
        let mut map = AttachmentMap::new();
        let first = map.destination_for(Path::new("/data/a.pdf")).to_string();
        let second = map.destination_for(Path::new("/data/a.pdf")).to_string();

        assert_eq!(first, second);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn distinct_sources_get_distinct_destinations() {
        let mut map = AttachmentMap::new();
        let a = map.destination_for(Path::new("/data/a.pdf")).to_string();
        let b = map.destination_for(Path::new("/other/a.pdf")).to_string();

        assert_ne!(a, b);
        assert_eq!(map.len(), 2);
    }

    // Path spelling matters; no canonicalisation happens.
    #[test]
    fn keys_are_compared_literally() {
        let mut map = AttachmentMap::new();
        map.destination_for(Path::new("/data/a.pdf"));
        map.destination_for(Path::new("/data/../data/a.pdf"));

        assert_eq!(map.len(), 2);
    }

    #[test]
    fn destination_keeps_extension_under_included_prefix() {
        let mut map = AttachmentMap::new();
        let dest = map.destination_for(Path::new("/x/sheet.xlsx")).to_string();
        assert!(dest.starts_with(INCLUDED_PREFIX));
        assert!(dest.ends_with(".xlsx"));

        let bare = map.destination_for(Path::new("/x/README")).to_string();
        assert!(bare.starts_with(INCLUDED_PREFIX));
        assert!(!bare.contains('.'));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut map = AttachmentMap::new();
        map.destination_for(Path::new("/z.png"));
        map.destination_for(Path::new("/a.png"));
        map.destination_for(Path::new("/z.png"));

        let sources: Vec<_> = map.iter().map(|(src, _)| src.to_path_buf()).collect();
        assert_eq!(sources, vec![PathBuf::from("/z.png"), PathBuf::from("/a.png")]);
    }
}
