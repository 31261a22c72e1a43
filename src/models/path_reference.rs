// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Classification of `Path` element contents.

use std::path::PathBuf;

/// Placeholder asking the server to fill in the path.
pub const AUTOMATIC: &str = "automatic";
/// Placeholder for content the server generates itself.
pub const AUTO_GENERATED: &str = "auto-generated";

/// What a `Path` element's text stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathKind {
    LiteralAutomatic,
    LiteralAutoGenerated,
    FileReference,
}

impl PathKind {
    /// Classify already-trimmed text. Matching is case-sensitive.
    pub fn classify(text: &str) -> Self {
        match text {
            AUTOMATIC => PathKind::LiteralAutomatic,
            AUTO_GENERATED => PathKind::LiteralAutoGenerated,
            _ => PathKind::FileReference,
        }
    }

    pub fn is_literal(&self) -> bool {
        !matches!(self, PathKind::FileReference)
    }
}

/// One `Path` element met during traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathReference {
    /// Element text with surrounding whitespace removed.
    pub text: String,
    pub kind: PathKind,
    /// Absolute source path, only for file references.
    pub source: Option<PathBuf>,
    /// Archive-relative destination, only for file references.
    pub destination: Option<String>,
}

impl PathReference {
    /// Build an unresolved reference from raw element text.
    pub fn from_text(raw: &str) -> Self {
        let text = raw.trim().to_string();
        let kind = PathKind::classify(&text);
        Self {
            text,
            kind,
            source: None,
            destination: None,
        }
    }
}
