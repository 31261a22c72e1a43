// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Domain layer: pure data types shared between packaging and submission.

pub mod attachment;
pub mod input;
pub mod path_reference;

pub use attachment::AttachmentMap;
pub use input::{DownloadTarget, ProposalInput, ReadSeek};
pub use path_reference::{PathKind, PathReference};
