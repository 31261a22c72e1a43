// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Shared helper utilities reused by packaging and submission.

pub mod xml;

/// Local name of a possibly namespace-qualified element name.
pub use self::xml::local_name;
/// Refuse XML carrying a document type declaration.
pub use self::xml::reject_doctype;
