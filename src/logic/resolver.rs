// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Attachment resolution for proposal XML.
//!
//! Responsibilities:
//! - Parse proposal XML, refusing document type declarations.
//! - Find every element whose local name is `Path`, whatever its namespace.
//! - Resolve file references against the attachments directory and rewrite
//!   them to de-duplicated `Included/` locations.

use std::path::{Path, PathBuf};

use log::debug;
use xmltree::{Element, XMLNode};

use crate::error::{ProposalError, Result};
use crate::models::{AttachmentMap, PathReference, ProposalInput};
use crate::utils::{local_name, reject_doctype};

/// Local name of elements holding attachment references.
pub const PATH_ELEMENT: &str = "Path";

/// Rewritten document together with the files it now references.
#[derive(Debug)]
pub struct ResolvedProposal {
    pub document: Element,
    pub attachments: AttachmentMap,
    /// Every `Path` element seen, in document order.
    pub references: Vec<PathReference>,
}

/// Read `source` and resolve its attachment references.
///
/// Without an explicit `attachments_dir`, a named XML file lends its parent
/// directory; an in-memory stream has none, so relative references fail.
pub fn resolve(
    mut source: ProposalInput<'_>,
    attachments_dir: Option<&Path>,
) -> Result<ResolvedProposal> {
    let xml = source.read_all()?;
    let dir = attachments_dir.or_else(|| source.default_attachments_dir());
    resolve_document(&xml, dir)
}

/// Parse `xml` and resolve its `Path` elements.
///
/// # Errors
///
/// - [`ProposalError::Validation`] when the bytes are not acceptable XML.
/// - [`ProposalError::Configuration`] for a relative reference without a directory.
/// - [`ProposalError::NotFound`] when a reference is missing or not a regular file.
pub fn resolve_document(xml: &[u8], attachments_dir: Option<&Path>) -> Result<ResolvedProposal> {
    reject_doctype(xml)?;
    let mut document =
        Element::parse(xml).map_err(|err| ProposalError::Validation(err.to_string()))?;

    let base = attachments_dir
        .map(|dir| std::path::absolute(dir).map_err(|err| ProposalError::io(dir, err)))
        .transpose()?;

    let mut resolver = Resolver {
        attachments_dir: base.as_deref(),
        attachments: AttachmentMap::new(),
        references: Vec::new(),
    };
    resolver.walk(&mut document)?;

    Ok(ResolvedProposal {
        document,
        attachments: resolver.attachments,
        references: resolver.references,
    })
}

struct Resolver<'a> {
    attachments_dir: Option<&'a Path>,
    attachments: AttachmentMap,
    references: Vec<PathReference>,
}

impl Resolver<'_> {
    /// Depth-first, document-order walk without recursion.
    fn walk(&mut self, root: &mut Element) -> Result<()> {
        let mut stack = vec![root];
        while let Some(element) = stack.pop() {
            if local_name(&element.name) == PATH_ELEMENT {
                self.rewrite(element)?;
            }
            for child in element.children.iter_mut().rev() {
                if let XMLNode::Element(child) = child {
                    stack.push(child);
                }
            }
        }
        Ok(())
    }

    fn rewrite(&mut self, element: &mut Element) -> Result<()> {
        let raw = element.get_text().unwrap_or_default();
        let mut reference = PathReference::from_text(&raw);

        if reference.kind.is_literal() {
            debug!("Leaving literal path {:?} untouched", reference.text);
            self.references.push(reference);
            return Ok(());
        }

        let source = self.source_path(&reference.text)?;
        let destination = self.attachments.destination_for(&source).to_string();
        debug!("Attachment {:?} -> {}", source, destination);

        replace_text(element, &destination);
        reference.source = Some(source);
        reference.destination = Some(destination);
        self.references.push(reference);
        Ok(())
    }

    fn source_path(&self, text: &str) -> Result<PathBuf> {
        let candidate = Path::new(text);
        let path = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            let dir = self
                .attachments_dir
                .ok_or_else(|| ProposalError::Configuration {
                    path: text.to_string(),
                })?;
            dir.join(candidate)
        };

        // `is_file` is false for directories and for missing paths alike.
        if !path.is_file() {
            return Err(ProposalError::NotFound { path });
        }
        Ok(path)
    }
}

/// Swap all character data of `element` for `text`, keeping child elements.
fn replace_text(element: &mut Element, text: &str) {
    element
        .children
        .retain(|node| !matches!(node, XMLNode::Text(_) | XMLNode::CData(_)));
    element.children.insert(0, XMLNode::Text(text.to_string()));
}
