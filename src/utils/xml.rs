// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Namespace-agnostic naming and hardening checks for proposal XML.

use ::xml::reader::{EventReader, XmlEvent};

use crate::error::{ProposalError, Result};

/// Strip any `{uri}` or `prefix:` qualifier from an element name.
///
/// ```rust,ignore
/// assert_eq!(local_name("{http://www.saao.ac.za/ns1}Path"), "Path");
/// assert_eq!(local_name("ns1:Path"), "Path");
/// ```
pub fn local_name(name: &str) -> &str {
    let after_uri = name.rsplit_once('}').map_or(name, |(_, rest)| rest);
    after_uri.rsplit_once(':').map_or(after_uri, |(_, rest)| rest)
}

/// Refuse documents declaring a document type.
///
/// Entity definitions (and therefore entity expansion and external entity
/// inclusion) can only appear inside a DOCTYPE. The prolog is pulled through
/// the decoding parser up to the root start tag, so the declaration is seen
/// whatever the document encoding, and text inside comments or CDATA
/// sections is never mistaken for one. Nothing past the root start tag is
/// read, so no entity is expanded here.
pub fn reject_doctype(xml: &[u8]) -> Result<()> {
    let mut reader = EventReader::new(xml);
    loop {
        match reader.next() {
            Ok(XmlEvent::StartElement { .. } | XmlEvent::EndDocument) => break,
            Ok(_) => {}
            Err(err) => return Err(ProposalError::Validation(err.to_string())),
        }
    }
    if reader.doctype().is_some() {
        return Err(ProposalError::Validation(
            "document type declarations are not allowed in proposal content".into(),
        ));
    }
    Ok(())
}
