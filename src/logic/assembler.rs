// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Zip assembly of a resolved proposal.

use std::fs::File;
use std::io::{self, Seek, Write};

use log::debug;
use xmltree::{Element, EmitterConfig};
use zip::{CompressionMethod, ZipWriter, write::FileOptions};

use crate::error::{ProposalError, Result};
use crate::models::AttachmentMap;
use crate::utils::local_name;

/// Archive entry name of the proposal document: `<RootLocalName>.xml`.
pub fn xml_entry_name(document: &Element) -> String {
    format!("{}.xml", local_name(&document.name))
}

/// UTF-8 serialization of `document`, XML declaration included.
pub fn serialize_document(document: &Element) -> Result<Vec<u8>> {
    let config = EmitterConfig::new()
        .write_document_declaration(true)
        .perform_indent(false);
    let mut out = Vec::new();
    document
        .write_with_config(&mut out, config)
        .map_err(|err| ProposalError::Xml(err.to_string()))?;
    Ok(out)
}

/// Write the document entry followed by every attachment into a zip on `writer`.
///
/// Attachments are streamed from disk in the map's insertion order. The
/// finished writer is handed back to the caller.
pub fn assemble<W: Write + Seek>(
    writer: W,
    document: &Element,
    attachments: &AttachmentMap,
) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    let entry_name = xml_entry_name(document);
    let xml = serialize_document(document)?;
    zip.start_file(&entry_name, options)?;
    zip.write_all(&xml)?;
    debug!("Wrote {} ({} bytes)", entry_name, xml.len());

    for (source, destination) in attachments.iter() {
        zip.start_file(destination, options)?;
        let mut reader = File::open(source).map_err(|err| ProposalError::io(source, err))?;
        let copied =
            io::copy(&mut reader, &mut zip).map_err(|err| ProposalError::io(source, err))?;
        debug!("Wrote {} from {:?} ({} bytes)", destination, source, copied);
    }

    Ok(zip.finish()?)
}
