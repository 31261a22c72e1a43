// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Packaging entry points combining resolution and assembly.

use std::fs;
use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;
use zip::ZipArchive;

use crate::error::{ProposalError, Result};
use crate::logic::assembler::assemble;
use crate::logic::resolver::{resolve, resolve_document};
use crate::models::ProposalInput;

const LOCAL_FILE_HEADER: &[u8] = b"PK\x03\x04";
const END_OF_CENTRAL_DIRECTORY: &[u8] = b"PK\x05\x06";

/// Whether `bytes` hold a zip archive.
///
/// The leading magic is checked first, then the central directory must open.
/// File extensions play no part.
pub fn is_zip_archive(bytes: &[u8]) -> bool {
    let has_magic =
        bytes.starts_with(LOCAL_FILE_HEADER) || bytes.starts_with(END_OF_CENTRAL_DIRECTORY);
    has_magic && ZipArchive::new(Cursor::new(bytes)).is_ok()
}

/// Resolve proposal XML and write the resulting archive to `writer`.
pub fn package_to_writer<W: Write + Seek>(
    writer: W,
    xml: &[u8],
    attachments_dir: Option<&Path>,
) -> Result<W> {
    let resolved = resolve_document(xml, attachments_dir)?;
    assemble(writer, &resolved.document, &resolved.attachments)
}

/// Package proposal XML and its attachments into a zip file at `output`.
///
/// Parent directories for `output` are created if missing. The archive is
/// built next to `output` and moved into place only once complete, so a
/// failure never leaves a truncated file behind.
pub fn package_proposal(
    output: &Path,
    xml: ProposalInput<'_>,
    attachments_dir: Option<&Path>,
) -> Result<()> {
    let resolved = resolve(xml, attachments_dir)?;

    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|err| ProposalError::io(parent, err))?;
    }

    let staging = NamedTempFile::new_in(parent).map_err(|err| ProposalError::io(parent, err))?;
    let staging = assemble(staging, &resolved.document, &resolved.attachments)?;
    staging
        .persist(output)
        .map_err(|err| ProposalError::io(output, err.error))?;

    info!(
        "Packaged {} attachment(s) into {}",
        resolved.attachments.len(),
        output.display()
    );
    Ok(())
}

/// Bytes to upload for `input`: a zip as-is, XML packaged first.
pub fn archive_payload(mut input: ProposalInput<'_>) -> Result<Vec<u8>> {
    let bytes = input.read_all()?;
    if is_zip_archive(&bytes) {
        return Ok(bytes);
    }

    let staging = tempfile::tempfile()?;
    let mut staging = package_to_writer(staging, &bytes, input.default_attachments_dir())?;
    staging.seek(SeekFrom::Start(0))?;
    let mut payload = Vec::new();
    staging.read_to_end(&mut payload)?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::TempDir;
    use zip::write::FileOptions;

    use super::*;

    fn dummy_zip(content: &str, name: &str) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options: FileOptions<'_, ()> = FileOptions::default();
        zip.start_file(name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn sniffs_real_zip() {
        assert!(is_zip_archive(&dummy_zip("Test", "b.txt")));
    }

    #[test]
    fn rejects_xml_and_truncated_zip() {
        assert!(!is_zip_archive(b"<?xml version=\"1.0\"?><A/>"));
        assert!(!is_zip_archive(b"PK\x03\x04garbage"));
        assert!(!is_zip_archive(b""));
    }

    #[test]
    fn zip_payload_is_passed_through_unchanged() {
        let zip = dummy_zip("This is some dummy content.", "a.txt");
        let payload = archive_payload(ProposalInput::stream(Cursor::new(zip.clone()))).unwrap();
        assert_eq!(payload, zip);
    }

    #[test]
    fn xml_payload_is_packaged() {
        let payload =
            archive_payload(ProposalInput::stream(Cursor::new(b"<XYZ/>".to_vec()))).unwrap();
        let archive = ZipArchive::new(Cursor::new(payload)).unwrap();
        assert_eq!(archive.file_names().collect::<Vec<_>>(), vec!["XYZ.xml"]);
    }

    #[test]
    fn package_proposal_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("nested").join("out").join("proposal.zip");

        package_proposal(
            &output,
            ProposalInput::stream(Cursor::new(b"<Proposal/>".to_vec())),
            None,
        )
        .unwrap();

        let archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn failed_packaging_leaves_existing_output_alone() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("proposal.zip");
        fs::write(&output, b"previous").unwrap();

        let result = package_proposal(
            &output,
            ProposalInput::stream(Cursor::new(b"<A><Path>/no/such.pdf</Path></A>".to_vec())),
            None,
        );

        assert!(result.is_err());
        assert_eq!(fs::read(&output).unwrap(), b"previous");
    }
}
