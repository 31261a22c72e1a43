// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! multipart/form-data encoding for single-file uploads.

use uuid::Uuid;

use super::FilePart;

/// An encoded form body and the boundary that delimits it.
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    /// Encode `part` with a fresh random boundary.
    pub fn encode(part: &FilePart) -> Self {
        Self::encode_with_boundary(part, format!("saltpack-{}", Uuid::new_v4().simple()))
    }

    fn encode_with_boundary(part: &FilePart, boundary: String) -> Self {
        let mut body = Vec::with_capacity(part.bytes.len() + 256);
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                quote(&part.field),
                quote(&part.filename)
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", part.content_type).as_bytes());
        body.extend_from_slice(&part.bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        Self { boundary, body }
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}

// Quotes, CR and LF cannot appear inside a quoted disposition parameter.
fn quote(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
