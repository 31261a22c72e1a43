// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! HTTP transport seam used by the proposals client.
//!
//! The client only ever talks to a [`Transport`]. [`http::HttpSession`] is the
//! real implementation; tests substitute their own.

use std::fmt;
use std::io::{Cursor, Read};

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Result;

pub mod http;
pub mod multipart;

pub use http::HttpSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single file sent as a multipart/form-data field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    /// A zip archive under form field `field`.
    pub fn zip(field: &str, filename: &str, bytes: Vec<u8>) -> Self {
        Self {
            field: field.to_string(),
            filename: filename.to_string(),
            content_type: "application/zip".to_string(),
            bytes,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart(FilePart),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl Request {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status code plus a body that is read lazily.
pub struct Response {
    pub status: u16,
    body: Box<dyn Read + Send>,
}

impl Response {
    pub fn new(status: u16, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }

    pub fn from_bytes(status: u16, bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(status, Cursor::new(bytes.into()))
    }

    /// Status within `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_reader(self.body)?)
    }

    pub fn into_reader(self) -> Box<dyn Read + Send> {
        self.body
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Sends one request and returns whatever response the server produced.
///
/// Non-success statuses are responses, not errors; only failures to obtain
/// a response at all are reported as `Err`.
pub trait Transport {
    fn send(&self, request: Request) -> Result<Response>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: Request) -> Result<Response> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: Request) -> Result<Response> {
        (**self).send(request)
    }
}
