// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Client for the SALT proposals API: submit and download proposal content.

use std::fmt;
use std::fs::File;
use std::io;
use std::str::FromStr;

use log::{info, warn};
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::error::{ProposalError, Result};
use crate::logic::package::archive_payload;
use crate::models::{DownloadTarget, ProposalInput};
use crate::transport::{Body, FilePart, Method, Request, Response, Transport};

/// Multipart field carrying the uploaded archive.
pub const UPLOAD_FIELD: &str = "file";
const UPLOAD_FILENAME: &str = "proposal.zip";
const ZIP_MIME: &str = "application/zip";

/// What to download.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    Proposal,
    Block,
}

impl ContentType {
    fn as_str(&self) -> &'static str {
        match self {
            ContentType::Proposal => "proposal",
            ContentType::Block => "block",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ProposalError;

    /// Case-insensitive.
    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "proposal" => Ok(ContentType::Proposal),
            "block" => Ok(ContentType::Block),
            _ => Err(ProposalError::InvalidArgument(format!(
                "Invalid content type \"{raw}\": expected \"proposal\" or \"block\""
            ))),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct ResolvedBlock {
    code: String,
}

/// Proposals API client over an injected transport.
pub struct ProposalClient<T> {
    config: Config,
    transport: T,
}

impl<T: Transport> ProposalClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Submit proposal content.
    ///
    /// A zip archive is uploaded unaltered; anything else is treated as
    /// proposal XML and packaged with its attachments first. With a proposal
    /// code the content replaces that proposal (`PUT`), otherwise a new
    /// proposal is created (`POST`).
    ///
    /// # Errors
    ///
    /// Packaging errors abort before anything is sent. A response outside
    /// `[200, 300)` yields [`ProposalError::Submission`] carrying the server's
    /// `error` message, or the status code if there is none.
    pub fn submit(&self, input: ProposalInput<'_>, proposal_code: Option<&str>) -> Result<()> {
        let payload = archive_payload(input)?;
        let file = FilePart::zip(UPLOAD_FIELD, UPLOAD_FILENAME, payload);

        let request = match proposal_code.filter(|code| !code.is_empty()) {
            Some(code) => Request::new(Method::Put, self.config.endpoint(&["proposals", code])?),
            None => Request::new(Method::Post, self.config.endpoint(&["proposals"])?),
        };
        info!(
            "Submitting {} bytes: {} {}",
            file.bytes.len(),
            request.method,
            request.url
        );

        let response = self
            .transport
            .send(request.with_body(Body::Multipart(file)))?;
        ensure_success(response)?;
        Ok(())
    }

    /// Download a proposal or one of its blocks as a zip into `destination`.
    ///
    /// `content_type` is `proposal` or `block`, in any letter case. Blocks are
    /// identified by `name`, which is resolved to a block code first. A path
    /// destination is only created (replacing prior content) once the server
    /// has answered successfully.
    pub fn download(
        &self,
        destination: DownloadTarget<'_>,
        proposal_code: &str,
        content_type: &str,
        name: Option<&str>,
    ) -> Result<()> {
        let content_type: ContentType = content_type.parse()?;
        let url = match content_type {
            ContentType::Proposal => self.config.endpoint(&["proposals", proposal_code])?,
            ContentType::Block => {
                let name = name.ok_or_else(|| {
                    ProposalError::InvalidArgument(format!(
                        "A block name is required if the content type is \"{content_type}\""
                    ))
                })?;
                let block_code = self.resolve_block(proposal_code, name)?;
                self.config
                    .endpoint(&["proposals", proposal_code, "blocks", &block_code])?
            }
        };

        let response = self.fetch_zip(url)?;
        write_download(destination, response)
    }

    /// Block code for the block called `name` in proposal `proposal_code`.
    pub fn resolve_block(&self, proposal_code: &str, name: &str) -> Result<String> {
        let url = self
            .config
            .endpoint(&["proposals", proposal_code, "blocks", "resolve"])?;
        info!("Resolving block {:?} via {}", name, url);

        let request = Request::new(Method::Post, url)
            .with_body(Body::Json(serde_json::json!({ "name": name })));
        let resolved: ResolvedBlock = ensure_success(self.transport.send(request)?)?.into_json()?;
        Ok(resolved.code)
    }

    fn fetch_zip(&self, url: Url) -> Result<Response> {
        info!("Downloading {}", url);
        let request = Request::new(Method::Get, url).with_header("Content-Type", ZIP_MIME);
        ensure_success(self.transport.send(request)?)
    }
}

/// Pass successful responses through; turn anything else into an error.
fn ensure_success(response: Response) -> Result<Response> {
    if response.is_success() {
        return Ok(response);
    }

    let status = response.status;
    let message = response
        .into_json::<ErrorBody>()
        .map(|body| body.error)
        .unwrap_or_else(|_| format!("Request failed with HTTP status {status}"));
    warn!("Request failed ({}): {}", status, message);
    Err(ProposalError::Submission(message))
}

fn write_download(destination: DownloadTarget<'_>, response: Response) -> Result<()> {
    let mut body = response.into_reader();
    match destination {
        DownloadTarget::Path(path) => {
            let mut file = File::create(&path).map_err(|err| ProposalError::io(&path, err))?;
            io::copy(&mut body, &mut file).map_err(|err| ProposalError::io(&path, err))?;
        }
        DownloadTarget::Writer(writer) => {
            io::copy(&mut body, writer)?;
        }
    }
    Ok(())
}
