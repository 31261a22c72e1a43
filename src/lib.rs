// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! saltpack packages SALT observing proposals and talks to the proposals API.
//!
//! Proposal content is an XML document whose `Path` elements (in any
//! namespace) reference attachments on disk. Packaging rewrites each
//! reference to a unique `Included/<token><ext>` location and zips the
//! document as `<RootElement>.xml` together with one copy of every
//! referenced file. The literal values `automatic` and `auto-generated` are
//! left for the server to fill in.
//!
//! ```no_run
//! use saltpack::{Config, HttpSession, ProposalClient, ProposalInput};
//!
//! let config = Config::from_env()?;
//! let client = ProposalClient::new(config.clone(), HttpSession::from_config(&config));
//! client.submit(ProposalInput::path("proposal/content.xml"), Some("2018-1-SCI-042"))?;
//! # Ok::<(), saltpack::ProposalError>(())
//! ```

pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod transport;
pub mod utils;

pub use config::Config;
pub use error::{ProposalError, Result};
pub use logic::package::{is_zip_archive, package_proposal, package_to_writer};
pub use logic::resolver::{ResolvedProposal, resolve, resolve_document};
pub use logic::submission::{ContentType, ProposalClient};
pub use models::{AttachmentMap, DownloadTarget, ProposalInput};
pub use transport::{HttpSession, Transport};
