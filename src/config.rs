// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Client configuration sourced from the environment.

use url::Url;

use crate::error::{ProposalError, Result};

/// Environment variable overriding the proposals API base URL.
pub const BASE_URL_VAR: &str = "SALT_API_PROPOSALS_BASE_URL";

/// Environment variable holding an already-acquired API token.
pub const TOKEN_VAR: &str = "SALT_API_TOKEN";

/// Base URL used when the environment does not provide one.
pub const DEFAULT_BASE_URL: &str = "http://saltapi.salt.ac.za";

/// Where the proposals API lives and how to authenticate against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: Url,
    pub token: Option<String>,
}

impl Config {
    /// Configuration for the given base URL without a token.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            token: None,
        })
    }

    /// Read [`BASE_URL_VAR`] and [`TOKEN_VAR`] from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = lookup(BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let token = lookup(TOKEN_VAR).filter(|v| !v.trim().is_empty());

        Ok(Self {
            base_url: parse_base_url(base.trim())?,
            token,
        })
    }

    /// Append path segments to the base URL.
    ///
    /// Segments are percent-encoded, so a proposal or block code can never
    /// escape its path position.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProposalError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|err| ProposalError::InvalidUrl(format!("{raw}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(ProposalError::InvalidUrl(format!(
            "{raw}: not usable as a base URL"
        )));
    }
    Ok(url)
}
