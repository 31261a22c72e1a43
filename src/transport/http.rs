// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Blocking HTTP session backed by `ureq`.

use log::debug;
use ureq::{Agent, AgentBuilder};

use super::multipart::MultipartForm;
use super::{Body, Request, Response, Transport};
use crate::config::Config;
use crate::error::{ProposalError, Result};

/// Reusable HTTP session, optionally carrying an API token.
pub struct HttpSession {
    agent: Agent,
    token: Option<String>,
}

impl HttpSession {
    pub fn new() -> Self {
        Self {
            agent: AgentBuilder::new().build(),
            token: None,
        }
    }

    /// Session authenticating with the configured token, if any.
    pub fn from_config(config: &Config) -> Self {
        Self {
            token: config.token.clone(),
            ..Self::new()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl Default for HttpSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpSession {
    fn send(&self, request: Request) -> Result<Response> {
        let Request {
            method,
            url,
            headers,
            body,
        } = request;
        debug!("{} {}", method, url);

        let mut call = self.agent.request_url(method.as_str(), &url);
        for (name, value) in &headers {
            call = call.set(name, value);
        }
        if let Some(token) = &self.token {
            call = call.set("Authorization", &format!("Token {token}"));
        }

        let result = match body {
            Body::Empty => call.call(),
            Body::Json(value) => call.send_json(value),
            Body::Multipart(part) => {
                let form = MultipartForm::encode(&part);
                call.set("Content-Type", &form.content_type())
                    .send_bytes(&form.into_bytes())
            }
        };

        // ureq reports 4xx/5xx as errors; hand them back as plain responses.
        match result {
            Ok(response) | Err(ureq::Error::Status(_, response)) => {
                Ok(Response::new(response.status(), response.into_reader()))
            }
            Err(ureq::Error::Transport(transport)) => Err(ProposalError::Transport {
                url: url.to_string(),
                source: Box::new(transport),
            }),
        }
    }
}
