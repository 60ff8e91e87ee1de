// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 U.S. Federal Government (in countries where recognized)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Authenticated HTTP transport to the Vault API.
//!
//! [`VaultClient`] performs GET, LIST, POST and DELETE against paths relative
//! to `/v1/` and decodes the standard Vault response envelope. Any non-2xx
//! status becomes [`PkiError::Vault`] carrying the status code.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::VaultClientConfig;
use crate::error::{PkiError, Result};
use crate::tls::build_http_client;

/// Header carrying the client token.
pub const TOKEN_HEADER: &str = "x-vault-token";

/// Header carrying the Enterprise namespace.
pub const NAMESPACE_HEADER: &str = "x-vault-namespace";

/// Standard Vault response envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    /// Operation payload.
    pub data: Option<T>,

    /// Non-fatal warnings attached by Vault.
    #[serde(default)]
    pub warnings: Option<Vec<String>>,

    /// Error messages.
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            data: None,
            warnings: None,
            errors: None,
        }
    }
}

impl<T> Envelope<T> {
    /// Wrap a payload in an envelope with no warnings.
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// HTTP client for the Vault API.
#[derive(Debug)]
pub struct VaultClient {
    config: VaultClientConfig,
    http: reqwest::Client,
}

impl VaultClient {
    /// Create a new Vault client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if TLS configuration fails.
    pub fn new(config: VaultClientConfig) -> Result<Self> {
        let http = build_http_client(&config)?;

        Ok(Self { config, http })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &VaultClientConfig {
        &self.config
    }

    /// Read `path` and decode the envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<Envelope<T>> {
        let url = self.config.build_url(path);
        tracing::debug!("GET {}", url.path());

        let response = self
            .http
            .get(url)
            .headers(self.auth_headers(token)?)
            .send()
            .await?;

        self.decode_envelope(response).await
    }

    /// List keys under `path`.
    ///
    /// Issued as `GET ?list=true`, which Vault treats exactly like the
    /// `LIST` verb.
    pub async fn list<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<Envelope<T>> {
        let url = self.config.build_url(path);
        tracing::debug!("LIST {}", url.path());

        let response = self
            .http
            .get(url)
            .query(&[("list", "true")])
            .headers(self.auth_headers(token)?)
            .send()
            .await?;

        self.decode_envelope(response).await
    }

    /// Write `body` to `path` and decode the envelope.
    pub async fn post<B, T>(&self, path: &str, token: &str, body: &B) -> Result<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.build_url(path);
        tracing::debug!("POST {}", url.path());

        let response = self
            .http
            .post(url)
            .headers(self.auth_headers(token)?)
            .json(body)
            .send()
            .await?;

        self.decode_envelope(response).await
    }

    /// Write `body` to `path` when no response payload is expected.
    pub async fn post_no_content<B>(
        &self,
        path: &str,
        token: &str,
        body: &B,
        expected: StatusCode,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.build_url(path);
        tracing::debug!("POST {}", url.path());

        let response = self
            .http
            .post(url)
            .headers(self.auth_headers(token)?)
            .json(body)
            .send()
            .await?;

        self.expect_status(response, expected).await
    }

    /// Delete `path`.
    pub async fn delete(&self, path: &str, token: &str, expected: StatusCode) -> Result<()> {
        let url = self.config.build_url(path);
        tracing::debug!("DELETE {}", url.path());

        let response = self
            .http
            .delete(url)
            .headers(self.auth_headers(token)?)
            .send()
            .await?;

        self.expect_status(response, expected).await
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Token and namespace headers for one request.
    fn auth_headers(&self, token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut value = HeaderValue::from_str(token)
            .map_err(|_| PkiError::token("token contains invalid header characters"))?;
        value.set_sensitive(true);
        headers.insert(TOKEN_HEADER, value);

        if let Some(ref namespace) = self.config.namespace {
            let value = HeaderValue::from_str(namespace)
                .map_err(|_| PkiError::config("namespace contains invalid header characters"))?;
            headers.insert(NAMESPACE_HEADER, value);
        }

        Ok(headers)
    }

    /// Decode a 2xx response as an envelope; map anything else to an error.
    async fn decode_envelope<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Envelope<T>> {
        let response = self.handle_error_response(response).await?;

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Envelope::default());
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Accept any 2xx; note when it differs from what the endpoint documents.
    async fn expect_status(&self, response: reqwest::Response, expected: StatusCode) -> Result<()> {
        let status = response.status();
        self.handle_error_response(response).await?;

        if status != expected {
            tracing::debug!("Expected status {}, got {}", expected.as_u16(), status.as_u16());
        }

        Ok(())
    }

    /// Handle error responses from the server.
    async fn handle_error_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let errors = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.errors,
            Err(_) if text.trim().is_empty() => Vec::new(),
            Err(_) => vec![text.trim().to_string()],
        };

        tracing::debug!("Vault returned {}: {:?}", status.as_u16(), errors);

        Err(PkiError::vault(status.as_u16(), errors))
    }
}
