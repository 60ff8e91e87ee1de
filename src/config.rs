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

//! Configuration types for the Vault client.
//!
//! This module provides configuration structures for connecting to a Vault
//! server: server URL, namespace, TLS trust and client identity.

use std::time::Duration;
use url::Url;

use crate::error::{PkiError, Result};

/// Path prefix of the Vault HTTP API.
pub const API_PREFIX: &str = "v1";

/// Configuration for a Vault client.
#[derive(Clone)]
pub struct VaultClientConfig {
    /// Vault server base URL (e.g., "https://vault.example.com:8200").
    pub server_url: Url,

    /// Optional Vault Enterprise namespace, sent as `X-Vault-Namespace`.
    pub namespace: Option<String>,

    /// Client identity for TLS client certificate authentication.
    pub client_identity: Option<ClientIdentity>,

    /// Trust anchor configuration for server certificate verification.
    pub trust_anchors: TrustAnchors,

    /// Request timeout duration.
    pub timeout: Duration,

    /// Additional HTTP headers to include in requests.
    pub additional_headers: Vec<(String, String)>,
}

impl std::fmt::Debug for VaultClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultClientConfig")
            .field("server_url", &self.server_url)
            .field("namespace", &self.namespace)
            .field("client_identity", &self.client_identity.is_some())
            .field("trust_anchors", &self.trust_anchors)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for VaultClientConfig {
    fn default() -> Self {
        Self {
            server_url: Url::parse("https://127.0.0.1:8200").expect("valid default URL"),
            namespace: None,
            client_identity: None,
            trust_anchors: TrustAnchors::WebPki,
            timeout: Duration::from_secs(30),
            additional_headers: Vec::new(),
        }
    }
}

impl VaultClientConfig {
    /// Create a new configuration builder.
    pub fn builder() -> VaultClientConfigBuilder {
        VaultClientConfigBuilder::new()
    }

    /// Build a configuration from the conventional Vault environment variables.
    ///
    /// Reads `VAULT_ADDR` (required), `VAULT_NAMESPACE`, `VAULT_CACERT` and
    /// `VAULT_SKIP_VERIFY`.
    pub fn from_env() -> Result<Self> {
        let addr = std::env::var("VAULT_ADDR")
            .map_err(|_| PkiError::config("VAULT_ADDR is not set"))?;

        let mut builder = Self::builder().server_url(addr)?;

        if let Ok(namespace) = std::env::var("VAULT_NAMESPACE") {
            builder = builder.namespace(namespace);
        }

        if let Ok(path) = std::env::var("VAULT_CACERT") {
            builder = builder.trust_explicit(vec![std::fs::read(path)?]);
        }

        let skip_verify = std::env::var("VAULT_SKIP_VERIFY")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        if skip_verify {
            builder = builder.trust_any_insecure();
        }

        builder.build().map_err(PkiError::config)
    }

    /// Build the API URL for a path relative to `/v1/`.
    pub fn build_url(&self, path: &str) -> Url {
        let mut url = self.server_url.clone();

        let base = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!(
            "{}/{}/{}",
            base,
            API_PREFIX,
            path.trim_start_matches('/')
        ));
        url
    }
}

/// Builder for [`VaultClientConfig`].
#[derive(Default)]
pub struct VaultClientConfigBuilder {
    server_url: Option<Url>,
    namespace: Option<String>,
    client_identity: Option<ClientIdentity>,
    trust_anchors: Option<TrustAnchors>,
    timeout: Option<Duration>,
    additional_headers: Vec<(String, String)>,
}

impl VaultClientConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Vault server URL.
    pub fn server_url(mut self, url: impl AsRef<str>) -> std::result::Result<Self, url::ParseError> {
        self.server_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Set the Vault server URL from a pre-parsed URL.
    pub fn server_url_parsed(mut self, url: Url) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Set the Vault Enterprise namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the client identity for TLS client authentication.
    pub fn client_identity(mut self, identity: ClientIdentity) -> Self {
        self.client_identity = Some(identity);
        self
    }

    /// Set the client identity from PEM-encoded certificate and key.
    pub fn client_identity_pem(
        mut self,
        cert_pem: impl Into<Vec<u8>>,
        key_pem: impl Into<Vec<u8>>,
    ) -> Self {
        self.client_identity = Some(ClientIdentity::new(cert_pem, key_pem));
        self
    }

    /// Use the built-in root store for server verification.
    pub fn trust_webpki_roots(mut self) -> Self {
        self.trust_anchors = Some(TrustAnchors::WebPki);
        self
    }

    /// Use explicit CA certificates (PEM bundles) for server verification.
    pub fn trust_explicit(mut self, ca_certs: Vec<Vec<u8>>) -> Self {
        self.trust_anchors = Some(TrustAnchors::Explicit(ca_certs));
        self
    }

    /// Accept any server certificate (insecure, for testing only).
    pub fn trust_any_insecure(mut self) -> Self {
        self.trust_anchors = Some(TrustAnchors::InsecureAcceptAny);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add an additional HTTP header to all requests.
    pub fn add_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_headers.push((name.into(), value.into()));
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the server URL is not set.
    pub fn build(self) -> std::result::Result<VaultClientConfig, &'static str> {
        let server_url = self.server_url.ok_or("server_url is required")?;

        Ok(VaultClientConfig {
            server_url,
            namespace: self.namespace,
            client_identity: self.client_identity,
            trust_anchors: self.trust_anchors.unwrap_or(TrustAnchors::WebPki),
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
            additional_headers: self.additional_headers,
        })
    }
}

/// Client identity for TLS client certificate authentication.
#[derive(Clone)]
pub struct ClientIdentity {
    /// PEM-encoded certificate chain, leaf first.
    pub cert_pem: Vec<u8>,

    /// PEM-encoded private key.
    pub key_pem: Vec<u8>,
}

impl ClientIdentity {
    /// Create a new client identity from PEM-encoded data.
    pub fn new(cert_pem: impl Into<Vec<u8>>, key_pem: impl Into<Vec<u8>>) -> Self {
        Self {
            cert_pem: cert_pem.into(),
            key_pem: key_pem.into(),
        }
    }

    /// Create a client identity from file paths.
    pub fn from_files(
        cert_path: impl AsRef<std::path::Path>,
        key_path: impl AsRef<std::path::Path>,
    ) -> std::io::Result<Self> {
        let cert_pem = std::fs::read(cert_path)?;
        let key_pem = std::fs::read(key_path)?;
        Ok(Self { cert_pem, key_pem })
    }
}

/// Trust anchor configuration for server certificate verification.
#[derive(Clone)]
pub enum TrustAnchors {
    /// Use the built-in root CA store.
    WebPki,

    /// Use explicit CA certificates (PEM-encoded, possibly bundles).
    Explicit(Vec<Vec<u8>>),

    /// Accept any server certificate (insecure, for testing only).
    ///
    /// **WARNING**: This disables all server certificate verification.
    InsecureAcceptAny,
}

impl std::fmt::Debug for TrustAnchors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WebPki => write!(f, "WebPki"),
            Self::Explicit(certs) => write!(f, "Explicit({} bundles)", certs.len()),
            Self::InsecureAcceptAny => write!(f, "InsecureAcceptAny"),
        }
    }
}
