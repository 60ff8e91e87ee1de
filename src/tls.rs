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

//! TLS configuration helpers for the Vault client.

use rustls::pki_types::CertificateDer;

use crate::config::{ClientIdentity, TrustAnchors, VaultClientConfig};
use crate::error::{PkiError, Result};

/// Build a reqwest Client with the appropriate TLS configuration.
pub fn build_http_client(config: &VaultClientConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(crate::USER_AGENT)
        .use_rustls_tls();

    match &config.trust_anchors {
        TrustAnchors::WebPki => {
            builder = builder.tls_built_in_root_certs(true);
        }
        TrustAnchors::Explicit(bundles) => {
            builder = builder.tls_built_in_root_certs(false);
            for bundle in bundles {
                for der in parse_pem_certificates(bundle)? {
                    let cert = reqwest::Certificate::from_der(der.as_ref()).map_err(|e| {
                        PkiError::tls(format!("Failed to load CA certificate: {}", e))
                    })?;
                    builder = builder.add_root_certificate(cert);
                }
            }
        }
        TrustAnchors::InsecureAcceptAny => {
            builder = builder
                .tls_built_in_root_certs(false)
                .danger_accept_invalid_certs(true);
        }
    }

    if let Some(ref identity) = config.client_identity {
        builder = builder.identity(build_reqwest_identity(identity)?);
    }

    builder = builder.min_tls_version(reqwest::tls::Version::TLS_1_2);

    let mut headers = reqwest::header::HeaderMap::new();
    for (name, value) in &config.additional_headers {
        if let (Ok(name), Ok(value)) = (
            reqwest::header::HeaderName::try_from(name.as_str()),
            reqwest::header::HeaderValue::try_from(value.as_str()),
        ) {
            headers.insert(name, value);
        } else {
            tracing::warn!("Ignoring invalid additional header '{}'", name);
        }
    }
    builder = builder.default_headers(headers);

    builder
        .build()
        .map_err(|e| PkiError::tls(format!("Failed to build HTTP client: {}", e)))
}

/// Build a reqwest Identity from PEM-encoded certificate and key.
fn build_reqwest_identity(identity: &ClientIdentity) -> Result<reqwest::Identity> {
    let mut pem_data = identity.cert_pem.clone();
    pem_data.extend_from_slice(b"\n");
    pem_data.extend_from_slice(&identity.key_pem);

    reqwest::Identity::from_pem(&pem_data)
        .map_err(|e| PkiError::tls(format!("Failed to create client identity: {}", e)))
}

/// Split a PEM bundle into its DER-encoded certificates.
pub fn parse_pem_certificates(pem_data: &[u8]) -> Result<Vec<CertificateDer<'static>>> {
    let mut reader = std::io::BufReader::new(pem_data);
    let certs: Vec<_> = rustls_pemfile::certs(&mut reader)
        .filter_map(|result| result.ok())
        .collect();

    if certs.is_empty() {
        return Err(PkiError::tls("No certificates found in PEM data"));
    }

    Ok(certs)
}
