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

//! Error types for the PKI client.
//!
//! Three families of failure reach callers: transport errors (a non-2xx
//! status from Vault), "no data" errors (a well-formed envelope without a
//! payload) and encoding errors (a wire value the client cannot map onto
//! its typed model). Everything else is plumbing around those.

use thiserror::Error;

/// Result type alias using [`PkiError`].
pub type Result<T> = std::result::Result<T, PkiError>;

/// Message used when an envelope has neither data nor warnings.
pub const UNKNOWN_REMOTE_ERROR: &str = "Unknown remote error";

/// Errors that can occur during PKI engine operations.
#[derive(Debug, Error)]
pub enum PkiError {
    /// TLS configuration error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// HTTP request failed before a status code was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Vault answered with a non-2xx status.
    #[error("Vault error {status}: {}", .errors.join("; "))]
    Vault {
        /// HTTP status code.
        status: u16,
        /// Error messages reported by Vault.
        errors: Vec<String>,
    },

    /// The response envelope carried no data.
    ///
    /// The message is the first warning attached to the envelope, or
    /// [`UNKNOWN_REMOTE_ERROR`] when there was none.
    #[error("{0}")]
    NoData(String),

    /// A wire value could not be mapped onto the client model.
    #[error("Invalid wire value: {0}")]
    Encoding(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The credential source could not supply a token.
    #[error("Token error: {0}")]
    Token(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PkiError {
    /// Create a TLS error with the given message.
    pub fn tls(msg: impl Into<String>) -> Self {
        Self::Tls(msg.into())
    }

    /// Create a Vault transport error.
    pub fn vault(status: u16, errors: Vec<String>) -> Self {
        Self::Vault { status, errors }
    }

    /// Create a "no data" error with the given message.
    pub fn no_data(msg: impl Into<String>) -> Self {
        Self::NoData(msg.into())
    }

    /// Create an encoding error with the given message.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Create a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a token error with the given message.
    pub fn token(msg: impl Into<String>) -> Self {
        Self::Token(msg.into())
    }

    /// Returns the HTTP status code if this is a transport error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Vault { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if Vault answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
