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

//! Credential sources.
//!
//! Every call asks its [`TokenSource`] for a token. Acquisition, caching
//! and renewal belong to the implementation behind the trait; the PKI
//! client itself holds no credential state.

use async_trait::async_trait;

use crate::error::{PkiError, Result};

/// Supplies a Vault client token per call.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Return the token to send as `X-Vault-Token`.
    async fn token(&self) -> Result<String>;
}

/// A fixed token.
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Wrap an existing token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Read the token from `VAULT_TOKEN`.
    pub fn from_env() -> Result<Self> {
        std::env::var("VAULT_TOKEN")
            .map(Self::new)
            .map_err(|_| PkiError::token("VAULT_TOKEN is not set"))
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken").finish_non_exhaustive()
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<String> {
        if self.token.is_empty() {
            return Err(PkiError::token("empty token"));
        }
        Ok(self.token.clone())
    }
}
