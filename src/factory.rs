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

//! Entry point: binds engines to mounts and manages the mounts themselves.

use std::sync::Arc;

use crate::auth::TokenSource;
use crate::config::VaultClientConfig;
use crate::engine::PkiEngineClient;
use crate::error::Result;
use crate::operations::config::encode_enable;
use crate::pki::PkiSecretEngine;
use crate::sys::SystemBackend;
use crate::transport::VaultClient;
use crate::types::EnableEngineOptions;

/// Creates [`PkiSecretEngine`] instances and mounts or unmounts the engine.
#[derive(Clone)]
pub struct PkiSecretEngineFactory {
    engine: PkiEngineClient,
    sys: SystemBackend,
    tokens: Arc<dyn TokenSource>,
}

impl std::fmt::Debug for PkiSecretEngineFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PkiSecretEngineFactory")
            .field("server_url", &self.engine.vault().config().server_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PkiSecretEngineFactory {
    /// Build the HTTP client from `config` and use `tokens` for every call.
    ///
    /// # Errors
    ///
    /// Returns an error if TLS configuration fails.
    pub fn new(config: VaultClientConfig, tokens: impl TokenSource + 'static) -> Result<Self> {
        let vault = Arc::new(VaultClient::new(config)?);
        Ok(Self::with_client(vault, Arc::new(tokens)))
    }

    /// Share an existing Vault client and token source.
    pub fn with_client(vault: Arc<VaultClient>, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            engine: PkiEngineClient::new(vault.clone()),
            sys: SystemBackend::new(vault),
            tokens,
        }
    }

    /// Bind an engine to `mount`. No request is made.
    pub fn engine(&self, mount: impl Into<String>) -> PkiSecretEngine {
        PkiSecretEngine::new(mount, self.engine.clone(), self.tokens.clone())
    }

    /// Mount a PKI engine at `mount`.
    pub async fn enable(
        &self,
        mount: &str,
        description: &str,
        options: &EnableEngineOptions,
    ) -> Result<()> {
        let token = self.tokens.token().await?;
        self.sys
            .enable_engine(&token, mount, &encode_enable(description, options))
            .await?;

        tracing::info!("Enabled PKI engine at {}", mount);
        Ok(())
    }

    /// Unmount the engine at `mount`, destroying its CA and certificates.
    pub async fn disable(&self, mount: &str) -> Result<()> {
        let token = self.tokens.token().await?;
        self.sys.disable_engine(&token, mount).await?;

        tracing::info!("Disabled PKI engine at {}", mount);
        Ok(())
    }

    /// Probe whether a PKI engine answers at `mount`.
    ///
    /// Reads the mount's URL configuration; any failure, including a missing
    /// token or insufficient permissions, counts as not enabled.
    pub async fn is_enabled(&self, mount: &str) -> bool {
        match self.engine(mount).read_urls_config().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("PKI probe of {} failed: {}", mount, e);
                false
            }
        }
    }
}
