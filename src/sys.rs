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

//! System backend: mounting and unmounting secrets engines.

use std::sync::Arc;

use reqwest::StatusCode;

use crate::error::Result;
use crate::transport::VaultClient;
use crate::types::wire::EnableEngineBody;

/// Mount table path.
pub const MOUNTS_PATH: &str = "sys/mounts";

/// Client for `sys/mounts/{mount}`.
#[derive(Debug, Clone)]
pub struct SystemBackend {
    vault: Arc<VaultClient>,
}

impl SystemBackend {
    /// Create a system backend client on top of a shared Vault client.
    pub fn new(vault: Arc<VaultClient>) -> Self {
        Self { vault }
    }

    /// `POST sys/mounts/{mount}`.
    pub async fn enable_engine(&self, token: &str, mount: &str, body: &EnableEngineBody) -> Result<()> {
        self.vault
            .post_no_content(&mounts_path(mount), token, body, StatusCode::NO_CONTENT)
            .await
    }

    /// `DELETE sys/mounts/{mount}`.
    pub async fn disable_engine(&self, token: &str, mount: &str) -> Result<()> {
        self.vault
            .delete(&mounts_path(mount), token, StatusCode::NO_CONTENT)
            .await
    }
}

fn mounts_path(mount: &str) -> String {
    format!("{}/{}", MOUNTS_PATH, mount.trim_matches('/'))
}
