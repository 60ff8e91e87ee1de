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

//! PKI engine client.
//!
//! One method per engine endpoint. Each method builds the mount-relative
//! path and hands the wire body to [`VaultClient`]; nothing here interprets
//! the payload. The only translation is in [`PkiEngineClient::list_roles`],
//! where a 404 means the mount has no roles yet.

use std::sync::Arc;

use reqwest::StatusCode;

use crate::error::Result;
use crate::transport::{Envelope, VaultClient};
use crate::types::wire::{
    CertificateData, ConfigCaBody, ConfigCrlData, ConfigUrlsData, CrlRotateData,
    GenerateCertificateBody, GenerateCertificateData, GenerateIntermediateCsrBody,
    GenerateIntermediateCsrData, GenerateRootBody, GenerateRootData, KeyListData,
    RevokeCertificateBody, RevokeCertificateData, RoleData, SetSignedIntermediateCaBody,
    SignCertificateRequestBody, SignCertificateRequestData, SignIntermediateCaBody, TidyBody,
};

/// Engine paths, relative to the mount.
pub mod paths {
    /// Certificate by serial.
    pub const CERT: &str = "cert";
    /// Certificate listing.
    pub const CERTS: &str = "certs";
    /// CA bundle install.
    pub const CONFIG_CA: &str = "config/ca";
    /// Published URLs.
    pub const CONFIG_URLS: &str = "config/urls";
    /// CRL configuration.
    pub const CONFIG_CRL: &str = "config/crl";
    /// CRL rebuild.
    pub const CRL_ROTATE: &str = "crl/rotate";
    /// Issue against a role.
    pub const ISSUE: &str = "issue";
    /// Sign a CSR against a role.
    pub const SIGN: &str = "sign";
    /// Revocation.
    pub const REVOKE: &str = "revoke";
    /// Roles.
    pub const ROLES: &str = "roles";
    /// Root generation.
    pub const ROOT_GENERATE: &str = "root/generate";
    /// Root CA.
    pub const ROOT: &str = "root";
    /// Intermediate signing by the root.
    pub const ROOT_SIGN_INTERMEDIATE: &str = "root/sign-intermediate";
    /// Intermediate CSR generation.
    pub const INTERMEDIATE_GENERATE: &str = "intermediate/generate";
    /// Signed intermediate install.
    pub const INTERMEDIATE_SET_SIGNED: &str = "intermediate/set-signed";
    /// Storage cleanup.
    pub const TIDY: &str = "tidy";
}

/// Join a mount and an engine path.
pub fn mount_path(mount: &str, path: &str) -> String {
    format!("{}/{}", mount.trim_matches('/'), path)
}

/// Client for the endpoints of a PKI mount.
#[derive(Debug, Clone)]
pub struct PkiEngineClient {
    vault: Arc<VaultClient>,
}

impl PkiEngineClient {
    /// Create an engine client on top of a shared Vault client.
    pub fn new(vault: Arc<VaultClient>) -> Self {
        Self { vault }
    }

    /// The underlying Vault client.
    pub fn vault(&self) -> &Arc<VaultClient> {
        &self.vault
    }

    // =========================================================================
    // Certificates
    // =========================================================================

    /// `GET cert/{serial}`. Also serves `ca`, `ca_chain` and `crl`.
    pub async fn read_certificate(
        &self,
        token: &str,
        mount: &str,
        serial: &str,
    ) -> Result<Envelope<CertificateData>> {
        let path = mount_path(mount, &format!("{}/{}", paths::CERT, serial));
        self.vault.get(&path, token).await
    }

    /// `LIST certs`.
    pub async fn list_certificates(&self, token: &str, mount: &str) -> Result<Envelope<KeyListData>> {
        self.vault.list(&mount_path(mount, paths::CERTS), token).await
    }

    /// `POST issue/{role}`.
    pub async fn issue(
        &self,
        token: &str,
        mount: &str,
        role: &str,
        body: &GenerateCertificateBody,
    ) -> Result<Envelope<GenerateCertificateData>> {
        let path = mount_path(mount, &format!("{}/{}", paths::ISSUE, role));
        self.vault.post(&path, token, body).await
    }

    /// `POST sign/{role}`.
    pub async fn sign(
        &self,
        token: &str,
        mount: &str,
        role: &str,
        body: &SignCertificateRequestBody,
    ) -> Result<Envelope<SignCertificateRequestData>> {
        let path = mount_path(mount, &format!("{}/{}", paths::SIGN, role));
        self.vault.post(&path, token, body).await
    }

    /// `POST revoke`.
    pub async fn revoke(
        &self,
        token: &str,
        mount: &str,
        body: &RevokeCertificateBody,
    ) -> Result<Envelope<RevokeCertificateData>> {
        self.vault.post(&mount_path(mount, paths::REVOKE), token, body).await
    }

    // =========================================================================
    // Mount configuration
    // =========================================================================

    /// `POST config/ca`.
    pub async fn config_ca(&self, token: &str, mount: &str, body: &ConfigCaBody) -> Result<()> {
        self.vault
            .post_no_content(&mount_path(mount, paths::CONFIG_CA), token, body, StatusCode::NO_CONTENT)
            .await
    }

    /// `POST config/urls`.
    pub async fn write_urls(&self, token: &str, mount: &str, body: &ConfigUrlsData) -> Result<()> {
        self.vault
            .post_no_content(&mount_path(mount, paths::CONFIG_URLS), token, body, StatusCode::NO_CONTENT)
            .await
    }

    /// `GET config/urls`.
    pub async fn read_urls(&self, token: &str, mount: &str) -> Result<Envelope<ConfigUrlsData>> {
        self.vault.get(&mount_path(mount, paths::CONFIG_URLS), token).await
    }

    /// `POST config/crl`.
    pub async fn write_crl(&self, token: &str, mount: &str, body: &ConfigCrlData) -> Result<()> {
        self.vault
            .post_no_content(&mount_path(mount, paths::CONFIG_CRL), token, body, StatusCode::NO_CONTENT)
            .await
    }

    /// `GET config/crl`.
    pub async fn read_crl(&self, token: &str, mount: &str) -> Result<Envelope<ConfigCrlData>> {
        self.vault.get(&mount_path(mount, paths::CONFIG_CRL), token).await
    }

    /// `GET crl/rotate`.
    pub async fn rotate_crl(&self, token: &str, mount: &str) -> Result<Envelope<CrlRotateData>> {
        self.vault.get(&mount_path(mount, paths::CRL_ROTATE), token).await
    }

    /// `POST tidy`. Vault accepts the request and runs it in the background.
    pub async fn tidy(&self, token: &str, mount: &str, body: &TidyBody) -> Result<()> {
        self.vault
            .post_no_content(&mount_path(mount, paths::TIDY), token, body, StatusCode::ACCEPTED)
            .await
    }

    // =========================================================================
    // Roles
    // =========================================================================

    /// `POST roles/{name}`.
    pub async fn write_role(&self, token: &str, mount: &str, name: &str, body: &RoleData) -> Result<()> {
        let path = mount_path(mount, &format!("{}/{}", paths::ROLES, name));
        self.vault
            .post_no_content(&path, token, body, StatusCode::NO_CONTENT)
            .await
    }

    /// `GET roles/{name}`.
    pub async fn read_role(&self, token: &str, mount: &str, name: &str) -> Result<Envelope<RoleData>> {
        let path = mount_path(mount, &format!("{}/{}", paths::ROLES, name));
        self.vault.get(&path, token).await
    }

    /// `LIST roles`.
    ///
    /// Vault answers 404 when no role was ever written; that comes back as
    /// an empty listing.
    pub async fn list_roles(&self, token: &str, mount: &str) -> Result<Envelope<KeyListData>> {
        match self.vault.list(&mount_path(mount, paths::ROLES), token).await {
            Err(e) if e.is_not_found() => {
                tracing::debug!("No roles under {}", mount);
                Ok(Envelope::with_data(KeyListData::default()))
            }
            other => other,
        }
    }

    /// `DELETE roles/{name}`.
    pub async fn delete_role(&self, token: &str, mount: &str, name: &str) -> Result<()> {
        let path = mount_path(mount, &format!("{}/{}", paths::ROLES, name));
        self.vault.delete(&path, token, StatusCode::NO_CONTENT).await
    }

    // =========================================================================
    // Certificate authority
    // =========================================================================

    /// `POST root/generate/{exported|internal}`.
    pub async fn generate_root(
        &self,
        token: &str,
        mount: &str,
        export: &str,
        body: &GenerateRootBody,
    ) -> Result<Envelope<GenerateRootData>> {
        let path = mount_path(mount, &format!("{}/{}", paths::ROOT_GENERATE, export));
        self.vault.post(&path, token, body).await
    }

    /// `DELETE root`.
    pub async fn delete_root(&self, token: &str, mount: &str) -> Result<()> {
        self.vault
            .delete(&mount_path(mount, paths::ROOT), token, StatusCode::NO_CONTENT)
            .await
    }

    /// `POST root/sign-intermediate`.
    pub async fn sign_intermediate(
        &self,
        token: &str,
        mount: &str,
        body: &SignIntermediateCaBody,
    ) -> Result<Envelope<SignCertificateRequestData>> {
        self.vault
            .post(&mount_path(mount, paths::ROOT_SIGN_INTERMEDIATE), token, body)
            .await
    }

    /// `POST intermediate/generate/{exported|internal}`.
    pub async fn generate_intermediate(
        &self,
        token: &str,
        mount: &str,
        export: &str,
        body: &GenerateIntermediateCsrBody,
    ) -> Result<Envelope<GenerateIntermediateCsrData>> {
        let path = mount_path(mount, &format!("{}/{}", paths::INTERMEDIATE_GENERATE, export));
        self.vault.post(&path, token, body).await
    }

    /// `POST intermediate/set-signed`.
    pub async fn set_signed_intermediate(
        &self,
        token: &str,
        mount: &str,
        body: &SetSignedIntermediateCaBody,
    ) -> Result<()> {
        self.vault
            .post_no_content(
                &mount_path(mount, paths::INTERMEDIATE_SET_SIGNED),
                token,
                body,
                StatusCode::NO_CONTENT,
            )
            .await
    }
}
