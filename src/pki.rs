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

//! Certificate and CA lifecycle operations on one PKI mount.

use std::sync::Arc;

use time::OffsetDateTime;

use crate::auth::TokenSource;
use crate::engine::PkiEngineClient;
use crate::error::{PkiError, Result};
use crate::operations::{ca, certificates, config, require_data, roles};
use crate::types::wire::{ConfigCaBody, RevokeCertificateBody, SetSignedIntermediateCaBody};
use crate::types::{
    serials, ConfigCrlOptions, ConfigUrlsOptions, GenerateCertificateOptions,
    GenerateIntermediateCsrOptions, GenerateRootOptions, GeneratedCertificate,
    GeneratedIntermediateCsr, GeneratedRootCertificate, RoleOptions, SignIntermediateCaOptions,
    SignedCertificate, TidyOptions,
};

/// PKI secrets engine bound to a mount path.
///
/// Holds nothing but the mount, a shared engine client and a token source;
/// every call is a fresh round trip. Instances are cheap to create and to
/// clone, and any number may be used concurrently.
///
/// Operations that return a payload fail with [`PkiError::NoData`] when
/// Vault answers without one. Operations that only cause a side effect
/// succeed on any 2xx status.
///
/// # Example
///
/// ```no_run
/// use vault_pki_client::{GenerateCertificateOptions, PkiSecretEngineFactory, StaticToken, VaultClientConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VaultClientConfig::builder()
///     .server_url("https://vault.example.com:8200")?
///     .build()?;
///
/// let factory = PkiSecretEngineFactory::new(config, StaticToken::from_env()?)?;
/// let pki = factory.engine("pki");
///
/// let issued = pki
///     .generate_certificate("web", &GenerateCertificateOptions::for_common_name("www.example.com"))
///     .await?;
/// println!("Issued {}", issued.serial_number);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PkiSecretEngine {
    mount: String,
    engine: PkiEngineClient,
    tokens: Arc<dyn TokenSource>,
}

impl std::fmt::Debug for PkiSecretEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PkiSecretEngine")
            .field("mount", &self.mount)
            .finish_non_exhaustive()
    }
}

impl PkiSecretEngine {
    /// Bind an engine client to `mount`.
    pub fn new(mount: impl Into<String>, engine: PkiEngineClient, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            mount: mount.into(),
            engine,
            tokens,
        }
    }

    /// The mount path this engine is bound to.
    pub fn mount(&self) -> &str {
        &self.mount
    }

    async fn token(&self) -> Result<String> {
        self.tokens.token().await
    }

    // =========================================================================
    // CA material and CRL
    // =========================================================================

    /// Fetch the mount's CA certificate.
    ///
    /// # Errors
    ///
    /// Fails with [`PkiError::NoData`] when the mount has no CA.
    pub async fn get_certificate_authority(&self) -> Result<String> {
        self.get_fixed(serials::CA).await
    }

    /// Fetch the mount's CA chain.
    pub async fn get_certificate_authority_chain(&self) -> Result<String> {
        self.get_fixed(serials::CA_CHAIN).await
    }

    /// Fetch the mount's current CRL.
    pub async fn get_certificate_revocation_list(&self) -> Result<String> {
        self.get_fixed(serials::CRL).await
    }

    async fn get_fixed(&self, serial: &str) -> Result<String> {
        self.get_certificate(serial)
            .await?
            .ok_or_else(|| PkiError::no_data(format!("No {} stored in {}", serial, self.mount)))
    }

    /// Install CA material (certificate, optional chain, private key).
    pub async fn config_certificate_authority(&self, pem_bundle: &str) -> Result<()> {
        let token = self.token().await?;
        let body = ConfigCaBody {
            pem_bundle: pem_bundle.to_string(),
        };

        self.engine.config_ca(&token, &self.mount, &body).await?;
        tracing::info!("Installed CA bundle in {}", self.mount);
        Ok(())
    }

    /// Rebuild the CRL now.
    pub async fn rotate_certificate_revocation_list(&self) -> Result<bool> {
        let token = self.token().await?;
        let envelope = self.engine.rotate_crl(&token, &self.mount).await?;
        Ok(require_data(envelope)?.success)
    }

    // =========================================================================
    // Mount configuration
    // =========================================================================

    /// Set the published URLs.
    pub async fn config_urls(&self, options: &ConfigUrlsOptions) -> Result<()> {
        let token = self.token().await?;
        self.engine
            .write_urls(&token, &self.mount, &config::encode_urls(options))
            .await
    }

    /// Read the published URLs.
    pub async fn read_urls_config(&self) -> Result<ConfigUrlsOptions> {
        let token = self.token().await?;
        let envelope = self.engine.read_urls(&token, &self.mount).await?;
        Ok(config::decode_urls(require_data(envelope)?))
    }

    /// Set CRL expiry and enablement.
    pub async fn config_crl(&self, options: &ConfigCrlOptions) -> Result<()> {
        let token = self.token().await?;
        self.engine
            .write_crl(&token, &self.mount, &config::encode_crl(options))
            .await
    }

    /// Read the CRL configuration.
    pub async fn read_crl_config(&self) -> Result<ConfigCrlOptions> {
        let token = self.token().await?;
        let envelope = self.engine.read_crl(&token, &self.mount).await?;
        Ok(config::decode_crl(require_data(envelope)?))
    }

    /// Start a tidy run. Vault performs it in the background.
    pub async fn tidy(&self, options: &TidyOptions) -> Result<()> {
        let token = self.token().await?;
        self.engine
            .tidy(&token, &self.mount, &config::encode_tidy(options))
            .await
    }

    // =========================================================================
    // Certificates
    // =========================================================================

    /// List the serials of stored certificates, colon-delimited.
    pub async fn get_certificates(&self) -> Result<Vec<String>> {
        let token = self.token().await?;
        let envelope = self.engine.list_certificates(&token, &self.mount).await?;
        Ok(certificates::decode_certificate_list(require_data(envelope)?))
    }

    /// Fetch a certificate by serial, in colon or hyphen form.
    ///
    /// Returns `None` when Vault has no certificate under that serial.
    pub async fn get_certificate(&self, serial: &str) -> Result<Option<String>> {
        let token = self.token().await?;
        let envelope = self.engine.read_certificate(&token, &self.mount, serial).await?;

        Ok(require_data(envelope)?
            .certificate
            .filter(|certificate| !certificate.trim().is_empty()))
    }

    /// Issue a certificate with a Vault-generated key.
    pub async fn generate_certificate(
        &self,
        role: &str,
        options: &GenerateCertificateOptions,
    ) -> Result<GeneratedCertificate> {
        let token = self.token().await?;
        let body = certificates::encode_generate_certificate(options);

        let envelope = self.engine.issue(&token, &self.mount, role, &body).await?;
        certificates::decode_generated_certificate(require_data(envelope)?)
    }

    /// Sign a caller-supplied CSR.
    pub async fn sign_request(
        &self,
        role: &str,
        pem_signing_request: &str,
        options: &GenerateCertificateOptions,
    ) -> Result<SignedCertificate> {
        let token = self.token().await?;
        let body = certificates::encode_sign_request(pem_signing_request, options);

        let envelope = self.engine.sign(&token, &self.mount, role, &body).await?;
        Ok(certificates::decode_signed_certificate(require_data(envelope)?))
    }

    /// Revoke a certificate and return its revocation time.
    pub async fn revoke_certificate(&self, serial: &str) -> Result<OffsetDateTime> {
        let token = self.token().await?;
        let body = RevokeCertificateBody {
            serial_number: serial.to_string(),
        };

        let envelope = self.engine.revoke(&token, &self.mount, &body).await?;
        certificates::decode_revocation_time(&require_data(envelope)?)
    }

    // =========================================================================
    // Roles
    // =========================================================================

    /// Create or replace a role.
    pub async fn update_role(&self, name: &str, options: &RoleOptions) -> Result<()> {
        let token = self.token().await?;
        self.engine
            .write_role(&token, &self.mount, name, &roles::encode_role(options))
            .await
    }

    /// Read a role.
    pub async fn get_role(&self, name: &str) -> Result<RoleOptions> {
        let token = self.token().await?;
        let envelope = self.engine.read_role(&token, &self.mount, name).await?;
        roles::decode_role(require_data(envelope)?)
    }

    /// List role names. Empty when no role exists.
    pub async fn get_roles(&self) -> Result<Vec<String>> {
        let token = self.token().await?;
        let envelope = self.engine.list_roles(&token, &self.mount).await?;
        Ok(require_data(envelope)?.keys)
    }

    /// Delete a role.
    pub async fn delete_role(&self, name: &str) -> Result<()> {
        let token = self.token().await?;
        self.engine.delete_role(&token, &self.mount, name).await
    }

    // =========================================================================
    // Certificate authority
    // =========================================================================

    /// Generate a self-signed root, replacing any CA in the mount.
    pub async fn generate_root(&self, options: &GenerateRootOptions) -> Result<GeneratedRootCertificate> {
        let token = self.token().await?;
        let body = ca::encode_generate_root(options);

        let envelope = self
            .engine
            .generate_root(&token, &self.mount, options.key.export_segment(), &body)
            .await?;
        let root = ca::decode_generated_root(require_data(envelope)?)?;

        tracing::info!("Generated root CA {} in {}", root.serial_number, self.mount);
        Ok(root)
    }

    /// Delete the mount's CA and its key.
    pub async fn delete_root(&self) -> Result<()> {
        let token = self.token().await?;
        self.engine.delete_root(&token, &self.mount).await?;

        tracing::info!("Deleted root CA in {}", self.mount);
        Ok(())
    }

    /// Sign an intermediate CA CSR with this mount's CA.
    ///
    /// The result is returned to the caller, not installed anywhere.
    pub async fn sign_intermediate_ca(
        &self,
        pem_signing_request: &str,
        options: &SignIntermediateCaOptions,
    ) -> Result<SignedCertificate> {
        let token = self.token().await?;
        let body = ca::encode_sign_intermediate(pem_signing_request, options);

        let envelope = self.engine.sign_intermediate(&token, &self.mount, &body).await?;
        Ok(certificates::decode_signed_certificate(require_data(envelope)?))
    }

    /// Generate an intermediate CA key and CSR.
    ///
    /// The mount's CA does not change until the signed certificate is
    /// installed with [`set_signed_intermediate_ca`](Self::set_signed_intermediate_ca).
    pub async fn generate_intermediate_csr(
        &self,
        options: &GenerateIntermediateCsrOptions,
    ) -> Result<GeneratedIntermediateCsr> {
        let token = self.token().await?;
        let body = ca::encode_generate_intermediate_csr(options);

        let envelope = self
            .engine
            .generate_intermediate(&token, &self.mount, options.key.export_segment(), &body)
            .await?;
        ca::decode_generated_csr(require_data(envelope)?)
    }

    /// Install a signed intermediate certificate as the mount's CA.
    pub async fn set_signed_intermediate_ca(&self, pem_certificate: &str) -> Result<()> {
        let token = self.token().await?;
        let body = SetSignedIntermediateCaBody {
            certificate: pem_certificate.to_string(),
        };

        self.engine
            .set_signed_intermediate(&token, &self.mount, &body)
            .await?;

        tracing::info!("Installed signed intermediate CA in {}", self.mount);
        Ok(())
    }
}
