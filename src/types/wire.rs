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

//! JSON bodies exchanged with the PKI engine.
//!
//! One body/data pair per endpoint, named after Vault's own field names.
//! Absent optional fields are omitted from requests, never sent as null.

use serde::{Deserialize, Deserializer, Serialize};

/// Certificate encoding requested from Vault.
pub const CERTIFICATE_FORMAT: &str = "pem";

/// Private key encoding requested from Vault.
pub const KEY_FORMAT: &str = "pkcs8";

/// Accept a duration either as a string (`"72h"`) or integer seconds.
fn lenient_duration<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Seconds(i64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Seconds(seconds) => seconds.to_string(),
    }))
}

// =============================================================================
// Certificates
// =============================================================================

/// Data of `cert/{serial}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateData {
    /// PEM certificate, chain or CRL.
    #[serde(default)]
    pub certificate: Option<String>,
}

/// Data of a key listing (`certs`, `roles`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyListData {
    /// Listed keys.
    #[serde(default)]
    pub keys: Vec<String>,
}

/// Subject alternative names as sent to Vault.
///
/// DNS/IP/URI names are comma-joined strings; other SANs stay a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SansData {
    /// Comma-joined DNS names and emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_names: Option<String>,
    /// Comma-joined IP addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_sans: Option<String>,
    /// Comma-joined URIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_sans: Option<String>,
    /// Other SANs, one `<oid>;UTF8:<value>` per element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_sans: Option<Vec<String>>,
    /// Exclude the CN from the SANs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_cn_from_sans: Option<bool>,
}

/// Body of `issue/{role}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateCertificateBody {
    /// Subject CN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    /// SANs.
    #[serde(flatten)]
    pub sans: SansData,
    /// Requested TTL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    /// Certificate encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Private key encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_format: Option<String>,
}

/// Data of `issue/{role}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateCertificateData {
    /// Issued certificate.
    #[serde(default)]
    pub certificate: String,
    /// Issuing CA.
    #[serde(default)]
    pub issuing_ca: String,
    /// CA chain.
    #[serde(default)]
    pub ca_chain: Option<Vec<String>>,
    /// Serial number.
    #[serde(default)]
    pub serial_number: String,
    /// Private key type (`rsa`, `ec`, ...).
    #[serde(default)]
    pub private_key_type: Option<String>,
    /// Private key.
    #[serde(default)]
    pub private_key: Option<String>,
}

/// Body of `sign/{role}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignCertificateRequestBody {
    /// PEM CSR.
    pub csr: String,
    /// Subject CN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    /// SANs.
    #[serde(flatten)]
    pub sans: SansData,
    /// Requested TTL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    /// Certificate encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Data of `sign/{role}` and `root/sign-intermediate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignCertificateRequestData {
    /// Signed certificate.
    #[serde(default)]
    pub certificate: String,
    /// Issuing CA.
    #[serde(default)]
    pub issuing_ca: String,
    /// CA chain.
    #[serde(default)]
    pub ca_chain: Option<Vec<String>>,
    /// Serial number.
    #[serde(default)]
    pub serial_number: String,
}

/// Body of `revoke`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevokeCertificateBody {
    /// Serial to revoke.
    pub serial_number: String,
}

/// Data of `revoke`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevokeCertificateData {
    /// Revocation time, Unix seconds.
    pub revocation_time: i64,
}

// =============================================================================
// Mount configuration
// =============================================================================

/// Body of `config/ca`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigCaBody {
    /// Certificate, optional chain and private key.
    pub pem_bundle: String,
}

/// Body and data of `config/urls`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUrlsData {
    /// Issuing certificate URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuing_certificates: Option<Vec<String>>,
    /// CRL distribution point URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crl_distribution_points: Option<Vec<String>>,
    /// OCSP server URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocsp_servers: Option<Vec<String>>,
}

/// Body and data of `config/crl`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigCrlData {
    /// CRL validity.
    #[serde(
        default,
        deserialize_with = "lenient_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry: Option<String>,
    /// Disable CRL building.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable: Option<bool>,
}

/// Data of `crl/rotate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrlRotateData {
    /// Whether the CRL was rebuilt.
    #[serde(default)]
    pub success: bool,
}

/// Body of `tidy`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TidyBody {
    /// Tidy the certificate store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tidy_cert_store: Option<bool>,
    /// Tidy the revocation list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tidy_revoked_certs: Option<bool>,
    /// Safety buffer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_buffer: Option<String>,
}

// =============================================================================
// Roles
// =============================================================================

/// Body of a role write and data of a role read.
///
/// Field names mirror Vault's role API.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleData {
    #[serde(default, deserialize_with = "lenient_duration", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(default, deserialize_with = "lenient_duration", skip_serializing_if = "Option::is_none")]
    pub max_ttl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_localhost: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_domains_template: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_bare_domains: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_subdomains: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_glob_domains: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_any_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_hostnames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_ip_sans: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_uri_sans: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_other_sans: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_signing_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_protection_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_bits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext_key_usage: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext_key_usage_oids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_csr_common_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_csr_sans: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ou: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_serial_numbers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_lease: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_store: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_cn: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_identifiers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_constraints_valid_for_non_ca: Option<bool>,
    #[serde(default, deserialize_with = "lenient_duration", skip_serializing_if = "Option::is_none")]
    pub not_before_duration: Option<String>,
}

// =============================================================================
// Certificate authority
// =============================================================================

/// Distinguished-name fields of a CA request, sent as lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectData {
    /// Organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Vec<String>>,
    /// Organizational unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ou: Option<Vec<String>>,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<Vec<String>>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<Vec<String>>,
    /// Locality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<Vec<String>>,
    /// Province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<Vec<String>>,
    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Vec<String>>,
    /// Subject serial number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

/// Body of `root/generate/{exported|internal}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRootBody {
    /// Subject CN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    /// Subject fields.
    #[serde(flatten)]
    pub subject: SubjectData,
    /// SANs.
    #[serde(flatten)]
    pub sans: SansData,
    /// Certificate TTL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    /// Key type (lower-case).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    /// Key size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_bits: Option<u32>,
    /// Path length constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_path_length: Option<i32>,
    /// Name constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_dns_domains: Option<Vec<String>>,
    /// Certificate encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Private key encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_format: Option<String>,
}

/// Data of `root/generate/{exported|internal}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRootData {
    /// Root certificate.
    #[serde(default)]
    pub certificate: String,
    /// Issuing CA.
    #[serde(default)]
    pub issuing_ca: String,
    /// Serial number.
    #[serde(default)]
    pub serial_number: String,
    /// Private key type.
    #[serde(default)]
    pub private_key_type: Option<String>,
    /// Private key, when exported.
    #[serde(default)]
    pub private_key: Option<String>,
}

/// Body of `root/sign-intermediate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignIntermediateCaBody {
    /// PEM CSR.
    pub csr: String,
    /// Subject CN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    /// Subject fields.
    #[serde(flatten)]
    pub subject: SubjectData,
    /// SANs.
    #[serde(flatten)]
    pub sans: SansData,
    /// Certificate TTL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    /// Path length constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_path_length: Option<i32>,
    /// Use values from the CSR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_csr_values: Option<bool>,
    /// Name constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_dns_domains: Option<Vec<String>>,
    /// Certificate encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Body of `intermediate/generate/{exported|internal}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateIntermediateCsrBody {
    /// Subject CN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    /// Subject fields.
    #[serde(flatten)]
    pub subject: SubjectData,
    /// SANs.
    #[serde(flatten)]
    pub sans: SansData,
    /// Key type (lower-case).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    /// Key size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_bits: Option<u32>,
    /// CSR encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Private key encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_format: Option<String>,
}

/// Data of `intermediate/generate/{exported|internal}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateIntermediateCsrData {
    /// PEM CSR.
    #[serde(default)]
    pub csr: String,
    /// Private key type.
    #[serde(default)]
    pub private_key_type: Option<String>,
    /// Private key, when exported.
    #[serde(default)]
    pub private_key: Option<String>,
}

/// Body of `intermediate/set-signed`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetSignedIntermediateCaBody {
    /// Signed intermediate certificate.
    pub certificate: String,
}

// =============================================================================
// System backend
// =============================================================================

/// Mount tuning sent with `sys/mounts/{mount}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MountConfig {
    /// Default lease TTL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lease_ttl: Option<String>,
    /// Maximum lease TTL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lease_ttl: Option<String>,
}

/// Body of `sys/mounts/{mount}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnableEngineBody {
    /// Engine type, always `pki`.
    #[serde(rename = "type")]
    pub engine_type: String,
    /// Mount description.
    pub description: String,
    /// Mount tuning.
    pub config: MountConfig,
}
