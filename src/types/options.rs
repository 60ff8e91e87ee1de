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

//! Caller-facing option types.
//!
//! Root, intermediate and sign-intermediate options share most of their
//! subject fields. They are assembled from three fragments instead of one
//! flat type: [`SubjectFields`], [`SubjectAlternativeNames`] and
//! [`KeyGeneration`].
//!
//! Durations (TTLs, expiry, safety buffer) are Vault duration strings such as
//! `"72h"` or `"30m"`. Hour is the largest supported suffix.

use super::{CertificateExtendedKeyUsage, CertificateKeyType, CertificateKeyUsage};

/// Subject alternative names requested for a certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectAlternativeNames {
    /// DNS names or email addresses.
    pub alt_names: Option<Vec<String>>,

    /// IP addresses.
    pub ip_sans: Option<Vec<String>>,

    /// URIs.
    pub uri_sans: Option<Vec<String>>,

    /// Custom names in OpenSSL form, `<oid>;UTF8:<value>`.
    pub other_sans: Option<Vec<String>>,

    /// Keep the common name out of the DNS/email SANs.
    pub exclude_cn_from_sans: Option<bool>,
}

/// Distinguished-name fields of a CA subject.
///
/// Each multi-valued field is an ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectFields {
    /// Organization (O).
    pub organization: Option<Vec<String>>,
    /// Organizational Unit (OU).
    pub organizational_unit: Option<Vec<String>>,
    /// Street address.
    pub street_address: Option<Vec<String>>,
    /// Postal code.
    pub postal_code: Option<Vec<String>>,
    /// Locality (L).
    pub locality: Option<Vec<String>>,
    /// Province (ST).
    pub province: Option<Vec<String>>,
    /// Country (C).
    pub country: Option<Vec<String>>,
    /// Subject serial number (SERIALNUMBER).
    pub serial_number: Option<String>,
}

/// Key generation parameters for a CA.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyGeneration {
    /// Desired key type.
    pub key_type: Option<CertificateKeyType>,

    /// Key size in bits. Required by Vault for EC keys.
    pub key_bits: Option<u32>,

    /// Return the generated private key to the caller.
    ///
    /// When false the key never leaves Vault.
    pub export_private_key: bool,
}

impl KeyGeneration {
    /// Path segment selecting key export.
    pub fn export_segment(&self) -> &'static str {
        if self.export_private_key {
            "exported"
        } else {
            "internal"
        }
    }
}

/// Options for issuing or signing a leaf certificate against a role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateCertificateOptions {
    /// Subject Common Name (CN).
    pub common_name: Option<String>,

    /// Subject alternative names.
    pub sans: SubjectAlternativeNames,

    /// Requested TTL; the role's TTL applies when absent.
    pub ttl: Option<String>,
}

impl GenerateCertificateOptions {
    /// Options with just a common name.
    pub fn for_common_name(common_name: impl Into<String>) -> Self {
        Self {
            common_name: Some(common_name.into()),
            ..Self::default()
        }
    }
}

/// Options for generating a self-signed root CA.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateRootOptions {
    /// Subject Common Name (CN).
    pub common_name: Option<String>,

    /// Remaining subject fields.
    pub subject: SubjectFields,

    /// Subject alternative names.
    pub sans: SubjectAlternativeNames,

    /// Certificate TTL.
    pub ttl: Option<String>,

    /// Key parameters and export flag.
    pub key: KeyGeneration,

    /// Maximum path length constraint.
    pub max_path_length: Option<i32>,

    /// DNS domains this CA may issue for (name constraints).
    pub permitted_dns_domains: Option<Vec<String>>,
}

/// Options for generating an intermediate CA CSR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateIntermediateCsrOptions {
    /// Subject Common Name (CN).
    pub common_name: Option<String>,

    /// Remaining subject fields.
    pub subject: SubjectFields,

    /// Subject alternative names.
    pub sans: SubjectAlternativeNames,

    /// Key parameters and export flag.
    pub key: KeyGeneration,
}

/// Options for signing an intermediate CA CSR with this mount's CA.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignIntermediateCaOptions {
    /// Subject Common Name (CN).
    pub common_name: Option<String>,

    /// Remaining subject fields.
    pub subject: SubjectFields,

    /// Subject alternative names.
    pub sans: SubjectAlternativeNames,

    /// Certificate TTL.
    pub ttl: Option<String>,

    /// Maximum path length constraint.
    pub max_path_length: Option<i32>,

    /// Preserve subject, key usages and extensions from the CSR.
    pub use_csr_values: Option<bool>,

    /// DNS domains the intermediate may issue for.
    pub permitted_dns_domains: Option<Vec<String>>,
}

/// Issuance policy stored in a role.
///
/// Subject fields (`subject_organization` ... `subject_country`) are single
/// comma-separated strings here; Vault stores them as lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleOptions {
    /// Default TTL.
    pub ttl: Option<String>,
    /// Maximum TTL.
    pub max_ttl: Option<String>,
    /// Allow `localhost` as a requested name.
    pub allow_localhost: Option<bool>,
    /// Domains certificates may be issued for.
    pub allowed_domains: Option<Vec<String>>,
    /// Allow ACL templates in `allowed_domains`.
    pub allowed_domains_template: Option<bool>,
    /// Allow the allowed domains themselves.
    pub allow_bare_domains: Option<bool>,
    /// Allow subdomains (including wildcards) of the allowed domains.
    pub allow_subdomains: Option<bool>,
    /// Allow glob patterns in `allowed_domains`.
    pub allow_glob_domains: Option<bool>,
    /// Allow any common name.
    pub allow_any_name: Option<bool>,
    /// Require valid host names.
    pub enforce_hostnames: Option<bool>,
    /// Allow IP SANs.
    pub allow_ip_sans: Option<bool>,
    /// Allowed URI SANs (globs allowed).
    pub allowed_uri_sans: Option<Vec<String>>,
    /// Allowed other SANs, `<oid>;UTF8:<value>`.
    pub allowed_other_sans: Option<Vec<String>>,
    /// Flag certificates for server use.
    pub server_flag: Option<bool>,
    /// Flag certificates for client use.
    pub client_flag: Option<bool>,
    /// Flag certificates for code signing.
    pub code_signing_flag: Option<bool>,
    /// Flag certificates for email protection.
    pub email_protection_flag: Option<bool>,
    /// Key type for generated keys and submitted CSRs.
    pub key_type: Option<CertificateKeyType>,
    /// Key size in bits.
    pub key_bits: Option<u32>,
    /// Allowed key usages.
    pub key_usage: Option<Vec<CertificateKeyUsage>>,
    /// Allowed extended key usages.
    pub ext_key_usage: Option<Vec<CertificateExtendedKeyUsage>>,
    /// Extended key usage OIDs.
    pub ext_key_usage_oids: Option<Vec<String>>,
    /// Take the CN from the CSR when signing.
    pub use_csr_common_name: Option<bool>,
    /// Take the SANs from the CSR when signing.
    pub use_csr_sans: Option<bool>,
    /// Organization (O), comma-separated.
    pub subject_organization: Option<String>,
    /// Organizational Unit (OU), comma-separated.
    pub subject_organizational_unit: Option<String>,
    /// Street address, comma-separated.
    pub subject_street_address: Option<String>,
    /// Postal code, comma-separated.
    pub subject_postal_code: Option<String>,
    /// Locality (L), comma-separated.
    pub subject_locality: Option<String>,
    /// Province (ST), comma-separated.
    pub subject_province: Option<String>,
    /// Country (C), comma-separated.
    pub subject_country: Option<String>,
    /// Allowed subject serial numbers.
    pub allowed_serial_numbers: Option<Vec<String>>,
    /// Attach Vault leases to issued certificates.
    pub generate_lease: Option<bool>,
    /// Do not store issued certificates.
    pub no_store: Option<bool>,
    /// Require a common name.
    pub require_cn: Option<bool>,
    /// Certificate policy OIDs.
    pub policy_identifiers: Option<Vec<String>>,
    /// Mark basic constraints valid on non-CA certificates.
    pub basic_constraints_valid_for_non_ca: Option<bool>,
    /// Not-before backdating.
    pub not_before_duration: Option<String>,
}

/// Published URL configuration of a mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUrlsOptions {
    /// Issuing Certificate (AIA) URLs.
    pub issuing_certificates: Option<Vec<String>>,
    /// CRL Distribution Point URLs.
    pub crl_distribution_points: Option<Vec<String>>,
    /// OCSP server URLs.
    pub ocsp_servers: Option<Vec<String>>,
}

/// CRL configuration of a mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigCrlOptions {
    /// CRL validity duration.
    pub expiry: Option<String>,
    /// Disable CRL building.
    pub disable: Option<bool>,
}

/// Options for a tidy run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TidyOptions {
    /// Remove expired certificates from storage.
    pub tidy_cert_store: Option<bool>,
    /// Remove expired entries from the revocation list.
    pub tidy_revoked_certs: Option<bool>,
    /// Grace period past expiry before removal.
    pub safety_buffer: Option<String>,
}

/// Options for enabling a PKI mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnableEngineOptions {
    /// Default lease TTL.
    pub default_lease_ttl: Option<String>,
    /// Maximum lease TTL.
    pub max_lease_ttl: Option<String>,
}
