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

//! Caller-facing result types.
//!
//! Certificates, chains and keys are PEM strings passed through untouched.
//! Private keys are only present when the caller asked for them and are
//! redacted from `Debug` output.

use std::fmt;

use super::CertificateKeyType;

/// A leaf certificate issued by the mount's CA, key generated by Vault.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedCertificate {
    /// Serial number, colon-delimited.
    pub serial_number: String,
    /// Issued certificate.
    pub certificate: String,
    /// Issuing CA certificate.
    pub issuing_ca: String,
    /// Full CA chain.
    pub ca_chain: Vec<String>,
    /// Type of the generated private key.
    pub private_key_type: Option<CertificateKeyType>,
    /// Generated private key.
    pub private_key: Option<String>,
}

impl fmt::Debug for GeneratedCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedCertificate")
            .field("serial_number", &self.serial_number)
            .field("ca_chain", &self.ca_chain.len())
            .field("private_key_type", &self.private_key_type)
            .field("private_key", &self.private_key.is_some())
            .finish()
    }
}

/// A certificate signed from a caller-supplied CSR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedCertificate {
    /// Serial number, colon-delimited.
    pub serial_number: String,
    /// Signed certificate.
    pub certificate: String,
    /// Issuing CA certificate.
    pub issuing_ca: String,
    /// Full CA chain.
    pub ca_chain: Vec<String>,
}

/// A generated self-signed root CA.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedRootCertificate {
    /// Serial number, colon-delimited.
    pub serial_number: String,
    /// Root certificate.
    pub certificate: String,
    /// Issuing CA (the root itself).
    pub issuing_ca: String,
    /// Type of the generated private key.
    pub private_key_type: Option<CertificateKeyType>,
    /// Generated private key, only when exported.
    pub private_key: Option<String>,
}

impl fmt::Debug for GeneratedRootCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedRootCertificate")
            .field("serial_number", &self.serial_number)
            .field("private_key_type", &self.private_key_type)
            .field("private_key", &self.private_key.is_some())
            .finish()
    }
}

/// A generated intermediate CA CSR.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedIntermediateCsr {
    /// Certificate signing request.
    pub csr: String,
    /// Type of the generated private key.
    pub private_key_type: Option<CertificateKeyType>,
    /// Generated private key, only when exported.
    pub private_key: Option<String>,
}

impl fmt::Debug for GeneratedIntermediateCsr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedIntermediateCsr")
            .field("private_key_type", &self.private_key_type)
            .field("private_key", &self.private_key.is_some())
            .finish()
    }
}
