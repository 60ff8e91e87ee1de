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

//! PKI option and result types.
//!
//! The caller-facing model lives in [`options`] and [`results`]; the JSON
//! bodies exchanged with Vault live in [`wire`]. Translation between the two
//! is done per operation in [`crate::operations`].

pub mod options;
pub mod results;
pub mod wire;

pub use options::{
    ConfigCrlOptions, ConfigUrlsOptions, EnableEngineOptions, GenerateCertificateOptions,
    GenerateIntermediateCsrOptions, GenerateRootOptions, KeyGeneration, RoleOptions,
    SignIntermediateCaOptions, SubjectAlternativeNames, SubjectFields, TidyOptions,
};
pub use results::{
    GeneratedCertificate, GeneratedIntermediateCsr, GeneratedRootCertificate, SignedCertificate,
};

use std::fmt;
use std::str::FromStr;

use crate::error::PkiError;

/// Type of a generated or expected private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateKeyType {
    /// RSA key.
    Rsa,
    /// Elliptic-curve key.
    Ec,
    /// Ed25519 key.
    Ed25519,
    /// Any key type (role policy only).
    Any,
}

impl CertificateKeyType {
    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rsa => "RSA",
            Self::Ec => "EC",
            Self::Ed25519 => "ED25519",
            Self::Any => "ANY",
        }
    }

    /// Wire form: the name, lower-cased.
    pub fn to_wire(&self) -> String {
        self.name().to_ascii_lowercase()
    }
}

impl FromStr for CertificateKeyType {
    type Err = PkiError;

    /// Parse a wire value, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RSA" => Ok(Self::Rsa),
            "EC" => Ok(Self::Ec),
            "ED25519" => Ok(Self::Ed25519),
            "ANY" => Ok(Self::Any),
            _ => Err(PkiError::encoding(format!("unknown key type '{}'", s))),
        }
    }
}

impl fmt::Display for CertificateKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Name as stored by Vault.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = PkiError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($wire) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(PkiError::encoding(format!(concat!("unknown ", $what, " '{}'"), s)))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

named_enum! {
    /// Key usage constraint on issued certificates.
    CertificateKeyUsage, "key usage" {
        /// digitalSignature
        DigitalSignature => "DigitalSignature",
        /// contentCommitment (non-repudiation)
        ContentCommitment => "ContentCommitment",
        /// keyEncipherment
        KeyEncipherment => "KeyEncipherment",
        /// dataEncipherment
        DataEncipherment => "DataEncipherment",
        /// keyAgreement
        KeyAgreement => "KeyAgreement",
        /// keyCertSign
        CertSign => "CertSign",
        /// cRLSign
        CrlSign => "CRLSign",
        /// encipherOnly
        EncipherOnly => "EncipherOnly",
        /// decipherOnly
        DecipherOnly => "DecipherOnly",
    }
}

named_enum! {
    /// Extended key usage constraint on issued certificates.
    CertificateExtendedKeyUsage, "extended key usage" {
        /// Any purpose.
        Any => "Any",
        /// TLS server authentication.
        ServerAuth => "ServerAuth",
        /// TLS client authentication.
        ClientAuth => "ClientAuth",
        /// Code signing.
        CodeSigning => "CodeSigning",
        /// S/MIME.
        EmailProtection => "EmailProtection",
        /// IPsec end system.
        IpsecEndSystem => "IPSECEndSystem",
        /// IPsec tunnel.
        IpsecTunnel => "IPSECTunnel",
        /// IPsec user.
        IpsecUser => "IPSECUser",
        /// Time stamping.
        TimeStamping => "TimeStamping",
        /// OCSP response signing.
        OcspSigning => "OCSPSigning",
        /// Microsoft Server Gated Crypto.
        MicrosoftServerGatedCrypto => "MicrosoftServerGatedCrypto",
        /// Netscape Server Gated Crypto.
        NetscapeServerGatedCrypto => "NetscapeServerGatedCrypto",
        /// Microsoft commercial code signing.
        MicrosoftCommercialCodeSigning => "MicrosoftCommercialCodeSigning",
        /// Microsoft kernel code signing.
        MicrosoftKernelCodeSigning => "MicrosoftKernelCodeSigning",
    }
}

/// Fixed serials understood by `cert/{serial}`.
pub mod serials {
    /// The mount's CA certificate.
    pub const CA: &str = "ca";

    /// The mount's CA chain.
    pub const CA_CHAIN: &str = "ca_chain";

    /// The mount's current CRL.
    pub const CRL: &str = "crl";
}

/// Convert a listing serial (`1a-2b-3c`) to issuance form (`1a:2b:3c`).
pub fn normalize_serial(serial: &str) -> String {
    serial.replace('-', ":")
}
