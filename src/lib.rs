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

//! # vault-pki-client
//!
//! An async client for the HashiCorp Vault PKI secrets engine.
//!
//! The crate is layered:
//!
//! - [`PkiSecretEngine`]: certificate and CA lifecycle operations bound to
//!   one mount, over a typed option/result model
//! - [`PkiEngineClient`]: one method per engine endpoint, raw wire bodies
//! - [`PkiSecretEngineFactory`]: binds engines to mounts and enables,
//!   disables or probes the mounts themselves
//!
//! Tokens come from a [`TokenSource`] on every call; the client holds no
//! credential or CA state of its own.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vault_pki_client::{PkiSecretEngineFactory, StaticToken, VaultClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VaultClientConfig::from_env()?;
//!     let factory = PkiSecretEngineFactory::new(config, StaticToken::from_env()?)?;
//!
//!     let pki = factory.engine("pki");
//!     println!("{}", pki.get_certificate_authority().await?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Building a CA hierarchy
//!
//! ```no_run
//! use vault_pki_client::{
//!     GenerateIntermediateCsrOptions, GenerateRootOptions, PkiSecretEngineFactory,
//!     SignIntermediateCaOptions,
//! };
//!
//! # async fn example(factory: PkiSecretEngineFactory) -> Result<(), Box<dyn std::error::Error>> {
//! let root = factory.engine("pki");
//! let intermediate = factory.engine("pki-int");
//!
//! root.generate_root(&GenerateRootOptions {
//!     common_name: Some("Example Root CA".into()),
//!     ttl: Some("87600h".into()),
//!     ..Default::default()
//! })
//! .await?;
//!
//! let csr = intermediate
//!     .generate_intermediate_csr(&GenerateIntermediateCsrOptions {
//!         common_name: Some("Example Intermediate CA".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let signed = root
//!     .sign_intermediate_ca(&csr.csr, &SignIntermediateCaOptions::default())
//!     .await?;
//!
//! intermediate.set_signed_intermediate_ca(&signed.certificate).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Cargo Features
//!
//! - `cli` (default): builds the `vault-pki` command-line tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod config;
pub mod engine;
pub mod error;
pub mod factory;
pub mod operations;
pub mod pki;
pub mod sys;
pub mod tls;
pub mod transport;
pub mod types;

// Re-export main types at crate root for convenience
pub use auth::{StaticToken, TokenSource};
pub use config::{ClientIdentity, TrustAnchors, VaultClientConfig, VaultClientConfigBuilder};
pub use engine::PkiEngineClient;
pub use error::{PkiError, Result};
pub use factory::PkiSecretEngineFactory;
pub use pki::PkiSecretEngine;
pub use transport::{Envelope, VaultClient};
pub use types::{
    CertificateExtendedKeyUsage, CertificateKeyType, CertificateKeyUsage, ConfigCrlOptions,
    ConfigUrlsOptions, EnableEngineOptions, GenerateCertificateOptions,
    GenerateIntermediateCsrOptions, GenerateRootOptions, GeneratedCertificate,
    GeneratedIntermediateCsr, GeneratedRootCertificate, KeyGeneration, RoleOptions,
    SignIntermediateCaOptions, SignedCertificate, SubjectAlternativeNames, SubjectFields,
    TidyOptions,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("vault-pki-client/", env!("CARGO_PKG_VERSION"));
