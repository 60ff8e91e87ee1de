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

//! Vault PKI Command-Line Tool
//!
//! Drives one PKI mount of a Vault server: CA material, certificates,
//! roles and the mount itself.
//!
//! # Usage
//!
//! ```text
//! vault-pki [OPTIONS] <COMMAND>
//!
//! Commands:
//!   ca            Print the CA certificate
//!   ca-chain      Print the CA chain
//!   crl           Print the current CRL
//!   rotate-crl    Rebuild the CRL
//!   certs         List certificate serials
//!   cert          Print a certificate by serial
//!   issue         Issue a certificate against a role
//!   revoke        Revoke a certificate
//!   roles         List roles
//!   role          Show a role
//!   write-role    Create or replace a role
//!   delete-role   Delete a role
//!   generate-root Generate a self-signed root CA
//!   delete-root   Delete the mount's CA
//!   tidy          Start a tidy run
//!   enable        Mount the PKI engine
//!   disable       Unmount the PKI engine
//!   status        Probe whether the mount answers
//!
//! Options:
//!   -a, --address <URL>     Vault server address [env: VAULT_ADDR]
//!   -t, --token <TOKEN>     Vault token [env: VAULT_TOKEN]
//!   -m, --mount <PATH>      PKI mount path [default: pki]
//!   -n, --namespace <NS>    Enterprise namespace [env: VAULT_NAMESPACE]
//!       --ca-cert <PATH>    CA bundle for the Vault server [env: VAULT_CACERT]
//!       --insecure          Skip server certificate verification
//!   -v, --verbose           Enable verbose output
//!   -q, --quiet             Suppress non-error output
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Print the CA of the default mount
//! vault-pki ca
//!
//! # Issue a certificate
//! vault-pki issue web --common-name www.example.com --alt-name example.com
//!
//! # Create a mount and a root CA
//! vault-pki --mount pki-root enable --max-lease-ttl 87600h
//! vault-pki --mount pki-root generate-root --common-name "Example Root" --ttl 87600h
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use vault_pki_client::{
    CertificateKeyType, EnableEngineOptions, GenerateCertificateOptions, GenerateRootOptions,
    KeyGeneration, PkiSecretEngineFactory, RoleOptions, StaticToken, SubjectAlternativeNames,
    SubjectFields, TidyOptions, VaultClientConfig,
};

/// Vault PKI Command-Line Tool
#[derive(Parser)]
#[command(name = "vault-pki")]
#[command(author = "U.S. Federal Government")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Certificate lifecycle on a Vault PKI mount", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Vault server address
    #[arg(short, long, global = true, env = "VAULT_ADDR", value_name = "URL")]
    address: Option<String>,

    /// Vault token
    #[arg(short, long, global = true, env = "VAULT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// PKI mount path
    #[arg(short, long, global = true, default_value = "pki", value_name = "PATH")]
    mount: String,

    /// Enterprise namespace
    #[arg(short, long, global = true, env = "VAULT_NAMESPACE", value_name = "NS")]
    namespace: Option<String>,

    /// CA bundle used to verify the Vault server
    #[arg(long, global = true, env = "VAULT_CACERT", value_name = "PATH")]
    ca_cert: Option<PathBuf>,

    /// Skip server certificate verification
    #[arg(long, global = true)]
    insecure: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CA certificate
    Ca,

    /// Print the CA chain
    CaChain,

    /// Print the current CRL
    Crl,

    /// Rebuild the CRL
    RotateCrl,

    /// List certificate serials
    Certs,

    /// Print a certificate by serial
    Cert {
        /// Serial number, colon or hyphen delimited
        serial: String,
    },

    /// Issue a certificate against a role
    Issue {
        /// Role name
        role: String,

        /// Subject Common Name
        #[arg(long, value_name = "CN")]
        common_name: Option<String>,

        /// DNS or email Subject Alternative Names
        #[arg(long = "alt-name", value_name = "NAME")]
        alt_names: Vec<String>,

        /// IP Subject Alternative Names
        #[arg(long = "ip-san", value_name = "IP")]
        ip_sans: Vec<String>,

        /// URI Subject Alternative Names
        #[arg(long = "uri-san", value_name = "URI")]
        uri_sans: Vec<String>,

        /// Requested TTL
        #[arg(long)]
        ttl: Option<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Revoke a certificate
    Revoke {
        /// Serial number, colon or hyphen delimited
        serial: String,
    },

    /// List roles
    Roles,

    /// Show a role
    Role {
        /// Role name
        name: String,
    },

    /// Create or replace a role
    WriteRole {
        /// Role name
        name: String,

        /// Allowed domains
        #[arg(long = "allowed-domain", value_name = "DOMAIN")]
        allowed_domains: Vec<String>,

        /// Allow subdomains of the allowed domains
        #[arg(long)]
        allow_subdomains: bool,

        /// Default TTL
        #[arg(long)]
        ttl: Option<String>,

        /// Maximum TTL
        #[arg(long)]
        max_ttl: Option<String>,

        /// Key type (rsa, ec, ed25519, any)
        #[arg(long)]
        key_type: Option<String>,

        /// Key size in bits
        #[arg(long)]
        key_bits: Option<u32>,
    },

    /// Delete a role
    DeleteRole {
        /// Role name
        name: String,
    },

    /// Generate a self-signed root CA
    GenerateRoot {
        /// Subject Common Name
        #[arg(long, value_name = "CN")]
        common_name: String,

        /// Organization (repeatable)
        #[arg(long, value_name = "O")]
        organization: Vec<String>,

        /// Country (repeatable)
        #[arg(long, value_name = "C")]
        country: Vec<String>,

        /// Certificate TTL
        #[arg(long)]
        ttl: Option<String>,

        /// Key type (rsa, ec, ed25519)
        #[arg(long)]
        key_type: Option<String>,

        /// Key size in bits
        #[arg(long)]
        key_bits: Option<u32>,

        /// Path length constraint
        #[arg(long)]
        max_path_length: Option<i32>,

        /// Return the private key
        #[arg(long)]
        export: bool,
    },

    /// Delete the mount's CA
    DeleteRoot {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Start a tidy run
    Tidy {
        /// Tidy the certificate store
        #[arg(long)]
        cert_store: bool,

        /// Tidy the revocation list
        #[arg(long)]
        revoked: bool,

        /// Grace period past expiry
        #[arg(long, value_name = "DURATION")]
        safety_buffer: Option<String>,
    },

    /// Mount the PKI engine
    Enable {
        /// Mount description
        #[arg(long, default_value = "")]
        description: String,

        /// Default lease TTL
        #[arg(long)]
        default_lease_ttl: Option<String>,

        /// Maximum lease TTL
        #[arg(long)]
        max_lease_ttl: Option<String>,
    },

    /// Unmount the PKI engine
    Disable {
        /// Confirm unmounting
        #[arg(long)]
        yes: bool,
    },

    /// Probe whether the mount answers
    Status,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        tracing::Level::ERROR
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Create runtime for async operations
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Run the command
    let result = runtime.block_on(run_command(cli));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_factory(cli: &Cli) -> Result<PkiSecretEngineFactory, Box<dyn std::error::Error>> {
    let address = cli
        .address
        .as_deref()
        .ok_or("Vault address required (--address or VAULT_ADDR)")?;
    let token = cli
        .token
        .clone()
        .ok_or("Vault token required (--token or VAULT_TOKEN)")?;

    let mut builder = VaultClientConfig::builder().server_url(address)?;

    if let Some(ref namespace) = cli.namespace {
        builder = builder.namespace(namespace.clone());
    }
    if let Some(ref path) = cli.ca_cert {
        builder = builder.trust_explicit(vec![std::fs::read(path)?]);
    }
    if cli.insecure {
        builder = builder.trust_any_insecure();
    }

    let config = builder.build()?;
    Ok(PkiSecretEngineFactory::new(config, StaticToken::new(token))?)
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

fn parse_key_type(value: Option<&str>) -> Result<Option<CertificateKeyType>, Box<dyn std::error::Error>> {
    Ok(value.map(str::parse::<CertificateKeyType>).transpose()?)
}

async fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let factory = build_factory(&cli)?;
    let pki = factory.engine(cli.mount.clone());

    match &cli.command {
        Commands::Ca => println!("{}", pki.get_certificate_authority().await?),
        Commands::CaChain => println!("{}", pki.get_certificate_authority_chain().await?),
        Commands::Crl => println!("{}", pki.get_certificate_revocation_list().await?),
        Commands::RotateCrl => {
            let rebuilt = pki.rotate_certificate_revocation_list().await?;
            if !cli.quiet {
                println!("CRL rebuilt: {}", rebuilt);
            }
        }
        Commands::Certs => {
            for serial in pki.get_certificates().await? {
                println!("{}", serial);
            }
        }
        Commands::Cert { serial } => match pki.get_certificate(serial).await? {
            Some(certificate) => println!("{}", certificate),
            None => return Err(format!("No certificate with serial {}", serial).into()),
        },
        Commands::Issue {
            role,
            common_name,
            alt_names,
            ip_sans,
            uri_sans,
            ttl,
            format,
        } => {
            let options = GenerateCertificateOptions {
                common_name: common_name.clone(),
                sans: SubjectAlternativeNames {
                    alt_names: non_empty(alt_names),
                    ip_sans: non_empty(ip_sans),
                    uri_sans: non_empty(uri_sans),
                    ..Default::default()
                },
                ttl: ttl.clone(),
            };

            let issued = pki.generate_certificate(role, &options).await?;
            match format {
                OutputFormat::Text => {
                    println!("{}", issued.certificate);
                    if let Some(ref key) = issued.private_key {
                        println!("{}", key);
                    }
                    for ca in &issued.ca_chain {
                        println!("{}", ca);
                    }
                }
                OutputFormat::Json => {
                    let value = serde_json::json!({
                        "serial_number": issued.serial_number,
                        "certificate": issued.certificate,
                        "issuing_ca": issued.issuing_ca,
                        "ca_chain": issued.ca_chain,
                        "private_key_type": issued.private_key_type.map(|t| t.to_wire()),
                        "private_key": issued.private_key,
                    });
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
            }
        }
        Commands::Revoke { serial } => {
            let revoked_at = pki.revoke_certificate(serial).await?;
            if !cli.quiet {
                println!("Revoked {} at {}", serial, revoked_at);
            }
        }
        Commands::Roles => {
            for name in pki.get_roles().await? {
                println!("{}", name);
            }
        }
        Commands::Role { name } => print_role(&pki.get_role(name).await?),
        Commands::WriteRole {
            name,
            allowed_domains,
            allow_subdomains,
            ttl,
            max_ttl,
            key_type,
            key_bits,
        } => {
            let options = RoleOptions {
                allowed_domains: non_empty(allowed_domains),
                allow_subdomains: allow_subdomains.then_some(true),
                ttl: ttl.clone(),
                max_ttl: max_ttl.clone(),
                key_type: parse_key_type(key_type.as_deref())?,
                key_bits: *key_bits,
                ..Default::default()
            };
            pki.update_role(name, &options).await?;
        }
        Commands::DeleteRole { name } => pki.delete_role(name).await?,
        Commands::GenerateRoot {
            common_name,
            organization,
            country,
            ttl,
            key_type,
            key_bits,
            max_path_length,
            export,
        } => {
            let options = GenerateRootOptions {
                common_name: Some(common_name.clone()),
                subject: SubjectFields {
                    organization: non_empty(organization),
                    country: non_empty(country),
                    ..Default::default()
                },
                ttl: ttl.clone(),
                key: KeyGeneration {
                    key_type: parse_key_type(key_type.as_deref())?,
                    key_bits: *key_bits,
                    export_private_key: *export,
                },
                max_path_length: *max_path_length,
                ..Default::default()
            };

            let root = pki.generate_root(&options).await?;
            println!("{}", root.certificate);
            if let Some(ref key) = root.private_key {
                println!("{}", key);
            }
        }
        Commands::DeleteRoot { yes } => {
            if !yes {
                return Err("Refusing to delete the CA without --yes".into());
            }
            pki.delete_root().await?;
        }
        Commands::Tidy {
            cert_store,
            revoked,
            safety_buffer,
        } => {
            let options = TidyOptions {
                tidy_cert_store: Some(*cert_store),
                tidy_revoked_certs: Some(*revoked),
                safety_buffer: safety_buffer.clone(),
            };
            pki.tidy(&options).await?;
        }
        Commands::Enable {
            description,
            default_lease_ttl,
            max_lease_ttl,
        } => {
            let options = EnableEngineOptions {
                default_lease_ttl: default_lease_ttl.clone(),
                max_lease_ttl: max_lease_ttl.clone(),
            };
            factory.enable(&cli.mount, description, &options).await?;
        }
        Commands::Disable { yes } => {
            if !yes {
                return Err("Refusing to unmount without --yes".into());
            }
            factory.disable(&cli.mount).await?;
        }
        Commands::Status => {
            let enabled = factory.is_enabled(&cli.mount).await;
            println!(
                "{}: {}",
                cli.mount,
                if enabled { "enabled" } else { "not enabled" }
            );
            if !enabled {
                return Err("PKI engine not reachable".into());
            }
        }
    }

    Ok(())
}

fn print_role(role: &RoleOptions) {
    fn show<T: std::fmt::Debug>(label: &str, value: &Option<T>) {
        if let Some(value) = value {
            println!("{:<28} {:?}", label, value);
        }
    }

    show("ttl", &role.ttl);
    show("max_ttl", &role.max_ttl);
    show("allowed_domains", &role.allowed_domains);
    show("allow_subdomains", &role.allow_subdomains);
    show("allow_bare_domains", &role.allow_bare_domains);
    show("allow_any_name", &role.allow_any_name);
    show("allow_localhost", &role.allow_localhost);
    show("allow_ip_sans", &role.allow_ip_sans);
    show("server_flag", &role.server_flag);
    show("client_flag", &role.client_flag);
    show("key_type", &role.key_type);
    show("key_bits", &role.key_bits);
    show("key_usage", &role.key_usage);
    show("ext_key_usage", &role.ext_key_usage);
    show("subject_organization", &role.subject_organization);
    show("subject_country", &role.subject_country);
}
