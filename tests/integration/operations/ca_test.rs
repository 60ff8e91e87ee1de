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

//! Integration tests for root and intermediate CA management

use crate::integration::{
    FakePkiBackend, MockVaultServer, CSR_PEM, INTERMEDIATE_PEM, KEY_PEM, MOUNT, ROOT_PEM,
};
use serde_json::json;
use vault_pki_client::{
    CertificateKeyType, GenerateIntermediateCsrOptions, GenerateRootOptions, KeyGeneration,
    PkiError, SignIntermediateCaOptions, SubjectFields,
};

fn root_options(export_private_key: bool) -> GenerateRootOptions {
    GenerateRootOptions {
        common_name: Some("Example Root CA".into()),
        subject: SubjectFields {
            organization: Some(vec!["Example".into(), "Example Labs".into()]),
            country: Some(vec!["US".into()]),
            ..Default::default()
        },
        ttl: Some("87600h".into()),
        key: KeyGeneration {
            key_type: Some(CertificateKeyType::Rsa),
            key_bits: Some(4096),
            export_private_key,
        },
        max_path_length: Some(1),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_generate_root_internal() {
    // Start mock server
    let mock = MockVaultServer::start().await;
    mock.mock_write(
        "root/generate/internal",
        json!({
            "certificate": ROOT_PEM,
            "issuing_ca": ROOT_PEM,
            "serial_number": "3e:4f",
            "private_key_type": "rsa"
        }),
    )
    .await;

    // Test: generate root without exporting the key
    let root = mock
        .engine()
        .generate_root(&root_options(false))
        .await
        .expect("Root generation failed");

    // Assert: no key returned
    assert_eq!(root.serial_number, "3e:4f");
    assert_eq!(root.private_key_type, Some(CertificateKeyType::Rsa));
    assert!(root.private_key.is_none());

    // Assert: subject fields sent as lists
    let body = mock.last_body().await;
    assert_eq!(body["organization"], json!(["Example", "Example Labs"]));
    assert_eq!(body["country"], json!(["US"]));
    assert_eq!(body["key_type"], "rsa");
    assert_eq!(body["max_path_length"], 1);
}

#[tokio::test]
async fn test_generate_root_exported() {
    let mock = MockVaultServer::start().await;
    mock.mock_write(
        "root/generate/exported",
        json!({
            "certificate": ROOT_PEM,
            "issuing_ca": ROOT_PEM,
            "serial_number": "3e:4f",
            "private_key_type": "rsa",
            "private_key": KEY_PEM
        }),
    )
    .await;

    let root = mock.engine().generate_root(&root_options(true)).await.unwrap();

    assert_eq!(root.private_key.as_deref(), Some(KEY_PEM));
}

#[tokio::test]
async fn test_config_certificate_authority() {
    let mock = MockVaultServer::start().await;
    mock.mock_no_content("POST", "config/ca", 204).await;

    let bundle = format!("{}\n{}", ROOT_PEM, KEY_PEM);
    mock.engine()
        .config_certificate_authority(&bundle)
        .await
        .expect("CA install failed");

    assert_eq!(mock.last_body().await, json!({ "pem_bundle": bundle }));
}

#[tokio::test]
async fn test_sign_intermediate_ca() {
    let mock = MockVaultServer::start().await;
    mock.mock_write(
        "root/sign-intermediate",
        json!({
            "certificate": INTERMEDIATE_PEM,
            "issuing_ca": ROOT_PEM,
            "ca_chain": [INTERMEDIATE_PEM, ROOT_PEM],
            "serial_number": "7a:7b"
        }),
    )
    .await;

    let options = SignIntermediateCaOptions {
        common_name: Some("Example Intermediate".into()),
        use_csr_values: Some(true),
        permitted_dns_domains: Some(vec!["example.com".into()]),
        ttl: Some("43800h".into()),
        ..Default::default()
    };

    let signed = mock
        .engine()
        .sign_intermediate_ca(CSR_PEM, &options)
        .await
        .expect("Intermediate signing failed");

    assert_eq!(signed.certificate, INTERMEDIATE_PEM);
    assert_eq!(signed.ca_chain.len(), 2);

    let body = mock.last_body().await;
    assert_eq!(body["csr"], CSR_PEM);
    assert_eq!(body["use_csr_values"], true);
    assert_eq!(body["permitted_dns_domains"], json!(["example.com"]));
}

#[tokio::test]
async fn test_generate_intermediate_csr_without_data() {
    let mock = MockVaultServer::start().await;
    mock.mock_raw(
        "POST",
        "intermediate/generate/internal",
        200,
        json!({ "data": null, "warnings": ["CSR generation disabled"] }),
    )
    .await;

    let err = mock
        .engine()
        .generate_intermediate_csr(&GenerateIntermediateCsrOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, PkiError::NoData(ref message) if message == "CSR generation disabled"));
}

#[tokio::test]
async fn test_root_lifecycle_restores_absent_state() {
    // Start fake backend
    let mock = MockVaultServer::start().await;
    let backend = FakePkiBackend::new();
    mock.mount_fake(backend.clone()).await;

    let pki = mock.engine();

    // Initial state: no CA
    let before = pki.get_certificate_authority().await.unwrap_err();

    // Generate then delete
    pki.generate_root(&root_options(false)).await.unwrap();
    assert_eq!(pki.get_certificate_authority().await.unwrap(), ROOT_PEM);
    pki.delete_root().await.unwrap();

    // Assert: same failure as before generation
    let after = pki.get_certificate_authority().await.unwrap_err();
    assert_eq!(before.to_string(), after.to_string());
    assert!(matches!(after, PkiError::NoData(_)));
    assert!(backend.ca_of(MOUNT).is_none());
}

#[tokio::test]
async fn test_intermediate_workflow_ordering() {
    // Start fake backend with a root mount and an intermediate mount
    let mock = MockVaultServer::start().await;
    let backend = FakePkiBackend::new();
    mock.mount_fake(backend.clone()).await;

    let factory = mock.factory();
    let root = factory.engine("pki-root");
    let intermediate = factory.engine("pki-int");

    root.generate_root(&root_options(false)).await.unwrap();
    let before = intermediate.get_certificate_authority().await.unwrap_err();

    // CSR generation does not change the intermediate mount's CA
    let csr = intermediate
        .generate_intermediate_csr(&GenerateIntermediateCsrOptions {
            common_name: Some("Example Intermediate".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(csr.csr, CSR_PEM);
    assert!(csr.private_key.is_none());

    let after_csr = intermediate.get_certificate_authority().await.unwrap_err();
    assert_eq!(before.to_string(), after_csr.to_string());

    // Signing by the root does not install anything either
    let signed = root
        .sign_intermediate_ca(&csr.csr, &SignIntermediateCaOptions::default())
        .await
        .unwrap();
    assert!(intermediate.get_certificate_authority().await.is_err());

    // Only set-signed changes the observable CA
    intermediate
        .set_signed_intermediate_ca(&signed.certificate)
        .await
        .unwrap();
    assert_eq!(
        intermediate.get_certificate_authority().await.unwrap(),
        INTERMEDIATE_PEM
    );
    assert_eq!(root.get_certificate_authority().await.unwrap(), ROOT_PEM);
}
