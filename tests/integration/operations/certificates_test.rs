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

//! Integration tests for certificate issuance, lookup and revocation

use crate::integration::{MockVaultServer, CSR_PEM, KEY_PEM, LEAF_PEM, ROOT_PEM};
use serde_json::json;
use vault_pki_client::{
    CertificateKeyType, GenerateCertificateOptions, PkiError, SubjectAlternativeNames,
};

#[tokio::test]
async fn test_get_certificate_authority() {
    // Start mock server
    let mock = MockVaultServer::start().await;
    mock.mock_read("cert/ca", json!({ "certificate": ROOT_PEM }))
        .await;

    // Test: fetch CA
    let ca = mock.engine().get_certificate_authority().await;

    // Assert: PEM passed through untouched
    assert_eq!(ca.expect("CA fetch failed"), ROOT_PEM);
}

#[tokio::test]
async fn test_get_chain_and_crl() {
    let mock = MockVaultServer::start().await;
    mock.mock_read("cert/ca_chain", json!({ "certificate": ROOT_PEM }))
        .await;
    mock.mock_read(
        "cert/crl",
        json!({ "certificate": "-----BEGIN X509 CRL-----\nQ1JM\n-----END X509 CRL-----" }),
    )
    .await;

    let pki = mock.engine();

    assert_eq!(pki.get_certificate_authority_chain().await.unwrap(), ROOT_PEM);
    assert!(pki
        .get_certificate_revocation_list()
        .await
        .unwrap()
        .starts_with("-----BEGIN X509 CRL-----"));
}

#[tokio::test]
async fn test_rotate_crl() {
    let mock = MockVaultServer::start().await;
    mock.mock_read("crl/rotate", json!({ "success": true })).await;

    let rebuilt = mock.engine().rotate_certificate_revocation_list().await;

    assert!(rebuilt.expect("CRL rotation failed"));
}

#[tokio::test]
async fn test_get_certificates_normalizes_serials() {
    let mock = MockVaultServer::start().await;
    mock.mock_list("certs", &["1A-2B-3C", "4d:5e:6f"]).await;

    let serials = mock.engine().get_certificates().await.unwrap();

    assert_eq!(serials, vec!["1A:2B:3C".to_string(), "4d:5e:6f".to_string()]);
    assert!(serials.iter().all(|serial| !serial.contains('-')));
}

#[tokio::test]
async fn test_get_certificate_by_serial() {
    let mock = MockVaultServer::start().await;
    mock.mock_read("cert/1a-2b-3c", json!({ "certificate": LEAF_PEM }))
        .await;
    mock.mock_read("cert/ff:ff", json!({ "certificate": "" })).await;

    let pki = mock.engine();

    // Hyphen form is accepted as-is
    assert_eq!(
        pki.get_certificate("1a-2b-3c").await.unwrap().as_deref(),
        Some(LEAF_PEM)
    );

    // An empty certificate means absent
    assert_eq!(pki.get_certificate("ff:ff").await.unwrap(), None);
}

#[tokio::test]
async fn test_generate_certificate() {
    let mock = MockVaultServer::start().await;
    mock.mock_write(
        "issue/web",
        json!({
            "certificate": LEAF_PEM,
            "issuing_ca": ROOT_PEM,
            "ca_chain": [ROOT_PEM],
            "private_key": KEY_PEM,
            "private_key_type": "ec",
            "serial_number": "39:dd:2e:90:b7:23"
        }),
    )
    .await;

    let options = GenerateCertificateOptions {
        common_name: Some("www.example.com".into()),
        sans: SubjectAlternativeNames {
            alt_names: Some(vec!["example.com".into(), "api.example.com".into()]),
            ip_sans: Some(vec!["10.1.2.3".into()]),
            other_sans: Some(vec!["1.3.6.1.4.1.311.20.2.3;UTF8:svc@example.com".into()]),
            ..Default::default()
        },
        ttl: Some("24h".into()),
    };

    // Test: issue against role
    let issued = mock
        .engine()
        .generate_certificate("web", &options)
        .await
        .expect("Issue failed");

    // Assert: result decoded
    assert_eq!(issued.serial_number, "39:dd:2e:90:b7:23");
    assert_eq!(issued.certificate, LEAF_PEM);
    assert_eq!(issued.ca_chain, vec![ROOT_PEM.to_string()]);
    assert_eq!(issued.private_key_type, Some(CertificateKeyType::Ec));
    assert_eq!(issued.private_key.as_deref(), Some(KEY_PEM));

    // Assert: wire body encoded per field
    let body = mock.last_body().await;
    assert_eq!(
        body,
        json!({
            "common_name": "www.example.com",
            "alt_names": "example.com,api.example.com",
            "ip_sans": "10.1.2.3",
            "other_sans": ["1.3.6.1.4.1.311.20.2.3;UTF8:svc@example.com"],
            "ttl": "24h",
            "format": "pem",
            "private_key_format": "pkcs8"
        })
    );
}

#[tokio::test]
async fn test_sign_request() {
    let mock = MockVaultServer::start().await;
    mock.mock_write(
        "sign/web",
        json!({
            "certificate": LEAF_PEM,
            "issuing_ca": ROOT_PEM,
            "ca_chain": [ROOT_PEM],
            "serial_number": "5c:6d"
        }),
    )
    .await;

    let signed = mock
        .engine()
        .sign_request(
            "web",
            CSR_PEM,
            &GenerateCertificateOptions::for_common_name("www.example.com"),
        )
        .await
        .expect("Sign failed");

    assert_eq!(signed.serial_number, "5c:6d");
    assert_eq!(signed.issuing_ca, ROOT_PEM);

    let body = mock.last_body().await;
    assert_eq!(body["csr"], CSR_PEM);
    assert_eq!(body["common_name"], "www.example.com");
    assert!(body.get("alt_names").is_none());
}

#[tokio::test]
async fn test_revoke_certificate() {
    let mock = MockVaultServer::start().await;
    mock.mock_write("revoke", json!({ "revocation_time": 1_700_000_000 }))
        .await;

    let revoked_at = mock
        .engine()
        .revoke_certificate("39:dd:2e")
        .await
        .expect("Revoke failed");

    assert_eq!(revoked_at.unix_timestamp(), 1_700_000_000);
    assert_eq!(mock.last_body().await, json!({ "serial_number": "39:dd:2e" }));
}

#[tokio::test]
async fn test_issue_with_unknown_key_type() {
    let mock = MockVaultServer::start().await;
    mock.mock_write(
        "issue/web",
        json!({
            "certificate": LEAF_PEM,
            "issuing_ca": ROOT_PEM,
            "serial_number": "01",
            "private_key_type": "dsa"
        }),
    )
    .await;

    let result = mock
        .engine()
        .generate_certificate("web", &GenerateCertificateOptions::for_common_name("x"))
        .await;

    // Assert: hard failure, not a silent default
    assert!(matches!(result, Err(PkiError::Encoding(_))));
}
