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

//! Integration tests for URL, CRL and tidy configuration

use crate::integration::MockVaultServer;
use serde_json::json;
use vault_pki_client::{ConfigCrlOptions, ConfigUrlsOptions, TidyOptions};

#[tokio::test]
async fn test_config_urls() {
    // Start mock server
    let mock = MockVaultServer::start().await;
    mock.mock_no_content("POST", "config/urls", 204).await;

    let options = ConfigUrlsOptions {
        issuing_certificates: Some(vec!["http://vault.example.com:8200/v1/pki/ca".into()]),
        crl_distribution_points: Some(vec!["http://vault.example.com:8200/v1/pki/crl".into()]),
        ocsp_servers: None,
    };

    // Test: write URLs
    mock.engine()
        .config_urls(&options)
        .await
        .expect("URL config failed");

    // Assert: lists sent as lists, absent list omitted
    assert_eq!(
        mock.last_body().await,
        json!({
            "issuing_certificates": ["http://vault.example.com:8200/v1/pki/ca"],
            "crl_distribution_points": ["http://vault.example.com:8200/v1/pki/crl"]
        })
    );
}

#[tokio::test]
async fn test_read_urls_config() {
    let mock = MockVaultServer::start().await;
    mock.mock_read(
        "config/urls",
        json!({
            "issuing_certificates": ["http://a/ca"],
            "crl_distribution_points": [],
            "ocsp_servers": ["http://ocsp-1", "http://ocsp-2"]
        }),
    )
    .await;

    let urls = mock.engine().read_urls_config().await.unwrap();

    assert_eq!(urls.issuing_certificates, Some(vec!["http://a/ca".to_string()]));
    assert_eq!(urls.crl_distribution_points, Some(vec![]));
    assert_eq!(urls.ocsp_servers.map(|servers| servers.len()), Some(2));
}

#[tokio::test]
async fn test_config_crl_round_trip() {
    let mock = MockVaultServer::start().await;
    mock.mock_no_content("POST", "config/crl", 204).await;
    mock.mock_read("config/crl", json!({ "expiry": "72h", "disable": false }))
        .await;

    let pki = mock.engine();
    let options = ConfigCrlOptions {
        expiry: Some("72h".into()),
        disable: Some(false),
    };

    pki.config_crl(&options).await.expect("CRL config failed");
    assert_eq!(mock.last_body().await, json!({ "expiry": "72h", "disable": false }));

    assert_eq!(pki.read_crl_config().await.unwrap(), options);
}

#[tokio::test]
async fn test_tidy_accepted() {
    let mock = MockVaultServer::start().await;
    mock.mock_no_content("POST", "tidy", 202).await;

    let options = TidyOptions {
        tidy_cert_store: Some(true),
        tidy_revoked_certs: Some(true),
        safety_buffer: Some("72h".into()),
    };

    let result = mock.engine().tidy(&options).await;

    assert!(result.is_ok(), "tidy failed: {:?}", result.err());
    assert_eq!(mock.last_body().await["safety_buffer"], "72h");
}
