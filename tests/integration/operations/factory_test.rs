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

//! Integration tests for mount management

use crate::integration::{FakePkiBackend, MockVaultServer, TEST_TOKEN};
use serde_json::json;
use vault_pki_client::EnableEngineOptions;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_enable_engine() {
    // Start mock server
    let mock = MockVaultServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/sys/mounts/pki-int"))
        .and(header("x-vault-token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(mock.inner())
        .await;

    let options = EnableEngineOptions {
        default_lease_ttl: None,
        max_lease_ttl: Some("43800h".into()),
    };

    // Test: mount the engine
    mock.factory()
        .enable("pki-int", "Intermediate CA", &options)
        .await
        .expect("Enable failed");

    // Assert: engine type and tuning sent
    assert_eq!(
        mock.last_body().await,
        json!({
            "type": "pki",
            "description": "Intermediate CA",
            "config": { "max_lease_ttl": "43800h" }
        })
    );
}

#[tokio::test]
async fn test_disable_engine() {
    let mock = MockVaultServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/sys/mounts/pki-int"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(mock.inner())
        .await;

    let result = mock.factory().disable("pki-int").await;

    assert!(result.is_ok(), "disable failed: {:?}", result.err());
}

#[tokio::test]
async fn test_enable_existing_mount_fails() {
    let mock = MockVaultServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/sys/mounts/pki"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "errors": ["path is already in use at pki/"] })),
        )
        .mount(mock.inner())
        .await;

    let err = mock
        .factory()
        .enable("pki", "", &EnableEngineOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_is_enabled_probe() {
    let mock = MockVaultServer::start().await;
    mock.mount_fake(FakePkiBackend::new()).await;

    let factory = mock.factory();

    // The fake answers config/urls on any mount path
    assert!(factory.is_enabled("pki").await);
}

#[tokio::test]
async fn test_is_enabled_false_on_any_failure() {
    let mock = MockVaultServer::start().await;
    mock.mock_error("GET", "config/urls", 403, &["permission denied"])
        .await;

    let factory = mock.factory();

    // Forbidden and unknown mounts both read as not enabled
    assert!(!factory.is_enabled("pki").await);
    assert!(!factory.is_enabled("missing").await);
}

#[tokio::test]
async fn test_engine_binding_is_cheap() {
    let mock = MockVaultServer::start().await;
    let factory = mock.factory();

    let first = factory.engine("pki");
    let second = factory.engine("pki");

    assert_eq!(first.mount(), "pki");
    assert_eq!(first.mount(), second.mount());

    // Binding performs no request
    let requests = mock.inner().received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}
