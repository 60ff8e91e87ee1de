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

//! Mount-level configuration: URLs, CRL, tidy and the mount itself.

use crate::types::wire::{ConfigCrlData, ConfigUrlsData, EnableEngineBody, MountConfig, TidyBody};
use crate::types::{ConfigCrlOptions, ConfigUrlsOptions, EnableEngineOptions, TidyOptions};

/// Engine type sent when mounting.
pub const ENGINE_TYPE: &str = "pki";

/// Encode a `config/urls` write.
pub fn encode_urls(options: &ConfigUrlsOptions) -> ConfigUrlsData {
    ConfigUrlsData {
        issuing_certificates: options.issuing_certificates.clone(),
        crl_distribution_points: options.crl_distribution_points.clone(),
        ocsp_servers: options.ocsp_servers.clone(),
    }
}

/// Decode a `config/urls` read.
pub fn decode_urls(data: ConfigUrlsData) -> ConfigUrlsOptions {
    ConfigUrlsOptions {
        issuing_certificates: data.issuing_certificates,
        crl_distribution_points: data.crl_distribution_points,
        ocsp_servers: data.ocsp_servers,
    }
}

/// Encode a `config/crl` write.
pub fn encode_crl(options: &ConfigCrlOptions) -> ConfigCrlData {
    ConfigCrlData {
        expiry: options.expiry.clone(),
        disable: options.disable,
    }
}

/// Decode a `config/crl` read.
pub fn decode_crl(data: ConfigCrlData) -> ConfigCrlOptions {
    ConfigCrlOptions {
        expiry: data.expiry,
        disable: data.disable,
    }
}

/// Encode a `tidy` trigger.
pub fn encode_tidy(options: &TidyOptions) -> TidyBody {
    TidyBody {
        tidy_cert_store: options.tidy_cert_store,
        tidy_revoked_certs: options.tidy_revoked_certs,
        safety_buffer: options.safety_buffer.clone(),
    }
}

/// Encode a `sys/mounts/{mount}` enable body.
pub fn encode_enable(description: &str, options: &EnableEngineOptions) -> EnableEngineBody {
    EnableEngineBody {
        engine_type: ENGINE_TYPE.to_string(),
        description: description.to_string(),
        config: MountConfig {
            default_lease_ttl: options.default_lease_ttl.clone(),
            max_lease_ttl: options.max_lease_ttl.clone(),
        },
    }
}
