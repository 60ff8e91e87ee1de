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

//! Role read/write.
//!
//! Subject fields are comma-joined strings in [`RoleOptions`] and lists in
//! Vault's role storage.

use super::{decode_key_type, decode_names, encode_key_type, split_list};
use crate::error::Result;
use crate::types::wire::RoleData;
use crate::types::RoleOptions;

fn join_subject(values: Option<Vec<String>>) -> Option<String> {
    values.map(|values| values.join(","))
}

/// Encode a role write body.
pub fn encode_role(options: &RoleOptions) -> RoleData {
    RoleData {
        ttl: options.ttl.clone(),
        max_ttl: options.max_ttl.clone(),
        allow_localhost: options.allow_localhost,
        allowed_domains: options.allowed_domains.clone(),
        allowed_domains_template: options.allowed_domains_template,
        allow_bare_domains: options.allow_bare_domains,
        allow_subdomains: options.allow_subdomains,
        allow_glob_domains: options.allow_glob_domains,
        allow_any_name: options.allow_any_name,
        enforce_hostnames: options.enforce_hostnames,
        allow_ip_sans: options.allow_ip_sans,
        allowed_uri_sans: options.allowed_uri_sans.clone(),
        allowed_other_sans: options.allowed_other_sans.clone(),
        server_flag: options.server_flag,
        client_flag: options.client_flag,
        code_signing_flag: options.code_signing_flag,
        email_protection_flag: options.email_protection_flag,
        key_type: encode_key_type(options.key_type),
        key_bits: options.key_bits,
        key_usage: options
            .key_usage
            .as_ref()
            .map(|usages| usages.iter().map(|usage| usage.name().to_string()).collect()),
        ext_key_usage: options
            .ext_key_usage
            .as_ref()
            .map(|usages| usages.iter().map(|usage| usage.name().to_string()).collect()),
        ext_key_usage_oids: options.ext_key_usage_oids.clone(),
        use_csr_common_name: options.use_csr_common_name,
        use_csr_sans: options.use_csr_sans,
        organization: split_list(options.subject_organization.as_deref()),
        ou: split_list(options.subject_organizational_unit.as_deref()),
        street_address: split_list(options.subject_street_address.as_deref()),
        postal_code: split_list(options.subject_postal_code.as_deref()),
        locality: split_list(options.subject_locality.as_deref()),
        province: split_list(options.subject_province.as_deref()),
        country: split_list(options.subject_country.as_deref()),
        allowed_serial_numbers: options.allowed_serial_numbers.clone(),
        generate_lease: options.generate_lease,
        no_store: options.no_store,
        require_cn: options.require_cn,
        policy_identifiers: options.policy_identifiers.clone(),
        basic_constraints_valid_for_non_ca: options.basic_constraints_valid_for_non_ca,
        not_before_duration: options.not_before_duration.clone(),
    }
}

/// Decode a role read.
///
/// # Errors
///
/// Fails with an encoding error on an unknown key type or usage name.
pub fn decode_role(data: RoleData) -> Result<RoleOptions> {
    Ok(RoleOptions {
        key_type: decode_key_type(data.key_type.as_deref())?,
        key_usage: decode_names(data.key_usage)?,
        ext_key_usage: decode_names(data.ext_key_usage)?,
        ttl: data.ttl,
        max_ttl: data.max_ttl,
        allow_localhost: data.allow_localhost,
        allowed_domains: data.allowed_domains,
        allowed_domains_template: data.allowed_domains_template,
        allow_bare_domains: data.allow_bare_domains,
        allow_subdomains: data.allow_subdomains,
        allow_glob_domains: data.allow_glob_domains,
        allow_any_name: data.allow_any_name,
        enforce_hostnames: data.enforce_hostnames,
        allow_ip_sans: data.allow_ip_sans,
        allowed_uri_sans: data.allowed_uri_sans,
        allowed_other_sans: data.allowed_other_sans,
        server_flag: data.server_flag,
        client_flag: data.client_flag,
        code_signing_flag: data.code_signing_flag,
        email_protection_flag: data.email_protection_flag,
        key_bits: data.key_bits,
        ext_key_usage_oids: data.ext_key_usage_oids,
        use_csr_common_name: data.use_csr_common_name,
        use_csr_sans: data.use_csr_sans,
        subject_organization: join_subject(data.organization),
        subject_organizational_unit: join_subject(data.ou),
        subject_street_address: join_subject(data.street_address),
        subject_postal_code: join_subject(data.postal_code),
        subject_locality: join_subject(data.locality),
        subject_province: join_subject(data.province),
        subject_country: join_subject(data.country),
        allowed_serial_numbers: data.allowed_serial_numbers,
        generate_lease: data.generate_lease,
        no_store: data.no_store,
        require_cn: data.require_cn,
        policy_identifiers: data.policy_identifiers,
        basic_constraints_valid_for_non_ca: data.basic_constraints_valid_for_non_ca,
        not_before_duration: data.not_before_duration,
    })
}
