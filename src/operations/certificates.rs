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

//! Leaf certificate issuance, signing, listing and revocation.

use time::OffsetDateTime;

use super::{decode_key_type, join_list};
use crate::error::{PkiError, Result};
use crate::types::wire::{
    GenerateCertificateBody, GenerateCertificateData, KeyListData, RevokeCertificateData,
    SansData, SignCertificateRequestBody, SignCertificateRequestData, CERTIFICATE_FORMAT,
    KEY_FORMAT,
};
use crate::types::{
    normalize_serial, GenerateCertificateOptions, GeneratedCertificate, SignedCertificate,
    SubjectAlternativeNames,
};

/// Encode SANs: DNS/IP/URI comma-joined, other SANs as a list.
pub fn encode_sans(sans: &SubjectAlternativeNames) -> SansData {
    SansData {
        alt_names: join_list(sans.alt_names.as_deref()),
        ip_sans: join_list(sans.ip_sans.as_deref()),
        uri_sans: join_list(sans.uri_sans.as_deref()),
        other_sans: sans.other_sans.clone(),
        exclude_cn_from_sans: sans.exclude_cn_from_sans,
    }
}

/// Encode the body of `issue/{role}`.
pub fn encode_generate_certificate(options: &GenerateCertificateOptions) -> GenerateCertificateBody {
    GenerateCertificateBody {
        common_name: options.common_name.clone(),
        sans: encode_sans(&options.sans),
        ttl: options.ttl.clone(),
        format: Some(CERTIFICATE_FORMAT.to_string()),
        private_key_format: Some(KEY_FORMAT.to_string()),
    }
}

/// Decode the data of `issue/{role}`.
pub fn decode_generated_certificate(data: GenerateCertificateData) -> Result<GeneratedCertificate> {
    Ok(GeneratedCertificate {
        private_key_type: decode_key_type(data.private_key_type.as_deref())?,
        serial_number: data.serial_number,
        certificate: data.certificate,
        issuing_ca: data.issuing_ca,
        ca_chain: data.ca_chain.unwrap_or_default(),
        private_key: data.private_key.filter(|key| !key.is_empty()),
    })
}

/// Encode the body of `sign/{role}`.
pub fn encode_sign_request(
    pem_signing_request: &str,
    options: &GenerateCertificateOptions,
) -> SignCertificateRequestBody {
    SignCertificateRequestBody {
        csr: pem_signing_request.to_string(),
        common_name: options.common_name.clone(),
        sans: encode_sans(&options.sans),
        ttl: options.ttl.clone(),
        format: Some(CERTIFICATE_FORMAT.to_string()),
    }
}

/// Decode the data of `sign/{role}` and `root/sign-intermediate`.
pub fn decode_signed_certificate(data: SignCertificateRequestData) -> SignedCertificate {
    SignedCertificate {
        serial_number: data.serial_number,
        certificate: data.certificate,
        issuing_ca: data.issuing_ca,
        ca_chain: data.ca_chain.unwrap_or_default(),
    }
}

/// Decode a `certs` listing into colon-delimited serials.
pub fn decode_certificate_list(data: KeyListData) -> Vec<String> {
    data.keys.iter().map(|serial| normalize_serial(serial)).collect()
}

/// Decode the revocation time returned by `revoke`.
pub fn decode_revocation_time(data: &RevokeCertificateData) -> Result<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp(data.revocation_time).map_err(|e| {
        PkiError::encoding(format!(
            "revocation time {} out of range: {}",
            data.revocation_time, e
        ))
    })
}
