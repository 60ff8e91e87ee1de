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

//! Root and intermediate CA generation and signing.

use super::certificates::encode_sans;
use super::{decode_key_type, encode_key_type};
use crate::error::Result;
use crate::types::wire::{
    GenerateIntermediateCsrBody, GenerateIntermediateCsrData, GenerateRootBody, GenerateRootData,
    SignIntermediateCaBody, SubjectData, CERTIFICATE_FORMAT, KEY_FORMAT,
};
use crate::types::{
    GenerateIntermediateCsrOptions, GenerateRootOptions, GeneratedIntermediateCsr,
    GeneratedRootCertificate, SignIntermediateCaOptions, SubjectFields,
};

/// Encode CA subject fields. Lists pass through unchanged.
pub fn encode_subject(subject: &SubjectFields) -> SubjectData {
    SubjectData {
        organization: subject.organization.clone(),
        ou: subject.organizational_unit.clone(),
        street_address: subject.street_address.clone(),
        postal_code: subject.postal_code.clone(),
        locality: subject.locality.clone(),
        province: subject.province.clone(),
        country: subject.country.clone(),
        serial_number: subject.serial_number.clone(),
    }
}

/// Encode the body of `root/generate/{exported|internal}`.
pub fn encode_generate_root(options: &GenerateRootOptions) -> GenerateRootBody {
    GenerateRootBody {
        common_name: options.common_name.clone(),
        subject: encode_subject(&options.subject),
        sans: encode_sans(&options.sans),
        ttl: options.ttl.clone(),
        key_type: encode_key_type(options.key.key_type),
        key_bits: options.key.key_bits,
        max_path_length: options.max_path_length,
        permitted_dns_domains: options.permitted_dns_domains.clone(),
        format: Some(CERTIFICATE_FORMAT.to_string()),
        private_key_format: Some(KEY_FORMAT.to_string()),
    }
}

/// Decode the data of `root/generate/{exported|internal}`.
pub fn decode_generated_root(data: GenerateRootData) -> Result<GeneratedRootCertificate> {
    Ok(GeneratedRootCertificate {
        private_key_type: decode_key_type(data.private_key_type.as_deref())?,
        serial_number: data.serial_number,
        certificate: data.certificate,
        issuing_ca: data.issuing_ca,
        private_key: data.private_key.filter(|key| !key.is_empty()),
    })
}

/// Encode the body of `root/sign-intermediate`.
pub fn encode_sign_intermediate(
    pem_signing_request: &str,
    options: &SignIntermediateCaOptions,
) -> SignIntermediateCaBody {
    SignIntermediateCaBody {
        csr: pem_signing_request.to_string(),
        common_name: options.common_name.clone(),
        subject: encode_subject(&options.subject),
        sans: encode_sans(&options.sans),
        ttl: options.ttl.clone(),
        max_path_length: options.max_path_length,
        use_csr_values: options.use_csr_values,
        permitted_dns_domains: options.permitted_dns_domains.clone(),
        format: Some(CERTIFICATE_FORMAT.to_string()),
    }
}

/// Encode the body of `intermediate/generate/{exported|internal}`.
pub fn encode_generate_intermediate_csr(
    options: &GenerateIntermediateCsrOptions,
) -> GenerateIntermediateCsrBody {
    GenerateIntermediateCsrBody {
        common_name: options.common_name.clone(),
        subject: encode_subject(&options.subject),
        sans: encode_sans(&options.sans),
        key_type: encode_key_type(options.key.key_type),
        key_bits: options.key.key_bits,
        format: Some(CERTIFICATE_FORMAT.to_string()),
        private_key_format: Some(KEY_FORMAT.to_string()),
    }
}

/// Decode the data of `intermediate/generate/{exported|internal}`.
pub fn decode_generated_csr(data: GenerateIntermediateCsrData) -> Result<GeneratedIntermediateCsr> {
    Ok(GeneratedIntermediateCsr {
        private_key_type: decode_key_type(data.private_key_type.as_deref())?,
        csr: data.csr,
        private_key: data.private_key.filter(|key| !key.is_empty()),
    })
}
