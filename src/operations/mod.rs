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

//! Per-operation translation between the option model and wire bodies.
//!
//! Each operation has its own encode/decode pair. The same logical field is
//! not always encoded the same way: SANs are comma-joined for every
//! operation, role subject fields are comma-joined in the model but lists on
//! the wire, and CA subject fields are lists on both sides. Keeping one
//! function per operation keeps those differences visible.

pub mod ca;
pub mod certificates;
pub mod config;
pub mod roles;

use std::str::FromStr;

use crate::error::{PkiError, Result, UNKNOWN_REMOTE_ERROR};
use crate::transport::Envelope;
use crate::types::CertificateKeyType;

/// Join a list into Vault's comma-separated form. `None` stays `None`.
pub fn join_list(values: Option<&[String]>) -> Option<String> {
    values.map(|values| values.join(","))
}

/// Split a comma-separated string into a list. `None` stays `None`.
pub fn split_list(value: Option<&str>) -> Option<Vec<String>> {
    value.map(|value| value.split(',').map(str::to_string).collect())
}

/// Encode an optional key type to its lower-case wire form.
pub fn encode_key_type(key_type: Option<CertificateKeyType>) -> Option<String> {
    key_type.map(|key_type| key_type.to_wire())
}

/// Decode an optional key type, ignoring case. Unknown values are errors.
pub fn decode_key_type(value: Option<&str>) -> Result<Option<CertificateKeyType>> {
    value.map(CertificateKeyType::from_str).transpose()
}

/// Decode a list of enum names. Any unknown name fails the whole list.
pub fn decode_names<T>(values: Option<Vec<String>>) -> Result<Option<Vec<T>>>
where
    T: FromStr<Err = PkiError>,
{
    values
        .map(|values| values.iter().map(|value| value.parse()).collect())
        .transpose()
}

/// Extract the envelope payload.
///
/// A missing payload fails with the first warning as message, or a generic
/// message when there are no warnings.
pub fn require_data<T>(envelope: Envelope<T>) -> Result<T> {
    if let Some(data) = envelope.data {
        return Ok(data);
    }

    let message = envelope
        .warnings
        .and_then(|warnings| warnings.into_iter().next())
        .unwrap_or_else(|| UNKNOWN_REMOTE_ERROR.to_string());

    tracing::warn!("Vault response carried no data: {}", message);

    Err(PkiError::no_data(message))
}
