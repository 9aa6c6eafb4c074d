// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Handling of path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required, and they must be escaped before they are used as a path segment.
//! The transport stubs use these helpers to build each request path.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Characters allowed in a path segment without escaping, see RFC 3986.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Returns the escaped path segment for `value`.
///
/// Fails with a binding error if `value` is empty.
///
/// # Example
/// ```
/// # use cloud_sdk_gax_internal::path_parameter::segment;
/// let s = segment("ref_id", "main elasticsearch")?;
/// assert_eq!(s, "main%20elasticsearch");
/// # Ok::<(), gax::error::Error>(())
/// ```
pub fn segment(name: &str, value: &str) -> gax::Result<String> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

/// Returns the escaped, comma-separated path segment for a list of values.
///
/// Fails with a binding error if `values` is empty, or any value is empty.
pub fn list_segment<T: AsRef<str>>(name: &str, values: &[T]) -> gax::Result<String> {
    if values.is_empty() {
        return Err(missing(name));
    }
    let segments = values
        .iter()
        .map(|v| segment(name, v.as_ref()))
        .collect::<gax::Result<Vec<_>>>()?;
    Ok(segments.join(","))
}
