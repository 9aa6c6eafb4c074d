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

//! Canned values used by the tests in several crates.

use gax::error::Error;
use gax::error::api::{BasicFailedReply, BasicFailedReplyElement};

/// A well-formed deployment id.
pub const VALID_DEPLOYMENT_ID: &str = "d324608c97154bdba2dff97511d40368";

/// Another well-formed id, for allocators, clusters, and the like.
pub const VALID_CLUSTER_ID: &str = "0521bb3a0ac54bd1a0e9ae7e16e07e30";

/// Creates a service error carrying a single `code: message` element.
///
/// The status code is `404`, matching most of the failures the tests simulate.
pub fn api_error(code: &str, message: &str) -> Error {
    api_error_with_status(404, code, message)
}

/// Creates a service error carrying a single `code: message` element.
pub fn api_error_with_status(status: u16, code: &str, message: &str) -> Error {
    let reply = BasicFailedReply::default().set_errors([BasicFailedReplyElement::new()
        .set_code(code)
        .set_message(message)]);
    Error::service_with_http_metadata(reply, Some(status), None)
}

/// The JSON payload of a failed reply, for HTTP test servers.
pub fn api_error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({"errors": [{"code": code, "message": message}]})
}
