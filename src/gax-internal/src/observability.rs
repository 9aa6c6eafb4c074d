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

//! Tracing spans for HTTP requests.
//!
//! Each request sent by [crate::http::ReqwestClient] runs inside an
//! `http_request` span. The span records the request method, path, and
//! region before the request is sent, and the response status code (or error
//! type) once the response is received.

use gax::options::RequestOptions;
use tracing::{Span, field};

pub const SPAN_NAME: &str = "http_request";

pub const KEY_HTTP_METHOD: &str = "http.request.method";
pub const KEY_URL_PATH: &str = "url.path";
pub const KEY_REGION: &str = "cloud.region";
pub const KEY_HTTP_STATUS_CODE: &str = "http.response.status_code";
pub const KEY_ERROR_TYPE: &str = "error.type";

/// Creates a new tracing span for an HTTP request.
pub(crate) fn create_http_span(request: &reqwest::Request, options: &RequestOptions) -> Span {
    tracing::info_span!(
        "http_request",
        { KEY_HTTP_METHOD } = request.method().as_str(),
        { KEY_URL_PATH } = request.url().path(),
        { KEY_REGION } = options.region(),
        // Fields to be recorded later
        { KEY_HTTP_STATUS_CODE } = field::Empty,
        { KEY_ERROR_TYPE } = field::Empty,
    )
}

/// Records the response status, or the error type, in `span`.
pub(crate) fn record_http_response(
    span: &Span,
    result: Result<&reqwest::Response, &gax::error::Error>,
) {
    match result {
        Ok(response) => {
            span.record(KEY_HTTP_STATUS_CODE, response.status().as_u16() as i64);
        }
        Err(err) => {
            if let Some(status) = err.http_status_code() {
                span.record(KEY_HTTP_STATUS_CODE, status as i64);
            }
            span.record(KEY_ERROR_TYPE, error_type(err));
        }
    }
}

/// Records the error type of an error response in `span`.
pub(crate) fn record_http_error(span: &Span, err: &gax::error::Error) {
    span.record(KEY_ERROR_TYPE, error_type(err));
}

fn error_type(err: &gax::error::Error) -> &'static str {
    match err {
        e if e.api_error().is_some() => "API_ERROR",
        e if e.is_timeout() => "CLIENT_TIMEOUT",
        e if e.is_authentication() => "CLIENT_AUTHENTICATION_ERROR",
        e if e.is_deserialization() => "CLIENT_RESPONSE_DECODE_ERROR",
        e if e.is_serialization() => "CLIENT_REQUEST_ENCODE_ERROR",
        e if e.is_io() => "CLIENT_CONNECTION_ERROR",
        e if e.is_transport() => "HTTP_ERROR",
        _ => "ERROR_TYPE_UNKNOWN",
    }
}
