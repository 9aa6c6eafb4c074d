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

use crate::observability::{create_http_span, record_http_error, record_http_response};
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::credentials::Credentials;
use gax::error::Error;
use gax::error::api::BasicFailedReply;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use tracing::Instrument;

/// The prefix of all the API paths.
pub const API_PREFIX: &str = "/api/v1";

const DEFAULT_USER_AGENT: &str = concat!("cloud-sdk-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    user_agent: Option<String>,
}

impl ReqwestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(BuilderError::endpoint(endpoint));
        }
        let inner = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure_tls)
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred: config.cred.unwrap_or_default(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            user_agent: config.user_agent,
        })
    }

    /// Starts a request for `path`, relative to the API prefix.
    ///
    /// Requests with a region context are routed to the region-specific
    /// endpoint, i.e., `/api/v1/regions/{region}/{path}`.
    pub fn builder(
        &self,
        method: reqwest::Method,
        path: String,
        options: &RequestOptions,
    ) -> Result<reqwest::RequestBuilder> {
        let url = match options.region() {
            None => format!("{}{API_PREFIX}{path}", &self.endpoint),
            Some(region) => {
                let region = crate::path_parameter::segment("region", region)?;
                format!("{}{API_PREFIX}/regions/{region}{path}", &self.endpoint)
            }
        };
        Ok(self.inner.request(method, url))
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        builder = builder.header(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_str(&self.user_agent(&options))
                .map_err(Error::ser)?,
        );
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        let auth_headers = self.cred.headers().map_err(Error::authentication)?;
        for (key, value) in auth_headers.into_iter() {
            builder = builder.header(key, value);
        }
        let request = builder.build().map_err(Error::ser)?;
        let span = create_http_span(&request, &options);
        self.request_attempt(request)
            .instrument(span.clone())
            .await
            .inspect_err(|e| tracing::debug!(parent: &span, "request failed: {e}"))
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        request: reqwest::Request,
    ) -> Result<Response<O>> {
        let span = tracing::Span::current();
        let response = match self.inner.execute(request).await {
            Ok(r) => r,
            Err(e) => {
                let err = Self::map_send_error(e);
                record_http_response(&span, Err(&err));
                return Err(err);
            }
        };
        record_http_response(&span, Ok(&response));
        if !response.status().is_success() {
            return self::to_http_error(response)
                .await
                .inspect_err(|e| record_http_error(&span, e));
        }

        self::to_http_response(response).await
    }

    fn user_agent(&self, options: &RequestOptions) -> String {
        [options.user_agent().as_deref(), self.user_agent.as_deref()]
            .into_iter()
            .flatten()
            .chain(std::iter::once(DEFAULT_USER_AGENT))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e if e.is_builder() => Error::ser(e),
            e => Error::io(e),
        }
    }
}

#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match BasicFailedReply::try_from(&body) {
        Ok(reply) => {
            Error::service_with_http_metadata(reply, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    // Some commands (e.g. starting maintenance mode) return an empty body.
    let response = match body.to_bytes() {
        content if content.is_empty() => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new().set_headers(parts.headers),
        response,
    ))
}
