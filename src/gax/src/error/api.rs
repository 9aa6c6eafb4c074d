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

use crate::error::Error;
use crate::multierror::Prefixed;
use serde::{Deserialize, Serialize};

/// The prefix used when rendering the errors returned by the service.
pub const API_ERROR_PREFIX: &str = "api error";

/// The error payload returned by the service.
///
/// Failed requests return one or more error elements, each with a code, a
/// human readable message, and (optionally) the request fields at fault.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BasicFailedReply {
    /// The list of errors reported by the service.
    pub errors: Vec<BasicFailedReplyElement>,
}

impl BasicFailedReply {
    /// Sets the value for [errors][BasicFailedReply::errors].
    pub fn set_errors<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<BasicFailedReplyElement>,
    {
        self.errors = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Converts the reply into an aggregator, one leaf per error element.
    ///
    /// Each leaf renders as `<code>: <message>`, using `unknown` when the
    /// service did not include a message.
    pub fn to_multierror(&self) -> Prefixed {
        self.errors
            .iter()
            .fold(Prefixed::new(API_ERROR_PREFIX), |p, e| p.append(e.to_string()))
    }
}

impl std::fmt::Display for BasicFailedReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_multierror())
    }
}

/// A single error reported by the service.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BasicFailedReplyElement {
    /// A machine readable error code, e.g. `deployments.not_found`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// A human readable description of the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The request fields that caused the error, if any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl BasicFailedReplyElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for [code][BasicFailedReplyElement::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }

    /// Sets the value for [message][BasicFailedReplyElement::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the value for [fields][BasicFailedReplyElement::fields].
    pub fn set_fields<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<String>,
    {
        self.fields = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

impl std::fmt::Display for BasicFailedReplyElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.code.as_deref().unwrap_or_default();
        let message = self.message.as_deref().unwrap_or("unknown");
        write!(f, "{code}: {message}")
    }
}

impl TryFrom<&bytes::Bytes> for BasicFailedReply {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let reply = serde_json::from_slice::<BasicFailedReply>(value).map_err(Error::deser)?;
        if reply.errors.is_empty() {
            return Err(Error::deser("the error payload does not contain any errors"));
        }
        Ok(reply)
    }
}
