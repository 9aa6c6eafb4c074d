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

//! Static credentials used to authenticate with the control-plane API.
//!
//! The API accepts either an API key, sent as `Authorization: ApiKey <key>`,
//! or a username and password, sent using HTTP basic authentication.
//! Anonymous credentials send no authentication headers, which is only useful
//! for local testing.

use base64::Engine;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};

/// Errors creating the authentication headers.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CredentialsError {
    /// The credentials contain characters that are not valid in a header.
    #[error("the credentials cannot be used as a header value: {0}")]
    InvalidHeaderValue(String),
}

/// The credentials used by a client.
///
/// # Example
/// ```
/// use cloud_sdk_gax::credentials::Credentials;
/// let credentials = Credentials::api_key("my-api-key");
/// let headers = credentials.headers()?;
/// assert_eq!(headers.len(), 1);
/// # Ok::<(), cloud_sdk_gax::credentials::CredentialsError>(())
/// ```
#[derive(Clone)]
pub struct Credentials {
    inner: Kind,
}

#[derive(Clone)]
enum Kind {
    ApiKey(String),
    Basic { username: String, password: String },
    Anonymous,
}

impl Credentials {
    /// Authenticate using an API key.
    pub fn api_key<T: Into<String>>(key: T) -> Self {
        Self {
            inner: Kind::ApiKey(key.into()),
        }
    }

    /// Authenticate using HTTP basic authentication.
    pub fn basic<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            inner: Kind::Basic {
                username: username.into(),
                password: password.into(),
            },
        }
    }

    /// Send no authentication headers.
    pub fn anonymous() -> Self {
        Self {
            inner: Kind::Anonymous,
        }
    }

    /// Constructs the authentication headers for a request.
    ///
    /// Header values are marked as sensitive so they are not included in
    /// debug output.
    pub fn headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>, CredentialsError> {
        let value = match &self.inner {
            Kind::Anonymous => return Ok(Vec::new()),
            Kind::ApiKey(key) => format!("ApiKey {key}"),
            Kind::Basic { username, password } => {
                let encoded = base64::engine::general_purpose::STANDARD
                    .encode(format!("{username}:{password}"));
                format!("Basic {encoded}")
            }
        };
        let mut value = HeaderValue::from_str(&value)
            .map_err(|e| CredentialsError::InvalidHeaderValue(e.to_string()))?;
        value.set_sensitive(true);
        Ok(vec![(AUTHORIZATION, value)])
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.inner {
            Kind::ApiKey(_) => "ApiKey",
            Kind::Basic { .. } => "Basic",
            Kind::Anonymous => "Anonymous",
        };
        f.debug_struct("Credentials")
            .field("kind", &kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn api_key() -> anyhow::Result<()> {
        let headers = Credentials::api_key("test-key").headers()?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let (name, value) = &headers[0];
        assert_eq!(name, AUTHORIZATION);
        assert_eq!(value.to_str()?, "ApiKey test-key");
        assert!(value.is_sensitive(), "{value:?}");
        Ok(())
    }

    #[test]
    fn basic() -> anyhow::Result<()> {
        let headers = Credentials::basic("admin", "secret").headers()?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let (name, value) = &headers[0];
        assert_eq!(name, AUTHORIZATION);
        // base64("admin:secret")
        assert_eq!(value.to_str()?, "Basic YWRtaW46c2VjcmV0");
        Ok(())
    }

    #[test]
    fn anonymous() -> anyhow::Result<()> {
        let headers = Credentials::anonymous().headers()?;
        assert!(headers.is_empty(), "{headers:?}");
        let headers = Credentials::default().headers()?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[test]
    fn invalid_header() {
        let got = Credentials::api_key("bad\nkey").headers();
        assert!(
            matches!(got, Err(CredentialsError::InvalidHeaderValue(_))),
            "{got:?}"
        );
    }

    #[test]
    fn debug_hides_secrets() {
        let got = format!("{:?}", Credentials::basic("admin", "secret"));
        assert!(got.contains("Basic"), "{got}");
        assert!(!got.contains("secret"), "{got}");
        assert!(!got.contains("admin"), "{got}");
    }
}
