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

//! Per request options.
//!
//! While the client defaults are intended to work for most applications, some
//! calls need a different configuration. Notably, some operations are scoped
//! to a region, and the request must be routed to the region-specific
//! endpoints.

/// A set of options configuring a single request.
///
/// Operations create the options from their parameters, application code
/// rarely needs to create them directly. Mocks of the transport stub receive
/// the options and may use them to verify the region context.
///
/// # Example
/// ```
/// use cloud_sdk_gax::options::RequestOptions;
/// let mut options = RequestOptions::default();
/// options.set_region("us-east-1");
/// assert_eq!(options.region(), Some("us-east-1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    region: Option<String>,
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
}

impl RequestOptions {
    /// Creates options scoped to `region`.
    pub fn with_region<T: Into<String>>(region: T) -> Self {
        let mut options = Self::default();
        options.set_region(region);
        options
    }

    /// Routes the request to the region-specific endpoint.
    pub fn set_region<T: Into<String>>(&mut self, v: T) {
        self.region = Some(v.into());
    }

    /// The region context for this request, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Prepends a prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// The operations in this SDK do not retry, so this is effectively the
    /// timeout for each remote call.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.region(), None);

        opts.set_region("us-east-1");
        assert_eq!(opts.region(), Some("us-east-1"));

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.attempt_timeout(), &Some(d));
    }

    #[test]
    fn with_region() {
        let opts = RequestOptions::with_region("ece-region");
        assert_eq!(opts.region(), Some("ece-region"));
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);
    }
}
