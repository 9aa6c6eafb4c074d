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

use super::api::BasicFailedReply;
use crate::credentials::CredentialsError;
use crate::multierror::Prefixed;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all the operations in this SDK.
///
/// Operations report errors from multiple sources. The parameters may fail
/// validation before any request is sent, a dependent lookup (e.g. discovering
/// the reference ID of a resource) may fail, the service may return an error,
/// or the transport may be unable to complete the request.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
///
/// # Example
/// ```
/// use cloud_sdk_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_validation() => {
///         println!("fix the parameters: {e:#}");
///     },
///     Err(e) if matches!(e.api_error(), Some(_)) => {
///         println!("service error {e}, debug using {:?}", e.api_error().unwrap());
///     },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use cloud_sdk_gax::multierror::Prefixed;
///     # Err(Error::validation(Prefixed::new("deployment get").append("id \"\" is invalid")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing invalid parameters.
    ///
    /// # Example
    /// ```
    /// use cloud_sdk_gax::error::Error;
    /// use cloud_sdk_gax::multierror::Prefixed;
    /// let error = Error::validation(Prefixed::new("deployment get").append("id \"\" is invalid"));
    /// assert!(error.is_validation());
    /// assert_eq!(error.to_string(), "deployment get: id \"\" is invalid");
    /// ```
    pub fn validation(errors: Prefixed) -> Self {
        Self {
            kind: ErrorKind::Validation,
            source: Some(errors.into()),
        }
    }

    /// The parameters failed validation, no request was sent.
    ///
    /// # Troubleshooting
    ///
    /// The error includes every problem found in the parameters. Use
    /// [as_multierror][Error::as_multierror] to examine each problem, or
    /// format the error with `{:#}` to print one problem per line.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    /// Creates an error representing a failed dependent lookup.
    ///
    /// # Example
    /// ```
    /// use cloud_sdk_gax::error::Error;
    /// use cloud_sdk_gax::multierror::Prefixed;
    /// let error = Error::resolution(
    ///     Prefixed::new("failed obtaining the deployment template").append("template not found"));
    /// assert!(error.is_resolution());
    /// ```
    pub fn resolution(errors: Prefixed) -> Self {
        Self {
            kind: ErrorKind::Resolution,
            source: Some(errors.into()),
        }
    }

    /// An operation could not resolve a value it depends on.
    ///
    /// Some operations perform remote lookups before issuing the main request,
    /// for example, to discover the template used by a deployment. The errors
    /// are labeled with the lookup stage that failed.
    pub fn is_resolution(&self) -> bool {
        matches!(self.kind, ErrorKind::Resolution)
    }

    /// The aggregated failures for validation and resolution errors.
    ///
    /// # Example
    /// ```
    /// use cloud_sdk_gax::error::Error;
    /// use cloud_sdk_gax::multierror::Prefixed;
    /// let error = Error::validation(Prefixed::new("deployment get").append("id \"\" is invalid"));
    /// let errors = error.as_multierror().unwrap();
    /// assert_eq!(errors.prefix(), "deployment get");
    /// assert_eq!(errors.leaf_count(), 1);
    /// ```
    pub fn as_multierror(&self) -> Option<&Prefixed> {
        match self.kind {
            ErrorKind::Validation | ErrorKind::Resolution => self
                .source
                .as_ref()
                .and_then(|e| e.downcast_ref::<Prefixed>()),
            _ => None,
        }
    }

    /// Consumes the error, returning the aggregated failures if any.
    ///
    /// Returns the original error if it does not carry any aggregated
    /// failures.
    pub fn into_multierror(self) -> std::result::Result<Prefixed, Self> {
        let Self { kind, source } = self;
        match (kind, source) {
            (kind @ (ErrorKind::Validation | ErrorKind::Resolution), Some(source)) => {
                match source.downcast::<Prefixed>() {
                    Ok(p) => Ok(*p),
                    Err(source) => Err(Self {
                        kind,
                        source: Some(source),
                    }),
                }
            }
            (kind, source) => Err(Self { kind, source }),
        }
    }

    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use cloud_sdk_gax::error::Error;
    /// use cloud_sdk_gax::error::api::{BasicFailedReply, BasicFailedReplyElement};
    /// let reply = BasicFailedReply::default()
    ///     .set_errors([BasicFailedReplyElement::new().set_code("deployment.missing")]);
    /// let error = Error::service(reply.clone());
    /// assert_eq!(error.api_error(), Some(&reply));
    /// ```
    pub fn service(reply: BasicFailedReply) -> Self {
        let details = ServiceDetails {
            reply,
            status_code: None,
            headers: None,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Create service errors including transport metadata.
    #[doc(hidden)]
    pub fn service_with_http_metadata(
        reply: BasicFailedReply,
        status_code: Option<u16>,
        headers: Option<http::HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            reply,
        };
        let kind = ErrorKind::Service(Box::new(details));
        Self { kind, source: None }
    }

    /// The [BasicFailedReply] payload associated with this error.
    ///
    /// # Examples
    /// ```
    /// use cloud_sdk_gax::error::Error;
    /// fn handle_error(e: Error) {
    ///     if let Some(reply) = e.api_error() {
    ///         for element in &reply.errors {
    ///             println!("the service reported {element}");
    ///         }
    ///     }
    /// }
    /// ```
    ///
    /// # Troubleshooting
    ///
    /// As this error type is created by the service, troubleshooting this
    /// problem typically involves reading the service documentation for each
    /// of the error codes in the payload.
    pub fn api_error(&self) -> Option<&BasicFailedReply> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().reply),
            _ => None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use cloud_sdk_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    ///
    /// # Troubleshooting
    ///
    /// Consider increasing the attempt timeout in the request options.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause for deserialization problems is a mismatch
    /// between the SDK version and the API version. Please open an issue if
    /// you run into this problem with a supported API version.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot build the request path.
    ///
    /// This indicates the request is missing required path parameters.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// If true, the request was missing required path parameters.
    #[doc(hidden)]
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates the configured API key or user credentials
    /// contain characters that are not valid in HTTP headers.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use cloud_sdk_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    ///
    /// Sometimes the error is generated before it reaches the service, for
    /// example, by a proxy or load balancer. In such cases the SDK returns the
    /// status code, headers, and http payload.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a broken connection after the request is sent, or a
    /// connection refused by the endpoint.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// A problem in the transport layer.
    ///
    /// # Troubleshooting
    ///
    /// This indicates that the request did not reach the service, or that the
    /// response did not include a structured error payload. Verify the
    /// endpoint configured in the client, and the region in the request
    /// options.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Validation | ErrorKind::Resolution, Some(e)) => {
                if f.alternate() {
                    write!(f, "{e:#}")
                } else {
                    write!(f, "{e}")
                }
            }
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot build the request path {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => write!(f, "{}", d.reply),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Validation,
    Resolution,
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    reply: BasicFailedReply,
}
