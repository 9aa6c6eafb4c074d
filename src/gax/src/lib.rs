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

//! Common components for the cloud control-plane SDK.
//!
//! This crate contains the error types, the multi-error aggregator, request
//! options, credentials, and client builders used by the SDK.
//!
//! <div class="warning">
//! Some of the types and functions in this crate are <b>not</b> intended for
//! general use. They are implementation details shared with the
//! <code>cloud-sdk</code> and <code>cloud-sdk-gax-internal</code> crates, and
//! are hidden from the documentation.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all the operations in the SDK.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the SDK.
pub mod error;

pub mod multierror;

pub mod options;

pub mod response;

pub mod credentials;

pub mod client_builder;
