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

//! Cloud control-plane SDK for Rust.
//!
//! This crate contains the operations to manage deployments and their
//! resources in a cloud (or privately installed) control plane:
//!
//! * [deploymentapi]: get and re-synchronize deployments.
//! * [depresourceapi]: start, stop, and put in maintenance mode the instances
//!   of a deployment resource, and create or delete stateless resources.
//! * [noteapi]: manage the notes attached to a deployment.
//! * [deptemplateapi]: get deployment templates.
//! * [roleapi]: manage the blessings of platform roles.
//!
//! Each operation receives a parameter set. The parameter sets are validated
//! before any remote call, and the validation reports all the problems found:
//!
//! ```no_run
//! # tokio_test::block_on(async {
//! use cloud_sdk::client::CloudApi;
//! use cloud_sdk::depresourceapi::{StopParams, Params, stop};
//! use gax::credentials::Credentials;
//!
//! let api = CloudApi::builder()
//!     .with_endpoint("https://ece.example.com:12443")
//!     .with_credentials(Credentials::api_key("my-api-key"))
//!     .build()
//!     .await?;
//! let response = stop(StopParams {
//!     params: Params {
//!         api: Some(api),
//!         deployment_id: "d324608c97154bdba2dff97511d40368".into(),
//!         kind: "kibana".into(),
//!         ..Default::default()
//!     },
//!     all: true,
//! })
//! .await?;
//! println!("{response:?}");
//! # anyhow::Result::<()>::Ok(()) });
//! ```
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases.

pub use gax::Result;
pub use gax::error::Error;

/// The messages exchanged with the service.
pub mod model;

/// Traits to mock the client.
pub mod stub;

/// The client.
pub mod client;

/// Request builders.
pub mod builder;

pub mod deploymentapi;
pub mod depresourceapi;
pub mod deptemplateapi;
pub mod noteapi;
pub mod roleapi;

pub(crate) mod params;
#[doc(hidden)]
pub(crate) mod tracing;
#[doc(hidden)]
pub(crate) mod transport;

#[cfg(test)]
mod mocks;

/// The default host used by the client, a local installation.
pub(crate) const DEFAULT_HOST: &str = "https://localhost:12443";
