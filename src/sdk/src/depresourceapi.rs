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

//! Operations on the resources of a deployment.
//!
//! The resources of a deployment are identified by their kind (e.g.
//! `elasticsearch` or `kibana`) and a reference id, unique among the resources
//! of the same kind. The operations discover the reference id when the
//! deployment has a single resource of the requested kind:
//!
//! ```no_run
//! # tokio_test::block_on(async {
//! use cloud_sdk::client::CloudApi;
//! use cloud_sdk::depresourceapi::{Params, StartInstancesParams, StartParams};
//! use cloud_sdk::depresourceapi::start_all_or_specified;
//! let api = CloudApi::builder().build().await?;
//! let response = start_all_or_specified(StartInstancesParams {
//!     start: StartParams {
//!         params: Params {
//!             api: Some(api),
//!             deployment_id: "d324608c97154bdba2dff97511d40368".into(),
//!             kind: "kibana".into(),
//!             ..Default::default()
//!         },
//!         all: false,
//!     },
//!     instance_ids: vec!["instance-0000000001".into()],
//!     ..Default::default()
//! })
//! .await?;
//! println!("{response:?}");
//! # anyhow::Result::<()>::Ok(()) });
//! ```

mod delete_stateless;
mod maintenance;
mod params;
mod start;
mod stateless;
mod stop;

pub use delete_stateless::{DeleteStatelessParams, delete_stateless};
pub use maintenance::{
    start_instances_maintenance_mode, start_maintenance_mode,
    start_maintenance_mode_all_or_specified, stop_instances_maintenance_mode,
    stop_maintenance_mode, stop_maintenance_mode_all_or_specified,
};
pub use params::Params;
pub use start::{StartInstancesParams, StartParams, start, start_all_or_specified, start_instances};
pub use stateless::{NewStateless, new_apm, new_appsearch, new_kibana};
pub use stop::{StopInstancesParams, StopParams, stop, stop_all_or_specified, stop_instances};

/// The error message when an instance scoped operation has no instances.
const ERR_NO_INSTANCES: &str = "at least 1 instance ID must be provided";
