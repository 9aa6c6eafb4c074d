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

//! Maintenance mode commands.
//!
//! Instances in maintenance mode do not receive traffic. The parameter sets
//! are shared with the start and stop commands.

use super::{StartInstancesParams, StartParams, StopInstancesParams, StopParams};
use crate::model::DeploymentResourceCommandResponse;
use crate::params::{api, validated};
use gax::options::RequestOptions;

/// Puts all the instances of a resource in maintenance mode.
pub async fn start_maintenance_mode(
    mut params: StartParams,
) -> crate::Result<DeploymentResourceCommandResponse> {
    validated(params.validate().await)?;
    let params = params.params;
    api(&params.api)?
        .start_maintenance_mode_all(params.resource_request(), RequestOptions::default())
        .await
}

/// Puts the given instances of a resource in maintenance mode.
pub async fn start_instances_maintenance_mode(
    mut params: StartInstancesParams,
) -> crate::Result<DeploymentResourceCommandResponse> {
    validated(params.validate().await)?;
    let resource = &params.start.params;
    api(&resource.api)?
        .start_maintenance_mode(
            resource.instances_request(&params.instance_ids, params.ignore_missing),
            RequestOptions::default(),
        )
        .await
}

/// Puts all the instances of a resource in maintenance mode if `start.all` is
/// set, otherwise only the given instances.
pub async fn start_maintenance_mode_all_or_specified(
    params: StartInstancesParams,
) -> crate::Result<DeploymentResourceCommandResponse> {
    if params.start.all {
        return start_maintenance_mode(params.start).await;
    }
    start_instances_maintenance_mode(params).await
}

/// Takes all the instances of a resource out of maintenance mode.
pub async fn stop_maintenance_mode(
    mut params: StopParams,
) -> crate::Result<DeploymentResourceCommandResponse> {
    validated(params.validate().await)?;
    let params = params.params;
    api(&params.api)?
        .stop_maintenance_mode_all(params.resource_request(), RequestOptions::default())
        .await
}

/// Takes the given instances of a resource out of maintenance mode.
pub async fn stop_instances_maintenance_mode(
    mut params: StopInstancesParams,
) -> crate::Result<DeploymentResourceCommandResponse> {
    validated(params.validate().await)?;
    let resource = &params.stop.params;
    api(&resource.api)?
        .stop_maintenance_mode(
            resource.instances_request(&params.instance_ids, params.ignore_missing),
            RequestOptions::default(),
        )
        .await
}

/// Takes all the instances of a resource out of maintenance mode if `stop.all`
/// is set, otherwise only the given instances.
pub async fn stop_maintenance_mode_all_or_specified(
    params: StopInstancesParams,
) -> crate::Result<DeploymentResourceCommandResponse> {
    if params.stop.all {
        return stop_maintenance_mode(params.stop).await;
    }
    stop_instances_maintenance_mode(params).await
}
