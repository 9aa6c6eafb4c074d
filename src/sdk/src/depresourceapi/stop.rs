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

use super::{ERR_NO_INSTANCES, Params};
use crate::model::DeploymentResourceCommandResponse;
use crate::params::{api, validated};
use gax::multierror::Prefixed;
use gax::options::RequestOptions;

/// The parameters to stop all the instances of a resource.
#[derive(Clone, Debug, Default)]
pub struct StopParams {
    pub params: Params,
    /// Used by [stop_all_or_specified], if true all the instances are stopped.
    pub all: bool,
}

impl StopParams {
    /// Same as [Params::validate].
    pub async fn validate(&mut self) -> Result<(), Prefixed> {
        self.params.validate().await
    }
}

/// The parameters to stop some instances of a resource.
#[derive(Clone, Debug, Default)]
pub struct StopInstancesParams {
    pub stop: StopParams,
    /// If true, the service ignores the instances that do not exist.
    pub ignore_missing: Option<bool>,
    pub instance_ids: Vec<String>,
}

impl StopInstancesParams {
    pub async fn validate(&mut self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment stop");
        if self.instance_ids.is_empty() {
            merr.push(ERR_NO_INSTANCES);
        }
        merr.push_result(self.stop.validate().await);
        merr.into_result()
    }
}

/// Stops all the instances of a resource.
pub async fn stop(mut params: StopParams) -> crate::Result<DeploymentResourceCommandResponse> {
    validated(params.validate().await)?;
    let params = params.params;
    api(&params.api)?
        .stop_resource_instances_all(params.resource_request(), RequestOptions::default())
        .await
}

/// Stops the given instances of a resource.
pub async fn stop_instances(
    mut params: StopInstancesParams,
) -> crate::Result<DeploymentResourceCommandResponse> {
    validated(params.validate().await)?;
    let resource = &params.stop.params;
    api(&resource.api)?
        .stop_resource_instances(
            resource.instances_request(&params.instance_ids, params.ignore_missing),
            RequestOptions::default(),
        )
        .await
}

/// Stops all the instances of a resource if `stop.all` is set, otherwise only
/// the given instances.
pub async fn stop_all_or_specified(
    params: StopInstancesParams,
) -> crate::Result<DeploymentResourceCommandResponse> {
    if params.stop.all {
        return stop(params.stop).await;
    }
    stop_instances(params).await
}
