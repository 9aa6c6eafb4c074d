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

/// The parameters to start all the instances of a resource.
#[derive(Clone, Debug, Default)]
pub struct StartParams {
    pub params: Params,
    /// Used by [start_all_or_specified], if true all the instances are started.
    pub all: bool,
}

impl StartParams {
    pub async fn validate(&mut self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment resource");
        merr.push_result(self.params.validate().await);
        merr.into_result()
    }
}

/// The parameters to start some instances of a resource.
#[derive(Clone, Debug, Default)]
pub struct StartInstancesParams {
    pub start: StartParams,
    /// If true, the service ignores the instances that do not exist.
    pub ignore_missing: Option<bool>,
    pub instance_ids: Vec<String>,
}

impl StartInstancesParams {
    pub async fn validate(&mut self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment start");
        if self.instance_ids.is_empty() {
            merr.push(ERR_NO_INSTANCES);
        }
        merr.push_result(self.start.validate().await);
        merr.into_result()
    }
}

/// Starts all the instances of a resource.
pub async fn start(mut params: StartParams) -> crate::Result<DeploymentResourceCommandResponse> {
    validated(params.validate().await)?;
    let params = params.params;
    api(&params.api)?
        .start_resource_instances_all(params.resource_request(), RequestOptions::default())
        .await
}

/// Starts the given instances of a resource.
pub async fn start_instances(
    mut params: StartInstancesParams,
) -> crate::Result<DeploymentResourceCommandResponse> {
    validated(params.validate().await)?;
    let resource = &params.start.params;
    api(&resource.api)?
        .start_resource_instances(
            resource.instances_request(&params.instance_ids, params.ignore_missing),
            RequestOptions::default(),
        )
        .await
}

/// Starts all the instances of a resource if `start.all` is set, otherwise
/// only the given instances.
pub async fn start_all_or_specified(
    params: StartInstancesParams,
) -> crate::Result<DeploymentResourceCommandResponse> {
    if params.start.all {
        return start(params.start).await;
    }
    start_instances(params).await
}
