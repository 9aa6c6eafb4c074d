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

//! Operations on platform roles.
//!
//! A blessing allows a runner (a host in a private installation) to take a
//! platform role, for example `allocator` or `proxy`.

use crate::client::CloudApi;
use crate::model::{AddBlessingRequest, Blessing, DeleteBlessingRequest, Validate};
use crate::params::{api, check_api, check_region, region_options, validated};
use gax::multierror::Prefixed;

const ERR_MISSING_ID: &str = "id not specified and is required for this operation";
const ERR_MISSING_RUNNER_ID: &str = "runner id not specified and is required for this operation";

/// The parameters for [add_blessing].
#[derive(Clone, Debug, Default)]
pub struct AddBlessingParams {
    pub api: Option<CloudApi>,
    pub blessing: Option<Blessing>,
    pub runner_id: String,
    /// The role id.
    pub id: String,
    pub region: String,
}

impl AddBlessingParams {
    pub fn validate(&self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("invalid role add blessing params");
        check_api(&mut merr, &self.api);
        match &self.blessing {
            None => merr.push("blessing definition not specified and is required for this operation"),
            Some(b) => {
                merr.push_result(b.validate());
            }
        }
        if self.id.is_empty() {
            merr.push(ERR_MISSING_ID);
        }
        if self.runner_id.is_empty() {
            merr.push(ERR_MISSING_RUNNER_ID);
        }
        check_region(&mut merr, &self.region);
        merr.into_result()
    }
}

/// Allows a runner to take a role.
pub async fn add_blessing(params: AddBlessingParams) -> crate::Result<()> {
    validated(params.validate())?;
    let AddBlessingParams {
        api: handle,
        blessing,
        runner_id,
        id,
        region,
    } = params;
    let req = AddBlessingRequest::new(id, runner_id, blessing.unwrap_or_default());
    api(&handle)?
        .add_blessing(req, region_options(&region))
        .await?;
    Ok(())
}

/// The parameters for [delete_blessing].
#[derive(Clone, Debug, Default)]
pub struct DeleteBlessingParams {
    pub api: Option<CloudApi>,
    pub runner_id: String,
    /// The role id.
    pub id: String,
    pub region: String,
}

impl DeleteBlessingParams {
    pub fn validate(&self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("invalid role delete blessing params");
        check_api(&mut merr, &self.api);
        if self.id.is_empty() {
            merr.push(ERR_MISSING_ID);
        }
        if self.runner_id.is_empty() {
            merr.push(ERR_MISSING_RUNNER_ID);
        }
        check_region(&mut merr, &self.region);
        merr.into_result()
    }
}

/// Revokes the blessing of a runner for a role.
pub async fn delete_blessing(params: DeleteBlessingParams) -> crate::Result<()> {
    validated(params.validate())?;
    api(&params.api)?
        .delete_blessing(
            DeleteBlessingRequest::new(params.id, params.runner_id),
            region_options(&params.region),
        )
        .await?;
    Ok(())
}
