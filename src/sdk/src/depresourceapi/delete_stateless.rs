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

use super::Params;
use crate::params::{api, validated};
use gax::multierror::Prefixed;
use gax::options::RequestOptions;

/// The parameters to delete a stateless resource (Kibana, APM, App Search).
#[derive(Clone, Debug, Default)]
pub struct DeleteStatelessParams {
    pub params: Params,
}

impl DeleteStatelessParams {
    pub async fn validate(&mut self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment resource delete");
        merr.push_result(self.params.validate().await);
        if self.params.kind == "elasticsearch" {
            merr.push("resource kind \"elasticsearch\" is not supported");
        }
        merr.into_result()
    }
}

/// Deletes a stateless resource from a deployment.
///
/// The resource must be shut down before it can be deleted.
pub async fn delete_stateless(mut params: DeleteStatelessParams) -> crate::Result<()> {
    validated(params.validate().await)?;
    let params = params.params;
    api(&params.api)?
        .delete_stateless_resource(params.resource_request(), RequestOptions::default())
        .await?;
    Ok(())
}
