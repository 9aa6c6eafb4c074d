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

//! Operations on deployment templates.

use crate::client::CloudApi;
use crate::model::{DeploymentTemplateInfo, GetDeploymentTemplateRequest};
use crate::params::{api, check_api, check_region, region_options, validated};
use gax::multierror::Prefixed;

/// The parameters for [get].
#[derive(Clone, Debug, Default)]
pub struct GetParams {
    pub api: Option<CloudApi>,
    pub template_id: String,
    pub region: String,
    /// Include the instance configurations referenced by the template.
    pub show_instance_configurations: bool,
}

impl GetParams {
    pub fn validate(&self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment template get");
        check_api(&mut merr, &self.api);
        if self.template_id.is_empty() {
            merr.push("required template ID not provided");
        }
        check_region(&mut merr, &self.region);
        merr.into_result()
    }
}

/// Gets a deployment template in a region.
pub async fn get(params: GetParams) -> crate::Result<DeploymentTemplateInfo> {
    validated(params.validate())?;
    let req = GetDeploymentTemplateRequest::new(params.template_id)
        .set_show_instance_configurations(params.show_instance_configurations);
    api(&params.api)?
        .get_deployment_template(req, region_options(&params.region))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockCloudApi;
    use cloud_sdk_test_utils::fixtures::api_error;
    use gax::response::Response;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn validation() {
        let err = get(GetParams::default())
            .await
            .expect_err("parameters are invalid");
        assert_eq!(
            err.to_string(),
            "deployment template get: api reference is required for the operation; \
             required template ID not provided; \
             region not specified and is required for this operation"
        );
        assert_eq!(err.as_multierror().map(Prefixed::leaf_count), Some(3));
    }

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment_template()
            .withf(|req, options| {
                req.template_id == "default"
                    && req.show_instance_configurations
                    && options.region() == Some("ece-region")
            })
            .return_once(|_, _| Ok(Response::from(DeploymentTemplateInfo::new().set_id("default"))));
        let got = get(GetParams {
            api: crate::mocks::api(mock),
            template_id: "default".into(),
            region: "ece-region".into(),
            show_instance_configurations: true,
        })
        .await?;
        assert_eq!(got.id.as_deref(), Some("default"));
        Ok(())
    }

    #[tokio::test]
    async fn api_error_is_returned() {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment_template()
            .return_once(|_, _| Err(api_error("templates.not_found", "template not found")));
        let err = get(GetParams {
            api: crate::mocks::api(mock),
            template_id: "missing".into(),
            region: "ece-region".into(),
            ..Default::default()
        })
        .await
        .expect_err("the service fails");
        assert_eq!(err.http_status_code(), Some(404));
    }
}
