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

//! Operations on deployments.
//!
//! Each operation receives a parameter set, validates it, and only then calls
//! the service. Validation reports every problem found in the parameter set:
//!
//! ```
//! # tokio_test::block_on(async {
//! use cloud_sdk::deploymentapi::{get, GetParams};
//! let err = get(GetParams::default()).await.unwrap_err();
//! assert!(err.is_validation(), "{err:?}");
//! assert_eq!(
//!     err.to_string(),
//!     "deployment get: api reference is required for the operation; id \"\" is invalid"
//! );
//! # });
//! ```

use crate::client::CloudApi;
use crate::model::{
    DeploymentGetResponse, GetDeploymentRequest, IndexSynchronizationResults,
    ResyncDeploymentRequest, ResyncDeploymentsRequest,
};
use crate::params::{api, check_api, check_deployment_id, validated};
use gax::error::Error;
use gax::multierror::Prefixed;
use gax::options::RequestOptions;

/// The parameters shared by the operations on a single deployment.
#[derive(Clone, Debug, Default)]
pub struct Params {
    pub api: Option<CloudApi>,
    /// The deployment id, 32 characters long.
    pub id: String,
}

impl Params {
    pub fn validate(&self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment params");
        check_api(&mut merr, &self.api);
        check_deployment_id(&mut merr, &self.id);
        merr.into_result()
    }
}

/// The parameters for [get].
#[derive(Clone, Debug, Default)]
pub struct GetParams {
    pub api: Option<CloudApi>,
    pub deployment_id: String,
    /// Include the current plan (and the plan history) of each resource.
    pub show_plans: bool,
    pub show_metadata: bool,
}

impl GetParams {
    pub fn validate(&self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment get");
        check_api(&mut merr, &self.api);
        check_deployment_id(&mut merr, &self.deployment_id);
        merr.into_result()
    }
}

/// Gets a deployment.
pub async fn get(params: GetParams) -> crate::Result<DeploymentGetResponse> {
    validated(params.validate())?;
    let req = GetDeploymentRequest::new(params.deployment_id)
        .set_show_plans(params.show_plans)
        .set_show_metadata(params.show_metadata);
    api(&params.api)?
        .get_deployment(req, RequestOptions::default())
        .await
}

/// The parameters for [get_resource_ref_id].
#[derive(Clone, Debug, Default)]
pub struct GetResourceRefIdParams {
    pub api: Option<CloudApi>,
    pub deployment_id: String,
    /// The resource kind, e.g. `elasticsearch` or `kibana`.
    pub kind: String,
}

/// Finds the ref id of the resource of `kind` in a deployment.
///
/// The deployment must contain exactly one resource of the requested kind.
/// The parameters are validated by [get].
pub async fn get_resource_ref_id(params: GetResourceRefIdParams) -> crate::Result<String> {
    let deployment = get(GetParams {
        api: params.api,
        deployment_id: params.deployment_id,
        ..Default::default()
    })
    .await?;
    let kind = params.kind;
    let resources = deployment.resources.unwrap_or_default();
    let problem = match resources.of_kind(&kind) {
        [resource] => match &resource.ref_id {
            Some(ref_id) => return Ok(ref_id.clone()),
            None => format!("the {kind} resource does not have a ref id"),
        },
        [] => format!("resource kind \"{kind}\" is not available"),
        many => format!(
            "found {} resources of kind \"{kind}\", the ref id must be specified",
            many.len()
        ),
    };
    Err(Error::resolution(Prefixed::new("deployment").append(problem)))
}

/// The parameters for [resync].
#[derive(Clone, Debug, Default)]
pub struct ResyncParams {
    pub api: Option<CloudApi>,
    pub id: String,
}

impl ResyncParams {
    pub fn validate(&self) -> Result<(), Prefixed> {
        let params = Params {
            api: self.api.clone(),
            id: self.id.clone(),
        };
        let mut merr = Prefixed::new("deployment resync");
        merr.push_result(params.validate());
        merr.into_result()
    }
}

/// Re-synchronizes the search index of a single deployment.
pub async fn resync(params: ResyncParams) -> crate::Result<()> {
    validated(params.validate())?;
    api(&params.api)?
        .resync_deployment(
            ResyncDeploymentRequest::new(params.id),
            RequestOptions::default(),
        )
        .await?;
    Ok(())
}

/// The parameters for [resync_all].
#[derive(Clone, Debug, Default)]
pub struct ResyncAllParams {
    pub api: Option<CloudApi>,
}

impl ResyncAllParams {
    /// The only requirement is the API handle, the error has no prefix.
    pub fn validate(&self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("");
        check_api(&mut merr, &self.api);
        merr.into_result()
    }
}

/// Re-synchronizes the search index of all deployments.
pub async fn resync_all(params: ResyncAllParams) -> crate::Result<IndexSynchronizationResults> {
    validated(params.validate())?;
    api(&params.api)?
        .resync_deployments(ResyncDeploymentsRequest::new(), RequestOptions::default())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockCloudApi, deployment_with_elasticsearch};
    use crate::model::{DeploymentResources, ResourceInfo};
    use cloud_sdk_test_utils::fixtures::{VALID_DEPLOYMENT_ID, api_error};
    use gax::response::Response;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn get_validation() {
        let err = get(GetParams {
            deployment_id: "invalid".into(),
            ..Default::default()
        })
        .await
        .expect_err("invalid parameters should fail");
        let want = Prefixed::new("deployment get")
            .append("api reference is required for the operation")
            .append("id \"invalid\" is invalid");
        assert_eq!(err.as_multierror(), Some(&want));
    }

    #[tokio::test]
    async fn get_success() -> anyhow::Result<()> {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment()
            .withf(|req, options| {
                req.deployment_id == VALID_DEPLOYMENT_ID
                    && req.show_plans
                    && !req.show_metadata
                    && options.region().is_none()
            })
            .return_once(|_, _| {
                Ok(Response::from(deployment_with_elasticsearch(
                    "main-elasticsearch",
                    None,
                )))
            });
        let got = get(GetParams {
            api: crate::mocks::api(mock),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            show_plans: true,
            ..Default::default()
        })
        .await?;
        assert_eq!(got, deployment_with_elasticsearch("main-elasticsearch", None));
        Ok(())
    }

    #[tokio::test]
    async fn get_api_error() {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment()
            .return_once(|_, _| Err(api_error("deployment.missing", "not found")));
        let err = get(GetParams {
            api: crate::mocks::api(mock),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            ..Default::default()
        })
        .await
        .expect_err("service errors are returned");
        assert!(err.api_error().is_some(), "{err:?}");
        assert_eq!(err.to_string(), "api error: deployment.missing: not found");
    }

    #[tokio::test]
    async fn ref_id_single_match() -> anyhow::Result<()> {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment()
            .return_once(|_, _| Ok(Response::from(deployment_with_elasticsearch("elasticsearch", None))));
        let got = get_resource_ref_id(GetResourceRefIdParams {
            api: crate::mocks::api(mock),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            kind: "elasticsearch".into(),
        })
        .await?;
        assert_eq!(got, "elasticsearch");
        Ok(())
    }

    #[tokio::test]
    async fn ref_id_not_available() {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment()
            .return_once(|_, _| Ok(Response::from(deployment_with_elasticsearch("main-elasticsearch", None))));
        let err = get_resource_ref_id(GetResourceRefIdParams {
            api: crate::mocks::api(mock),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            kind: "apm".into(),
        })
        .await
        .expect_err("no apm resources");
        assert!(err.is_resolution(), "{err:?}");
        assert_eq!(
            err.to_string(),
            "deployment: resource kind \"apm\" is not available"
        );
    }

    #[tokio::test]
    async fn ref_id_ambiguous() {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment().return_once(|_, _| {
            let resources = DeploymentResources::new().set_kibana([
                ResourceInfo::new().set_ref_id("main-kibana"),
                ResourceInfo::new().set_ref_id("other-kibana"),
            ]);
            Ok(Response::from(
                DeploymentGetResponse::new().set_resources(resources),
            ))
        });
        let err = get_resource_ref_id(GetResourceRefIdParams {
            api: crate::mocks::api(mock),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            kind: "kibana".into(),
        })
        .await
        .expect_err("two kibana resources");
        assert!(err.is_resolution(), "{err:?}");
        assert!(err.to_string().contains("found 2 resources"), "{err}");
    }

    #[tokio::test]
    async fn ref_id_validation() {
        let err = get_resource_ref_id(GetResourceRefIdParams::default())
            .await
            .expect_err("invalid parameters should fail");
        assert!(err.is_validation(), "{err:?}");
        assert_eq!(
            err.as_multierror().map(Prefixed::prefix),
            Some("deployment get")
        );
    }

    #[tokio::test]
    async fn resync_validation() {
        let err = resync(ResyncParams::default())
            .await
            .expect_err("invalid parameters should fail");
        let want = Prefixed::new("deployment resync").append(
            Prefixed::new("deployment params")
                .append("api reference is required for the operation")
                .append("id \"\" is invalid"),
        );
        assert_eq!(err.as_multierror(), Some(&want));

        let err = resync(ResyncParams {
            id: VALID_DEPLOYMENT_ID.into(),
            ..Default::default()
        })
        .await
        .expect_err("missing api should fail");
        assert_eq!(
            err.to_string(),
            "deployment resync: deployment params: api reference is required for the operation"
        );
    }

    #[tokio::test]
    async fn resync_success() -> anyhow::Result<()> {
        let mut mock = MockCloudApi::new();
        mock.expect_resync_deployment()
            .withf(|req, _| req.deployment_id == VALID_DEPLOYMENT_ID)
            .return_once(|_, _| Ok(Response::from(IndexSynchronizationResults::default())));
        resync(ResyncParams {
            api: crate::mocks::api(mock),
            id: VALID_DEPLOYMENT_ID.into(),
        })
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn resync_api_error() {
        let mut mock = MockCloudApi::new();
        mock.expect_resync_deployment().return_once(|_, _| {
            Err(Error::http(
                403,
                http::HeaderMap::new(),
                r#"{"error": "some forbidden error"}"#.into(),
            ))
        });
        let err = resync(ResyncParams {
            api: crate::mocks::api(mock),
            id: VALID_DEPLOYMENT_ID.into(),
        })
        .await
        .expect_err("service errors are returned");
        assert_eq!(err.http_status_code(), Some(403));
    }

    #[tokio::test]
    async fn resync_all_validation() {
        let err = resync_all(ResyncAllParams::default())
            .await
            .expect_err("missing api should fail");
        assert!(err.is_validation(), "{err:?}");
        assert_eq!(err.to_string(), "api reference is required for the operation");
    }

    #[tokio::test]
    async fn resync_all_success() -> anyhow::Result<()> {
        let mut mock = MockCloudApi::new();
        mock.expect_resync_deployments().return_once(|_, _| {
            Ok(Response::from(IndexSynchronizationResults {
                synced: vec![VALID_DEPLOYMENT_ID.to_string()],
                ..Default::default()
            }))
        });
        let got = resync_all(ResyncAllParams {
            api: crate::mocks::api(mock),
        })
        .await?;
        assert_eq!(got.synced, vec![VALID_DEPLOYMENT_ID.to_string()]);
        assert!(got.errors.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn validate_is_idempotent() {
        let params = ResyncParams {
            id: "short".into(),
            ..Default::default()
        };
        assert_eq!(params.validate(), params.validate());
    }
}
