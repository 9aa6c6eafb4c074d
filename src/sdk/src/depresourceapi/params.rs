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

use crate::client::CloudApi;
use crate::deploymentapi::{GetResourceRefIdParams, get_resource_ref_id};
use crate::model::{ResourceInstancesRequest, ResourceRequest};
use crate::params::{check_api, check_deployment_id};
use gax::multierror::Prefixed;

/// The parameters identifying a resource in a deployment.
///
/// When `ref_id` is not set, [validate][Params::validate] discovers it from
/// the deployment, this requires a single resource of `kind`.
#[derive(Clone, Debug, Default)]
pub struct Params {
    pub api: Option<CloudApi>,
    pub deployment_id: String,
    /// The resource kind, e.g. `elasticsearch`, `kibana`, `apm`, or `appsearch`.
    pub kind: String,
    pub ref_id: Option<String>,
}

impl Params {
    /// Validates the parameters, discovering the reference id if needed.
    ///
    /// The discovery runs even if other checks fail, and its failure is
    /// reported with the rest of the problems. On success `ref_id` is set, and
    /// further calls do not contact the service.
    pub async fn validate(&mut self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment resource");
        check_api(&mut merr, &self.api);
        check_deployment_id(&mut merr, &self.deployment_id);
        if self.kind.is_empty() {
            merr.push("resource kind cannot be empty");
        }
        if self.ref_id.is_none() {
            let discovered = get_resource_ref_id(GetResourceRefIdParams {
                api: self.api.clone(),
                deployment_id: self.deployment_id.clone(),
                kind: self.kind.clone(),
            })
            .await;
            match discovered {
                Ok(ref_id) => self.ref_id = Some(ref_id),
                Err(e) => merr.push(
                    Prefixed::new("failed auto-discovering the resource ref id").append(e),
                ),
            }
        }
        merr.into_result()
    }

    pub(crate) fn resource_request(&self) -> ResourceRequest {
        ResourceRequest::new(
            self.deployment_id.as_str(),
            self.kind.as_str(),
            self.ref_id.as_deref().unwrap_or_default(),
        )
    }

    pub(crate) fn instances_request(
        &self,
        instance_ids: &[String],
        ignore_missing: Option<bool>,
    ) -> ResourceInstancesRequest {
        ResourceInstancesRequest::new(self.resource_request())
            .set_instance_ids(instance_ids.iter().cloned())
            .set_or_clear_ignore_missing(ignore_missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockCloudApi, deployment_missing, deployment_with_elasticsearch};
    use cloud_sdk_test_utils::fixtures::VALID_DEPLOYMENT_ID;
    use gax::response::Response;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn all_problems_are_reported() {
        let mut params = Params::default();
        let err = params.validate().await.expect_err("empty parameters are invalid");
        // The discovery reports the missing api and the invalid id again.
        assert_eq!(err.leaf_count(), 5, "{err}");
        assert_eq!(err.len(), 4, "{err}");
        assert_eq!(
            err.to_string(),
            "deployment resource: api reference is required for the operation; \
             id \"\" is invalid; resource kind cannot be empty; \
             failed auto-discovering the resource ref id: deployment get: \
             api reference is required for the operation; id \"\" is invalid"
        );
        assert_eq!(params.ref_id, None);
    }

    #[tokio::test]
    async fn explicit_ref_id_skips_discovery() {
        let mut params = Params {
            api: crate::mocks::api(MockCloudApi::new()),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            kind: "kibana".into(),
            ref_id: Some("main-kibana".into()),
        };
        params.validate().await.expect("parameters are valid");
        assert_eq!(params.ref_id.as_deref(), Some("main-kibana"));
    }

    #[tokio::test]
    async fn discovery_success() {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment()
            .times(1)
            .return_once(|_, _| Ok(Response::from(deployment_with_elasticsearch("elasticsearch", None))));
        let mut params = Params {
            api: crate::mocks::api(mock),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            kind: "elasticsearch".into(),
            ref_id: None,
        };
        params.validate().await.expect("discovery succeeds");
        assert_eq!(params.ref_id.as_deref(), Some("elasticsearch"));
        // The discovered value is reused, the mock would fail on a second call.
        params.validate().await.expect("parameters remain valid");
    }

    #[tokio::test]
    async fn discovery_failure() {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment()
            .times(2)
            .returning(|_, _| Err(deployment_missing()));
        let mut params = Params {
            api: crate::mocks::api(mock),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            kind: "elasticsearch".into(),
            ref_id: None,
        };
        let err = params.validate().await.expect_err("discovery fails");
        assert_eq!(
            err.to_string(),
            "deployment resource: failed auto-discovering the resource ref id: api error: deployment.missing: unknown"
        );
        assert_eq!(params.ref_id, None);
        let again = params.validate().await.expect_err("discovery fails again");
        assert_eq!(err, again);
    }

    #[tokio::test]
    async fn discovery_combined_with_direct_problems() {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment().never();
        let mut params = Params {
            api: crate::mocks::api(mock),
            deployment_id: "invalid".into(),
            kind: "elasticsearch".into(),
            ref_id: None,
        };
        let err = params.validate().await.expect_err("the id is invalid");
        let want = Prefixed::new("deployment resource")
            .append("id \"invalid\" is invalid")
            .append(
                Prefixed::new("failed auto-discovering the resource ref id")
                    .append(Prefixed::new("deployment get").append("id \"invalid\" is invalid")),
            );
        assert_eq!(err, want);
    }

    #[tokio::test]
    async fn service_error_combined_with_direct_problems() {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment()
            .times(1)
            .return_once(|_, _| Err(deployment_missing()));
        let mut params = Params {
            api: crate::mocks::api(mock),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            kind: String::new(),
            ref_id: None,
        };
        let err = params.validate().await.expect_err("the kind is empty");
        assert_eq!(err.leaf_count(), 2, "{err}");
        assert_eq!(
            err.to_string(),
            "deployment resource: resource kind cannot be empty; \
             failed auto-discovering the resource ref id: api error: deployment.missing: unknown"
        );
        assert_eq!(params.ref_id, None);
    }

    #[test]
    fn requests() {
        let params = Params {
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            kind: "apm".into(),
            ref_id: Some("main-apm".into()),
            ..Default::default()
        };
        let req = params.resource_request();
        assert_eq!(req, ResourceRequest::new(VALID_DEPLOYMENT_ID, "apm", "main-apm"));

        let req = params.instances_request(&["i-0".to_string(), "i-1".to_string()], Some(true));
        assert_eq!(req.ref_id, "main-apm");
        assert_eq!(req.instance_ids, vec!["i-0", "i-1"]);
        assert_eq!(req.ignore_missing, Some(true));
    }
}
