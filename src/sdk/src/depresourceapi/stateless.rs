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

//! Composition of the payloads to add stateless resources to a deployment.
//!
//! The payload is based on the deployment template used by the deployment,
//! the caller may override the size and the number of zones.

use crate::client::CloudApi;
use crate::deploymentapi::{self, GetParams};
use crate::deptemplateapi;
use crate::model::{
    DeploymentTemplateInfo, ResourceInfo, StatelessConfiguration, StatelessPayload, StatelessPlan,
    TopologyElement, TopologySize,
};
use crate::params::{ERR_DEPLOYMENT_ID, check_api, validated};
use gax::error::Error;
use gax::multierror::Prefixed;

const ERR_NO_TEMPLATE: &str =
    "unable to obtain deployment template ID from existing deployment ID, please specify a one";

/// The parameters to compose the payload of a new stateless resource.
///
/// The Elasticsearch ref id and the template id are obtained from the
/// deployment when not set.
#[derive(Clone, Debug, Default)]
pub struct NewStateless {
    pub api: Option<CloudApi>,
    pub deployment_id: String,
    /// The Elasticsearch resource the new resource connects to.
    pub elasticsearch_ref_id: Option<String>,
    /// The ref id of the new resource, defaults to `main-<kind>`.
    pub ref_id: Option<String>,
    pub region: String,
    pub template_id: Option<String>,
    pub version: Option<String>,
    /// Overrides the memory size (in megabytes) set in the template.
    pub size: Option<i32>,
    /// Overrides the number of zones set in the template.
    pub zone_count: Option<i32>,
}

impl NewStateless {
    pub fn validate(&self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment resource");
        check_api(&mut merr, &self.api);
        if self.deployment_id.len() != crate::params::DEPLOYMENT_ID_LEN {
            merr.push(ERR_DEPLOYMENT_ID);
        }
        if self.region.is_empty() {
            merr.push("topology: region cannot be empty");
        }
        merr.into_result()
    }
}

/// Composes the payload to add an App Search resource to a deployment.
pub async fn new_appsearch(params: NewStateless) -> crate::Result<StatelessPayload> {
    compose(params, StatelessKind::AppSearch).await
}

/// Composes the payload to add a Kibana resource to a deployment.
pub async fn new_kibana(params: NewStateless) -> crate::Result<StatelessPayload> {
    compose(params, StatelessKind::Kibana).await
}

/// Composes the payload to add an APM resource to a deployment.
pub async fn new_apm(params: NewStateless) -> crate::Result<StatelessPayload> {
    compose(params, StatelessKind::Apm).await
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum StatelessKind {
    AppSearch,
    Kibana,
    Apm,
}

impl StatelessKind {
    fn name(self) -> &'static str {
        match self {
            Self::AppSearch => "App Search",
            Self::Kibana => "Kibana",
            Self::Apm => "APM",
        }
    }

    fn default_ref_id(self) -> &'static str {
        match self {
            Self::AppSearch => "main-appsearch",
            Self::Kibana => "main-kibana",
            Self::Apm => "main-apm",
        }
    }

    /// The first topology element of this kind in `template`, if any.
    fn topology(self, template: &DeploymentTemplateInfo) -> Option<TopologyElement> {
        let definition = template.cluster_template.as_ref()?;
        let resource = match self {
            Self::AppSearch => definition.appsearch.as_ref(),
            Self::Kibana => definition.kibana.as_ref(),
            Self::Apm => definition.apm.as_ref(),
        }?;
        resource.plan.as_ref()?.cluster_topology.first().cloned()
    }

    fn plan(self, topology: TopologyElement, version: Option<String>) -> StatelessPlan {
        let config = Some(StatelessConfiguration { version });
        let mut plan = StatelessPlan::new().set_cluster_topology([topology]);
        match self {
            Self::AppSearch => plan.appsearch = config,
            Self::Kibana => plan.kibana = config,
            Self::Apm => plan.apm = config,
        }
        plan
    }
}

fn stage_error(stage: &str, source: Error) -> Error {
    Error::resolution(Prefixed::new(stage).append(source))
}

async fn compose(params: NewStateless, kind: StatelessKind) -> crate::Result<StatelessPayload> {
    validated(params.validate())?;
    let NewStateless {
        api,
        deployment_id,
        elasticsearch_ref_id,
        ref_id,
        region,
        template_id,
        version,
        size,
        zone_count,
    } = params;

    let (mut es_ref_id, mut template_id) = (elasticsearch_ref_id, template_id);
    if es_ref_id.is_none() || template_id.is_none() {
        let deployment = deploymentapi::get(GetParams {
            api: api.clone(),
            deployment_id,
            show_plans: true,
            ..Default::default()
        })
        .await
        .map_err(|e| stage_error("failed obtaining the deployment info", e))?;
        let elasticsearch = deployment
            .resources
            .as_ref()
            .and_then(|r| r.elasticsearch.first());
        if es_ref_id.is_none() {
            es_ref_id = elasticsearch.and_then(|r| r.ref_id.clone());
        }
        if template_id.is_none() {
            template_id = elasticsearch
                .and_then(ResourceInfo::current_template_id)
                .map(str::to_string);
        }
    }
    let Some(template_id) = template_id else {
        return Err(Error::resolution(Prefixed::new("").append(ERR_NO_TEMPLATE)));
    };
    tracing::debug!("composing the {} payload from template {template_id}", kind.name());

    let template = deptemplateapi::get(deptemplateapi::GetParams {
        api,
        template_id: template_id.clone(),
        region: region.clone(),
        ..Default::default()
    })
    .await
    .map_err(|e| stage_error("failed obtaining the deployment template", e))?;

    let Some(mut topology) = kind.topology(&template) else {
        let name = kind.name();
        return Err(Error::resolution(Prefixed::new("deployment").append(format!(
            "the {template_id} template is not configured for {name}. Please use another template if you wish to start {name} instances"
        ))));
    };
    if let Some(size) = size {
        topology.size = Some(TopologySize::memory(size));
    }
    if let Some(zone_count) = zone_count {
        topology.zone_count = zone_count;
    }

    Ok(StatelessPayload {
        elasticsearch_cluster_ref_id: es_ref_id,
        region: Some(region),
        ref_id: Some(ref_id.unwrap_or_else(|| kind.default_ref_id().to_string())),
        plan: Some(kind.plan(topology, version)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockCloudApi, deployment_with_elasticsearch};
    use crate::model::{
        ClusterPlan, CreateStatelessRequest, DeploymentGetResponse, DeploymentResources,
        DeploymentTemplateDefinition,
    };
    use cloud_sdk_test_utils::fixtures::{VALID_DEPLOYMENT_ID, api_error_with_status};
    use gax::response::Response;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn stateless_template() -> CreateStatelessRequest {
        CreateStatelessRequest::new().set_plan(StatelessPlan::new().set_cluster_topology([
            TopologyElement::new().set_memory_size(1024).set_zone_count(1),
        ]))
    }

    fn appsearch_template() -> DeploymentTemplateInfo {
        DeploymentTemplateInfo::new().set_id("default.appsearch").set_cluster_template(
            DeploymentTemplateDefinition::new()
                .set_plan(ClusterPlan::new())
                .set_appsearch(stateless_template()),
        )
    }

    fn default_template() -> DeploymentTemplateInfo {
        DeploymentTemplateInfo::new()
            .set_id("default")
            .set_cluster_template(DeploymentTemplateDefinition::new().set_plan(ClusterPlan::new()))
    }

    fn params(mock: MockCloudApi) -> NewStateless {
        NewStateless {
            api: crate::mocks::api(mock),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            region: "ece-region".into(),
            ..Default::default()
        }
    }

    fn mock_with_template(template: DeploymentTemplateInfo) -> MockCloudApi {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment()
            .withf(|req, _| req.show_plans)
            .return_once(|_, _| {
                Ok(Response::from(deployment_with_elasticsearch(
                    "main-elasticsearch",
                    Some("an ID"),
                )))
            });
        mock.expect_get_deployment_template()
            .withf(|req, options| req.template_id == "an ID" && options.region() == Some("ece-region"))
            .return_once(|_, _| Ok(Response::from(template)));
        mock
    }

    fn payload(size: i32, zone_count: i32) -> StatelessPayload {
        StatelessPayload {
            elasticsearch_cluster_ref_id: Some("main-elasticsearch".into()),
            region: Some("ece-region".into()),
            ref_id: Some("main-appsearch".into()),
            plan: Some(StatelessPlan {
                appsearch: Some(StatelessConfiguration::default()),
                ..StatelessPlan::new().set_cluster_topology([TopologyElement::new()
                    .set_memory_size(size)
                    .set_zone_count(zone_count)])
            }),
        }
    }

    #[tokio::test]
    async fn validation() {
        let err = new_appsearch(NewStateless {
            deployment_id: "invalidID".into(),
            ..Default::default()
        })
        .await
        .expect_err("invalid parameters");
        let want = Prefixed::new("deployment resource")
            .append("api reference is required for the operation")
            .append("deployment id should have a length of 32 characters")
            .append("topology: region cannot be empty");
        assert_eq!(err.as_multierror(), Some(&want));
    }

    #[tokio::test]
    async fn deployment_info_error() {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment()
            .return_once(|_, _| Err(api_error_with_status(500, "root.internal", "internal error")));
        let err = new_appsearch(params(mock)).await.expect_err("the service fails");
        assert!(err.is_resolution(), "{err:?}");
        assert_eq!(
            err.to_string(),
            "failed obtaining the deployment info: api error: root.internal: internal error"
        );
    }

    #[tokio::test]
    async fn missing_template_id() {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment().return_once(|_, _| {
            Ok(Response::from(
                DeploymentGetResponse::new().set_resources(
                    DeploymentResources::new().set_elasticsearch([ResourceInfo::new()]),
                ),
            ))
        });
        mock.expect_get_deployment_template().never();
        let err = new_appsearch(params(mock)).await.expect_err("no template id");
        assert!(err.is_resolution(), "{err:?}");
        assert_eq!(err.to_string(), ERR_NO_TEMPLATE);
    }

    #[tokio::test]
    async fn template_error() {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment().return_once(|_, _| {
            Ok(Response::from(deployment_with_elasticsearch(
                "main-elasticsearch",
                Some("an ID"),
            )))
        });
        mock.expect_get_deployment_template()
            .return_once(|_, _| Err(api_error_with_status(500, "root.internal", "internal error")));
        let err = new_appsearch(params(mock)).await.expect_err("the service fails");
        assert!(err.is_resolution(), "{err:?}");
        assert_eq!(
            err.to_string(),
            "failed obtaining the deployment template: api error: root.internal: internal error"
        );
    }

    #[test_case(StatelessKind::AppSearch, "App Search")]
    #[test_case(StatelessKind::Kibana, "Kibana")]
    #[test_case(StatelessKind::Apm, "APM")]
    #[tokio::test]
    async fn template_not_configured(kind: StatelessKind, name: &str) {
        let mock = mock_with_template(default_template());
        let err = compose(params(mock), kind).await.expect_err("template without the resource");
        assert!(err.is_resolution(), "{err:?}");
        assert_eq!(
            err.to_string(),
            format!("deployment: the an ID template is not configured for {name}. Please use another template if you wish to start {name} instances")
        );
    }

    #[tokio::test]
    async fn template_defaults() -> anyhow::Result<()> {
        let got = new_appsearch(params(mock_with_template(appsearch_template()))).await?;
        assert_eq!(got, payload(1024, 1));
        Ok(())
    }

    #[tokio::test]
    async fn overrides() -> anyhow::Result<()> {
        let got = new_appsearch(NewStateless {
            size: Some(4096),
            zone_count: Some(3),
            ..params(mock_with_template(appsearch_template()))
        })
        .await?;
        assert_eq!(got, payload(4096, 3));
        Ok(())
    }

    #[tokio::test]
    async fn explicit_values_skip_the_deployment() -> anyhow::Result<()> {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment().never();
        mock.expect_get_deployment_template()
            .withf(|req, _| req.template_id == "kibana-template")
            .return_once(|_, _| {
                Ok(Response::from(
                    DeploymentTemplateInfo::new().set_cluster_template(
                        DeploymentTemplateDefinition::new().set_kibana(stateless_template()),
                    ),
                ))
            });
        let got = new_kibana(NewStateless {
            elasticsearch_ref_id: Some("es".into()),
            template_id: Some("kibana-template".into()),
            ref_id: Some("secondary-kibana".into()),
            version: Some("8.15.0".into()),
            ..params(mock)
        })
        .await?;
        let plan = got.plan.expect("the payload has a plan");
        assert_eq!(got.elasticsearch_cluster_ref_id.as_deref(), Some("es"));
        assert_eq!(got.ref_id.as_deref(), Some("secondary-kibana"));
        assert_eq!(
            plan.kibana,
            Some(StatelessConfiguration {
                version: Some("8.15.0".into())
            })
        );
        assert_eq!(plan.appsearch, None);
        assert_eq!(plan.cluster_topology.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn apm_defaults() -> anyhow::Result<()> {
        let mut mock = MockCloudApi::new();
        mock.expect_get_deployment().return_once(|_, _| {
            Ok(Response::from(deployment_with_elasticsearch(
                "main-elasticsearch",
                Some("an ID"),
            )))
        });
        mock.expect_get_deployment_template().return_once(|_, _| {
            Ok(Response::from(DeploymentTemplateInfo::new().set_cluster_template(
                DeploymentTemplateDefinition::new().set_apm(stateless_template()),
            )))
        });
        let got = new_apm(params(mock)).await?;
        assert_eq!(got.ref_id.as_deref(), Some("main-apm"));
        assert!(got.plan.as_ref().is_some_and(|p| p.apm.is_some()), "{got:?}");
        Ok(())
    }
}
