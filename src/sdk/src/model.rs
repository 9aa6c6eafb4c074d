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

//! The request and response types used by this crate.
//!
//! The types mirror the JSON payloads of the REST API. Only the fields used by
//! the operations in this crate are modeled; unknown fields are ignored when
//! decoding a response.

use gax::multierror::Prefixed;
use serde::{Deserialize, Serialize};

/// Models with required fields implement this trait.
///
/// The operations validate the request bodies before sending them, and report
/// every missing field in a single error.
pub trait Validate {
    /// Returns all the missing or malformed fields, if any.
    fn validate(&self) -> Result<(), Prefixed>;
}

fn required<T>(field: &str, value: &Option<T>) -> Option<String> {
    value
        .is_none()
        .then(|| format!("{field} in body is required"))
}

/// The response to a deployment get request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeploymentGetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy: Option<bool>,

    /// The resources in the deployment, grouped by kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<DeploymentResources>,
}

impl DeploymentGetResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][DeploymentGetResponse::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [healthy][DeploymentGetResponse::healthy].
    pub fn set_healthy(mut self, v: bool) -> Self {
        self.healthy = Some(v);
        self
    }

    /// Sets the value of [resources][DeploymentGetResponse::resources].
    pub fn set_resources(mut self, v: DeploymentResources) -> Self {
        self.resources = Some(v);
        self
    }
}

/// The resources of a deployment, grouped by kind.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeploymentResources {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elasticsearch: Vec<ResourceInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kibana: Vec<ResourceInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub apm: Vec<ResourceInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub appsearch: Vec<ResourceInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enterprise_search: Vec<ResourceInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub integrations_server: Vec<ResourceInfo>,
}

impl DeploymentResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the resources of the given kind.
    ///
    /// Unknown kinds have no resources.
    pub fn of_kind(&self, kind: &str) -> &[ResourceInfo] {
        match kind {
            "elasticsearch" => &self.elasticsearch,
            "kibana" => &self.kibana,
            "apm" => &self.apm,
            "appsearch" => &self.appsearch,
            "enterprise_search" => &self.enterprise_search,
            "integrations_server" => &self.integrations_server,
            _ => &[],
        }
    }

    /// Sets the value of [elasticsearch][DeploymentResources::elasticsearch].
    pub fn set_elasticsearch<T: IntoIterator<Item = ResourceInfo>>(mut self, v: T) -> Self {
        self.elasticsearch = v.into_iter().collect();
        self
    }

    /// Sets the value of [kibana][DeploymentResources::kibana].
    pub fn set_kibana<T: IntoIterator<Item = ResourceInfo>>(mut self, v: T) -> Self {
        self.kibana = v.into_iter().collect();
        self
    }

    /// Sets the value of [apm][DeploymentResources::apm].
    pub fn set_apm<T: IntoIterator<Item = ResourceInfo>>(mut self, v: T) -> Self {
        self.apm = v.into_iter().collect();
        self
    }

    /// Sets the value of [appsearch][DeploymentResources::appsearch].
    pub fn set_appsearch<T: IntoIterator<Item = ResourceInfo>>(mut self, v: T) -> Self {
        self.appsearch = v.into_iter().collect();
        self
    }
}

/// A single resource (e.g. an Elasticsearch cluster) in a deployment.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResourceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The user-specified reference id, e.g. `main-elasticsearch`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ResourceClusterInfo>,
}

impl ResourceInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][ResourceInfo::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [ref_id][ResourceInfo::ref_id].
    pub fn set_ref_id<T: Into<String>>(mut self, v: T) -> Self {
        self.ref_id = Some(v.into());
        self
    }

    /// Sets the value of [info][ResourceInfo::info].
    pub fn set_info(mut self, v: ResourceClusterInfo) -> Self {
        self.info = Some(v);
        self
    }

    /// The deployment template id of the current plan, if any.
    pub fn current_template_id(&self) -> Option<&str> {
        self.info
            .as_ref()?
            .plan_info
            .as_ref()?
            .current
            .as_ref()?
            .plan
            .as_ref()?
            .deployment_template
            .as_ref()?
            .id
            .as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResourceClusterInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_info: Option<PlansInfo>,
}

impl ResourceClusterInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [plan_info][ResourceClusterInfo::plan_info].
    pub fn set_plan_info(mut self, v: PlansInfo) -> Self {
        self.plan_info = Some(v);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PlansInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<PlanInfo>,
}

impl PlansInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [current][PlansInfo::current].
    pub fn set_current(mut self, v: PlanInfo) -> Self {
        self.current = Some(v);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PlanInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<ClusterPlan>,
}

impl PlanInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [plan][PlanInfo::plan].
    pub fn set_plan(mut self, v: ClusterPlan) -> Self {
        self.plan = Some(v);
        self
    }
}

/// The plan of an Elasticsearch resource.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ClusterPlan {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cluster_topology: Vec<TopologyElement>,

    /// The template used to create (or last update) the deployment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_template: Option<DeploymentTemplateReference>,
}

impl ClusterPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [cluster_topology][ClusterPlan::cluster_topology].
    pub fn set_cluster_topology<T: IntoIterator<Item = TopologyElement>>(mut self, v: T) -> Self {
        self.cluster_topology = v.into_iter().collect();
        self
    }

    /// Sets the value of [deployment_template][ClusterPlan::deployment_template].
    pub fn set_deployment_template<T: Into<String>>(mut self, id: T) -> Self {
        self.deployment_template = Some(DeploymentTemplateReference { id: Some(id.into()) });
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeploymentTemplateReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// A deployment template.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeploymentTemplateInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The default configuration of each resource kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_template: Option<DeploymentTemplateDefinition>,
}

impl DeploymentTemplateInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][DeploymentTemplateInfo::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [cluster_template][DeploymentTemplateInfo::cluster_template].
    pub fn set_cluster_template(mut self, v: DeploymentTemplateDefinition) -> Self {
        self.cluster_template = Some(v);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeploymentTemplateDefinition {
    /// The Elasticsearch plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<ClusterPlan>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kibana: Option<CreateStatelessRequest>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub apm: Option<CreateStatelessRequest>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub appsearch: Option<CreateStatelessRequest>,
}

impl DeploymentTemplateDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [plan][DeploymentTemplateDefinition::plan].
    pub fn set_plan(mut self, v: ClusterPlan) -> Self {
        self.plan = Some(v);
        self
    }

    /// Sets the value of [kibana][DeploymentTemplateDefinition::kibana].
    pub fn set_kibana(mut self, v: CreateStatelessRequest) -> Self {
        self.kibana = Some(v);
        self
    }

    /// Sets the value of [apm][DeploymentTemplateDefinition::apm].
    pub fn set_apm(mut self, v: CreateStatelessRequest) -> Self {
        self.apm = Some(v);
        self
    }

    /// Sets the value of [appsearch][DeploymentTemplateDefinition::appsearch].
    pub fn set_appsearch(mut self, v: CreateStatelessRequest) -> Self {
        self.appsearch = Some(v);
        self
    }
}

/// The definition of a stateless resource (Kibana, APM, App Search).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateStatelessRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<StatelessPlan>,
}

impl CreateStatelessRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [plan][CreateStatelessRequest::plan].
    pub fn set_plan(mut self, v: StatelessPlan) -> Self {
        self.plan = Some(v);
        self
    }
}

/// The plan of a stateless resource.
///
/// Only one of the configuration fields is set, matching the resource kind.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct StatelessPlan {
    pub cluster_topology: Vec<TopologyElement>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kibana: Option<StatelessConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub apm: Option<StatelessConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub appsearch: Option<StatelessConfiguration>,
}

impl StatelessPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [cluster_topology][StatelessPlan::cluster_topology].
    pub fn set_cluster_topology<T: IntoIterator<Item = TopologyElement>>(mut self, v: T) -> Self {
        self.cluster_topology = v.into_iter().collect();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct StatelessConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// The size and number of zones of a resource.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TopologyElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_configuration_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TopologySize>,

    pub zone_count: i32,
}

impl TopologyElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [size][TopologyElement::size], in megabytes of memory.
    pub fn set_memory_size(mut self, v: i32) -> Self {
        self.size = Some(TopologySize::memory(v));
        self
    }

    /// Sets the value of [zone_count][TopologyElement::zone_count].
    pub fn set_zone_count(mut self, v: i32) -> Self {
        self.zone_count = v;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct TopologySize {
    /// The resource type, typically `memory`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

impl TopologySize {
    /// A memory size, in megabytes.
    pub fn memory(value: i32) -> Self {
        Self {
            resource: Some("memory".to_string()),
            value: Some(value),
        }
    }
}

/// The payload to add a stateless resource to an existing deployment.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct StatelessPayload {
    /// The Elasticsearch resource the new resource connects to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch_cluster_ref_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<StatelessPlan>,
}

/// The results of an index synchronization.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct IndexSynchronizationResults {
    /// The ids that were synchronized.
    pub synced: Vec<String>,

    /// The ids that will be retried.
    pub retried: Vec<String>,

    /// The ids that could not be synchronized.
    pub errors: Vec<IndexSynchronizationError>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct IndexSynchronizationError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The response to a resource command (start, stop, maintenance mode).
///
/// The service returns an empty object, or no content at all.
pub type DeploymentResourceCommandResponse = serde_json::Value;

/// The response of operations without a meaningful payload.
pub type EmptyResponse = serde_json::Value;

/// A note attached to a deployment.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Note {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The note text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Note {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][Note::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [message][Note::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the value of [user_id][Note::user_id].
    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Notes {
    pub notes: Vec<Note>,
}

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [notes][Notes::notes].
    pub fn set_notes<T: IntoIterator<Item = Note>>(mut self, v: T) -> Self {
        self.notes = v.into_iter().collect();
        self
    }
}

/// Allows a runner to take a platform role.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Blessing {
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,

    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner_id: Option<String>,
}

impl Blessing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [role_id][Blessing::role_id].
    pub fn set_role_id<T: Into<String>>(mut self, v: T) -> Self {
        self.role_id = Some(v.into());
        self
    }

    /// Sets the value of [runner_id][Blessing::runner_id].
    pub fn set_runner_id<T: Into<String>>(mut self, v: T) -> Self {
        self.runner_id = Some(v.into());
        self
    }
}

impl Validate for Blessing {
    fn validate(&self) -> Result<(), Prefixed> {
        [
            required("role_id", &self.role_id),
            required("runner_id", &self.runner_id),
        ]
        .into_iter()
        .flatten()
        .fold(Prefixed::new("blessing"), Prefixed::append)
        .into_result()
    }
}

/// The request message for [get_deployment][crate::client::CloudApi::get_deployment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDeploymentRequest {
    pub deployment_id: String,
    /// Include the plan history (and the current plan) of each resource.
    pub show_plans: bool,
    pub show_metadata: bool,
}

impl GetDeploymentRequest {
    pub fn new<T: Into<String>>(deployment_id: T) -> Self {
        Self {
            deployment_id: deployment_id.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [show_plans][GetDeploymentRequest::show_plans].
    pub fn set_show_plans(mut self, v: bool) -> Self {
        self.show_plans = v;
        self
    }

    /// Sets the value of [show_metadata][GetDeploymentRequest::show_metadata].
    pub fn set_show_metadata(mut self, v: bool) -> Self {
        self.show_metadata = v;
        self
    }
}

/// The request message for [resync_deployment][crate::client::CloudApi::resync_deployment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ResyncDeploymentRequest {
    pub deployment_id: String,
}

impl ResyncDeploymentRequest {
    pub fn new<T: Into<String>>(deployment_id: T) -> Self {
        Self {
            deployment_id: deployment_id.into(),
        }
    }
}

/// The request message for [resync_deployments][crate::client::CloudApi::resync_deployments].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ResyncDeploymentsRequest {}

impl ResyncDeploymentsRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Identifies a resource in a deployment.
///
/// Used by the commands affecting all the instances of a resource, and to
/// delete stateless resources.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ResourceRequest {
    pub deployment_id: String,
    pub resource_kind: String,
    pub ref_id: String,
}

impl ResourceRequest {
    pub fn new<D, K, R>(deployment_id: D, resource_kind: K, ref_id: R) -> Self
    where
        D: Into<String>,
        K: Into<String>,
        R: Into<String>,
    {
        Self {
            deployment_id: deployment_id.into(),
            resource_kind: resource_kind.into(),
            ref_id: ref_id.into(),
        }
    }
}

/// Identifies some instances of a resource in a deployment.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ResourceInstancesRequest {
    pub deployment_id: String,
    pub resource_kind: String,
    pub ref_id: String,
    pub instance_ids: Vec<String>,
    /// If true, instances that do not exist are ignored.
    pub ignore_missing: Option<bool>,
}

impl ResourceInstancesRequest {
    pub fn new(resource: ResourceRequest) -> Self {
        Self {
            deployment_id: resource.deployment_id,
            resource_kind: resource.resource_kind,
            ref_id: resource.ref_id,
            ..Default::default()
        }
    }

    /// Sets the value of [instance_ids][ResourceInstancesRequest::instance_ids].
    pub fn set_instance_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.instance_ids = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets or clears the value of [ignore_missing][ResourceInstancesRequest::ignore_missing].
    pub fn set_or_clear_ignore_missing(mut self, v: Option<bool>) -> Self {
        self.ignore_missing = v;
        self
    }
}

/// The request message for [get_deployment_template][crate::client::CloudApi::get_deployment_template].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDeploymentTemplateRequest {
    pub template_id: String,
    pub show_instance_configurations: bool,
}

impl GetDeploymentTemplateRequest {
    pub fn new<T: Into<String>>(template_id: T) -> Self {
        Self {
            template_id: template_id.into(),
            ..Default::default()
        }
    }

    /// Sets the value of [show_instance_configurations][GetDeploymentTemplateRequest::show_instance_configurations].
    pub fn set_show_instance_configurations(mut self, v: bool) -> Self {
        self.show_instance_configurations = v;
        self
    }
}

/// The request message for [list_notes][crate::client::CloudApi::list_notes].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListNotesRequest {
    pub deployment_id: String,
}

impl ListNotesRequest {
    pub fn new<T: Into<String>>(deployment_id: T) -> Self {
        Self {
            deployment_id: deployment_id.into(),
        }
    }
}

/// The request message for [create_note][crate::client::CloudApi::create_note].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateNoteRequest {
    pub deployment_id: String,
    pub note: Note,
}

impl CreateNoteRequest {
    pub fn new<T: Into<String>>(deployment_id: T, note: Note) -> Self {
        Self {
            deployment_id: deployment_id.into(),
            note,
        }
    }
}

/// The request message for [get_note][crate::client::CloudApi::get_note].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetNoteRequest {
    pub deployment_id: String,
    pub note_id: String,
}

impl GetNoteRequest {
    pub fn new<D: Into<String>, N: Into<String>>(deployment_id: D, note_id: N) -> Self {
        Self {
            deployment_id: deployment_id.into(),
            note_id: note_id.into(),
        }
    }
}

/// The request message for [update_note][crate::client::CloudApi::update_note].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateNoteRequest {
    pub deployment_id: String,
    pub note_id: String,
    pub note: Note,
}

impl UpdateNoteRequest {
    pub fn new<D: Into<String>, N: Into<String>>(deployment_id: D, note_id: N, note: Note) -> Self {
        Self {
            deployment_id: deployment_id.into(),
            note_id: note_id.into(),
            note,
        }
    }
}

/// The request message for [add_blessing][crate::client::CloudApi::add_blessing].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AddBlessingRequest {
    pub role_id: String,
    pub runner_id: String,
    pub blessing: Blessing,
}

impl AddBlessingRequest {
    pub fn new<R, N>(role_id: R, runner_id: N, blessing: Blessing) -> Self
    where
        R: Into<String>,
        N: Into<String>,
    {
        Self {
            role_id: role_id.into(),
            runner_id: runner_id.into(),
            blessing,
        }
    }
}

/// The request message for [delete_blessing][crate::client::CloudApi::delete_blessing].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBlessingRequest {
    pub role_id: String,
    pub runner_id: String,
}

impl DeleteBlessingRequest {
    pub fn new<R: Into<String>, N: Into<String>>(role_id: R, runner_id: N) -> Self {
        Self {
            role_id: role_id.into(),
            runner_id: runner_id.into(),
        }
    }
}
