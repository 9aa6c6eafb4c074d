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

//! Mocks and canned responses shared by the unit tests.

use crate::client::CloudApi;
use crate::model::*;
use gax::options::RequestOptions;
use gax::response::Response;

mockall::mock! {
    #[derive(Debug)]
    pub CloudApi {}
    impl crate::stub::CloudApi for CloudApi {
        async fn get_deployment(&self, req: GetDeploymentRequest, options: RequestOptions) -> gax::Result<Response<DeploymentGetResponse>>;
        async fn resync_deployment(&self, req: ResyncDeploymentRequest, options: RequestOptions) -> gax::Result<Response<IndexSynchronizationResults>>;
        async fn resync_deployments(&self, req: ResyncDeploymentsRequest, options: RequestOptions) -> gax::Result<Response<IndexSynchronizationResults>>;
        async fn stop_resource_instances_all(&self, req: ResourceRequest, options: RequestOptions) -> gax::Result<Response<DeploymentResourceCommandResponse>>;
        async fn stop_resource_instances(&self, req: ResourceInstancesRequest, options: RequestOptions) -> gax::Result<Response<DeploymentResourceCommandResponse>>;
        async fn start_resource_instances_all(&self, req: ResourceRequest, options: RequestOptions) -> gax::Result<Response<DeploymentResourceCommandResponse>>;
        async fn start_resource_instances(&self, req: ResourceInstancesRequest, options: RequestOptions) -> gax::Result<Response<DeploymentResourceCommandResponse>>;
        async fn start_maintenance_mode_all(&self, req: ResourceRequest, options: RequestOptions) -> gax::Result<Response<DeploymentResourceCommandResponse>>;
        async fn start_maintenance_mode(&self, req: ResourceInstancesRequest, options: RequestOptions) -> gax::Result<Response<DeploymentResourceCommandResponse>>;
        async fn stop_maintenance_mode_all(&self, req: ResourceRequest, options: RequestOptions) -> gax::Result<Response<DeploymentResourceCommandResponse>>;
        async fn stop_maintenance_mode(&self, req: ResourceInstancesRequest, options: RequestOptions) -> gax::Result<Response<DeploymentResourceCommandResponse>>;
        async fn delete_stateless_resource(&self, req: ResourceRequest, options: RequestOptions) -> gax::Result<Response<EmptyResponse>>;
        async fn get_deployment_template(&self, req: GetDeploymentTemplateRequest, options: RequestOptions) -> gax::Result<Response<DeploymentTemplateInfo>>;
        async fn list_notes(&self, req: ListNotesRequest, options: RequestOptions) -> gax::Result<Response<Notes>>;
        async fn create_note(&self, req: CreateNoteRequest, options: RequestOptions) -> gax::Result<Response<Notes>>;
        async fn get_note(&self, req: GetNoteRequest, options: RequestOptions) -> gax::Result<Response<Note>>;
        async fn update_note(&self, req: UpdateNoteRequest, options: RequestOptions) -> gax::Result<Response<Note>>;
        async fn add_blessing(&self, req: AddBlessingRequest, options: RequestOptions) -> gax::Result<Response<EmptyResponse>>;
        async fn delete_blessing(&self, req: DeleteBlessingRequest, options: RequestOptions) -> gax::Result<Response<EmptyResponse>>;
    }
}

/// Wraps `mock` in a client, as the parameter sets expect.
pub(crate) fn api(mock: MockCloudApi) -> Option<CloudApi> {
    Some(CloudApi::from_stub(mock))
}

/// A deployment with a single Elasticsearch resource.
pub(crate) fn deployment_with_elasticsearch(ref_id: &str, template_id: Option<&str>) -> DeploymentGetResponse {
    let mut resource = ResourceInfo::new()
        .set_id("3531aaf988594efa87c1aabb7caed337")
        .set_ref_id(ref_id);
    if let Some(id) = template_id {
        resource = resource.set_info(ResourceClusterInfo::new().set_plan_info(
            PlansInfo::new().set_current(
                PlanInfo::new().set_plan(ClusterPlan::new().set_deployment_template(id)),
            ),
        ));
    }
    DeploymentGetResponse::new()
        .set_id("3531aaf988594efa87c1aabb7caed337")
        .set_healthy(true)
        .set_resources(DeploymentResources::new().set_elasticsearch([resource]))
}

/// A service error without a message, as returned by some failed requests.
pub(crate) fn deployment_missing() -> gax::error::Error {
    use gax::error::api::{BasicFailedReply, BasicFailedReplyElement};
    let reply = BasicFailedReply::default()
        .set_errors([BasicFailedReplyElement::new().set_code("deployment.missing")]);
    gax::error::Error::service_with_http_metadata(reply, Some(500), None)
}
