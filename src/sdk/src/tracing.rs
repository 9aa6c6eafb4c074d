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

use crate::Result;

/// Implements a [CloudApi](super::stub::CloudApi) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct CloudApi<T>
where
    T: super::stub::CloudApi + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> CloudApi<T>
where
    T: super::stub::CloudApi + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::CloudApi for CloudApi<T>
where
    T: super::stub::CloudApi + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get_deployment(
        &self,
        req: crate::model::GetDeploymentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeploymentGetResponse>> {
        self.inner.get_deployment(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn resync_deployment(
        &self,
        req: crate::model::ResyncDeploymentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IndexSynchronizationResults>> {
        self.inner.resync_deployment(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn resync_deployments(
        &self,
        req: crate::model::ResyncDeploymentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IndexSynchronizationResults>> {
        self.inner.resync_deployments(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn stop_resource_instances_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        self.inner.stop_resource_instances_all(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn stop_resource_instances(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        self.inner.stop_resource_instances(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn start_resource_instances_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        self.inner.start_resource_instances_all(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn start_resource_instances(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        self.inner.start_resource_instances(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn start_maintenance_mode_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        self.inner.start_maintenance_mode_all(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn start_maintenance_mode(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        self.inner.start_maintenance_mode(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn stop_maintenance_mode_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        self.inner.stop_maintenance_mode_all(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn stop_maintenance_mode(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        self.inner.stop_maintenance_mode(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_stateless_resource(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EmptyResponse>> {
        self.inner.delete_stateless_resource(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_deployment_template(
        &self,
        req: crate::model::GetDeploymentTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DeploymentTemplateInfo>> {
        self.inner.get_deployment_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_notes(
        &self,
        req: crate::model::ListNotesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Notes>> {
        self.inner.list_notes(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_note(
        &self,
        req: crate::model::CreateNoteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Notes>> {
        self.inner.create_note(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_note(
        &self,
        req: crate::model::GetNoteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Note>> {
        self.inner.get_note(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_note(
        &self,
        req: crate::model::UpdateNoteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Note>> {
        self.inner.update_note(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn add_blessing(
        &self,
        req: crate::model::AddBlessingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EmptyResponse>> {
        self.inner.add_blessing(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_blessing(
        &self,
        req: crate::model::DeleteBlessingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EmptyResponse>> {
        self.inner.delete_blessing(req, options).await
    }
}
