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

/// A dyn-compatible, crate-private version of [super::CloudApi].
#[async_trait::async_trait]
pub trait CloudApi: std::fmt::Debug + Send + Sync {
    async fn get_deployment(
        &self,
        req: crate::model::GetDeploymentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentGetResponse>>;

    async fn resync_deployment(
        &self,
        req: crate::model::ResyncDeploymentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::IndexSynchronizationResults>>;

    async fn resync_deployments(
        &self,
        req: crate::model::ResyncDeploymentsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::IndexSynchronizationResults>>;

    async fn stop_resource_instances_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>;

    async fn stop_resource_instances(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>;

    async fn start_resource_instances_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>;

    async fn start_resource_instances(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>;

    async fn start_maintenance_mode_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>;

    async fn start_maintenance_mode(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>;

    async fn stop_maintenance_mode_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>;

    async fn stop_maintenance_mode(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>;

    async fn delete_stateless_resource(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EmptyResponse>>;

    async fn get_deployment_template(
        &self,
        req: crate::model::GetDeploymentTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentTemplateInfo>>;

    async fn list_notes(
        &self,
        req: crate::model::ListNotesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Notes>>;

    async fn create_note(
        &self,
        req: crate::model::CreateNoteRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Notes>>;

    async fn get_note(
        &self,
        req: crate::model::GetNoteRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Note>>;

    async fn update_note(
        &self,
        req: crate::model::UpdateNoteRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Note>>;

    async fn add_blessing(
        &self,
        req: crate::model::AddBlessingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EmptyResponse>>;

    async fn delete_blessing(
        &self,
        req: crate::model::DeleteBlessingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EmptyResponse>>;
}

/// All implementations of [super::CloudApi] also implement [CloudApi].
#[async_trait::async_trait]
impl<T: super::CloudApi> CloudApi for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_deployment(
        &self,
        req: crate::model::GetDeploymentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentGetResponse>> {
        T::get_deployment(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn resync_deployment(
        &self,
        req: crate::model::ResyncDeploymentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::IndexSynchronizationResults>> {
        T::resync_deployment(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn resync_deployments(
        &self,
        req: crate::model::ResyncDeploymentsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::IndexSynchronizationResults>> {
        T::resync_deployments(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn stop_resource_instances_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        T::stop_resource_instances_all(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn stop_resource_instances(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        T::stop_resource_instances(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn start_resource_instances_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        T::start_resource_instances_all(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn start_resource_instances(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        T::start_resource_instances(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn start_maintenance_mode_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        T::start_maintenance_mode_all(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn start_maintenance_mode(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        T::start_maintenance_mode(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn stop_maintenance_mode_all(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        T::stop_maintenance_mode_all(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn stop_maintenance_mode(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>> {
        T::stop_maintenance_mode(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_stateless_resource(
        &self,
        req: crate::model::ResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EmptyResponse>> {
        T::delete_stateless_resource(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_deployment_template(
        &self,
        req: crate::model::GetDeploymentTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DeploymentTemplateInfo>> {
        T::get_deployment_template(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_notes(
        &self,
        req: crate::model::ListNotesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Notes>> {
        T::list_notes(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_note(
        &self,
        req: crate::model::CreateNoteRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Notes>> {
        T::create_note(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_note(
        &self,
        req: crate::model::GetNoteRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Note>> {
        T::get_note(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_note(
        &self,
        req: crate::model::UpdateNoteRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Note>> {
        T::update_note(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn add_blessing(
        &self,
        req: crate::model::AddBlessingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EmptyResponse>> {
        T::add_blessing(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_blessing(
        &self,
        req: crate::model::DeleteBlessingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EmptyResponse>> {
        T::delete_blessing(self, req, options).await
    }
}
