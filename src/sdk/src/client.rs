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

//! Contains the CloudApi client and related types.

use crate::Result;
use gax::options::RequestOptions;
use std::sync::Arc;

/// Implements a client for the control-plane API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use cloud_sdk::client::CloudApi;
/// use gax::credentials::Credentials;
/// let client = CloudApi::builder()
///     .with_endpoint("https://ece.example.com:12443")
///     .with_credentials(Credentials::api_key("my-api-key"))
///     .build()
///     .await?;
/// // use `client` in the parameter sets of each operation.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `CloudApi` use the `with_*` methods in the type returned
/// by [builder()][CloudApi::builder]. The default configuration works with a
/// local installation, most applications need to change:
///
/// * [with_endpoint()]: by default this client uses
///   `https://localhost:12443`.
/// * [with_credentials()]: by default this client sends no credentials.
///
/// # Pooling and Cloning
///
/// `CloudApi` holds a connection pool internally, it is advised to
/// create one and the reuse it. You do not need to wrap `CloudApi` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it
/// already uses an `Arc` internally.
///
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct CloudApi {
    inner: Arc<dyn super::stub::dynamic::CloudApi>,
}

impl CloudApi {
    /// Returns a builder for [CloudApi].
    pub fn builder() -> super::builder::cloud_api::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::cloud_api::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::CloudApi + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::CloudApi>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CloudApi> {
        super::transport::CloudApi::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CloudApi> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::CloudApi::new)
    }

    /// Gets a deployment, including the resources it contains.
    pub async fn get_deployment(
        &self,
        req: crate::model::GetDeploymentRequest,
        options: RequestOptions,
    ) -> Result<crate::model::DeploymentGetResponse> {
        self.inner
            .get_deployment(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Re-synchronizes the search index of a deployment.
    pub async fn resync_deployment(
        &self,
        req: crate::model::ResyncDeploymentRequest,
        options: RequestOptions,
    ) -> Result<crate::model::IndexSynchronizationResults> {
        self.inner
            .resync_deployment(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Re-synchronizes the search index of all deployments.
    pub async fn resync_deployments(
        &self,
        req: crate::model::ResyncDeploymentsRequest,
        options: RequestOptions,
    ) -> Result<crate::model::IndexSynchronizationResults> {
        self.inner
            .resync_deployments(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Stops all the instances of a deployment resource.
    pub async fn stop_resource_instances_all(
        &self,
        req: crate::model::ResourceRequest,
        options: RequestOptions,
    ) -> Result<crate::model::DeploymentResourceCommandResponse> {
        self.inner
            .stop_resource_instances_all(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Stops some instances of a deployment resource.
    pub async fn stop_resource_instances(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::DeploymentResourceCommandResponse> {
        self.inner
            .stop_resource_instances(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Starts all the instances of a deployment resource.
    pub async fn start_resource_instances_all(
        &self,
        req: crate::model::ResourceRequest,
        options: RequestOptions,
    ) -> Result<crate::model::DeploymentResourceCommandResponse> {
        self.inner
            .start_resource_instances_all(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Starts some instances of a deployment resource.
    pub async fn start_resource_instances(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::DeploymentResourceCommandResponse> {
        self.inner
            .start_resource_instances(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Enables maintenance mode in all the instances of a deployment resource.
    pub async fn start_maintenance_mode_all(
        &self,
        req: crate::model::ResourceRequest,
        options: RequestOptions,
    ) -> Result<crate::model::DeploymentResourceCommandResponse> {
        self.inner
            .start_maintenance_mode_all(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Enables maintenance mode in some instances of a deployment resource.
    pub async fn start_maintenance_mode(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::DeploymentResourceCommandResponse> {
        self.inner
            .start_maintenance_mode(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Disables maintenance mode in all the instances of a deployment resource.
    pub async fn stop_maintenance_mode_all(
        &self,
        req: crate::model::ResourceRequest,
        options: RequestOptions,
    ) -> Result<crate::model::DeploymentResourceCommandResponse> {
        self.inner
            .stop_maintenance_mode_all(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Disables maintenance mode in some instances of a deployment resource.
    pub async fn stop_maintenance_mode(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::DeploymentResourceCommandResponse> {
        self.inner
            .stop_maintenance_mode(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Deletes a stateless resource (e.g. Kibana) from a deployment.
    pub async fn delete_stateless_resource(
        &self,
        req: crate::model::ResourceRequest,
        options: RequestOptions,
    ) -> Result<crate::model::EmptyResponse> {
        self.inner
            .delete_stateless_resource(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Gets a deployment template.
    pub async fn get_deployment_template(
        &self,
        req: crate::model::GetDeploymentTemplateRequest,
        options: RequestOptions,
    ) -> Result<crate::model::DeploymentTemplateInfo> {
        self.inner
            .get_deployment_template(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Lists the notes attached to a deployment.
    pub async fn list_notes(
        &self,
        req: crate::model::ListNotesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Notes> {
        self.inner
            .list_notes(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Attaches a new note to a deployment.
    pub async fn create_note(
        &self,
        req: crate::model::CreateNoteRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Notes> {
        self.inner
            .create_note(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Gets a deployment note.
    pub async fn get_note(
        &self,
        req: crate::model::GetNoteRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Note> {
        self.inner
            .get_note(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Replaces a deployment note.
    pub async fn update_note(
        &self,
        req: crate::model::UpdateNoteRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Note> {
        self.inner
            .update_note(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Allows a runner to take a platform role.
    pub async fn add_blessing(
        &self,
        req: crate::model::AddBlessingRequest,
        options: RequestOptions,
    ) -> Result<crate::model::EmptyResponse> {
        self.inner
            .add_blessing(req, options)
            .await
            .map(gax::response::Response::into_body)
    }

    /// Removes the blessing of a runner for a platform role.
    pub async fn delete_blessing(
        &self,
        req: crate::model::DeleteBlessingRequest,
        options: RequestOptions,
    ) -> Result<crate::model::EmptyResponse> {
        self.inner
            .delete_blessing(req, options)
            .await
            .map(gax::response::Response::into_body)
    }
}
