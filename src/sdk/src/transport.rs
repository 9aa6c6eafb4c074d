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
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::http::{NoBody, ReqwestClient};
use gaxi::path_parameter::{list_segment, segment};

/// Implements [CloudApi](super::stub::CloudApi) using a [ReqwestClient].
#[derive(Clone, Debug)]
pub struct CloudApi {
    inner: ReqwestClient,
}

impl CloudApi {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }

    async fn send<I, O>(
        &self,
        method: reqwest::Method,
        path: String,
        query: &[(&str, String)],
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        let builder = self.inner.builder(method, path, &options)?.query(query);
        self.inner.execute(builder, body, options).await
    }

    async fn resource_command(
        &self,
        req: crate::model::ResourceRequest,
        command: &str,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentResourceCommandResponse>> {
        let path = format!(
            "{}/instances/{command}",
            resource_path(&req.deployment_id, &req.resource_kind, &req.ref_id)?
        );
        self.send(reqwest::Method::POST, path, &[], None::<NoBody>, options)
            .await
    }

    async fn instances_command(
        &self,
        req: crate::model::ResourceInstancesRequest,
        command: &str,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentResourceCommandResponse>> {
        let path = format!(
            "{}/instances/{}/{command}",
            resource_path(&req.deployment_id, &req.resource_kind, &req.ref_id)?,
            list_segment("instance_ids", &req.instance_ids)?
        );
        let query = req
            .ignore_missing
            .map(|v| vec![("ignore_missing", v.to_string())])
            .unwrap_or_default();
        self.send(reqwest::Method::POST, path, &query, None::<NoBody>, options)
            .await
    }
}

fn deployment_path(deployment_id: &str) -> Result<String> {
    Ok(format!(
        "/deployments/{}",
        segment("deployment_id", deployment_id)?
    ))
}

fn resource_path(deployment_id: &str, kind: &str, ref_id: &str) -> Result<String> {
    Ok(format!(
        "{}/{}/{}",
        deployment_path(deployment_id)?,
        segment("resource_kind", kind)?,
        segment("ref_id", ref_id)?
    ))
}

fn blessing_path(role_id: &str, runner_id: &str) -> Result<String> {
    Ok(format!(
        "/platform/infrastructure/blueprinter/roles/{}/blessings/{}",
        segment("role_id", role_id)?,
        segment("runner_id", runner_id)?
    ))
}

impl super::stub::CloudApi for CloudApi {
    async fn get_deployment(
        &self,
        req: crate::model::GetDeploymentRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentGetResponse>> {
        let path = deployment_path(&req.deployment_id)?;
        let query = [
            ("show_plans", req.show_plans.to_string()),
            ("show_metadata", req.show_metadata.to_string()),
        ];
        self.send(reqwest::Method::GET, path, &query, None::<NoBody>, options)
            .await
    }

    async fn resync_deployment(
        &self,
        req: crate::model::ResyncDeploymentRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::IndexSynchronizationResults>> {
        let path = format!("{}/_resync", deployment_path(&req.deployment_id)?);
        self.send(reqwest::Method::POST, path, &[], None::<NoBody>, options)
            .await
    }

    async fn resync_deployments(
        &self,
        _req: crate::model::ResyncDeploymentsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::IndexSynchronizationResults>> {
        let path = "/deployments/_resync".to_string();
        self.send(reqwest::Method::POST, path, &[], None::<NoBody>, options)
            .await
    }

    async fn stop_resource_instances_all(
        &self,
        req: crate::model::ResourceRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentResourceCommandResponse>> {
        self.resource_command(req, "_stop", options).await
    }

    async fn stop_resource_instances(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentResourceCommandResponse>> {
        self.instances_command(req, "_stop", options).await
    }

    async fn start_resource_instances_all(
        &self,
        req: crate::model::ResourceRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentResourceCommandResponse>> {
        self.resource_command(req, "_start", options).await
    }

    async fn start_resource_instances(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentResourceCommandResponse>> {
        self.instances_command(req, "_start", options).await
    }

    async fn start_maintenance_mode_all(
        &self,
        req: crate::model::ResourceRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentResourceCommandResponse>> {
        self.resource_command(req, "maintenance-mode/_start", options)
            .await
    }

    async fn start_maintenance_mode(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentResourceCommandResponse>> {
        self.instances_command(req, "maintenance-mode/_start", options)
            .await
    }

    async fn stop_maintenance_mode_all(
        &self,
        req: crate::model::ResourceRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentResourceCommandResponse>> {
        self.resource_command(req, "maintenance-mode/_stop", options)
            .await
    }

    async fn stop_maintenance_mode(
        &self,
        req: crate::model::ResourceInstancesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentResourceCommandResponse>> {
        self.instances_command(req, "maintenance-mode/_stop", options)
            .await
    }

    async fn delete_stateless_resource(
        &self,
        req: crate::model::ResourceRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::EmptyResponse>> {
        let path = resource_path(&req.deployment_id, &req.resource_kind, &req.ref_id)?;
        self.send(reqwest::Method::DELETE, path, &[], None::<NoBody>, options)
            .await
    }

    async fn get_deployment_template(
        &self,
        req: crate::model::GetDeploymentTemplateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::DeploymentTemplateInfo>> {
        let path = format!(
            "/deployments/templates/{}",
            segment("template_id", &req.template_id)?
        );
        let query = [(
            "show_instance_configurations",
            req.show_instance_configurations.to_string(),
        )];
        self.send(reqwest::Method::GET, path, &query, None::<NoBody>, options)
            .await
    }

    async fn list_notes(
        &self,
        req: crate::model::ListNotesRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Notes>> {
        let path = format!("{}/notes", deployment_path(&req.deployment_id)?);
        self.send(reqwest::Method::GET, path, &[], None::<NoBody>, options)
            .await
    }

    async fn create_note(
        &self,
        req: crate::model::CreateNoteRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Notes>> {
        let path = format!("{}/notes", deployment_path(&req.deployment_id)?);
        self.send(reqwest::Method::POST, path, &[], Some(req.note), options)
            .await
    }

    async fn get_note(
        &self,
        req: crate::model::GetNoteRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Note>> {
        let path = format!(
            "{}/notes/{}",
            deployment_path(&req.deployment_id)?,
            segment("note_id", &req.note_id)?
        );
        self.send(reqwest::Method::GET, path, &[], None::<NoBody>, options)
            .await
    }

    async fn update_note(
        &self,
        req: crate::model::UpdateNoteRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Note>> {
        let path = format!(
            "{}/notes/{}",
            deployment_path(&req.deployment_id)?,
            segment("note_id", &req.note_id)?
        );
        self.send(reqwest::Method::PUT, path, &[], Some(req.note), options)
            .await
    }

    async fn add_blessing(
        &self,
        req: crate::model::AddBlessingRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::EmptyResponse>> {
        let path = blessing_path(&req.role_id, &req.runner_id)?;
        self.send(reqwest::Method::PUT, path, &[], Some(req.blessing), options)
            .await
    }

    async fn delete_blessing(
        &self,
        req: crate::model::DeleteBlessingRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::EmptyResponse>> {
        let path = blessing_path(&req.role_id, &req.runner_id)?;
        self.send(reqwest::Method::DELETE, path, &[], None::<NoBody>, options)
            .await
    }
}
