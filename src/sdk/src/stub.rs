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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::CloudApi].
///
/// Application developers may need to implement this trait to mock
/// `client::CloudApi`. In other use-cases, application developers only
/// use `client::CloudApi` and need not be concerned with this trait or
/// its implementations.
///
/// The API gains new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations panic, mocks only need
/// to implement the methods used in each test.
pub trait CloudApi: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::CloudApi::get_deployment].
    fn get_deployment(
        &self,
        _req: crate::model::GetDeploymentRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeploymentGetResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::resync_deployment].
    fn resync_deployment(
        &self,
        _req: crate::model::ResyncDeploymentRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::IndexSynchronizationResults>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::resync_deployments].
    fn resync_deployments(
        &self,
        _req: crate::model::ResyncDeploymentsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::IndexSynchronizationResults>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::stop_resource_instances_all].
    fn stop_resource_instances_all(
        &self,
        _req: crate::model::ResourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::stop_resource_instances].
    fn stop_resource_instances(
        &self,
        _req: crate::model::ResourceInstancesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::start_resource_instances_all].
    fn start_resource_instances_all(
        &self,
        _req: crate::model::ResourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::start_resource_instances].
    fn start_resource_instances(
        &self,
        _req: crate::model::ResourceInstancesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::start_maintenance_mode_all].
    fn start_maintenance_mode_all(
        &self,
        _req: crate::model::ResourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::start_maintenance_mode].
    fn start_maintenance_mode(
        &self,
        _req: crate::model::ResourceInstancesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::stop_maintenance_mode_all].
    fn stop_maintenance_mode_all(
        &self,
        _req: crate::model::ResourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::stop_maintenance_mode].
    fn stop_maintenance_mode(
        &self,
        _req: crate::model::ResourceInstancesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeploymentResourceCommandResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::delete_stateless_resource].
    fn delete_stateless_resource(
        &self,
        _req: crate::model::ResourceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::EmptyResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::get_deployment_template].
    fn get_deployment_template(
        &self,
        _req: crate::model::GetDeploymentTemplateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::DeploymentTemplateInfo>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::list_notes].
    fn list_notes(
        &self,
        _req: crate::model::ListNotesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Notes>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::create_note].
    fn create_note(
        &self,
        _req: crate::model::CreateNoteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Notes>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::get_note].
    fn get_note(
        &self,
        _req: crate::model::GetNoteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Note>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::update_note].
    fn update_note(
        &self,
        _req: crate::model::UpdateNoteRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Note>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::add_blessing].
    fn add_blessing(
        &self,
        _req: crate::model::AddBlessingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::EmptyResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudApi::delete_blessing].
    fn delete_blessing(
        &self,
        _req: crate::model::DeleteBlessingRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::EmptyResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
