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

//! Builders to configure the clients in this crate.

pub mod cloud_api {
    /// A builder for [CloudApi][crate::client::CloudApi].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloud_sdk::*;
    /// # use builder::cloud_api::ClientBuilder;
    /// # use client::CloudApi;
    /// let builder : ClientBuilder = CloudApi::builder();
    /// let client = builder
    ///     .with_endpoint("https://ece.example.com:12443")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::CloudApi;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = CloudApi;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}
