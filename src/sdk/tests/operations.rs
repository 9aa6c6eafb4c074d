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

#[cfg(test)]
mod tests {
    use cloud_sdk::client::CloudApi;
    use cloud_sdk::{deploymentapi, depresourceapi, noteapi, roleapi};
    use cloud_sdk_test_utils::fixtures::{VALID_DEPLOYMENT_ID, api_error_body};
    use cloud_sdk_test_utils::tracing::enable_tracing;
    use gax::credentials::Credentials;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    async fn test_client(server: &Server) -> anyhow::Result<CloudApi> {
        let client = CloudApi::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(Credentials::api_key("test-key"))
            .build()
            .await?;
        Ok(client)
    }

    fn deployment_path(suffix: &str) -> String {
        format!("/api/v1/deployments/{VALID_DEPLOYMENT_ID}{suffix}")
    }

    #[tokio::test]
    async fn get_deployment() -> TestResult {
        let _guard = enable_tracing();
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", deployment_path("")),
                request::query(url_decoded(contains(("show_plans", "true")))),
                request::headers(contains(("authorization", "ApiKey test-key"))),
            ])
            .respond_with(json_encoded(json!({
                "id": VALID_DEPLOYMENT_ID,
                "healthy": true,
                "resources": {
                    "elasticsearch": [{"id": "abc", "ref_id": "main-elasticsearch", "region": "ece-region"}],
                    "kibana": [{"ref_id": "main-kibana"}],
                    "unknown_field": 42
                }
            }))),
        );

        let api = test_client(&server).await?;
        let got = deploymentapi::get(deploymentapi::GetParams {
            api: Some(api),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            show_plans: true,
            ..Default::default()
        })
        .await?;
        assert_eq!(got.id.as_deref(), Some(VALID_DEPLOYMENT_ID));
        let resources = got.resources.unwrap_or_default();
        assert_eq!(resources.elasticsearch.len(), 1);
        assert_eq!(
            resources.of_kind("kibana")[0].ref_id.as_deref(),
            Some("main-kibana")
        );
        Ok(())
    }

    #[tokio::test]
    async fn resync_forbidden() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", deployment_path("/_resync")))
                .respond_with(
                    status_code(403).body(r#"{"error": "some forbidden error"}"#),
                ),
        );

        let api = test_client(&server).await?;
        let err = deploymentapi::resync(deploymentapi::ResyncParams {
            api: Some(api),
            id: VALID_DEPLOYMENT_ID.into(),
        })
        .await
        .expect_err("the service rejects the request");
        assert!(err.is_transport(), "{err:?}");
        assert!(err.api_error().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(403));
        assert_eq!(
            err.http_payload().map(|b| b.as_ref()),
            Some(r#"{"error": "some forbidden error"}"#.as_bytes())
        );
        Ok(())
    }

    #[tokio::test]
    async fn stop_instances_with_discovery() -> TestResult {
        let _guard = enable_tracing();
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", deployment_path("")))
                .times(1)
                .respond_with(json_encoded(json!({
                    "resources": {"kibana": [{"ref_id": "main-kibana"}]}
                }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    deployment_path(
                        "/kibana/main-kibana/instances/instance-0000000001,instance-0000000002/_stop"
                    )
                ),
                request::query(url_decoded(contains(("ignore_missing", "true")))),
            ])
            .times(1)
            .respond_with(status_code(202).body("")),
        );

        let api = test_client(&server).await?;
        let got = depresourceapi::stop_all_or_specified(depresourceapi::StopInstancesParams {
            stop: depresourceapi::StopParams {
                params: depresourceapi::Params {
                    api: Some(api),
                    deployment_id: VALID_DEPLOYMENT_ID.into(),
                    kind: "kibana".into(),
                    ref_id: None,
                },
                all: false,
            },
            ignore_missing: Some(true),
            instance_ids: vec!["instance-0000000001".into(), "instance-0000000002".into()],
        })
        .await?;
        assert_eq!(got, serde_json::Value::Null);
        Ok(())
    }

    #[tokio::test]
    async fn start_maintenance_mode_discovery_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", deployment_path("")))
                .respond_with(
                    status_code(500)
                        .append_header("content-type", "application/json")
                        .body(json!({"errors": [{"code": "deployment.missing"}]}).to_string()),
                ),
        );

        let api = test_client(&server).await?;
        let err = depresourceapi::start_maintenance_mode(depresourceapi::StartParams {
            params: depresourceapi::Params {
                api: Some(api),
                deployment_id: VALID_DEPLOYMENT_ID.into(),
                kind: "elasticsearch".into(),
                ref_id: None,
            },
            all: true,
        })
        .await
        .expect_err("the discovery fails");
        assert!(err.is_validation(), "{err:?}");
        assert_eq!(
            err.to_string(),
            "deployment resource: deployment resource: failed auto-discovering the resource ref id: api error: deployment.missing: unknown"
        );
        Ok(())
    }

    #[tokio::test]
    async fn delete_stateless() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", deployment_path("/apm/main-apm")))
                .respond_with(json_encoded(json!({}))),
        );

        let api = test_client(&server).await?;
        depresourceapi::delete_stateless(depresourceapi::DeleteStatelessParams {
            params: depresourceapi::Params {
                api: Some(api),
                deployment_id: VALID_DEPLOYMENT_ID.into(),
                kind: "apm".into(),
                ref_id: Some("main-apm".into()),
            },
        })
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn new_appsearch() -> TestResult {
        let _guard = enable_tracing();
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", deployment_path("")))
                .respond_with(json_encoded(json!({
                    "resources": {"elasticsearch": [{
                        "ref_id": "main-elasticsearch",
                        "info": {"plan_info": {"current": {"plan": {
                            "deployment_template": {"id": "default.appsearch"}
                        }}}}
                    }]}
                }))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/api/v1/regions/ece-region/deployments/templates/default.appsearch",
            ))
            .respond_with(json_encoded(json!({
                "id": "default.appsearch",
                "cluster_template": {"appsearch": {"plan": {"cluster_topology": [
                    {"size": {"resource": "memory", "value": 1024}, "zone_count": 1}
                ]}}}
            }))),
        );

        let api = test_client(&server).await?;
        let got = depresourceapi::new_appsearch(depresourceapi::NewStateless {
            api: Some(api),
            deployment_id: VALID_DEPLOYMENT_ID.into(),
            region: "ece-region".into(),
            zone_count: Some(2),
            ..Default::default()
        })
        .await?;
        assert_eq!(
            serde_json::to_value(&got)?,
            json!({
                "elasticsearch_cluster_ref_id": "main-elasticsearch",
                "region": "ece-region",
                "ref_id": "main-appsearch",
                "plan": {
                    "cluster_topology": [
                        {"size": {"resource": "memory", "value": 1024}, "zone_count": 2}
                    ],
                    "appsearch": {}
                }
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn notes_in_region() -> TestResult {
        let server = Server::run();
        let notes_path = format!("/api/v1/regions/us-east-1/deployments/{VALID_DEPLOYMENT_ID}/notes");
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", notes_path.clone()),
                request::body(json_decoded(eq(json!({"message": "upgrade", "user_id": "marc"})))),
            ])
            .respond_with(json_encoded(json!({"notes": [
                {"id": "1", "message": "upgrade", "user_id": "marc"}
            ]}))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", format!("{notes_path}/1")))
                .respond_with(json_encoded(
                    json!({"id": "1", "message": "upgrade", "user_id": "marc"}),
                )),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", format!("{notes_path}/1")),
                request::body(json_decoded(eq(
                    json!({"id": "1", "message": "upgrade to 9.x", "user_id": "marc"})
                ))),
            ])
            .respond_with(json_encoded(
                json!({"id": "1", "message": "upgrade to 9.x", "user_id": "marc"}),
            )),
        );

        let api = test_client(&server).await?;
        let params = noteapi::Params {
            api: Some(api),
            id: VALID_DEPLOYMENT_ID.into(),
            region: "us-east-1".into(),
        };
        let notes = noteapi::add(noteapi::AddParams {
            params: params.clone(),
            message: "upgrade".into(),
            user_id: "marc".into(),
        })
        .await?;
        assert_eq!(notes.notes.len(), 1);
        let note = noteapi::update(noteapi::UpdateParams {
            params,
            message: "upgrade to 9.x".into(),
            user_id: "marc".into(),
            note_id: "1".into(),
        })
        .await?;
        assert_eq!(note.message.as_deref(), Some("upgrade to 9.x"));
        Ok(())
    }

    #[tokio::test]
    async fn add_blessing_api_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "PUT",
                    "/api/v1/regions/ece-region/platform/infrastructure/blueprinter/roles/allocator/blessings/192.168.44.10",
                ),
                request::body(json_decoded(eq(
                    json!({"role_id": "allocator", "runner_id": "192.168.44.10"})
                ))),
            ])
            .respond_with(
                status_code(404)
                    .append_header("content-type", "application/json")
                    .body(api_error_body("role.not_found", "role not found").to_string()),
            ),
        );

        let api = test_client(&server).await?;
        let err = roleapi::add_blessing(roleapi::AddBlessingParams {
            api: Some(api),
            blessing: Some(
                cloud_sdk::model::Blessing::new()
                    .set_role_id("allocator")
                    .set_runner_id("192.168.44.10"),
            ),
            runner_id: "192.168.44.10".into(),
            id: "allocator".into(),
            region: "ece-region".into(),
        })
        .await
        .expect_err("the role does not exist");
        assert_eq!(err.http_status_code(), Some(404));
        let reply = err.api_error().expect("the error has a structured body");
        assert_eq!(reply.errors[0].code.as_deref(), Some("role.not_found"));
        assert_eq!(err.to_string(), "api error: role.not_found: role not found");
        Ok(())
    }
}
