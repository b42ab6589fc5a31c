use anyhow::Result;
use gp_catalog::core::request::ToolRequest;
use gp_catalog::domain::model::Toolbox;
use gp_catalog::domain::ports::GeoprocessingService;
use gp_catalog::{Catalog, ExecutionMode, GpConfig, GpError, JobStatus, RestGeoprocessingService, ToolRunner};
use httpmock::prelude::*;
use serde_json::json;
use std::collections::HashMap;

fn config_for(server: &MockServer) -> GpConfig {
    let mut config = GpConfig::for_service(Toolbox::NetworkDiagram, server.url("/nd"));
    config.execution.poll_interval_ms = 1;
    config.execution.max_poll_attempts = 3;
    config
}

fn grid_layout(run_async: bool) -> gp_catalog::ResolvedRequest {
    let tool = Catalog::new().find("nd.ApplyGridLayout").unwrap();
    ToolRequest::new(tool)
        .set("in_network_diagram_layer", "Feeder Diagram")
        .set("run_async", run_async)
        .resolve()
        .unwrap()
}

#[tokio::test]
async fn test_execute_posts_form_and_reads_results() -> Result<()> {
    let server = MockServer::start();
    let execute_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/nd/ApplyGridLayout/execute")
            .header("x-request-source", "gp-catalog")
            .body_contains("in_network_diagram_layer=Feeder+Diagram")
            .body_contains("cell_size=1+Unknown")
            .body_contains("run_async=RUN_SYNCHRONOUSLY")
            .body_contains("f=json")
            .body_contains("token=secret-token");
        then.status(200).json_body(json!({
            "results": [
                {"paramName": "out_network_diagram_layer", "dataType": "GPString", "value": "Feeder Diagram"}
            ],
            "messages": [
                {"type": "esriJobMessageTypeInformative", "description": "Succeeded at Monday"}
            ]
        }));
    });

    let mut config = config_for(&server);
    config.set_token("secret-token");
    config
        .server
        .headers
        .insert("X-Request-Source".to_string(), "gp-catalog".to_string());

    let service = RestGeoprocessingService::new(config)?;
    let outcome = service.execute(&grid_layout(false)).await?;

    execute_mock.assert();
    assert_eq!(outcome.status, JobStatus::Succeeded);
    assert_eq!(outcome.job_id, None);
    assert_eq!(outcome.output("out_network_diagram_layer"), Some(&json!("Feeder Diagram")));
    assert_eq!(outcome.messages.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_submit_job_polls_and_fetches_outputs() -> Result<()> {
    let server = MockServer::start();
    let submit_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/nd/ApplyGridLayout/submitJob")
            .body_contains("run_async=RUN_ASYNCHRONOUSLY");
        then.status(200)
            .json_body(json!({"jobId": "j42", "jobStatus": "esriJobSubmitted"}));
    });
    let status_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/nd/ApplyGridLayout/jobs/j42")
            .query_param("f", "json");
        then.status(200).json_body(json!({
            "jobId": "j42",
            "jobStatus": "esriJobSucceeded",
            "results": {
                "out_network_diagram_layer": {"paramUrl": "results/out_network_diagram_layer"}
            },
            "messages": []
        }));
    });
    let result_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/nd/ApplyGridLayout/jobs/j42/results/out_network_diagram_layer");
        then.status(200).json_body(json!({
            "paramName": "out_network_diagram_layer",
            "dataType": "GPString",
            "value": "Feeder Diagram"
        }));
    });

    let service = RestGeoprocessingService::new(config_for(&server))?;
    let outcome = service.submit_job(&grid_layout(true)).await?;

    submit_mock.assert();
    status_mock.assert();
    result_mock.assert();
    assert_eq!(outcome.job_id.as_deref(), Some("j42"));
    assert_eq!(outcome.status, JobStatus::Succeeded);
    assert_eq!(outcome.outputs.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_error_body_with_http_200_is_service_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/nd/ApplyGridLayout/execute");
        then.status(200).json_body(json!({
            "error": {
                "code": 400,
                "message": "Unable to complete operation.",
                "details": ["Invalid value for parameter in_network_diagram_layer"]
            }
        }));
    });

    let service = RestGeoprocessingService::new(config_for(&server)).unwrap();
    let err = service.execute(&grid_layout(false)).await.unwrap_err();

    match err {
        GpError::ServiceError { code, message, details } => {
            assert_eq!(code, 400);
            assert_eq!(message, "Unable to complete operation.");
            assert_eq!(details.len(), 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_body_with_null_fields_is_service_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/nd/ApplyGridLayout/execute");
        then.status(200).json_body(json!({
            "error": {"code": 498, "message": "Invalid Token", "details": null}
        }));
    });

    let service = RestGeoprocessingService::new(config_for(&server)).unwrap();
    let err = service.execute(&grid_layout(false)).await.unwrap_err();

    match &err {
        GpError::ServiceError { code, message, details } => {
            assert_eq!(*code, 498);
            assert_eq!(message, "Invalid Token");
            assert!(details.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.severity(), gp_catalog::utils::error::ErrorSeverity::High);
}

#[tokio::test]
async fn test_http_failure_without_json_is_service_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/nd/ApplyGridLayout/execute");
        then.status(502).body("Bad Gateway");
    });

    let service = RestGeoprocessingService::new(config_for(&server)).unwrap();
    let err = service.execute(&grid_layout(false)).await.unwrap_err();
    assert!(matches!(err, GpError::ServiceError { code: 502, .. }));
}

#[tokio::test]
async fn test_failed_job_reports_server_messages() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/nd/ApplyGridLayout/submitJob");
        then.status(200)
            .json_body(json!({"jobId": "j7", "jobStatus": "esriJobSubmitted"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/nd/ApplyGridLayout/jobs/j7");
        then.status(200).json_body(json!({
            "jobId": "j7",
            "jobStatus": "esriJobFailed",
            "messages": [
                {"type": "esriJobMessageTypeError", "description": "ERROR 000229: Cannot open diagram"}
            ]
        }));
    });

    let service = RestGeoprocessingService::new(config_for(&server)).unwrap();
    let err = service.submit_job(&grid_layout(true)).await.unwrap_err();

    match &err {
        GpError::JobFailed { job_id, status, messages } => {
            assert_eq!(job_id, "j7");
            assert_eq!(status, "esriJobFailed");
            assert!(messages[0].contains("000229"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_poll_timeout_after_max_attempts() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/nd/ApplyGridLayout/submitJob");
        then.status(200)
            .json_body(json!({"jobId": "slow", "jobStatus": "esriJobSubmitted"}));
    });
    let status_mock = server.mock(|when, then| {
        when.method(GET).path("/nd/ApplyGridLayout/jobs/slow");
        then.status(200)
            .json_body(json!({"jobId": "slow", "jobStatus": "esriJobExecuting"}));
    });

    let service = RestGeoprocessingService::new(config_for(&server)).unwrap();
    let err = service.submit_job(&grid_layout(true)).await.unwrap_err();

    assert!(matches!(err, GpError::PollTimeout { attempts: 3, .. }));
    status_mock.assert_hits(3);
}

#[tokio::test]
async fn test_cancel_job() {
    let server = MockServer::start();
    let cancel_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/nd/ApplyGridLayout/jobs/j9/cancel")
            .body_contains("f=json");
        then.status(200)
            .json_body(json!({"jobId": "j9", "jobStatus": "esriJobCancelling"}));
    });

    let service = RestGeoprocessingService::new(config_for(&server)).unwrap();
    tokio_test::assert_ok!(
        service
            .cancel_job(Toolbox::NetworkDiagram, "ApplyGridLayout", "j9")
            .await
    );
    cancel_mock.assert();
}

#[tokio::test]
async fn test_missing_service_url_for_toolbox() {
    let server = MockServer::start();
    let service = RestGeoprocessingService::new(config_for(&server)).unwrap();
    let tool = Catalog::new().find("un.UpdateIsConnected").unwrap();
    let request = ToolRequest::new(tool)
        .set("in_utility_network", "Utility Network")
        .resolve()
        .unwrap();

    let err = service.execute(&request).await.unwrap_err();
    assert!(matches!(err, GpError::MissingConfigError { ref field } if field == "services.un"));
}

#[tokio::test]
async fn test_runner_auto_mode_uses_job_when_tool_asks_for_it() -> Result<()> {
    let server = MockServer::start();
    let execute_mock = server.mock(|when, then| {
        when.method(POST).path("/nd/ApplyGridLayout/execute");
        then.status(200).json_body(json!({"results": [], "messages": []}));
    });
    let submit_mock = server.mock(|when, then| {
        when.method(POST).path("/nd/ApplyGridLayout/submitJob");
        then.status(200)
            .json_body(json!({"jobId": "a1", "jobStatus": "esriJobSubmitted"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/nd/ApplyGridLayout/jobs/a1");
        then.status(200)
            .json_body(json!({"jobId": "a1", "jobStatus": "esriJobSucceeded"}));
    });

    let runner = ToolRunner::new(RestGeoprocessingService::new(config_for(&server))?);

    let mut values = HashMap::new();
    values.insert("in_network_diagram_layer".to_string(), json!("Feeder Diagram"));
    runner.run("ApplyGridLayout", values.clone()).await?;

    values.insert("run_async".to_string(), json!("true"));
    let outcome = runner.run("ApplyGridLayout", values).await?;

    execute_mock.assert_hits(1);
    submit_mock.assert_hits(1);
    assert_eq!(outcome.job_id.as_deref(), Some("a1"));
    Ok(())
}

#[tokio::test]
async fn test_runner_cancels_stalled_job_before_resubmitting() -> Result<()> {
    let server = MockServer::start();
    let submit_mock = server.mock(|when, then| {
        when.method(POST).path("/nd/ApplyGridLayout/submitJob");
        then.status(200)
            .json_body(json!({"jobId": "stuck", "jobStatus": "esriJobSubmitted"}));
    });
    let status_mock = server.mock(|when, then| {
        when.method(GET).path("/nd/ApplyGridLayout/jobs/stuck");
        then.status(200)
            .json_body(json!({"jobId": "stuck", "jobStatus": "esriJobExecuting"}));
    });
    let cancel_mock = server.mock(|when, then| {
        when.method(POST).path("/nd/ApplyGridLayout/jobs/stuck/cancel");
        then.status(200)
            .json_body(json!({"jobId": "stuck", "jobStatus": "esriJobCancelling"}));
    });

    let runner = ToolRunner::new(RestGeoprocessingService::new(config_for(&server))?)
        .with_mode(ExecutionMode::Async)
        .with_retries(2);
    let mut values = HashMap::new();
    values.insert("in_network_diagram_layer".to_string(), json!("Feeder Diagram"));
    let err = runner.run("ApplyGridLayout", values).await.unwrap_err();

    assert!(matches!(err, GpError::PollTimeout { .. }));
    submit_mock.assert_hits(2);
    status_mock.assert_hits(6);
    cancel_mock.assert_hits(1);
    Ok(())
}
