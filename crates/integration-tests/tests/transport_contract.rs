//! GridDB client contract: auth, connectivity, error translation, SQL batches

use std::time::Duration;

use httpmock::prelude::*;
use jobboard_core::error::AppError;
use jobboard_infra_griddb::{
    AcquireRowsRequest, AuthScheme, GridDbClient, GridDbConfig, GridDbTransport, SqlStatement,
};
use serde_json::json;

fn client(server: &MockServer) -> GridDbClient {
    GridDbClient::new(GridDbConfig::new(server.base_url(), "dXNlcjpwYXNz")).unwrap()
}

#[tokio::test]
async fn test_connect_checks_connection_with_basic_auth() {
    let server = MockServer::start_async().await;
    let check = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/checkConnection")
                .header("authorization", "Basic dXNlcjpwYXNz")
                .header("accept", "application/json");
            then.status(200);
        })
        .await;

    GridDbClient::connect(GridDbConfig::new(server.base_url(), "dXNlcjpwYXNz"))
        .await
        .unwrap();
    check.assert_async().await;
}

#[tokio::test]
async fn test_bearer_scheme() {
    let server = MockServer::start_async().await;
    let check = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/checkConnection")
                .header("authorization", "Bearer eyJhbGciOi");
            then.status(200);
        })
        .await;

    let config =
        GridDbConfig::new(server.base_url(), "eyJhbGciOi").with_auth_scheme(AuthScheme::Bearer);
    GridDbClient::connect(config).await.unwrap();
    check.assert_async().await;
}

#[tokio::test]
async fn test_rejected_credentials_are_connectivity_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/checkConnection");
            then.status(401).body("Unauthorized");
        })
        .await;

    let err = GridDbClient::connect(GridDbConfig::new(server.base_url(), "wrong"))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, AppError::Connectivity(msg) if msg.contains("401")));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/sql/dml/query");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .json_body(json!([]));
        })
        .await;

    let config =
        GridDbConfig::new(server.base_url(), "abc").with_timeout(Duration::from_millis(200));
    let client = GridDbClient::new(config).unwrap();
    let err = client
        .select(vec![SqlStatement::new("SELECT 1")])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}

#[tokio::test]
async fn test_select_count_mismatch_is_protocol_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/sql/dml/query")
                .json_body(json!([{"stmt": "SELECT * FROM A"}, {"stmt": "SELECT * FROM B"}]));
            then.status(200).json_body(json!([
                {"columns": [], "results": [], "responseSizeByte": 0}
            ]));
        })
        .await;

    let err = client(&server)
        .select(vec![
            SqlStatement::new("SELECT * FROM A"),
            SqlStatement::new("SELECT * FROM B"),
        ])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Protocol(msg) if msg.contains("2 statements sent, 1 responses")
    ));
}

#[tokio::test]
async fn test_update_responses_are_positional() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/sql/dml/update");
            then.status(200).json_body(json!([
                {"status": 1, "updatedRows": 3, "stmt": "DELETE FROM A", "message": null},
                {
                    "status": 0,
                    "updatedRows": 0,
                    "stmt": "DELETE FROM B",
                    "message": "Table not found"
                }
            ]));
        })
        .await;

    let responses = client(&server)
        .update(vec![
            SqlStatement::new("DELETE FROM A"),
            SqlStatement::new("DELETE FROM B"),
        ])
        .await
        .unwrap();

    assert_eq!(responses[0].updated_rows, 3);
    assert!(responses[0].is_success());
    assert!(!responses[1].is_success());
    assert_eq!(responses[1].message.as_deref(), Some("Table not found"));
}

#[tokio::test]
async fn test_non_success_status_is_remote_service_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/containers/JBCompany/rows");
            then.status(500).body("row key violation");
        })
        .await;

    let err = client(&server)
        .register_rows("JBCompany", vec![vec![json!("com_1")]])
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("row key violation"));
}

#[tokio::test]
async fn test_register_rows_reports_count() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/containers/JBSkillTag/rows")
                .header("content-type", "application/json");
            then.status(200).json_body(json!({"count": 2}));
        })
        .await;

    let count = client(&server)
        .register_rows(
            "JBSkillTag",
            vec![
                vec![json!("skt_1"), json!("rust")],
                vec![json!("skt_2"), json!("java")],
            ],
        )
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_undecodable_body_is_protocol_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/containers/JBUser/rows");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let err = client(&server)
        .acquire_rows("JBUser", &AcquireRowsRequest::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Protocol(_)));
}
