// GridDB Cloud Web API client

use crate::config::GridDbConfig;
use crate::wire::{
    AcquireRowsRequest, AcquireRowsResponse, ContainerDefinition, RegisterRowsResponse,
    SqlSelectResponse, SqlStatement, SqlUpdateResponse,
};
use async_trait::async_trait;
use jobboard_core::error::{AppError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

/// Outbound port to the GridDB Web API
///
/// Adapters only talk to the service through this trait; the reqwest-backed
/// [`GridDbClient`] is the production implementation.
#[async_trait]
pub trait GridDbTransport: Send + Sync {
    /// `GET /checkConnection`
    async fn check_connection(&self) -> Result<()>;

    /// `POST /containers`. An already existing container is not an error.
    async fn create_container(&self, definition: &ContainerDefinition) -> Result<()>;

    /// `PUT /containers/{name}/rows` (upsert by row key)
    ///
    /// Returns the number of registered rows.
    async fn register_rows(&self, container: &str, rows: Vec<Vec<Value>>) -> Result<u64>;

    /// `POST /containers/{name}/rows`
    async fn acquire_rows(
        &self,
        container: &str,
        request: &AcquireRowsRequest,
    ) -> Result<AcquireRowsResponse>;

    /// `POST /sql/dml/query`. One response per statement, in order.
    async fn select(&self, statements: Vec<SqlStatement>) -> Result<Vec<SqlSelectResponse>>;

    /// `POST /sql/dml/update`. One response per statement, in order.
    async fn update(&self, statements: Vec<SqlStatement>) -> Result<Vec<SqlUpdateResponse>>;
}

/// reqwest-backed GridDB Web API client
///
/// # Example
///
/// ```no_run
/// use jobboard_infra_griddb::{GridDbClient, GridDbConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GridDbConfig::from_env()?;
/// let client = GridDbClient::connect(config).await?;
/// # Ok(())
/// # }
/// ```
pub struct GridDbClient {
    http: reqwest::Client,
    config: GridDbConfig,
}

impl GridDbClient {
    /// Build a client without contacting the service
    pub fn new(config: GridDbConfig) -> Result<Self> {
        config.validate()?;

        let mut authorization = HeaderValue::from_str(&config.authorization())
            .map_err(|e| AppError::Config(format!("Invalid auth token: {}", e)))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Build a client and verify the service is reachable
    ///
    /// Fails with `AppError::Connectivity` when the connection check does
    /// not succeed; callers treat this as fatal at startup.
    pub async fn connect(config: GridDbConfig) -> Result<Self> {
        let client = Self::new(config)?;

        client.check_connection().await.map_err(|e| {
            AppError::Connectivity(format!(
                "GridDB at {} is not reachable: {}",
                client.config.base_url, e
            ))
        })?;

        info!(base_url = %client.config.base_url, "Connected to GridDB");
        Ok(client)
    }

    pub fn config(&self) -> &GridDbConfig {
        &self.config
    }

    /// One HTTP exchange. Returns the status and the raw response body.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<(StatusCode, String)> {
        let uri = self.config.endpoint(path);
        let started = Instant::now();

        let mut request = self.http.request(method.clone(), &uri);
        if let Some(body) = body {
            debug!(%method, %uri, body = %body, "GridDB request");
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("{} {} failed: {}", method, uri, e)))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::Transport(format!("{} {}: failed to read body: {}", method, uri, e))
        })?;

        info!(
            %method,
            %uri,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "GridDB call"
        );
        debug!(%method, %uri, body = %text, "GridDB response");

        Ok((status, text))
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, String)> {
        let body = serde_json::to_string(body)?;
        self.send(method, path, Some(body)).await
    }

    /// Per-statement responses, checked against the statement count
    async fn run_sql<T: DeserializeOwned>(
        &self,
        path: &str,
        statements: Vec<SqlStatement>,
    ) -> Result<Vec<T>> {
        let (status, body) = self.send_json(Method::POST, path, &statements).await?;
        ensure_success(status, body.clone())?;

        let responses: Vec<T> = decode(path, &body)?;
        if responses.len() != statements.len() {
            return Err(AppError::Protocol(format!(
                "{}: {} statements sent, {} responses received",
                path,
                statements.len(),
                responses.len()
            )));
        }
        Ok(responses)
    }
}

fn ensure_success(status: StatusCode, body: String) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(AppError::RemoteService {
            status: status.as_u16(),
            body,
        })
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| AppError::Protocol(format!("{}: undecodable response: {}", path, e)))
}

fn rows_path(container: &str) -> String {
    format!("/containers/{}/rows", container)
}

#[async_trait]
impl GridDbTransport for GridDbClient {
    async fn check_connection(&self) -> Result<()> {
        let (status, body) = self.send(Method::GET, "/checkConnection", None).await?;
        ensure_success(status, body)
    }

    async fn create_container(&self, definition: &ContainerDefinition) -> Result<()> {
        let (status, body) = self
            .send_json(Method::POST, "/containers", definition)
            .await?;

        if status == StatusCode::CONFLICT {
            debug!(container = %definition.container_name, "Container already exists");
            return Ok(());
        }
        ensure_success(status, body)
    }

    async fn register_rows(&self, container: &str, rows: Vec<Vec<Value>>) -> Result<u64> {
        let path = rows_path(container);
        let (status, body) = self.send_json(Method::PUT, &path, &rows).await?;
        ensure_success(status, body.clone())?;

        if body.trim().is_empty() {
            return Ok(rows.len() as u64);
        }
        let response: RegisterRowsResponse = decode(&path, &body)?;
        Ok(response.count.unwrap_or(rows.len() as u64))
    }

    async fn acquire_rows(
        &self,
        container: &str,
        request: &AcquireRowsRequest,
    ) -> Result<AcquireRowsResponse> {
        let path = rows_path(container);
        let (status, body) = self.send_json(Method::POST, &path, request).await?;
        ensure_success(status, body.clone())?;
        decode(&path, &body)
    }

    async fn select(&self, statements: Vec<SqlStatement>) -> Result<Vec<SqlSelectResponse>> {
        self.run_sql("/sql/dml/query", statements).await
    }

    async fn update(&self, statements: Vec<SqlStatement>) -> Result<Vec<SqlUpdateResponse>> {
        self.run_sql("/sql/dml/update", statements).await
    }
}
