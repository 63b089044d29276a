// GridDB Cloud Web API wire format

use jobboard_core::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    String,
    Bool,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndexKind {
    Tree,
    Spatial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub index: Vec<IndexKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContainerType {
    Collection,
}

/// Payload of `POST /containers`
///
/// Column order is the positional contract of every row exchanged with the
/// container. The first column is the row key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDefinition {
    pub container_name: String,
    pub container_type: ContainerType,
    pub rowkey: bool,
    pub columns: Vec<ColumnDefinition>,
}

impl ContainerDefinition {
    pub fn build(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(AppError::Config("Container name must not be empty".to_string()));
        }
        // Embedded in URL paths and SQL text
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AppError::Config(format!(
                "Container name {:?} may only contain [A-Za-z0-9_]",
                name
            )));
        }
        if columns.is_empty() {
            return Err(AppError::Config(format!(
                "Container {} must declare at least one column",
                name
            )));
        }
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(AppError::Config(format!(
                    "Container {} declares column {} twice",
                    name, column.name
                )));
            }
        }

        Ok(Self {
            container_name: name,
            container_type: ContainerType::Collection,
            rowkey: true,
            columns,
        })
    }
}

/// Payload of `POST /containers/{name}/rows`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquireRowsRequest {
    pub offset: u64,
    pub limit: u64,
    pub condition: String,
    pub sort: String,
}

impl AcquireRowsRequest {
    pub const DEFAULT_LIMIT: u64 = 50;
    pub const DEFAULT_SORT: &'static str = "id ASC";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Row filter, build with [`crate::Condition`]
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }
}

impl Default for AcquireRowsRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
            condition: String::new(),
            sort: Self::DEFAULT_SORT.to_string(),
        }
    }
}

/// Column metadata as reported by the service
///
/// Kept as a plain string: the service reports types this client never
/// declares (arrays, geometry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseColumn {
    pub name: String,
    #[serde(rename = "type", default)]
    pub column_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquireRowsResponse {
    #[serde(default)]
    pub columns: Vec<ResponseColumn>,
    /// `null` when nothing matched
    #[serde(default)]
    pub rows: Option<Vec<Vec<Value>>>,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub total: Option<u64>,
}

impl AcquireRowsResponse {
    pub fn into_rows(self) -> Vec<Vec<Value>> {
        self.rows.unwrap_or_default()
    }
}

/// Response of `PUT /containers/{name}/rows`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RegisterRowsResponse {
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlStatement {
    pub stmt: String,
}

impl SqlStatement {
    pub fn new(stmt: impl Into<String>) -> Self {
        Self { stmt: stmt.into() }
    }
}

/// One element of the `POST /sql/dml/query` response array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlSelectResponse {
    #[serde(default)]
    pub columns: Vec<ResponseColumn>,
    #[serde(default)]
    pub results: Vec<Vec<Value>>,
    #[serde(default)]
    pub response_size_byte: u64,
}

/// One element of the `POST /sql/dml/update` response array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlUpdateResponse {
    /// 1 on success
    pub status: i64,
    #[serde(default)]
    pub updated_rows: u64,
    #[serde(default)]
    pub stmt: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl SqlUpdateResponse {
    pub const STATUS_OK: i64 = 1;

    pub fn is_success(&self) -> bool {
        self.status == Self::STATUS_OK
    }
}
