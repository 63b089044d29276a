// In-memory GridDB transport for adapter tests
//
// Models the client contract rather than the HTTP service: container
// creation is idempotent, registration upserts by the first cell, and
// conditions of the form `col == 'lit'` / `col LIKE '%frag%'` are evaluated.
// SQL responses are scripted per call.

use crate::client::GridDbTransport;
use crate::wire::{
    AcquireRowsRequest, AcquireRowsResponse, ContainerDefinition, ResponseColumn,
    SqlSelectResponse, SqlStatement, SqlUpdateResponse,
};
use async_trait::async_trait;
use jobboard_core::error::{AppError, Result};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

pub(crate) struct InMemoryTransport {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    tables: HashMap<String, Table>,
    register_calls: usize,
    acquire_requests: Vec<(String, AcquireRowsRequest)>,
    select_script: VecDeque<Vec<SqlSelectResponse>>,
    update_script: VecDeque<Vec<SqlUpdateResponse>>,
    statements: Vec<String>,
}

struct Table {
    columns: Vec<ResponseColumn>,
    rows: Vec<Vec<Value>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    /// Store a row as-is, bypassing any codec
    pub fn insert_raw(&self, container: &str, row: Vec<Value>) {
        let mut state = self.state.lock().unwrap();
        let table = state
            .tables
            .get_mut(container)
            .unwrap_or_else(|| panic!("container {} not created", container));
        table.rows.push(row);
    }

    pub fn rows(&self, container: &str) -> Vec<Vec<Value>> {
        let state = self.state.lock().unwrap();
        state
            .tables
            .get(container)
            .map(|t| t.rows.clone())
            .unwrap_or_default()
    }

    pub fn register_calls(&self) -> usize {
        self.state.lock().unwrap().register_calls
    }

    pub fn last_acquire(&self) -> Option<(String, AcquireRowsRequest)> {
        self.state.lock().unwrap().acquire_requests.last().cloned()
    }

    pub fn script_select(&self, responses: Vec<SqlSelectResponse>) {
        self.state.lock().unwrap().select_script.push_back(responses);
    }

    pub fn script_update(&self, responses: Vec<SqlUpdateResponse>) {
        self.state.lock().unwrap().update_script.push_back(responses);
    }

    pub fn statements(&self) -> Vec<String> {
        self.state.lock().unwrap().statements.clone()
    }
}

fn not_found(container: &str) -> AppError {
    AppError::RemoteService {
        status: 404,
        body: format!("Container not found: {}", container),
    }
}

fn unquote(literal: &str) -> Option<String> {
    literal
        .strip_prefix('\'')?
        .strip_suffix('\'')
        .map(|s| s.replace("''", "'"))
}

fn cell<'a>(columns: &[ResponseColumn], row: &'a [Value], name: &str) -> Option<&'a Value> {
    let index = columns.iter().position(|c| c.name == name)?;
    row.get(index)
}

fn matches(condition: &str, columns: &[ResponseColumn], row: &[Value]) -> bool {
    if condition.is_empty() {
        return true;
    }
    if let Some((column, literal)) = condition.split_once(" == ") {
        let expected = unquote(literal).unwrap_or_else(|| panic!("bad literal in {}", condition));
        return cell(columns, row, column).and_then(Value::as_str) == Some(expected.as_str());
    }
    if let Some((column, pattern)) = condition.split_once(" LIKE ") {
        let pattern = unquote(pattern).unwrap_or_else(|| panic!("bad pattern in {}", condition));
        let fragment = pattern.trim_matches('%');
        return cell(columns, row, column)
            .and_then(Value::as_str)
            .map_or(false, |v| v.contains(fragment));
    }
    panic!("unsupported condition: {}", condition)
}

fn sort_key(columns: &[ResponseColumn], row: &[Value], column: &str) -> String {
    match cell(columns, row, column) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[async_trait]
impl GridDbTransport for InMemoryTransport {
    async fn check_connection(&self) -> Result<()> {
        Ok(())
    }

    async fn create_container(&self, definition: &ContainerDefinition) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let columns = definition
            .columns
            .iter()
            .map(|c| ResponseColumn {
                name: c.name.clone(),
                column_type: serde_json::to_value(c.column_type)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default(),
            })
            .collect();
        state
            .tables
            .entry(definition.container_name.clone())
            .or_insert(Table {
                columns,
                rows: Vec::new(),
            });
        Ok(())
    }

    async fn register_rows(&self, container: &str, rows: Vec<Vec<Value>>) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        state.register_calls += 1;
        let table = state
            .tables
            .get_mut(container)
            .ok_or_else(|| not_found(container))?;

        let count = rows.len() as u64;
        for row in rows {
            if row.len() != table.columns.len() {
                return Err(AppError::RemoteService {
                    status: 400,
                    body: format!("Row width {} does not match {}", row.len(), container),
                });
            }
            match table.rows.iter_mut().find(|r| r.first() == row.first()) {
                Some(existing) => *existing = row,
                None => table.rows.push(row),
            }
        }
        Ok(count)
    }

    async fn acquire_rows(
        &self,
        container: &str,
        request: &AcquireRowsRequest,
    ) -> Result<AcquireRowsResponse> {
        let mut state = self.state.lock().unwrap();
        state
            .acquire_requests
            .push((container.to_string(), request.clone()));
        let table = state.tables.get(container).ok_or_else(|| not_found(container))?;

        let mut rows: Vec<Vec<Value>> = table
            .rows
            .iter()
            .filter(|row| matches(&request.condition, &table.columns, row))
            .cloned()
            .collect();

        if let Some((column, direction)) = request.sort.split_once(' ') {
            rows.sort_by_key(|row| sort_key(&table.columns, row, column));
            if direction.eq_ignore_ascii_case("DESC") {
                rows.reverse();
            }
        }

        let total = rows.len() as u64;
        let rows: Vec<Vec<Value>> = rows
            .into_iter()
            .skip(request.offset as usize)
            .take(request.limit as usize)
            .collect();

        Ok(AcquireRowsResponse {
            columns: table.columns.clone(),
            rows: if rows.is_empty() { None } else { Some(rows) },
            offset: request.offset,
            limit: request.limit,
            total: Some(total),
        })
    }

    async fn select(&self, statements: Vec<SqlStatement>) -> Result<Vec<SqlSelectResponse>> {
        let mut state = self.state.lock().unwrap();
        state
            .statements
            .extend(statements.iter().map(|s| s.stmt.clone()));
        Ok(state.select_script.pop_front().unwrap_or_else(|| {
            statements
                .iter()
                .map(|_| SqlSelectResponse {
                    columns: Vec::new(),
                    results: Vec::new(),
                    response_size_byte: 0,
                })
                .collect()
        }))
    }

    async fn update(&self, statements: Vec<SqlStatement>) -> Result<Vec<SqlUpdateResponse>> {
        let mut state = self.state.lock().unwrap();
        state
            .statements
            .extend(statements.iter().map(|s| s.stmt.clone()));
        Ok(state.update_script.pop_front().unwrap_or_else(|| {
            statements
                .iter()
                .map(|s| SqlUpdateResponse {
                    status: SqlUpdateResponse::STATUS_OK,
                    updated_rows: 0,
                    stmt: s.stmt.clone(),
                    message: None,
                })
                .collect()
        }))
    }
}
