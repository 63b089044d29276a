// Generic container adapter over the GridDB transport

use crate::client::GridDbTransport;
use crate::condition::Condition;
use crate::row::{RowError, RowMapped, RowReader};
use crate::schema::{container_definition, ColumnSpec};
use crate::wire::{AcquireRowsRequest, ContainerDefinition, SqlStatement};
use jobboard_core::error::{AppError, Result};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Typed access to one container whose rows map to `R`
///
/// Unreadable rows are dropped with a `warn` log and counted; reads never
/// return partially decoded records.
pub struct Container<R: RowMapped> {
    transport: Arc<dyn GridDbTransport>,
    parse_failures: AtomicU64,
    _record: PhantomData<fn() -> R>,
}

impl<R: RowMapped> Container<R> {
    pub fn new(transport: Arc<dyn GridDbTransport>) -> Self {
        Self {
            transport,
            parse_failures: AtomicU64::new(0),
            _record: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        R::CONTAINER
    }

    pub fn definition(&self) -> Result<ContainerDefinition> {
        container_definition(R::CONTAINER, R::COLUMNS)
    }

    /// Rows dropped by reads since this adapter was created
    pub fn parse_failures(&self) -> u64 {
        self.parse_failures.load(Ordering::Relaxed)
    }

    /// Provision the container (idempotent)
    pub async fn create_table(&self) -> Result<()> {
        let definition = self.definition()?;
        self.transport.create_container(&definition).await?;
        info!(container = R::CONTAINER, columns = R::COLUMNS.len(), "Container ready");
        Ok(())
    }

    pub async fn save(&self, record: &R) -> Result<()> {
        self.save_all(std::slice::from_ref(record)).await
    }

    /// Upsert a batch in one request. An empty batch sends nothing.
    pub async fn save_all(&self, records: &[R]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        let rows = records
            .iter()
            .map(R::to_row)
            .collect::<Result<Vec<_>>>()?;

        let count = self.transport.register_rows(R::CONTAINER, rows).await?;
        debug!(container = R::CONTAINER, count, "Rows registered");
        Ok(())
    }

    pub async fn find(&self, request: AcquireRowsRequest) -> Result<Vec<R>> {
        let response = self.transport.acquire_rows(R::CONTAINER, &request).await?;

        if !response.columns.is_empty()
            && !response
                .columns
                .iter()
                .map(|c| c.name.as_str())
                .eq(R::COLUMNS.iter().map(|c| c.name))
        {
            let reported: Vec<&str> = response.columns.iter().map(|c| c.name.as_str()).collect();
            return Err(AppError::Protocol(format!(
                "{}: service reports columns [{}], schema declares {} columns",
                R::CONTAINER,
                reported.join(", "),
                R::COLUMNS.len()
            )));
        }

        Ok(self.decode_rows(response.into_rows(), R::COLUMNS, R::read_row))
    }

    /// First row matching `condition`
    pub async fn find_one(&self, condition: Condition) -> Result<Option<R>> {
        let request = AcquireRowsRequest::new().limit(1).condition(condition);
        Ok(self.find(request).await?.into_iter().next())
    }

    /// Run a single SQL query whose result rows follow `columns`
    pub async fn select_projection<T, F>(
        &self,
        stmt: String,
        columns: &'static [ColumnSpec],
        read: F,
    ) -> Result<Vec<T>>
    where
        F: Fn(&mut RowReader<'_>) -> std::result::Result<T, RowError>,
    {
        let mut responses = self.transport.select(vec![SqlStatement::new(stmt)]).await?;
        let response = responses
            .pop()
            .ok_or_else(|| AppError::Protocol("Empty SQL select response".to_string()))?;

        Ok(self.decode_rows(response.results, columns, read))
    }

    /// Run a single SQL DML statement, returning the affected row count
    pub async fn execute_update(&self, stmt: String) -> Result<u64> {
        let responses = self
            .transport
            .update(vec![SqlStatement::new(stmt.clone())])
            .await?;

        let mut updated = 0;
        for response in responses {
            if !response.is_success() {
                return Err(AppError::Statement {
                    stmt: if response.stmt.is_empty() {
                        stmt
                    } else {
                        response.stmt
                    },
                    message: response
                        .message
                        .unwrap_or_else(|| format!("status {}", response.status)),
                });
            }
            updated += response.updated_rows;
        }

        debug!(container = R::CONTAINER, updated, "SQL update applied");
        Ok(updated)
    }

    /// Deleting a single record is not offered by this adapter
    pub async fn delete(&self, id: &str) -> Result<()> {
        Err(AppError::NotImplemented(format!(
            "{} delete operation is not implemented yet (id {})",
            R::CONTAINER,
            id
        )))
    }

    fn decode_rows<T, F>(&self, rows: Vec<Vec<Value>>, columns: &[ColumnSpec], read: F) -> Vec<T>
    where
        F: Fn(&mut RowReader<'_>) -> std::result::Result<T, RowError>,
    {
        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match RowReader::new(columns, row).and_then(|mut reader| read(&mut reader)) {
                Ok(record) => records.push(record),
                Err(e) => {
                    self.parse_failures.fetch_add(1, Ordering::Relaxed);
                    warn!(
                        container = R::CONTAINER,
                        row = index,
                        error = %e,
                        "Dropping unreadable row"
                    );
                }
            }
        }
        records
    }
}
