// Positional row codec
//
// Cells are addressed by column name and checked against the schema
// position, so reordering a schema without reordering the codec fails
// loudly instead of shifting values into the wrong columns.

use crate::schema::ColumnSpec;
use crate::wire::ColumnType;
use chrono::{DateTime, NaiveDateTime};
use jobboard_core::domain::{DomainError, PersistedEnum};
use jobboard_core::error::{AppError, Result};
use serde_json::{Number, Value};
use thiserror::Error;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Write form of a naive timestamp: millisecond precision, `Z` suffix
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse an RFC 3339 timestamp, keeping the wall clock and dropping the offset
///
/// `2024-05-01T10:00:00+02:00` reads as `2024-05-01T10:00:00`.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok())
}

/// Why a single row could not be turned into a record
#[derive(Error, Debug)]
pub enum RowError {
    #[error("row has {actual} cells, schema has {expected} columns")]
    Width { expected: usize, actual: usize },

    #[error("column {0} is null")]
    MissingColumn(&'static str),

    #[error("column {column}: expected {expected}, found {found}")]
    UnexpectedType {
        column: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error(transparent)]
    InvalidEnum(#[from] DomainError),

    #[error("column {column}: invalid timestamp {value:?}")]
    InvalidTimestamp { column: &'static str, value: String },

    #[error("column {requested} read at position {position}")]
    SchemaMismatch { position: usize, requested: String },
}

/// A record stored as one row of a GridDB container
pub trait RowMapped: Sized + Send + Sync + 'static {
    const CONTAINER: &'static str;
    const COLUMNS: &'static [ColumnSpec];

    /// Write every column, in schema order
    fn write_row(&self, row: &mut RowWriter<'_>) -> Result<()>;

    /// Read every column, in schema order
    fn read_row(row: &mut RowReader<'_>) -> std::result::Result<Self, RowError>;

    fn to_row(&self) -> Result<Vec<Value>> {
        let mut writer = RowWriter::new(Self::CONTAINER, Self::COLUMNS);
        self.write_row(&mut writer)?;
        writer.finish()
    }

    fn from_row(cells: &[Value]) -> std::result::Result<Self, RowError> {
        let mut reader = RowReader::new(Self::COLUMNS, cells)?;
        Self::read_row(&mut reader)
    }
}

pub struct RowWriter<'a> {
    container: &'a str,
    columns: &'a [ColumnSpec],
    cells: Vec<Value>,
}

impl<'a> RowWriter<'a> {
    pub fn new(container: &'a str, columns: &'a [ColumnSpec]) -> Self {
        Self {
            container,
            columns,
            cells: Vec::with_capacity(columns.len()),
        }
    }

    fn push(&mut self, name: &str, column_type: ColumnType, value: Value) -> Result<&mut Self> {
        let position = self.cells.len();
        let spec = self.columns.get(position).ok_or_else(|| {
            AppError::Config(format!(
                "{}: column {} written past the last column",
                self.container, name
            ))
        })?;

        if spec.name != name || spec.column_type != column_type {
            return Err(AppError::Config(format!(
                "{}: column {} ({:?}) written at position {}, schema has {} ({:?})",
                self.container, name, column_type, position, spec.name, spec.column_type
            )));
        }
        if value.is_null() && !spec.nullable {
            return Err(AppError::Config(format!(
                "{}: column {} is not nullable",
                self.container, name
            )));
        }

        self.cells.push(value);
        Ok(self)
    }

    pub fn string(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        self.push(name, ColumnType::String, Value::String(value.to_string()))
    }

    /// `None` is written as JSON `null`, never as `""`
    pub fn opt_string(&mut self, name: &str, value: Option<&str>) -> Result<&mut Self> {
        let value = value.map_or(Value::Null, |v| Value::String(v.to_string()));
        self.push(name, ColumnType::String, value)
    }

    pub fn double(&mut self, name: &str, value: f64) -> Result<&mut Self> {
        let number = Number::from_f64(value).ok_or_else(|| {
            AppError::Validation(format!(
                "{}: column {} cannot store {}",
                self.container, name, value
            ))
        })?;
        self.push(name, ColumnType::Double, Value::Number(number))
    }

    pub fn timestamp(&mut self, name: &str, value: &NaiveDateTime) -> Result<&mut Self> {
        self.push(
            name,
            ColumnType::Timestamp,
            Value::String(format_timestamp(value)),
        )
    }

    /// Stored as the enum's token
    pub fn enumeration<E: PersistedEnum>(&mut self, name: &str, value: E) -> Result<&mut Self> {
        self.push(name, ColumnType::String, Value::String(value.token().to_string()))
    }

    pub fn finish(self) -> Result<Vec<Value>> {
        if self.cells.len() != self.columns.len() {
            let missing: Vec<&str> = self.columns[self.cells.len()..]
                .iter()
                .map(|c| c.name)
                .collect();
            return Err(AppError::Config(format!(
                "{}: columns never written: {}",
                self.container,
                missing.join(", ")
            )));
        }
        Ok(self.cells)
    }
}

/// Reads one row against a schema, which may be a projection
pub struct RowReader<'a> {
    columns: &'a [ColumnSpec],
    cells: &'a [Value],
    position: usize,
}

impl<'a> RowReader<'a> {
    pub fn new(
        columns: &'a [ColumnSpec],
        cells: &'a [Value],
    ) -> std::result::Result<Self, RowError> {
        if cells.len() != columns.len() {
            return Err(RowError::Width {
                expected: columns.len(),
                actual: cells.len(),
            });
        }
        Ok(Self {
            columns,
            cells,
            position: 0,
        })
    }

    fn next(&mut self, name: &str) -> std::result::Result<(&'a ColumnSpec, &'a Value), RowError> {
        let position = self.position;
        match (self.columns.get(position), self.cells.get(position)) {
            (Some(spec), Some(value)) if spec.name == name => {
                self.position += 1;
                Ok((spec, value))
            }
            _ => Err(RowError::SchemaMismatch {
                position,
                requested: name.to_string(),
            }),
        }
    }

    pub fn string(&mut self, name: &str) -> std::result::Result<String, RowError> {
        match self.next(name)? {
            (_, Value::String(s)) => Ok(s.clone()),
            (spec, Value::Null) => Err(RowError::MissingColumn(spec.name)),
            (spec, other) => Err(unexpected(spec, "string", other)),
        }
    }

    pub fn opt_string(&mut self, name: &str) -> std::result::Result<Option<String>, RowError> {
        match self.next(name)? {
            (_, Value::String(s)) => Ok(Some(s.clone())),
            (_, Value::Null) => Ok(None),
            (spec, other) => Err(unexpected(spec, "string", other)),
        }
    }

    pub fn double(&mut self, name: &str) -> std::result::Result<f64, RowError> {
        match self.next(name)? {
            (spec, Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| unexpected(spec, "double", &Value::Number(n.clone()))),
            (spec, Value::Null) => Err(RowError::MissingColumn(spec.name)),
            (spec, other) => Err(unexpected(spec, "double", other)),
        }
    }

    pub fn timestamp(&mut self, name: &str) -> std::result::Result<NaiveDateTime, RowError> {
        match self.next(name)? {
            (spec, Value::String(s)) => {
                parse_timestamp(s).ok_or_else(|| RowError::InvalidTimestamp {
                    column: spec.name,
                    value: s.clone(),
                })
            }
            (spec, Value::Null) => Err(RowError::MissingColumn(spec.name)),
            (spec, other) => Err(unexpected(spec, "timestamp", other)),
        }
    }

    pub fn enumeration<E: PersistedEnum>(
        &mut self,
        name: &str,
    ) -> std::result::Result<E, RowError> {
        let token = self.string(name)?;
        Ok(E::from_token(&token)?)
    }
}

fn unexpected(spec: &ColumnSpec, expected: &'static str, found: &Value) -> RowError {
    RowError::UnexpectedType {
        column: spec.name,
        expected,
        found: found.to_string(),
    }
}
