// Declarative row schema
//
// One `ColumnSpec` table per record drives the container definition, the
// row writer and the row reader.

use crate::wire::{ColumnDefinition, ColumnType, ContainerDefinition, IndexKind};
use jobboard_core::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub indexed: bool,
    pub nullable: bool,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            indexed: false,
            nullable: false,
        }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, ColumnType::String)
    }

    pub const fn double(name: &'static str) -> Self {
        Self::new(name, ColumnType::Double)
    }

    pub const fn timestamp(name: &'static str) -> Self {
        Self::new(name, ColumnType::Timestamp)
    }

    /// TREE index
    pub const fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn definition(&self) -> ColumnDefinition {
        ColumnDefinition {
            name: self.name.to_string(),
            column_type: self.column_type,
            index: if self.indexed {
                vec![IndexKind::Tree]
            } else {
                Vec::new()
            },
        }
    }
}

pub fn container_definition(name: &str, columns: &[ColumnSpec]) -> Result<ContainerDefinition> {
    ContainerDefinition::build(name, columns.iter().map(ColumnSpec::definition).collect())
}
