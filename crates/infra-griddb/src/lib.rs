// Job Board Infrastructure - GridDB Cloud Web API Adapter
// Implements: CompanyRepository, JobPostRepository, JobPostSkillRepository,
//             SkillTagRepository, UserRepository

mod client;
mod condition;
mod config;
mod container;
mod repository;
mod row;
mod schema;
mod sql;
mod wire;

#[cfg(test)]
mod testing;

pub use client::{GridDbClient, GridDbTransport};
pub use condition::Condition;
pub use config::{AuthScheme, GridDbConfig};
pub use container::Container;
pub use repository::{
    GridDbCompanyRepository, GridDbJobPostRepository, GridDbJobPostSkillRepository,
    GridDbSkillTagRepository, GridDbUserRepository,
};
pub use row::{format_timestamp, parse_timestamp, RowError, RowMapped, RowReader, RowWriter};
pub use schema::{container_definition, ColumnSpec};
pub use wire::{
    AcquireRowsRequest, AcquireRowsResponse, ColumnDefinition, ColumnType, ContainerDefinition,
    ContainerType, IndexKind, ResponseColumn, SqlSelectResponse, SqlStatement, SqlUpdateResponse,
};

// Note: reqwest::Error conversion is handled inside the client
// (orphan rules prevent From<reqwest::Error> for AppError here)
