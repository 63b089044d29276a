// Company Repository Port (Interface)

use crate::domain::Company;
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Company persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Provision the backing container (idempotent)
    async fn create_table(&self) -> Result<()>;

    /// Upsert full records
    async fn save_all(&self, companies: Vec<Company>) -> Result<()>;

    async fn find_all(&self) -> Result<Vec<Company>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Company>>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Company>>;

    /// Always fails with `AppError::NotImplemented`
    async fn delete(&self, id: &str) -> Result<()>;
}
