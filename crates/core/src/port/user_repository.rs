// User Repository Port (Interface)

use crate::domain::User;
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Provision the backing container (idempotent)
    async fn create_table(&self) -> Result<()>;

    /// Upsert full records
    async fn save_all(&self, users: Vec<User>) -> Result<()>;

    async fn find_all(&self) -> Result<Vec<User>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Always fails with `AppError::NotImplemented`
    async fn delete(&self, id: &str) -> Result<()>;
}
