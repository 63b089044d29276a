// Job Post Repository Port (Interface)

use crate::domain::JobPost;
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for JobPost persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobPostRepository: Send + Sync {
    /// Provision the backing container (idempotent)
    async fn create_table(&self) -> Result<()>;

    /// Upsert full records
    async fn save_all(&self, job_posts: Vec<JobPost>) -> Result<()>;

    async fn find_all(&self) -> Result<Vec<JobPost>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<JobPost>>;

    /// Newest first
    async fn find_by_company_id(&self, company_id: &str) -> Result<Vec<JobPost>>;

    /// Job posts with at least one skill whose name matches (case-insensitive)
    async fn search_by_skills(&self, skill_names: Vec<String>) -> Result<Vec<JobPost>>;

    /// Always fails with `AppError::NotImplemented`
    async fn delete(&self, id: &str) -> Result<()>;
}
