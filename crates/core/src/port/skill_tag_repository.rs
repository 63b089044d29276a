// Skill Tag Repository Port (Interface)

use crate::domain::SkillTag;
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for SkillTag persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillTagRepository: Send + Sync {
    /// Provision the backing container (idempotent)
    async fn create_table(&self) -> Result<()>;

    /// Upsert full records
    async fn save_all(&self, skill_tags: Vec<SkillTag>) -> Result<()>;

    /// Sorted by name
    async fn find_all(&self, limit: u64) -> Result<Vec<SkillTag>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<SkillTag>>;

    async fn find_by_name(&self, name: &str) -> Result<Option<SkillTag>>;

    /// Substring match on the name, sorted by name
    async fn search_by_name(&self, pattern: &str) -> Result<Vec<SkillTag>>;

    /// Always fails with `AppError::NotImplemented`
    async fn delete(&self, id: &str) -> Result<()>;
}
