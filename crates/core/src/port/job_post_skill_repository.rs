// Job Post Skill Repository Port (Interface)

use crate::domain::JobPostSkill;
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for the job post <-> skill tag join container
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobPostSkillRepository: Send + Sync {
    /// Provision the backing container (idempotent)
    async fn create_table(&self) -> Result<()>;

    /// Upsert full records (`skill_name` is never persisted)
    async fn save_all(&self, links: Vec<JobPostSkill>) -> Result<()>;

    async fn find_all(&self) -> Result<Vec<JobPostSkill>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<JobPostSkill>>;

    /// Links of a job post with `skill_name` resolved (join query)
    async fn find_by_job_post_id(&self, job_post_id: &str) -> Result<Vec<JobPostSkill>>;

    /// Links of a job post as stored (no name resolution)
    async fn find_links_by_job_post_id(&self, job_post_id: &str) -> Result<Vec<JobPostSkill>>;

    async fn find_by_skill_tag_id(&self, skill_tag_id: &str) -> Result<Vec<JobPostSkill>>;

    /// Returns the number of deleted rows
    async fn delete_by_job_post_id(&self, job_post_id: &str) -> Result<u64>;

    /// Returns the number of deleted rows
    async fn delete_by_skill_tag_id(&self, skill_tag_id: &str) -> Result<u64>;

    /// Always fails with `AppError::NotImplemented`
    async fn delete(&self, id: &str) -> Result<()>;
}
