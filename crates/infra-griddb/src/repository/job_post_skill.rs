// GridDB JobPostSkillRepository Implementation

use crate::client::GridDbTransport;
use crate::condition::Condition;
use crate::container::Container;
use crate::row::{RowError, RowMapped, RowReader, RowWriter};
use crate::schema::ColumnSpec;
use crate::sql;
use crate::wire::AcquireRowsRequest;
use async_trait::async_trait;
use jobboard_core::domain::JobPostSkill;
use jobboard_core::error::Result;
use jobboard_core::port::JobPostSkillRepository;
use std::sync::Arc;
use tracing::info;

/// Result shape of the skills-of-a-job-post join
const SKILL_NAME_PROJECTION: &[ColumnSpec] = &[
    ColumnSpec::string("id"),
    ColumnSpec::string("name"),
    ColumnSpec::string("skillTagId"),
];

impl RowMapped for JobPostSkill {
    const CONTAINER: &'static str = "JBJobPostSkill";
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::string("id").indexed(),
        ColumnSpec::string("jobPostId").indexed(),
        ColumnSpec::string("skillTagId").indexed(),
    ];

    // skill_name is derived, never stored
    fn write_row(&self, row: &mut RowWriter<'_>) -> Result<()> {
        row.string("id", &self.id)?
            .string("jobPostId", &self.job_post_id)?
            .string("skillTagId", &self.skill_tag_id)?;
        Ok(())
    }

    fn read_row(row: &mut RowReader<'_>) -> std::result::Result<Self, RowError> {
        Ok(JobPostSkill::new(
            row.string("id")?,
            row.string("jobPostId")?,
            row.string("skillTagId")?,
        ))
    }
}

pub struct GridDbJobPostSkillRepository {
    container: Container<JobPostSkill>,
}

impl GridDbJobPostSkillRepository {
    pub fn new(transport: Arc<dyn GridDbTransport>) -> Self {
        Self {
            container: Container::new(transport),
        }
    }

    pub fn parse_failures(&self) -> u64 {
        self.container.parse_failures()
    }

    async fn delete_where(&self, column: &str, value: &str) -> Result<u64> {
        let stmt = format!(
            "DELETE FROM {} WHERE {} = {}",
            JobPostSkill::CONTAINER,
            column,
            sql::quote(value)
        );
        let deleted = self.container.execute_update(stmt).await?;
        info!(column, value, deleted, "Job post skills deleted");
        Ok(deleted)
    }
}

#[async_trait]
impl JobPostSkillRepository for GridDbJobPostSkillRepository {
    async fn create_table(&self) -> Result<()> {
        self.container.create_table().await
    }

    async fn save_all(&self, links: Vec<JobPostSkill>) -> Result<()> {
        self.container.save_all(&links).await
    }

    async fn find_all(&self) -> Result<Vec<JobPostSkill>> {
        self.container.find(AcquireRowsRequest::new()).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<JobPostSkill>> {
        self.container.find_one(Condition::eq("id", id)).await
    }

    async fn find_by_job_post_id(&self, job_post_id: &str) -> Result<Vec<JobPostSkill>> {
        let stmt = format!(
            "SELECT jps.id AS id, st.name AS name, st.id AS skillTagId \
             FROM JBSkillTag st \
             JOIN JBJobPostSkill jps ON st.id = jps.skillTagId \
             WHERE jps.jobPostId = {}",
            sql::quote(job_post_id)
        );

        self.container
            .select_projection(stmt, SKILL_NAME_PROJECTION, |row| {
                let id = row.string("id")?;
                let name = row.string("name")?;
                let skill_tag_id = row.string("skillTagId")?;
                Ok(JobPostSkill::new(id, job_post_id, skill_tag_id).with_skill_name(name))
            })
            .await
    }

    async fn find_links_by_job_post_id(&self, job_post_id: &str) -> Result<Vec<JobPostSkill>> {
        self.container
            .find(AcquireRowsRequest::new().condition(Condition::eq("jobPostId", job_post_id)))
            .await
    }

    async fn find_by_skill_tag_id(&self, skill_tag_id: &str) -> Result<Vec<JobPostSkill>> {
        self.container
            .find(AcquireRowsRequest::new().condition(Condition::eq("skillTagId", skill_tag_id)))
            .await
    }

    async fn delete_by_job_post_id(&self, job_post_id: &str) -> Result<u64> {
        self.delete_where("jobPostId", job_post_id).await
    }

    async fn delete_by_skill_tag_id(&self, skill_tag_id: &str) -> Result<u64> {
        self.delete_where("skillTagId", skill_tag_id).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.container.delete(id).await
    }
}
