// GridDB JobPostRepository Implementation

use crate::client::GridDbTransport;
use crate::condition::Condition;
use crate::container::Container;
use crate::row::{RowError, RowMapped, RowReader, RowWriter};
use crate::schema::ColumnSpec;
use crate::sql;
use crate::wire::AcquireRowsRequest;
use async_trait::async_trait;
use jobboard_core::domain::JobPost;
use jobboard_core::error::Result;
use jobboard_core::port::JobPostRepository;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

impl RowMapped for JobPost {
    const CONTAINER: &'static str = "JBJobPost";
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::string("id").indexed(),
        ColumnSpec::string("title"),
        ColumnSpec::string("description"),
        ColumnSpec::string("jobType").indexed(),
        ColumnSpec::double("maximumMonthlySalary"),
        ColumnSpec::timestamp("datePosted"),
        ColumnSpec::string("companyId").indexed(),
        ColumnSpec::string("workModel").indexed(),
        ColumnSpec::string("location").nullable(),
        ColumnSpec::string("applyUrl").nullable(),
    ];

    fn write_row(&self, row: &mut RowWriter<'_>) -> Result<()> {
        row.string("id", &self.id)?
            .string("title", &self.title)?
            .string("description", &self.description)?
            .enumeration("jobType", self.job_type)?
            .double("maximumMonthlySalary", self.maximum_monthly_salary)?
            .timestamp("datePosted", &self.date_posted)?
            .string("companyId", &self.company_id)?
            .enumeration("workModel", self.work_model)?
            .opt_string("location", self.location.as_deref())?
            .opt_string("applyUrl", self.apply_url.as_deref())?;
        Ok(())
    }

    fn read_row(row: &mut RowReader<'_>) -> std::result::Result<Self, RowError> {
        Ok(JobPost {
            id: row.string("id")?,
            title: row.string("title")?,
            description: row.string("description")?,
            job_type: row.enumeration("jobType")?,
            maximum_monthly_salary: row.double("maximumMonthlySalary")?,
            date_posted: row.timestamp("datePosted")?,
            company_id: row.string("companyId")?,
            work_model: row.enumeration("workModel")?,
            location: row.opt_string("location")?,
            apply_url: row.opt_string("applyUrl")?,
        })
    }
}

/// Job posts with at least one skill whose lower-cased name is listed
fn skill_search_statement(skill_names: &[String]) -> String {
    format!(
        "SELECT jp.* FROM JBJobPost jp \
         JOIN JBCompany c ON jp.companyId = c.id \
         JOIN JBJobPostSkill jps ON jp.id = jps.jobPostId \
         JOIN JBSkillTag st ON jps.skillTagId = st.id \
         WHERE LOWER(st.name) IN {} \
         GROUP BY jp.id, c.name",
        sql::in_list(skill_names)
    )
}

pub struct GridDbJobPostRepository {
    container: Container<JobPost>,
}

impl GridDbJobPostRepository {
    pub fn new(transport: Arc<dyn GridDbTransport>) -> Self {
        Self {
            container: Container::new(transport),
        }
    }

    pub fn parse_failures(&self) -> u64 {
        self.container.parse_failures()
    }
}

#[async_trait]
impl JobPostRepository for GridDbJobPostRepository {
    async fn create_table(&self) -> Result<()> {
        self.container.create_table().await
    }

    async fn save_all(&self, job_posts: Vec<JobPost>) -> Result<()> {
        self.container.save_all(&job_posts).await
    }

    async fn find_all(&self) -> Result<Vec<JobPost>> {
        self.container.find(AcquireRowsRequest::new()).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<JobPost>> {
        self.container.find_one(Condition::eq("id", id)).await
    }

    async fn find_by_company_id(&self, company_id: &str) -> Result<Vec<JobPost>> {
        self.container
            .find(
                AcquireRowsRequest::new()
                    .condition(Condition::eq("companyId", company_id))
                    .sort("datePosted DESC"),
            )
            .await
    }

    async fn search_by_skills(&self, skill_names: Vec<String>) -> Result<Vec<JobPost>> {
        let names: Vec<String> = skill_names
            .iter()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let job_posts = self
            .container
            .select_projection(skill_search_statement(&names), JobPost::COLUMNS, JobPost::read_row)
            .await?;

        // The join yields one row per matching skill
        let mut seen = HashSet::new();
        let unique: Vec<JobPost> = job_posts
            .into_iter()
            .filter(|job_post| seen.insert(job_post.id.clone()))
            .collect();

        debug!(skills = ?names, found = unique.len(), "Skill search");
        Ok(unique)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.container.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::format_timestamp;
    use crate::testing::InMemoryTransport;
    use crate::wire::SqlSelectResponse;
    use chrono::NaiveDate;
    use jobboard_core::domain::{JobPostType, WorkModel};
    use serde_json::{json, Value};

    fn job_post(id: &str, company_id: &str, day: u32) -> JobPost {
        JobPost {
            id: id.to_string(),
            title: "Rust Engineer".to_string(),
            description: "Build \"fast\" things\\n".to_string(),
            job_type: JobPostType::FullTime,
            maximum_monthly_salary: 8500.5,
            date_posted: NaiveDate::from_ymd_opt(2024, 5, day)
                .unwrap()
                .and_hms_milli_opt(9, 15, 0, 250)
                .unwrap(),
            company_id: company_id.to_string(),
            work_model: WorkModel::Remote,
            location: None,
            apply_url: Some("https://jobs.example.com/apply?id=1&src=jb".to_string()),
        }
    }

    async fn setup() -> (Arc<InMemoryTransport>, GridDbJobPostRepository) {
        let transport = Arc::new(InMemoryTransport::new());
        let repo = GridDbJobPostRepository::new(transport.clone());
        repo.create_table().await.unwrap();
        (transport, repo)
    }

    #[tokio::test]
    async fn test_round_trip_by_id() {
        let (_, repo) = setup().await;
        let original = job_post("job_1", "com_1", 1);
        repo.save_all(vec![original.clone()]).await.unwrap();

        assert_eq!(repo.find_by_id("job_1").await.unwrap(), Some(original));
    }

    #[tokio::test]
    async fn test_find_by_company_newest_first() {
        let (transport, repo) = setup().await;
        repo.save_all(vec![
            job_post("job_1", "com_1", 1),
            job_post("job_2", "com_1", 3),
            job_post("job_3", "com_2", 2),
        ])
        .await
        .unwrap();

        let ids: Vec<String> = repo
            .find_by_company_id("com_1")
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["job_2", "job_1"]);

        let (_, request) = transport.last_acquire().unwrap();
        assert_eq!(request.condition, "companyId == 'com_1'");
        assert_eq!(request.sort, "datePosted DESC");
    }

    #[tokio::test]
    async fn test_bad_enum_row_is_dropped() {
        let (transport, repo) = setup().await;
        repo.save_all(vec![job_post("job_1", "com_1", 1), job_post("job_2", "com_1", 2)])
            .await
            .unwrap();

        let mut corrupt = job_post("job_3", "com_1", 3).to_row().unwrap();
        corrupt[3] = json!("GIG");
        transport.insert_raw("JBJobPost", corrupt);

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
        assert_eq!(repo.parse_failures(), 1);
    }

    #[tokio::test]
    async fn test_search_by_skills_lowercases_and_dedupes() {
        let (transport, repo) = setup().await;
        let row = |id: &str| -> Vec<Value> { job_post(id, "com_1", 1).to_row().unwrap() };
        transport.script_select(vec![SqlSelectResponse {
            columns: Vec::new(),
            results: vec![row("job_1"), row("job_1"), row("job_2")],
            response_size_byte: 0,
        }]);

        let found = repo
            .search_by_skills(vec!["Java".to_string(), " SQL ".to_string()])
            .await
            .unwrap();
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["job_1", "job_2"]);

        let statements = transport.statements();
        assert_eq!(statements.len(), 1);
        assert!(statements[0].contains("WHERE LOWER(st.name) IN ('java', 'sql')"));
        assert!(statements[0].contains("JOIN JBCompany c ON jp.companyId = c.id"));
    }

    #[tokio::test]
    async fn test_search_by_skills_escapes_names() {
        let (transport, repo) = setup().await;
        repo.search_by_skills(vec!["c'); DROP TABLE JBJobPost; --".to_string()])
            .await
            .unwrap();
        assert!(transport.statements()[0].contains("IN ('c''); drop table jbjobpost; --')"));
    }

    #[tokio::test]
    async fn test_search_with_blank_names_sends_nothing() {
        let (transport, repo) = setup().await;
        assert!(repo.search_by_skills(vec![" ".to_string()]).await.unwrap().is_empty());
        assert!(transport.statements().is_empty());
    }

    #[test]
    fn test_timestamp_written_with_millis_and_z() {
        let row = job_post("job_1", "com_1", 1).to_row().unwrap();
        assert_eq!(
            row[5],
            json!(format_timestamp(
                &NaiveDate::from_ymd_opt(2024, 5, 1)
                    .unwrap()
                    .and_hms_milli_opt(9, 15, 0, 250)
                    .unwrap()
            ))
        );
        assert_eq!(row[5], json!("2024-05-01T09:15:00.250Z"));
        assert_eq!(row[8], Value::Null);
    }
}
