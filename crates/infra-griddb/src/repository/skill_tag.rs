// GridDB SkillTagRepository Implementation

use crate::client::GridDbTransport;
use crate::condition::Condition;
use crate::container::Container;
use crate::row::{RowError, RowMapped, RowReader, RowWriter};
use crate::schema::ColumnSpec;
use crate::wire::AcquireRowsRequest;
use async_trait::async_trait;
use jobboard_core::domain::SkillTag;
use jobboard_core::error::Result;
use jobboard_core::port::SkillTagRepository;
use std::sync::Arc;

const BY_NAME: &str = "name ASC";

impl RowMapped for SkillTag {
    const CONTAINER: &'static str = "JBSkillTag";
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::string("id").indexed(),
        ColumnSpec::string("name").indexed(),
    ];

    fn write_row(&self, row: &mut RowWriter<'_>) -> Result<()> {
        row.string("id", &self.id)?.string("name", &self.name)?;
        Ok(())
    }

    fn read_row(row: &mut RowReader<'_>) -> std::result::Result<Self, RowError> {
        Ok(SkillTag {
            id: row.string("id")?,
            name: row.string("name")?,
        })
    }
}

pub struct GridDbSkillTagRepository {
    container: Container<SkillTag>,
}

impl GridDbSkillTagRepository {
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
impl SkillTagRepository for GridDbSkillTagRepository {
    async fn create_table(&self) -> Result<()> {
        self.container.create_table().await
    }

    async fn save_all(&self, skill_tags: Vec<SkillTag>) -> Result<()> {
        self.container.save_all(&skill_tags).await
    }

    async fn find_all(&self, limit: u64) -> Result<Vec<SkillTag>> {
        self.container
            .find(AcquireRowsRequest::new().limit(limit).sort(BY_NAME))
            .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<SkillTag>> {
        self.container.find_one(Condition::eq("id", id)).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<SkillTag>> {
        self.container.find_one(Condition::eq("name", name)).await
    }

    async fn search_by_name(&self, pattern: &str) -> Result<Vec<SkillTag>> {
        self.container
            .find(
                AcquireRowsRequest::new()
                    .condition(Condition::contains("name", pattern))
                    .sort(BY_NAME),
            )
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.container.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (Arc<crate::testing::InMemoryTransport>, GridDbSkillTagRepository) {
        let transport = Arc::new(crate::testing::InMemoryTransport::new());
        let repo = GridDbSkillTagRepository::new(transport.clone());
        repo.create_table().await.unwrap();
        repo.save_all(vec![
            SkillTag::new("skt_1", "rust"),
            SkillTag::new("skt_2", "java"),
            SkillTag::new("skt_3", "javascript"),
            SkillTag::new("skt_4", "o'caml"),
        ])
        .await
        .unwrap();
        (transport, repo)
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_name_with_limit() {
        let (transport, repo) = seeded().await;

        let names: Vec<String> = repo
            .find_all(2)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["java", "javascript"]);

        let (_, request) = transport.last_acquire().unwrap();
        assert_eq!(request.sort, "name ASC");
        assert_eq!(request.limit, 2);
    }

    #[tokio::test]
    async fn test_search_by_name_escapes_pattern() {
        let (transport, repo) = seeded().await;

        let found = repo.search_by_name("java").await.unwrap();
        assert_eq!(found.len(), 2);

        let found = repo.search_by_name("o'ca").await.unwrap();
        assert_eq!(found, vec![SkillTag::new("skt_4", "o'caml")]);
        let (_, request) = transport.last_acquire().unwrap();
        assert_eq!(request.condition, "name LIKE '%o''ca%'");
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let (_, repo) = seeded().await;
        assert_eq!(
            repo.find_by_name("rust").await.unwrap().map(|t| t.id),
            Some("skt_1".to_string())
        );
        assert_eq!(repo.find_by_name("cobol").await.unwrap(), None);
    }
}
