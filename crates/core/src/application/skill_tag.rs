// Skill Tag Service

use crate::application::dto::SkillTagDto;
use crate::application::resolve_id;
use crate::application::validation::Validate;
use crate::error::{AppError, Result};
use crate::port::id_provider::prefix;
use crate::port::{IdProvider, SkillTagRepository};
use std::sync::Arc;

/// Page size used when the caller does not pick one
pub const DEFAULT_LIMIT: u64 = 50;

pub struct SkillTagService {
    repo: Arc<dyn SkillTagRepository>,
    ids: Arc<dyn IdProvider>,
}

impl SkillTagService {
    pub fn new(repo: Arc<dyn SkillTagRepository>, ids: Arc<dyn IdProvider>) -> Self {
        Self { repo, ids }
    }

    pub async fn create_table(&self) -> Result<()> {
        self.repo.create_table().await
    }

    pub async fn find_all(&self, limit: Option<u64>) -> Result<Vec<SkillTagDto>> {
        let skill_tags = self.repo.find_all(limit.unwrap_or(DEFAULT_LIMIT)).await?;
        Ok(skill_tags.into_iter().map(SkillTagDto::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<SkillTagDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(SkillTagDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Skill tag {} not found", id)))
    }

    pub async fn search_by_name(&self, pattern: &str) -> Result<Vec<SkillTagDto>> {
        let skill_tags = self.repo.search_by_name(pattern).await?;
        Ok(skill_tags.into_iter().map(SkillTagDto::from).collect())
    }

    /// Returns the id of the stored skill tag
    pub async fn create(&self, dto: SkillTagDto) -> Result<String> {
        dto.validate()?;
        let id = resolve_id(dto.id.clone(), prefix::SKILL_TAG, self.ids.as_ref());
        self.repo.save_all(vec![dto.into_record(id.clone())]).await?;
        Ok(id)
    }

    pub async fn create_all(&self, dtos: Vec<SkillTagDto>) -> Result<()> {
        let mut records = Vec::with_capacity(dtos.len());
        for dto in dtos {
            dto.validate()?;
            let id = resolve_id(dto.id.clone(), prefix::SKILL_TAG, self.ids.as_ref());
            records.push(dto.into_record(id));
        }
        if records.is_empty() {
            return Ok(());
        }
        self.repo.save_all(records).await
    }

    /// Full-record replace
    pub async fn update(&self, id: &str, dto: SkillTagDto) -> Result<()> {
        dto.validate()?;
        self.repo.save_all(vec![dto.into_record(id.to_string())]).await
    }

    /// Deletion is not supported by the store adapter yet
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repo.delete(id).await
    }

    pub async fn id_exists(&self, id: &str) -> Result<bool> {
        Ok(self.repo.find_by_id(id).await?.is_some())
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool> {
        Ok(self.repo.find_by_name(name).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::SequentialIds;
    use crate::domain::SkillTag;
    use crate::port::MockSkillTagRepository;

    fn service(repo: MockSkillTagRepository) -> SkillTagService {
        SkillTagService::new(Arc::new(repo), Arc::new(SequentialIds::new()))
    }

    #[test]
    fn test_find_all_defaults_limit() {
        let mut repo = MockSkillTagRepository::new();
        repo.expect_find_all()
            .withf(|limit: &u64| *limit == DEFAULT_LIMIT)
            .times(1)
            .returning(|_| Ok(vec![SkillTag::new("skt_1", "java")]));

        let tags = tokio_test::block_on(service(repo).find_all(None)).unwrap();
        assert_eq!(tags[0].name, "java");
    }

    #[tokio::test]
    async fn test_create_all_mixes_supplied_and_generated_ids() {
        let mut repo = MockSkillTagRepository::new();
        repo.expect_save_all()
            .withf(|tags: &Vec<SkillTag>| {
                tags.iter().map(|t| t.id.as_str()).collect::<Vec<_>>() == vec!["skt_java", "skt_1"]
            })
            .times(1)
            .returning(|_| Ok(()));

        service(repo)
            .create_all(vec![
                SkillTagDto {
                    id: Some("skt_java".to_string()),
                    name: "java".to_string(),
                },
                SkillTagDto {
                    id: None,
                    name: "rust".to_string(),
                },
            ])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name_without_calling_repo() {
        let repo = MockSkillTagRepository::new();
        let err = service(repo)
            .create(SkillTagDto {
                id: None,
                name: "".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_name_exists_false_when_absent() {
        let mut repo = MockSkillTagRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        assert!(!service(repo).name_exists("cobol").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_goes_through_repository() {
        let mut repo = MockSkillTagRepository::new();
        repo.expect_delete()
            .withf(|id: &str| id == "skt_1")
            .times(1)
            .returning(|id| Err(AppError::NotImplemented(format!("delete {}", id))));

        let err = service(repo).delete("skt_1").await.unwrap_err();
        assert!(matches!(err, AppError::NotImplemented(_)));
    }
}
