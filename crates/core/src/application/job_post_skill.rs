// Job Post Skill Service

use crate::application::dto::JobPostSkillDto;
use crate::application::resolve_id;
use crate::application::validation::Validate;
use crate::domain::JobPostSkill;
use crate::error::{AppError, Result};
use crate::port::id_provider::prefix;
use crate::port::{IdProvider, JobPostSkillRepository};
use std::sync::Arc;
use tracing::info;

pub struct JobPostSkillService {
    repo: Arc<dyn JobPostSkillRepository>,
    ids: Arc<dyn IdProvider>,
}

impl JobPostSkillService {
    pub fn new(repo: Arc<dyn JobPostSkillRepository>, ids: Arc<dyn IdProvider>) -> Self {
        Self { repo, ids }
    }

    pub async fn create_table(&self) -> Result<()> {
        self.repo.create_table().await
    }

    pub async fn find_all(&self) -> Result<Vec<JobPostSkillDto>> {
        let links = self.repo.find_all().await?;
        Ok(links.into_iter().map(JobPostSkillDto::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<JobPostSkillDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(JobPostSkillDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Job post skill {} not found", id)))
    }

    /// Skills of a job post, with skill names resolved
    pub async fn find_by_job_post_id(&self, job_post_id: &str) -> Result<Vec<JobPostSkillDto>> {
        let links = self.repo.find_by_job_post_id(job_post_id).await?;
        Ok(links.into_iter().map(JobPostSkillDto::from).collect())
    }

    pub async fn find_by_skill_tag_id(&self, skill_tag_id: &str) -> Result<Vec<JobPostSkillDto>> {
        let links = self.repo.find_by_skill_tag_id(skill_tag_id).await?;
        Ok(links.into_iter().map(JobPostSkillDto::from).collect())
    }

    /// Returns the id of the stored link
    pub async fn create(&self, dto: JobPostSkillDto) -> Result<String> {
        dto.validate()?;
        let id = resolve_id(dto.id.clone(), prefix::JOB_POST_SKILL, self.ids.as_ref());
        self.repo.save_all(vec![dto.into_record(id.clone())]).await?;
        Ok(id)
    }

    /// Stored links of a job post, without name resolution
    pub async fn find_links_by_job_post_id(
        &self,
        job_post_id: &str,
    ) -> Result<Vec<JobPostSkillDto>> {
        let links = self.repo.find_links_by_job_post_id(job_post_id).await?;
        Ok(links.into_iter().map(JobPostSkillDto::from).collect())
    }

    pub async fn create_all(&self, dtos: Vec<JobPostSkillDto>) -> Result<()> {
        let records = self.to_records(dtos)?;
        if records.is_empty() {
            return Ok(());
        }
        self.repo.save_all(records).await
    }

    pub async fn create_skills_for_job_post(
        &self,
        job_post_id: &str,
        skill_tag_ids: &[String],
    ) -> Result<()> {
        self.create_all(link_dtos(job_post_id, skill_tag_ids)).await
    }

    /// Drop every link of the job post, then attach the given skills
    ///
    /// The new links are validated before anything is deleted. Not atomic: a
    /// failed save after the delete leaves the job post without skills.
    pub async fn replace_skills_for_job_post(
        &self,
        job_post_id: &str,
        skill_tag_ids: &[String],
    ) -> Result<()> {
        let records = self.to_records(link_dtos(job_post_id, skill_tag_ids))?;
        let removed = self.repo.delete_by_job_post_id(job_post_id).await?;
        info!(job_post_id, removed, added = records.len(), "Replacing job post skills");
        if records.is_empty() {
            return Ok(());
        }
        self.repo.save_all(records).await
    }

    /// Full-record replace
    pub async fn update(&self, id: &str, dto: JobPostSkillDto) -> Result<()> {
        dto.validate()?;
        self.repo.save_all(vec![dto.into_record(id.to_string())]).await
    }

    /// Deletion is not supported by the store adapter yet
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repo.delete(id).await
    }

    pub async fn delete_by_job_post_id(&self, job_post_id: &str) -> Result<u64> {
        self.repo.delete_by_job_post_id(job_post_id).await
    }

    pub async fn delete_by_skill_tag_id(&self, skill_tag_id: &str) -> Result<u64> {
        self.repo.delete_by_skill_tag_id(skill_tag_id).await
    }

    pub async fn id_exists(&self, id: &str) -> Result<bool> {
        Ok(self.repo.find_by_id(id).await?.is_some())
    }

    /// Validate every dto and assign ids; fails before any write
    fn to_records(&self, dtos: Vec<JobPostSkillDto>) -> Result<Vec<JobPostSkill>> {
        dtos.into_iter()
            .map(|dto| {
                dto.validate()?;
                let id = resolve_id(dto.id.clone(), prefix::JOB_POST_SKILL, self.ids.as_ref());
                Ok(dto.into_record(id))
            })
            .collect()
    }
}

fn link_dtos(job_post_id: &str, skill_tag_ids: &[String]) -> Vec<JobPostSkillDto> {
    skill_tag_ids
        .iter()
        .map(|skill_tag_id| JobPostSkillDto {
            id: None,
            job_post_id: job_post_id.to_string(),
            skill_tag_id: skill_tag_id.clone(),
            skill_name: None,
        })
        .collect()
}
