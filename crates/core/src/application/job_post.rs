// Job Post Service

use crate::application::dto::JobPostDto;
use crate::application::resolve_id;
use crate::application::validation::Validate;
use crate::error::{AppError, Result};
use crate::port::id_provider::prefix;
use crate::port::{IdProvider, JobPostRepository};
use std::sync::Arc;

pub struct JobPostService {
    repo: Arc<dyn JobPostRepository>,
    ids: Arc<dyn IdProvider>,
}

impl JobPostService {
    pub fn new(repo: Arc<dyn JobPostRepository>, ids: Arc<dyn IdProvider>) -> Self {
        Self { repo, ids }
    }

    pub async fn create_table(&self) -> Result<()> {
        self.repo.create_table().await
    }

    /// List job posts, optionally restricted to those requiring a skill
    ///
    /// `search_skill` may hold several comma-separated skill names; a blank
    /// value lists everything.
    pub async fn find_all(&self, search_skill: Option<&str>) -> Result<Vec<JobPostDto>> {
        let skills = search_skill.map(parse_skill_list).unwrap_or_default();
        let job_posts = if skills.is_empty() {
            self.repo.find_all().await?
        } else {
            self.repo.search_by_skills(skills).await?
        };
        Ok(job_posts.into_iter().map(JobPostDto::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<JobPostDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(JobPostDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Job post {} not found", id)))
    }

    pub async fn find_by_company_id(&self, company_id: &str) -> Result<Vec<JobPostDto>> {
        let job_posts = self.repo.find_by_company_id(company_id).await?;
        Ok(job_posts.into_iter().map(JobPostDto::from).collect())
    }

    /// Returns the id of the stored job post
    pub async fn create(&self, dto: JobPostDto) -> Result<String> {
        dto.validate()?;
        let id = resolve_id(dto.id.clone(), prefix::JOB_POST, self.ids.as_ref());
        self.repo.save_all(vec![dto.into_record(id.clone())]).await?;
        Ok(id)
    }

    pub async fn create_all(&self, dtos: Vec<JobPostDto>) -> Result<()> {
        let mut records = Vec::with_capacity(dtos.len());
        for dto in dtos {
            dto.validate()?;
            let id = resolve_id(dto.id.clone(), prefix::JOB_POST, self.ids.as_ref());
            records.push(dto.into_record(id));
        }
        if records.is_empty() {
            return Ok(());
        }
        self.repo.save_all(records).await
    }

    /// Full-record replace
    pub async fn update(&self, id: &str, dto: JobPostDto) -> Result<()> {
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
}

fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
