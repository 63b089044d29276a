// Company Service

use crate::application::dto::CompanyDto;
use crate::application::resolve_id;
use crate::application::validation::Validate;
use crate::error::{AppError, Result};
use crate::port::id_provider::prefix;
use crate::port::{CompanyRepository, IdProvider};
use std::sync::Arc;

pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
    ids: Arc<dyn IdProvider>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>, ids: Arc<dyn IdProvider>) -> Self {
        Self { repo, ids }
    }

    pub async fn create_table(&self) -> Result<()> {
        self.repo.create_table().await
    }

    pub async fn find_all(&self) -> Result<Vec<CompanyDto>> {
        let companies = self.repo.find_all().await?;
        Ok(companies.into_iter().map(CompanyDto::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<CompanyDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(CompanyDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Company {} not found", id)))
    }

    /// Returns the id of the stored company
    pub async fn create(&self, dto: CompanyDto) -> Result<String> {
        dto.validate()?;
        let id = resolve_id(dto.id.clone(), prefix::COMPANY, self.ids.as_ref());
        self.repo.save_all(vec![dto.into_record(id.clone())]).await?;
        Ok(id)
    }

    pub async fn create_all(&self, dtos: Vec<CompanyDto>) -> Result<()> {
        let mut records = Vec::with_capacity(dtos.len());
        for dto in dtos {
            dto.validate()?;
            let id = resolve_id(dto.id.clone(), prefix::COMPANY, self.ids.as_ref());
            records.push(dto.into_record(id));
        }
        if records.is_empty() {
            return Ok(());
        }
        self.repo.save_all(records).await
    }

    /// Full-record replace
    pub async fn update(&self, id: &str, dto: CompanyDto) -> Result<()> {
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
