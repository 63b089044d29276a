// User Service

use crate::application::dto::UserDto;
use crate::application::resolve_id;
use crate::application::validation::Validate;
use crate::error::{AppError, Result};
use crate::port::id_provider::prefix;
use crate::port::{IdProvider, UserRepository};
use std::sync::Arc;

pub struct UserService {
    repo: Arc<dyn UserRepository>,
    ids: Arc<dyn IdProvider>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, ids: Arc<dyn IdProvider>) -> Self {
        Self { repo, ids }
    }

    pub async fn create_table(&self) -> Result<()> {
        self.repo.create_table().await
    }

    pub async fn find_all(&self) -> Result<Vec<UserDto>> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<UserDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserDto>> {
        Ok(self.repo.find_by_email(email).await?.map(UserDto::from))
    }

    /// Returns the id of the stored user
    pub async fn create(&self, dto: UserDto) -> Result<String> {
        dto.validate()?;
        let id = resolve_id(dto.id.clone(), prefix::USER, self.ids.as_ref());
        self.repo.save_all(vec![dto.into_record(id.clone())]).await?;
        Ok(id)
    }

    pub async fn create_all(&self, dtos: Vec<UserDto>) -> Result<()> {
        let mut records = Vec::with_capacity(dtos.len());
        for dto in dtos {
            dto.validate()?;
            let id = resolve_id(dto.id.clone(), prefix::USER, self.ids.as_ref());
            records.push(dto.into_record(id));
        }
        if records.is_empty() {
            return Ok(());
        }
        self.repo.save_all(records).await
    }

    /// Full-record replace
    pub async fn update(&self, id: &str, dto: UserDto) -> Result<()> {
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

    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        Ok(self.repo.find_by_email(email).await?.is_some())
    }
}
