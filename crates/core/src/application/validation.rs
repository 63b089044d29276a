// DTO validation rules

use crate::application::dto::{CompanyDto, JobPostDto, JobPostSkillDto, SkillTagDto, UserDto};
use crate::domain::UserRole;
use crate::error::{AppError, Result};

/// Maximum length of short text fields (ids, names, urls)
pub const MAX_FIELD_LEN: usize = 255;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn max_len(field: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if v.chars().count() > MAX_FIELD_LEN => Err(AppError::Validation(format!(
            "{} too long (max {} characters)",
            field, MAX_FIELD_LEN
        ))),
        _ => Ok(()),
    }
}

impl Validate for CompanyDto {
    fn validate(&self) -> Result<()> {
        max_len("id", self.id.as_deref())?;
        required("name", &self.name)?;
        max_len("name", Some(&self.name))?;
        max_len("websiteUrl", self.website_url.as_deref())
    }
}

impl Validate for JobPostDto {
    fn validate(&self) -> Result<()> {
        max_len("id", self.id.as_deref())?;
        required("title", &self.title)?;
        max_len("title", Some(&self.title))?;
        required("description", &self.description)?;
        required("companyId", &self.company_id)?;
        max_len("companyId", Some(&self.company_id))?;
        max_len("location", self.location.as_deref())?;
        max_len("applyUrl", self.apply_url.as_deref())?;

        if !self.maximum_monthly_salary.is_finite() || self.maximum_monthly_salary < 0.0 {
            return Err(AppError::Validation(format!(
                "maximumMonthlySalary out of range: {}",
                self.maximum_monthly_salary
            )));
        }
        Ok(())
    }
}

impl Validate for JobPostSkillDto {
    fn validate(&self) -> Result<()> {
        max_len("id", self.id.as_deref())?;
        required("jobPostId", &self.job_post_id)?;
        max_len("jobPostId", Some(&self.job_post_id))?;
        required("skillTagId", &self.skill_tag_id)?;
        max_len("skillTagId", Some(&self.skill_tag_id))
    }
}

impl Validate for SkillTagDto {
    fn validate(&self) -> Result<()> {
        max_len("id", self.id.as_deref())?;
        required("name", &self.name)?;
        max_len("name", Some(&self.name))
    }
}

impl Validate for UserDto {
    fn validate(&self) -> Result<()> {
        max_len("id", self.id.as_deref())?;
        required("email", &self.email)?;
        max_len("email", Some(&self.email))?;
        required("fullName", &self.full_name)?;
        max_len("fullName", Some(&self.full_name))?;
        max_len("companyId", self.company_id.as_deref())?;

        // Recruiters act on behalf of a company
        if self.role == UserRole::Recruiter
            && self.company_id.as_deref().map_or(true, |c| c.trim().is_empty())
        {
            return Err(AppError::Validation(
                "recruiter must belong to a company".to_string(),
            ));
        }
        Ok(())
    }
}
