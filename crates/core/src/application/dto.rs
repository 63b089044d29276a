// Public DTOs exchanged with callers of the service facades

use crate::domain::{
    Company, JobPost, JobPostSkill, JobPostType, SkillTag, User, UserRole, WorkModel,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostDto {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub job_type: JobPostType,
    pub maximum_monthly_salary: f64,
    pub date_posted: NaiveDateTime,
    pub company_id: String,
    pub work_model: WorkModel,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub apply_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostSkillDto {
    #[serde(default)]
    pub id: Option<String>,
    pub job_post_id: String,
    pub skill_tag_id: String,
    #[serde(default)]
    pub skill_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTagDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub company_id: Option<String>,
}

// Record -> DTO

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            id: Some(company.id),
            name: company.name,
            website_url: Some(company.website_url),
            description: Some(company.description),
        }
    }
}

impl From<JobPost> for JobPostDto {
    fn from(job_post: JobPost) -> Self {
        Self {
            id: Some(job_post.id),
            title: job_post.title,
            description: job_post.description,
            job_type: job_post.job_type,
            maximum_monthly_salary: job_post.maximum_monthly_salary,
            date_posted: job_post.date_posted,
            company_id: job_post.company_id,
            work_model: job_post.work_model,
            location: job_post.location,
            apply_url: job_post.apply_url,
        }
    }
}

impl From<JobPostSkill> for JobPostSkillDto {
    fn from(link: JobPostSkill) -> Self {
        Self {
            id: Some(link.id),
            job_post_id: link.job_post_id,
            skill_tag_id: link.skill_tag_id,
            skill_name: link.skill_name,
        }
    }
}

impl From<SkillTag> for SkillTagDto {
    fn from(skill_tag: SkillTag) -> Self {
        Self {
            id: Some(skill_tag.id),
            name: skill_tag.name,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            company_id: user.company_id,
        }
    }
}

// DTO -> Record (id resolved by the facade)

impl CompanyDto {
    pub(crate) fn into_record(self, id: String) -> Company {
        Company {
            id,
            name: self.name,
            website_url: self.website_url.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        }
    }
}

impl JobPostDto {
    pub(crate) fn into_record(self, id: String) -> JobPost {
        JobPost {
            id,
            title: self.title,
            description: self.description,
            job_type: self.job_type,
            maximum_monthly_salary: self.maximum_monthly_salary,
            date_posted: self.date_posted,
            company_id: self.company_id,
            work_model: self.work_model,
            location: self.location,
            apply_url: self.apply_url,
        }
    }
}

impl JobPostSkillDto {
    pub(crate) fn into_record(self, id: String) -> JobPostSkill {
        JobPostSkill::new(id, self.job_post_id, self.skill_tag_id)
    }
}

impl SkillTagDto {
    pub(crate) fn into_record(self, id: String) -> SkillTag {
        SkillTag::new(id, self.name)
    }
}

impl UserDto {
    pub(crate) fn into_record(self, id: String) -> User {
        User {
            id,
            email: self.email,
            full_name: self.full_name,
            role: self.role,
            company_id: self.company_id.filter(|c| !c.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_post_dto_uses_camel_case_and_stored_tokens() {
        let dto: JobPostDto = serde_json::from_value(json!({
            "title": "Rust Engineer",
            "description": "Build things",
            "jobType": "FULL_TIME",
            "maximumMonthlySalary": 9000.0,
            "datePosted": "2024-03-01T09:30:00",
            "companyId": "com_1",
            "workModel": "REMOTE"
        }))
        .unwrap();

        assert_eq!(dto.id, None);
        assert_eq!(dto.job_type, JobPostType::FullTime);
        assert_eq!(dto.work_model, WorkModel::Remote);
        assert_eq!(dto.location, None);
    }

    #[test]
    fn test_blank_company_id_is_dropped_for_users() {
        let dto = UserDto {
            id: None,
            email: "a@a.com".to_string(),
            full_name: "A".to_string(),
            role: UserRole::Applicant,
            company_id: Some("  ".to_string()),
        };
        let user = dto.into_record("usr_1".to_string());
        assert_eq!(user.company_id, None);
    }
}
