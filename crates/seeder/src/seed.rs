// Container provisioning and demo data

use anyhow::{Context, Result};
use jobboard_core::application::{
    CompanyDto, CompanyService, JobPostDto, JobPostService, JobPostSkillService, SkillTagDto,
    SkillTagService, UserDto, UserService,
};
use jobboard_core::domain::{JobPostType, UserRole, WorkModel};
use jobboard_core::port::{IdProvider, SortableIdProvider, SystemTimeProvider, TimeProvider};
use jobboard_infra_griddb::{
    GridDbCompanyRepository, GridDbJobPostRepository, GridDbJobPostSkillRepository,
    GridDbSkillTagRepository, GridDbTransport, GridDbUserRepository,
};
use std::sync::Arc;
use tracing::info;

const SKILLS_JSON: &str = include_str!("../data/skills.json");

pub const COM_XYZ: &str = "com_xyz";

pub struct Seeder {
    companies: CompanyService,
    users: UserService,
    skill_tags: SkillTagService,
    job_posts: JobPostService,
    job_post_skills: JobPostSkillService,
    clock: Arc<dyn TimeProvider>,
}

impl Seeder {
    pub fn new(transport: Arc<dyn GridDbTransport>) -> Self {
        let ids: Arc<dyn IdProvider> = Arc::new(SortableIdProvider);

        Self {
            companies: CompanyService::new(
                Arc::new(GridDbCompanyRepository::new(transport.clone())),
                ids.clone(),
            ),
            users: UserService::new(
                Arc::new(GridDbUserRepository::new(transport.clone())),
                ids.clone(),
            ),
            skill_tags: SkillTagService::new(
                Arc::new(GridDbSkillTagRepository::new(transport.clone())),
                ids.clone(),
            ),
            job_posts: JobPostService::new(
                Arc::new(GridDbJobPostRepository::new(transport.clone())),
                ids.clone(),
            ),
            job_post_skills: JobPostSkillService::new(
                Arc::new(GridDbJobPostSkillRepository::new(transport)),
                ids,
            ),
            clock: Arc::new(SystemTimeProvider),
        }
    }

    pub async fn run(&self, seed_jobs: bool) -> Result<()> {
        self.provision().await?;
        self.seed_companies().await?;
        self.seed_users().await?;
        self.seed_skill_tags().await?;
        if seed_jobs {
            self.seed_jobs().await?;
        }
        Ok(())
    }

    /// Create all five containers concurrently
    pub async fn provision(&self) -> Result<()> {
        futures::try_join!(
            self.companies.create_table(),
            self.users.create_table(),
            self.skill_tags.create_table(),
            self.job_posts.create_table(),
            self.job_post_skills.create_table(),
        )
        .context("Container provisioning failed")?;

        info!("All containers provisioned");
        Ok(())
    }

    pub async fn seed_companies(&self) -> Result<()> {
        let companies = demo_companies();
        let count = companies.len();
        self.companies
            .create_all(companies)
            .await
            .context("Seeding companies failed")?;
        info!(count, "Companies seeded");
        Ok(())
    }

    /// Users are keyed by generated ids, so existing emails are skipped
    pub async fn seed_users(&self) -> Result<()> {
        for user in demo_users() {
            if self.users.email_exists(&user.email).await? {
                info!(email = %user.email, "User already present");
                continue;
            }
            let email = user.email.clone();
            let id = self
                .users
                .create(user)
                .await
                .with_context(|| format!("Seeding user {} failed", email))?;
            info!(%id, %email, "User seeded");
        }
        Ok(())
    }

    pub async fn seed_skill_tags(&self) -> Result<()> {
        let skill_tags = skill_tags()?;
        let count = skill_tags.len();
        self.skill_tags
            .create_all(skill_tags)
            .await
            .context("Seeding skill tags failed")?;
        info!(count, "Skill tags seeded");
        Ok(())
    }

    pub async fn seed_jobs(&self) -> Result<()> {
        let jobs = demo_jobs(self.clock.as_ref());
        let count = jobs.len();
        self.job_posts
            .create_all(jobs)
            .await
            .context("Seeding job posts failed")?;

        for (job_post_id, skill_tag_ids) in demo_job_skills() {
            let skill_tag_ids: Vec<String> = skill_tag_ids.iter().map(|s| s.to_string()).collect();
            self.job_post_skills
                .replace_skills_for_job_post(job_post_id, &skill_tag_ids)
                .await
                .with_context(|| format!("Attaching skills to {} failed", job_post_id))?;
        }

        info!(count, "Job posts seeded");
        Ok(())
    }
}

pub fn skill_tags() -> Result<Vec<SkillTagDto>> {
    serde_json::from_str(SKILLS_JSON).context("Embedded skills.json is invalid")
}

fn company(id: &str, name: &str, website_url: &str, description: &str) -> CompanyDto {
    CompanyDto {
        id: Some(id.to_string()),
        name: name.to_string(),
        website_url: Some(website_url.to_string()),
        description: Some(description.to_string()),
    }
}

pub fn demo_companies() -> Vec<CompanyDto> {
    vec![
        company(
            "com_0mrcfv5xnafc5",
            "Default Company",
            "www.google.com",
            "A technology blog publisher",
        ),
        company(
            "com_0mrcfv6c1ad1x",
            "Sister Company",
            "www.bing.com",
            "Another technology blog publisher",
        ),
        company(
            COM_XYZ,
            "The XYZ Company",
            "www.xyz.com",
            "The XYZ Company is a fictional company used for demonstration purposes.",
        ),
    ]
}

pub fn demo_users() -> Vec<UserDto> {
    vec![
        UserDto {
            id: None,
            email: "admin@jb.com".to_string(),
            full_name: "JB Administrator".to_string(),
            role: UserRole::Admin,
            company_id: None,
        },
        UserDto {
            id: None,
            email: "a@a.com".to_string(),
            full_name: "Mr. A A".to_string(),
            role: UserRole::Applicant,
            company_id: None,
        },
    ]
}

pub fn demo_jobs(clock: &dyn TimeProvider) -> Vec<JobPostDto> {
    let now = clock.now();
    vec![
        JobPostDto {
            id: Some("job_x0123".to_string()),
            title: "Senior Software Engineer (Java)".to_string(),
            description: "Write efficient Java services on top of distributed databases, \
                          work with streaming platforms such as Kafka and own features \
                          from design to production."
                .to_string(),
            job_type: JobPostType::FullTime,
            maximum_monthly_salary: 25000.0,
            date_posted: now,
            company_id: COM_XYZ.to_string(),
            work_model: WorkModel::Onsite,
            location: Some("Amsterdam".to_string()),
            apply_url: Some("https://job-boards.greenhouse.io/adyen/jobs/7137129?".to_string()),
        },
        JobPostDto {
            id: Some("job_x345".to_string()),
            title: "AI Software Engineer (Remote)".to_string(),
            description: "Build and deploy machine learning models and pipelines in Python \
                          with frameworks like TensorFlow or PyTorch."
                .to_string(),
            job_type: JobPostType::FullTime,
            maximum_monthly_salary: 25000.0,
            date_posted: now,
            company_id: COM_XYZ.to_string(),
            work_model: WorkModel::Remote,
            location: Some("Indonesia".to_string()),
            apply_url: Some(
                "https://jobs.ashbyhq.com/bjakcareer/7e13c3b2-3aa7-4bf3-a76e-2331f349ccc9"
                    .to_string(),
            ),
        },
    ]
}

fn demo_job_skills() -> [(&'static str, &'static [&'static str]); 2] {
    [
        ("job_x0123", &["skt_java", "skt_kafka", "skt_redis", "skt_cassandra"]),
        ("job_x345", &["skt_python", "skt_tensorflow", "skt_pytorch", "skt_machine_learning"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::application::Validate;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_skills_are_unique() {
        let skills = skill_tags().unwrap();
        assert!(!skills.is_empty());

        let ids: HashSet<_> = skills.iter().map(|s| s.id.clone()).collect();
        let names: HashSet<_> = skills.iter().map(|s| s.name.to_lowercase()).collect();
        assert_eq!(ids.len(), skills.len());
        assert_eq!(names.len(), skills.len());
        assert!(skills.iter().all(|s| s.validate().is_ok()));
    }

    #[test]
    fn test_demo_data_is_valid() {
        assert!(demo_companies().iter().all(|c| c.validate().is_ok()));
        assert!(demo_users().iter().all(|u| u.validate().is_ok()));
        assert!(demo_jobs(&SystemTimeProvider).iter().all(|j| j.validate().is_ok()));
    }

    #[test]
    fn test_job_skills_reference_embedded_skills() {
        let ids: HashSet<String> = skill_tags()
            .unwrap()
            .into_iter()
            .filter_map(|s| s.id)
            .collect();
        for (_, skill_tag_ids) in demo_job_skills() {
            for id in skill_tag_ids {
                assert!(ids.contains(*id), "{} missing from skills.json", id);
            }
        }
    }
}
