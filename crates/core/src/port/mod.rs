// Port Layer - Interfaces for external dependencies

pub mod company_repository;
pub mod id_provider; // For deterministic testing
pub mod job_post_repository;
pub mod job_post_skill_repository;
pub mod skill_tag_repository;
pub mod time_provider;
pub mod user_repository;

// Re-exports
pub use company_repository::CompanyRepository;
pub use id_provider::{IdProvider, SortableIdProvider};
pub use job_post_repository::JobPostRepository;
pub use job_post_skill_repository::JobPostSkillRepository;
pub use skill_tag_repository::SkillTagRepository;
pub use time_provider::{SystemTimeProvider, TimeProvider};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use company_repository::MockCompanyRepository;
#[cfg(test)]
pub use job_post_repository::MockJobPostRepository;
#[cfg(test)]
pub use job_post_skill_repository::MockJobPostSkillRepository;
#[cfg(test)]
pub use skill_tag_repository::MockSkillTagRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
