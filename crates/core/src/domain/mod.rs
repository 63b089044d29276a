// Domain Layer - Typed records and persisted enumerations

pub mod company;
pub mod enums;
pub mod error;
pub mod job_post;
pub mod job_post_skill;
pub mod skill_tag;
pub mod user;

// Re-exports
pub use company::{Company, CompanyId};
pub use enums::{JobPostType, PersistedEnum, UserRole, WorkModel};
pub use error::DomainError;
pub use job_post::{JobPost, JobPostId};
pub use job_post_skill::{JobPostSkill, JobPostSkillId};
pub use skill_tag::{SkillTag, SkillTagId};
pub use user::{User, UserId};
