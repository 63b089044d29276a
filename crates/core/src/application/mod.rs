// Application Layer - Service facades over the repository ports

pub mod company;
pub mod dto;
pub mod job_post;
pub mod job_post_skill;
pub mod skill_tag;
pub mod user;
pub mod validation;

// Re-exports
pub use company::CompanyService;
pub use dto::{CompanyDto, JobPostDto, JobPostSkillDto, SkillTagDto, UserDto};
pub use job_post::JobPostService;
pub use job_post_skill::JobPostSkillService;
pub use skill_tag::SkillTagService;
pub use user::UserService;
pub use validation::Validate;

use crate::port::IdProvider;

/// Honor a caller-supplied id, otherwise mint a new prefixed one
pub(crate) fn resolve_id(id: Option<String>, prefix: &str, ids: &dyn IdProvider) -> String {
    match id {
        Some(id) if !id.trim().is_empty() => id,
        _ => ids.generate_id(prefix),
    }
}
