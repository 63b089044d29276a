// GridDB-backed repositories, one container per record type

mod company;
mod job_post;
mod job_post_skill;
mod skill_tag;
mod user;

pub use company::GridDbCompanyRepository;
pub use job_post::GridDbJobPostRepository;
pub use job_post_skill::GridDbJobPostSkillRepository;
pub use skill_tag::GridDbSkillTagRepository;
pub use user::GridDbUserRepository;
