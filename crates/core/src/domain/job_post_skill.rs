// Job Post <-> Skill Tag association

use serde::{Deserialize, Serialize};

/// Job post skill ID (prefixed, e.g. `jps_...`)
pub type JobPostSkillId = String;

/// Join row linking a job post to a skill tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPostSkill {
    pub id: JobPostSkillId,
    pub job_post_id: String,
    pub skill_tag_id: String,

    /// Resolved skill name. Only populated by join queries, never persisted.
    pub skill_name: Option<String>,
}

impl JobPostSkill {
    pub fn new(
        id: impl Into<String>,
        job_post_id: impl Into<String>,
        skill_tag_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            job_post_id: job_post_id.into(),
            skill_tag_id: skill_tag_id.into(),
            skill_name: None,
        }
    }

    pub fn with_skill_name(mut self, name: impl Into<String>) -> Self {
        self.skill_name = Some(name.into());
        self
    }
}
