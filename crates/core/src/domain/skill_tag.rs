// Skill Tag Domain Model

use serde::{Deserialize, Serialize};

/// Skill tag ID (prefixed, e.g. `skt_...`)
pub type SkillTagId = String;

/// A named skill that can be attached to job postings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTag {
    pub id: SkillTagId,
    pub name: String,
}

impl SkillTag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
