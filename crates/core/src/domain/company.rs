// Company Domain Model

use serde::{Deserialize, Serialize};

/// Company ID (prefixed, e.g. `com_...`)
pub type CompanyId = String;

/// Employer that owns job postings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub website_url: String,
    pub description: String,
}

impl Company {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        website_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            website_url: website_url.into(),
            description: description.into(),
        }
    }
}
