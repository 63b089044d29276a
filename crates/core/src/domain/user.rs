// User Domain Model

use crate::domain::enums::UserRole;
use serde::{Deserialize, Serialize};

/// User ID (prefixed, e.g. `usr_...`)
pub type UserId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,

    /// Employer of a recruiter; absent for other roles
    pub company_id: Option<String>,
}
