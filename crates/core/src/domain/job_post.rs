// Job Post Domain Model

use crate::domain::enums::{JobPostType, WorkModel};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Job post ID (prefixed, e.g. `job_...`)
pub type JobPostId = String;

/// A job posting. `company_id` is a back-reference only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPost {
    pub id: JobPostId,
    pub title: String,
    pub description: String,
    pub job_type: JobPostType,
    pub maximum_monthly_salary: f64,

    /// Naive wall-clock time, stored with a `Z` marker
    pub date_posted: NaiveDateTime,
    pub company_id: String,
    pub work_model: WorkModel,
    pub location: Option<String>,
    pub apply_url: Option<String>,
}
