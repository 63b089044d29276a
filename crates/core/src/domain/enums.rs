// Persisted Enumerations
//
// Stored tokens are fixed by the tables below, not by variant names.
// Renaming a variant must leave its token untouched.

use crate::domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Enum with an explicit, bidirectional token table for persistence
pub trait PersistedEnum: Sized + Copy + PartialEq + 'static {
    /// Human readable kind, used in error messages
    const KIND: &'static str;

    /// Variant <-> stored token table
    const TOKENS: &'static [(Self, &'static str)];

    fn token(self) -> &'static str {
        Self::TOKENS
            .iter()
            .find(|(variant, _)| *variant == self)
            .map(|(_, token)| *token)
            .unwrap_or("")
    }

    fn from_token(token: &str) -> Result<Self> {
        Self::TOKENS
            .iter()
            .find(|(_, t)| *t == token)
            .map(|(variant, _)| *variant)
            .ok_or_else(|| DomainError::UnknownToken {
                kind: Self::KIND,
                token: token.to_string(),
            })
    }
}

/// Employment type of a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobPostType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobPostType {
    pub fn label(self) -> &'static str {
        match self {
            JobPostType::FullTime => "Full Time",
            JobPostType::PartTime => "Part Time",
            JobPostType::Contract => "Contract",
            JobPostType::Internship => "Internship",
        }
    }
}

impl PersistedEnum for JobPostType {
    const KIND: &'static str = "job post type";
    const TOKENS: &'static [(Self, &'static str)] = &[
        (JobPostType::FullTime, "FULL_TIME"),
        (JobPostType::PartTime, "PART_TIME"),
        (JobPostType::Contract, "CONTRACT"),
        (JobPostType::Internship, "INTERNSHIP"),
    ];
}

/// Where the work happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkModel {
    Onsite,
    Remote,
    Hybrid,
}

impl PersistedEnum for WorkModel {
    const KIND: &'static str = "work model";
    const TOKENS: &'static [(Self, &'static str)] = &[
        (WorkModel::Onsite, "ONSITE"),
        (WorkModel::Remote, "REMOTE"),
        (WorkModel::Hybrid, "HYBRID"),
    ];
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Recruiter,
    Admin,
    Applicant,
}

impl UserRole {
    /// Authority name as seen by the access-control layer
    pub fn authority(self) -> String {
        format!("ROLE_{}", self.token())
    }
}

impl PersistedEnum for UserRole {
    const KIND: &'static str = "user role";
    const TOKENS: &'static [(Self, &'static str)] = &[
        (UserRole::Recruiter, "RECRUITER"),
        (UserRole::Admin, "ADMIN"),
        (UserRole::Applicant, "APPLICANT"),
    ];
}

impl std::fmt::Display for JobPostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::fmt::Display for WorkModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
