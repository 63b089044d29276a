// ID Provider Port (for deterministic testing)

/// Identifier prefixes, one per entity
pub mod prefix {
    pub const COMPANY: &str = "com";
    pub const JOB_POST: &str = "job";
    pub const JOB_POST_SKILL: &str = "jps";
    pub const SKILL_TAG: &str = "skt";
    pub const USER: &str = "usr";
}

/// ID provider interface (allows deterministic IDs in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a new unique, prefixed ID (e.g. `job_0192...`)
    fn generate_id(&self, prefix: &str) -> String;
}

/// UUID v7 provider (production)
///
/// v7 ids embed a millisecond timestamp, so ids sort by creation time.
pub struct SortableIdProvider;

impl IdProvider for SortableIdProvider {
    fn generate_id(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, uuid::Uuid::now_v7().simple())
    }
}
