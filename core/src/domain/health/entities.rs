use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Ok,
    /// The process is up but the database is unreachable.
    Degraded,
}

pub const SERVICE_NAME: &str = "shelflife";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthStatus {
    pub service: String,
    pub status: HealthState,
    pub database: DatabaseHealthStatus,
    pub timestamp: DateTime<Utc>,
}
