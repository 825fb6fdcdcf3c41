use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::entities::{DatabaseHealthStatus, HealthStatus},
};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    /// Round-trip latency of a trivial query, in milliseconds.
    fn ping(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = HealthStatus> + Send;

    fn readiness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;
}
