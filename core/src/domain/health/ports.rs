use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::TableHealthStatus};

pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = Result<TableHealthStatus, CoreError>> + Send;
}
