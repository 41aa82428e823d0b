//! Trait abstraction for the backend client to enable mocking in tests

use super::error::ApiError;
use super::request::ApiRequest;
use crate::state::{Equipment, MaintenanceRequest, Technician, User};
use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Backend operations used by the app
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClinicApi: Send + Sync {
    async fn list_equipment(&self) -> Result<Vec<Equipment>, ApiError>;

    async fn list_technicians(&self) -> Result<Vec<Technician>, ApiError>;

    async fn list_maintenance_requests(&self) -> Result<Vec<MaintenanceRequest>, ApiError>;

    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// Send a create/update request. Resolves to `ApiError::Cancelled` as
    /// soon as `cancel` fires.
    async fn send(&self, request: ApiRequest, cancel: CancellationToken)
        -> Result<Value, ApiError>;
}
