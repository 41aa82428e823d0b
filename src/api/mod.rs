//! Backend client module for REST communication

mod client;
mod envelope;
mod error;
mod request;
mod traits;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use request::{ApiMethod, ApiRequest, Resource};
pub use traits::ClinicApi;

#[cfg(test)]
pub use traits::MockClinicApi;
