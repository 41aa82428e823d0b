//! Request descriptors for create/update calls

use serde_json::Value;

/// Backend collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Equipment,
    Technicians,
    MaintenanceRequests,
    ScheduledMaintenance,
    Users,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Equipment => "equipment",
            Self::Technicians => "technicians",
            Self::MaintenanceRequests => "maintenance-requests",
            Self::ScheduledMaintenance => "scheduled-maintenance",
            Self::Users => "users",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Post,
    Put,
}

/// A single create or update call produced by a form submit
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: ApiMethod,
    pub resource: Resource,
    /// Record id for updates
    pub id: Option<String>,
    pub body: Value,
}

impl ApiRequest {
    pub fn create(resource: Resource, body: Value) -> Self {
        Self {
            method: ApiMethod::Post,
            resource,
            id: None,
            body,
        }
    }

    pub fn update(resource: Resource, id: impl Into<String>, body: Value) -> Self {
        Self {
            method: ApiMethod::Put,
            resource,
            id: Some(id.into()),
            body,
        }
    }

    /// Path relative to the API base URL
    pub fn path(&self) -> String {
        match &self.id {
            Some(id) => format!("{}/{}", self.resource.path(), id),
            None => self.resource.path().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_path() {
        let req = ApiRequest::create(Resource::MaintenanceRequests, json!({}));
        assert_eq!(req.method, ApiMethod::Post);
        assert_eq!(req.path(), "maintenance-requests");
    }

    #[test]
    fn test_update_path() {
        let req = ApiRequest::update(Resource::Users, "u42", json!({}));
        assert_eq!(req.method, ApiMethod::Put);
        assert_eq!(req.path(), "users/u42");
    }
}
