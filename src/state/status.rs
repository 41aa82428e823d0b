//! Status, priority and role mappings between backend values and display labels
//!
//! Each enum is described by exactly one table of
//! `(variant, backend value, display label)` rows. Every conversion in the
//! app goes through these tables.

/// Shared lookups over a mapping table
pub trait Mapped: Copy + PartialEq + Sized + 'static {
    const TABLE: &'static [(Self, &'static str, &'static str)];

    fn backend_value(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(v, _, _)| *v == self)
            .map(|(_, backend, _)| *backend)
            .unwrap_or("")
    }

    fn label(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(v, _, _)| *v == self)
            .map(|(_, _, label)| *label)
            .unwrap_or("")
    }

    fn from_backend(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::TABLE
            .iter()
            .find(|(_, backend, _)| backend.eq_ignore_ascii_case(value))
            .map(|(v, _, _)| *v)
    }

    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::TABLE
            .iter()
            .find(|(_, _, l)| l.eq_ignore_ascii_case(label))
            .map(|(v, _, _)| *v)
    }

    /// Accept either representation; the backend is not consistent about which it sends
    fn parse(value: &str) -> Option<Self> {
        Self::from_backend(value).or_else(|| Self::from_label(value))
    }

    fn all() -> Vec<Self> {
        Self::TABLE.iter().map(|(v, _, _)| *v).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EquipmentStatus {
    #[default]
    Operational,
    UnderMaintenance,
    OutOfService,
    Retired,
}

impl Mapped for EquipmentStatus {
    const TABLE: &'static [(Self, &'static str, &'static str)] = &[
        (Self::Operational, "operational", "Operational"),
        (Self::UnderMaintenance, "maintenance", "Under Maintenance"),
        (Self::OutOfService, "out_of_service", "Out of Service"),
        (Self::Retired, "retired", "Retired"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl Mapped for RequestStatus {
    const TABLE: &'static [(Self, &'static str, &'static str)] = &[
        (Self::Pending, "pending", "Open"),
        (Self::InProgress, "in_progress", "In Progress"),
        (Self::Completed, "completed", "Completed"),
        (Self::Cancelled, "cancelled", "Cancelled"),
    ];
}

impl RequestStatus {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Mapped for Priority {
    const TABLE: &'static [(Self, &'static str, &'static str)] = &[
        (Self::Low, "low", "Low"),
        (Self::Medium, "medium", "Medium"),
        (Self::High, "high", "High"),
        (Self::Critical, "critical", "Critical"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TechnicianStatus {
    #[default]
    Available,
    Busy,
    OffDuty,
}

impl Mapped for TechnicianStatus {
    const TABLE: &'static [(Self, &'static str, &'static str)] = &[
        (Self::Available, "available", "Available"),
        (Self::Busy, "busy", "On Job"),
        (Self::OffDuty, "off_duty", "Off Duty"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    Admin,
    Manager,
    Technician,
    #[default]
    Staff,
}

impl Mapped for UserRole {
    const TABLE: &'static [(Self, &'static str, &'static str)] = &[
        (Self::Admin, "admin", "Administrator"),
        (Self::Manager, "manager", "Manager"),
        (Self::Technician, "technician", "Technician"),
        (Self::Staff, "staff", "Staff"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_label_maps_to_pending() {
        assert_eq!(RequestStatus::from_label("Open"), Some(RequestStatus::Pending));
        assert_eq!(RequestStatus::Pending.backend_value(), "pending");
        assert_eq!(RequestStatus::Pending.label(), "Open");
    }

    #[test]
    fn test_parse_accepts_either_side_case_insensitively() {
        assert_eq!(RequestStatus::parse("IN_PROGRESS"), Some(RequestStatus::InProgress));
        assert_eq!(RequestStatus::parse("in progress"), Some(RequestStatus::InProgress));
        assert_eq!(Priority::parse(" High "), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_tables_round_trip_every_variant() {
        fn check<T: Mapped + std::fmt::Debug>() {
            for v in T::all() {
                assert_eq!(T::from_backend(v.backend_value()), Some(v));
                assert_eq!(T::from_label(v.label()), Some(v));
            }
        }
        check::<EquipmentStatus>();
        check::<RequestStatus>();
        check::<Priority>();
        check::<TechnicianStatus>();
        check::<UserRole>();
    }

    #[test]
    fn test_backend_values_are_unique() {
        let values: Vec<_> = EquipmentStatus::TABLE.iter().map(|(_, b, _)| *b).collect();
        let mut deduped = values.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(values.len(), deduped.len());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::Low < Priority::Medium);
    }

    #[test]
    fn test_is_open() {
        assert!(RequestStatus::Pending.is_open());
        assert!(RequestStatus::InProgress.is_open());
        assert!(!RequestStatus::Completed.is_open());
    }
}
