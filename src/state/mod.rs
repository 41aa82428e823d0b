//! Application state module

mod app_state;
mod forms;
pub mod ids;
mod records;
pub mod status;

pub use app_state::*;
pub use forms::*;
pub use records::*;
pub use status::{EquipmentStatus, Mapped, Priority, RequestStatus, TechnicianStatus, UserRole};
