//! Modal form layer
//!
//! `FormKind` says which modal is open and supplies its fields, rule table
//! and payload; `FormController` runs the shared editing and submit
//! lifecycle on top of it.

mod controller;
mod equipment_form;
mod field;
mod form_kind;
mod helpers;
mod maintenance_form;
mod schedule_form;
mod technician_form;
mod user_form;

pub use controller::{Form, FormController, ModalPhase, SubmitBlocked};
pub use field::{FieldKind, FieldSpec, FieldVisualState, SelectOption};
pub use form_kind::{FormContext, FormKind};
