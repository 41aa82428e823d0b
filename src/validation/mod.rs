//! Form validation framework
//!
//! - `validators`: pure per-field checks
//! - `rules`: declarative rule tables and `validate_form`
//! - `strength`: password strength estimation

mod rules;
mod strength;
pub mod validators;

pub use rules::{validate_form, FieldRules, FormData, Rule};
pub use strength::{calculate_password_strength, PasswordStrength, Strength};
