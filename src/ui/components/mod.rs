//! Reusable UI components

mod button;
mod dialog;
mod strength_meter;
mod validated_input;

pub use button::{render_action_button, render_sidebar_button, BUTTON_HEIGHT};
pub use dialog::{centered_rect, render_error_dialog};
pub use strength_meter::{render_strength_meter, METER_HEIGHT};
pub use validated_input::{field_height, render_field, InputProps};
