//! Modal form rendering

mod modal;

pub use modal::draw_modal;
