//! Input editing as explicit actions.
//!
//! Front-ends never poke fields by name; they build an [`InputAction`] and
//! fold it into the current input with [`apply_action`].

pub mod action;
pub mod field;

pub use action::{apply_action, InputAction};
pub use field::{Direction, FormField, Section};
