//! Reusable page UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and read/write the state models in
//! `crate::state` through signals, either passed in or provided as context.

pub mod accordion;
pub mod help_modal;
pub mod profile_dropdown;
pub mod range_slider;
