//! Utility helpers shared across page UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and
//! component logic to improve reuse and testability.

pub mod body_scroll;
pub mod declarations;
pub mod slider;
pub mod storage;
