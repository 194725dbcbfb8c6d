//! Page UI state models.
//!
//! DESIGN
//! ======
//! Each model is a plain struct with no browser dependencies. Components hold
//! them in `RwSignal`s and derive presentation from them, which keeps every
//! state transition testable without a DOM.

pub mod accordion;
pub mod dropdown;
pub mod modal;
