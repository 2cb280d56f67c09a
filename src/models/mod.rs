//! Data model module
//!
//! Core types describing a Gantt chart snapshot, plus serde helpers for
//! the persisted progress format.

pub mod core;
pub mod serde_helpers;

pub use core::*;
