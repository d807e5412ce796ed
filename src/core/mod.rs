//! Core utilities shared by every module
//!
//! Must be declared first in lib.rs so the exported macros are visible to the
//! rest of the crate.

#[macro_use]
pub mod log;
