//! Trellis Core
//!
//! This crate contains the foundational utilities shared by the Trellis
//! widget toolkit crates.

pub mod alloc;
pub mod logging;
