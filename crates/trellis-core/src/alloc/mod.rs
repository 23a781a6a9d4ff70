//! Optimized allocation and collection types for Trellis.
//!
//! This module provides:
//! - Re-exports of optimized hash collections using AHash
//! - SlotArena, a generational storage for long-lived objects

pub mod slot_arena;

pub use slot_arena::{Slot, SlotArena};

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
