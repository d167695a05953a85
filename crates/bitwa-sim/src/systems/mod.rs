//! Per-frame systems that operate on the simulation world.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in the world's pools.
//! Frame order is fixed: spawner, motion, collision, expiry, snapshot.

pub mod collision;
pub mod expiry;
pub mod motion;
pub mod snapshot;
pub mod spawner;
