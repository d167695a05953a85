//! Core types and definitions for the BITWA simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity components, commands, frame snapshots, events, tuning and constants.
//! It has no dependency on any windowing or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod tuning;
pub mod types;

#[cfg(test)]
mod tests;
