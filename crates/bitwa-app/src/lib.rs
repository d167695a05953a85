//! SMIERTIELNAJA BITWA front end.
//!
//! This crate wires the simulation to a frame loop, the render contracts,
//! and the command line.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod gunner;
pub mod headless;
pub mod render;
pub mod state;

pub use bitwa_core as core;
