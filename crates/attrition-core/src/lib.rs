//! Core types and definitions for the attrition simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, configuration, errors, snapshots and run summaries.
//! It contains no simulation logic and no I/O.

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
