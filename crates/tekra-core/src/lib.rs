//! Core types and definitions for the Tekra battle engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! combatant and ability data, commands, state snapshots, events, tuning
//! and constants. It has no dependency on any runtime or presentation layer.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod tuning;
pub mod types;
