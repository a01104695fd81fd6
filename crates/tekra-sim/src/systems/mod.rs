//! Battle systems composed by the engine.
//!
//! Each system is a small piece of state or a pure function. None of them
//! knows about the others; the engine decides the order they run in.

pub mod cooldown;
pub mod damage;
pub mod hand;
pub mod rewards;
pub mod scaling;
pub mod snapshot;
pub mod turn;
