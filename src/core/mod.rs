//! Core utilities shared across the engine.

pub mod rng;

pub use rng::GameRng;
