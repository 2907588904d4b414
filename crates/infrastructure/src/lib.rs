//! Lapse Infrastructure - Adapters
//!
//! Concrete implementations of the application layer's ports.

pub mod adapters;

pub use adapters::SystemClock;
