//! Lapse Domain - Core business types
//!
//! This crate defines the domain model for the Lapse expiry calculator.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod expiry;
pub mod timestamp;

pub use error::{DomainError, DomainResult};
pub use expiry::{ExpiryBracket, ExpirySchedule, will_expire_at};
pub use timestamp::{format_timestamp, parse_timestamp};
