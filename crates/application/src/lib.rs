//! Lapse Application - Use cases and ports
//!
//! Orchestrates the domain's expiry policy behind a clock port so that
//! time-dependent behavior stays testable.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
