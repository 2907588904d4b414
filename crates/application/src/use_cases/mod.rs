//! Application use cases

mod compute_expiry;

pub use compute_expiry::{ComputeExpiry, ComputeExpiryInput, ComputeExpiryOutput};
