//! Compute expiry use case.

use chrono::{DateTime, Utc};
use lapse_domain::ExpirySchedule;

use crate::error::ApplicationResult;
use crate::ports::Clock;

/// Input for computing a task's expiry.
#[derive(Debug, Clone, Copy)]
pub struct ComputeExpiryInput {
    /// The task's deadline.
    pub due_time: DateTime<Utc>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

/// Output from computing a task's expiry.
#[derive(Debug, Clone)]
pub struct ComputeExpiryOutput {
    /// The computed schedule, including the selected bracket.
    pub schedule: ExpirySchedule,
}

/// Use case for computing when a task will expire.
pub struct ComputeExpiry<C: Clock> {
    clock: C,
}

impl<C: Clock> ComputeExpiry<C> {
    /// Creates a new `ComputeExpiry` use case.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Classifies the task against the current instant and derives its
    /// expiry timestamp.
    ///
    /// # Errors
    /// Returns an error if `created_at` comes after `due_time`.
    pub fn execute(&self, input: ComputeExpiryInput) -> ApplicationResult<ComputeExpiryOutput> {
        let schedule = ExpirySchedule::new(input.due_time, input.created_at, self.clock.now())?;

        Ok(ComputeExpiryOutput { schedule })
    }
}
