//! Expiry bracket policy.
//!
//! A task's expiry is derived from how much runway remains before its due
//! time: the shorter the runway, the shorter the reaction window granted
//! after creation. Tasks with a comfortable amount of runway keep their
//! natural deadline, while very distant tasks get a fixed early warning.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// The four runway brackets, keyed on the gap between the current instant
/// and the due time. Brackets are checked smallest first and are
/// non-overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryBracket {
    /// Due within 24 hours (or already overdue).
    Immediate,
    /// Due in more than 24 and up to 72 hours.
    ShortNotice,
    /// Due in more than 72 and up to 90 hours.
    Standard,
    /// Due in more than 90 hours.
    Distant,
}

impl ExpiryBracket {
    /// Classify a gap between the current instant and the due time.
    #[must_use]
    pub fn classify(gap: TimeDelta) -> Self {
        if gap <= TimeDelta::hours(24) {
            Self::Immediate
        } else if gap <= TimeDelta::hours(72) {
            Self::ShortNotice
        } else if gap <= TimeDelta::hours(90) {
            Self::Standard
        } else {
            Self::Distant
        }
    }

    /// Get human-readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::ShortNotice => "Short notice",
            Self::Standard => "Standard",
            Self::Distant => "Distant",
        }
    }
}

/// Compute the expiry timestamp for a task.
///
/// The gap is measured from `now` to `due_time`; `created_at` anchors the
/// near-term brackets:
///
/// | Gap             | Expiry                    |
/// |-----------------|---------------------------|
/// | ≤ 24 h          | `created_at` + 90 minutes |
/// | 24 h – 72 h     | `created_at` + 16 hours   |
/// | 72 h – 90 h     | `due_time` unchanged      |
/// | > 90 h          | `due_time` − 48 hours     |
///
/// Pure and total: identical inputs always yield the same output.
#[must_use]
pub fn will_expire_at(
    due_time: DateTime<Utc>,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    match ExpiryBracket::classify(due_time - now) {
        ExpiryBracket::Immediate => created_at + TimeDelta::minutes(90),
        ExpiryBracket::ShortNotice => created_at + TimeDelta::hours(16),
        ExpiryBracket::Standard => due_time,
        ExpiryBracket::Distant => due_time - TimeDelta::hours(48),
    }
}

/// A task's computed expiry window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirySchedule {
    /// The task's deadline.
    pub due_time: DateTime<Utc>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// The bracket the task fell into at computation time.
    pub bracket: ExpiryBracket,
    /// When the task should be treated as expired.
    pub expires_at: DateTime<Utc>,
}

impl ExpirySchedule {
    /// Build a schedule for a task, classifying it against `now`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidWindow`] if `created_at` comes after
    /// `due_time`.
    pub fn new(
        due_time: DateTime<Utc>,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if created_at > due_time {
            return Err(DomainError::InvalidWindow(format!(
                "created_at {created_at} is after due_time {due_time}"
            )));
        }

        Ok(Self {
            due_time,
            created_at,
            bracket: ExpiryBracket::classify(due_time - now),
            expires_at: will_expire_at(due_time, created_at, now),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_due_within_standard_bracket_is_unchanged() {
        let now = fixed_now();
        let due = now + TimeDelta::hours(80);

        assert_eq!(will_expire_at(due, now, now), due);
    }

    #[test]
    fn test_short_notice_gets_sixteen_hours_from_creation() {
        let now = fixed_now();
        let due = now + TimeDelta::hours(60);

        assert_eq!(will_expire_at(due, now, now), now + TimeDelta::hours(16));
    }

    #[test]
    fn test_distant_due_expires_two_days_early() {
        let now = fixed_now();
        let due = now + TimeDelta::hours(100);

        assert_eq!(will_expire_at(due, now, now), due - TimeDelta::hours(48));
    }

    #[test]
    fn test_immediate_gets_ninety_minutes_from_creation() {
        let now = fixed_now();
        let due = now + TimeDelta::hours(10);

        assert_eq!(will_expire_at(due, now, now), now + TimeDelta::minutes(90));
    }

    #[test]
    fn test_overdue_task_falls_in_immediate_bracket() {
        let now = fixed_now();
        let due = now - TimeDelta::hours(5);
        let created = now - TimeDelta::hours(30);

        assert_eq!(
            will_expire_at(due, created, now),
            created + TimeDelta::minutes(90)
        );
    }

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(
            ExpiryBracket::classify(TimeDelta::hours(24)),
            ExpiryBracket::Immediate
        );
        assert_eq!(
            ExpiryBracket::classify(TimeDelta::hours(24) + TimeDelta::seconds(1)),
            ExpiryBracket::ShortNotice
        );
        assert_eq!(
            ExpiryBracket::classify(TimeDelta::hours(72)),
            ExpiryBracket::ShortNotice
        );
        assert_eq!(
            ExpiryBracket::classify(TimeDelta::hours(72) + TimeDelta::seconds(1)),
            ExpiryBracket::Standard
        );
        assert_eq!(
            ExpiryBracket::classify(TimeDelta::hours(90)),
            ExpiryBracket::Standard
        );
        assert_eq!(
            ExpiryBracket::classify(TimeDelta::hours(90) + TimeDelta::seconds(1)),
            ExpiryBracket::Distant
        );
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let now = fixed_now();
        let due = now + TimeDelta::hours(100);
        let created = now - TimeDelta::hours(2);

        let first = will_expire_at(due, created, now);
        let second = will_expire_at(due, created, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_schedule_captures_bracket_and_expiry() {
        let now = fixed_now();
        let due = now + TimeDelta::hours(60);

        let schedule = ExpirySchedule::new(due, now, now).unwrap();
        assert_eq!(schedule.bracket, ExpiryBracket::ShortNotice);
        assert_eq!(schedule.expires_at, now + TimeDelta::hours(16));
    }

    #[test]
    fn test_schedule_rejects_creation_after_deadline() {
        let now = fixed_now();
        let due = now + TimeDelta::hours(10);
        let created = due + TimeDelta::hours(1);

        let result = ExpirySchedule::new(due, created, now);
        assert!(matches!(result, Err(DomainError::InvalidWindow(_))));
    }

    #[test]
    fn test_schedule_serde_round_trip() {
        let now = fixed_now();
        let schedule = ExpirySchedule::new(now + TimeDelta::hours(80), now, now).unwrap();

        let json = serde_json::to_string(&schedule).unwrap();
        assert!(json.contains("\"standard\""));

        let back: ExpirySchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
