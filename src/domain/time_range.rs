/*
 * Responsibility
 * - 閉区間 [start, end] を表す値オブジェクト
 * - 生成時に end >= start を保証する (不正なら InvalidRange)
 * - 「今」を受け取る述語 (contains / is_active / has_ended / is_upcoming)
 */
use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeRangeError {
    #[error("end ({end}) must not precede start ({start})")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Closed interval `[start, end]`.
///
/// Both boundaries are inclusive, so `contains`, `has_ended` and `is_upcoming`
/// overlap at the edges: an instant equal to `end` is contained and not ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

// Deserialization goes through here so the invariant is re-checked.
#[derive(Deserialize)]
struct RawTimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = TimeRangeError;

    fn try_from(raw: RawTimeRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeRangeError> {
        if end < start {
            return Err(TimeRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Never negative.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.contains(now)
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now > self.end
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        now < self.start
    }

    /// Closed intervals: ranges that only touch at a boundary overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    fn duration_hours(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 3_600_000.0
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({:.1}h)",
            self.start,
            self.end,
            self.duration_hours()
        )
    }
}

/// Every predicate of a range evaluated at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TimeRangeStatus {
    pub at: DateTime<Utc>,
    pub contains: bool,
    pub is_active: bool,
    pub has_ended: bool,
    pub is_upcoming: bool,
}

impl TimeRangeStatus {
    pub fn at(range: &TimeRange, now: DateTime<Utc>) -> Self {
        Self {
            at: now,
            contains: range.contains(now),
            is_active: range.is_active(now),
            has_ended: range.has_ended(now),
            is_upcoming: range.is_upcoming(now),
        }
    }
}
