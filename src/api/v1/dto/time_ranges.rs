/*
 * Responsibility
 * - /time-ranges の query / response DTO
 * - 区間の検証は TimeRange::new に任せる (DTO 側では形式のみ)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{TimeRange, TimeRangeStatus};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimeRangeQuery {
    /// Inclusive start (RFC 3339).
    pub start: DateTime<Utc>,
    /// Inclusive end (RFC 3339). Must not precede `start`.
    pub end: DateTime<Utc>,
    /// Instant to evaluate at. Defaults to now.
    pub at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TimeRangeStatusResponse {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_seconds: i64,
    pub display: String,
    #[serde(flatten)]
    pub status: TimeRangeStatus,
}

impl TimeRangeStatusResponse {
    pub fn new(range: &TimeRange, at: DateTime<Utc>) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
            duration_seconds: range.duration().num_seconds(),
            display: range.to_string(),
            status: TimeRangeStatus::at(range, at),
        }
    }
}
