//! Deadline target definition.
//!
//! A deadline is a set of calendar fields interpreted at a fixed UTC offset,
//! converted once at construction into an absolute instant on the UTC-epoch
//! timeline. The device's configured timezone is never consulted: both "now"
//! and the target live on the same timeline, so the countdown reads the same
//! for a viewer anywhere.

use chrono::{Datelike, FixedOffset, Offset, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Default fixed offset: IST, +05:30.
pub const DEFAULT_OFFSET_MINUTES: i32 = 330;

/// An immutable calendar instant at a fixed UTC offset.
///
/// Created once per countdown session. The epoch conversion happens in the
/// constructor and is never redone against device-local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineTarget {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Fixed UTC offset in minutes (e.g. 330 for +05:30).
    pub offset_minutes: i32,
    /// Absolute instant, milliseconds since the UTC epoch.
    epoch_ms: i64,
}

impl DeadlineTarget {
    /// Build a target from calendar fields at the given fixed offset.
    ///
    /// Fails only when the fields name an instant the calendar cannot
    /// represent (Feb 30, month 13, offset beyond +-24h). A target already
    /// in the past is valid input and simply completes immediately.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        offset_minutes: i32,
    ) -> Result<Self> {
        let offset = FixedOffset::east_opt(offset_minutes * 60).ok_or_else(|| {
            CoreError::invalid_deadline(
                "offset_minutes",
                format!("{offset_minutes} minutes is not a valid UTC offset"),
            )
        })?;
        let instant = offset
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .ok_or_else(|| {
                CoreError::invalid_deadline(
                    "date",
                    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02} is not a representable instant"),
                )
            })?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset_minutes,
            epoch_ms: instant.timestamp_millis(),
        })
    }

    /// Build a target at the default +05:30 offset.
    pub fn at_default_offset(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        Self::new(year, month, day, hour, minute, second, DEFAULT_OFFSET_MINUTES)
    }

    /// A target `secs` seconds from now at the default offset.
    ///
    /// Demo/test-mode shortcut; rounds down to whole seconds.
    pub fn from_now_plus_secs(secs: u64) -> Self {
        let epoch_ms = now_utc_ms() / 1000 * 1000 + (secs as i64) * 1000;
        let offset = FixedOffset::east_opt(DEFAULT_OFFSET_MINUTES * 60)
            .unwrap_or_else(|| Utc.fix());
        let instant = chrono::DateTime::<Utc>::from_timestamp_millis(epoch_ms)
            .unwrap_or_else(Utc::now)
            .with_timezone(&offset);
        Self {
            year: instant.year(),
            month: instant.month(),
            day: instant.day(),
            hour: instant.hour(),
            minute: instant.minute(),
            second: instant.second(),
            offset_minutes: DEFAULT_OFFSET_MINUTES,
            epoch_ms,
        }
    }

    /// Absolute instant in milliseconds since the UTC epoch.
    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }
}

/// Current instant, milliseconds since the UTC epoch.
pub fn now_utc_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_ist_converts_to_utc_epoch() {
        // 2026-02-02 00:00:00 +05:30 == 2026-02-01 18:30:00 UTC.
        let target = DeadlineTarget::at_default_offset(2026, 2, 2, 0, 0, 0).unwrap();
        let utc = Utc.with_ymd_and_hms(2026, 2, 1, 18, 30, 0).unwrap();
        assert_eq!(target.epoch_ms(), utc.timestamp_millis());
    }

    #[test]
    fn offset_changes_absolute_instant() {
        let ist = DeadlineTarget::new(2026, 2, 2, 0, 0, 0, 330).unwrap();
        let utc0 = DeadlineTarget::new(2026, 2, 2, 0, 0, 0, 0).unwrap();
        assert_eq!(utc0.epoch_ms() - ist.epoch_ms(), 330 * 60 * 1000);
    }

    #[test]
    fn unrepresentable_date_is_rejected() {
        assert!(DeadlineTarget::at_default_offset(2026, 2, 30, 0, 0, 0).is_err());
        assert!(DeadlineTarget::at_default_offset(2026, 13, 1, 0, 0, 0).is_err());
        assert!(DeadlineTarget::new(2026, 2, 2, 0, 0, 0, 24 * 60 + 1).is_err());
    }

    #[test]
    fn past_target_is_valid() {
        assert!(DeadlineTarget::at_default_offset(1999, 1, 1, 0, 0, 0).is_ok());
    }
}
