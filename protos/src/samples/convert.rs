// SPDX-FileCopyrightText: 2024 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Conversions between protobuf well-known time types and `chrono`.

use chrono::{DateTime, TimeDelta, Utc};
use displaydoc::Display;
use prost_types::{Duration, Timestamp};

const NANOS_PER_SECOND: i32 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Display)]
pub enum ConversionError {
    /// Nanoseconds out of range: {0}
    InvalidNanos(i32),
    /// Seconds and nanoseconds of a duration have different signs
    MismatchedSigns,
    /// Timestamp is out of the supported calendar range
    TimestampOutOfRange,
    /// Duration is out of the supported range
    DurationOutOfRange,
}

/// Converts a point in time into a protobuf timestamp.
///
/// A leap second is folded into the last nanosecond of the preceding second, since protobuf
/// timestamps have no representation for it.
pub fn to_timestamp(datetime: DateTime<Utc>) -> Timestamp {
    let nanos = datetime.timestamp_subsec_nanos().min(999_999_999);
    Timestamp {
        seconds: datetime.timestamp(),
        nanos: nanos as i32,
    }
}

/// Converts a protobuf timestamp back into a point in time.
pub fn from_timestamp(timestamp: &Timestamp) -> Result<DateTime<Utc>, ConversionError> {
    if !(0..NANOS_PER_SECOND).contains(&timestamp.nanos) {
        return Err(ConversionError::InvalidNanos(timestamp.nanos));
    }
    DateTime::from_timestamp(timestamp.seconds, timestamp.nanos as u32)
        .ok_or(ConversionError::TimestampOutOfRange)
}

/// Converts an elapsed time into a protobuf duration.
///
/// Seconds are truncated toward zero and the nanoseconds carry the same sign as the seconds.
pub fn to_duration(delta: TimeDelta) -> Duration {
    Duration {
        seconds: delta.num_seconds(),
        nanos: delta.subsec_nanos(),
    }
}

/// Converts a protobuf duration back into an elapsed time.
pub fn from_duration(duration: &Duration) -> Result<TimeDelta, ConversionError> {
    let (seconds, nanos) = (duration.seconds, duration.nanos);
    if nanos <= -NANOS_PER_SECOND || nanos >= NANOS_PER_SECOND {
        return Err(ConversionError::InvalidNanos(nanos));
    }
    if (seconds > 0 && nanos < 0) || (seconds < 0 && nanos > 0) {
        return Err(ConversionError::MismatchedSigns);
    }
    TimeDelta::try_seconds(seconds)
        .and_then(|delta| delta.checked_add(&TimeDelta::nanoseconds(nanos.into())))
        .ok_or(ConversionError::DurationOutOfRange)
}
