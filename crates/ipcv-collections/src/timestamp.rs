// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 ipcv contributors

//! Seconds-since-epoch timestamps with a nanosecond wire representation.

use ipcv_object::{ObjectRef, TypeTag};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::Convertible;

/// Nanosecond subdivisions per second used by the date representation.
pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// A point in time as fractional seconds since the Unix epoch; negative
/// values are pre-1970.
///
/// The wire representation is a signed 64-bit nanosecond count: encoding
/// multiplies by [`NANOS_PER_SECOND`] and truncates, decoding divides. The
/// round-trip is lossy below nanosecond precision and subject to
/// floating-point rounding near large magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Timestamp(pub f64);

impl Timestamp {
    pub fn from_secs(seconds: f64) -> Self {
        Self(seconds)
    }

    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        SystemTime::now().into()
    }

    pub fn to_system_time(self) -> SystemTime {
        if self.0 >= 0.0 {
            UNIX_EPOCH + Duration::from_secs_f64(self.0)
        } else {
            UNIX_EPOCH - Duration::from_secs_f64(-self.0)
        }
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self(after.as_secs_f64()),
            Err(before) => Self(-before.duration().as_secs_f64()),
        }
    }
}

impl Convertible for Timestamp {
    const TAG: TypeTag = TypeTag::Date;

    fn decode(obj: &ObjectRef) -> Self {
        Self(obj.date_value() as f64 / NANOS_PER_SECOND)
    }

    fn encode(&self) -> ObjectRef {
        ObjectRef::date((self.0 * NANOS_PER_SECOND) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_nanoseconds() {
        let obj = Timestamp(1.5).encode();
        assert_eq!(obj.tag(), TypeTag::Date);
        assert_eq!(obj.date_value(), 1_500_000_000);

        let obj = Timestamp(-2.25).encode();
        assert_eq!(obj.date_value(), -2_250_000_000);
    }

    #[test]
    fn round_trip_error_stays_below_a_nanosecond() {
        // epoch offsets spread over sign and magnitude, including pre-1970
        let offsets = [
            0.0,
            0.125,
            1.5,
            -1.25,
            86_400.0,
            -86_400.5,
            1_000_000.125,
            -31_536_000.0,
            1_700_000_000.0,
            -1_000_000_000.0,
        ];
        for seconds in offsets {
            let original = Timestamp(seconds);
            let decoded = Timestamp::decode(&original.encode());
            let error = (decoded.as_secs() - seconds).abs();
            assert!(
                error < 1e-9,
                "round trip of {seconds} drifted by {error} seconds"
            );
        }
    }

    #[test]
    fn system_time_conversions() {
        let ts = Timestamp(12.5);
        assert_eq!(Timestamp::from(ts.to_system_time()), ts);

        let before_epoch = Timestamp(-12.5);
        assert_eq!(Timestamp::from(before_epoch.to_system_time()), before_epoch);
    }
}
