//! Excel serial date conversion.
//!
//! Excel stores timestamps as fractional day counts. In the default 1900
//! system, serial 1 is 1 January 1900 and, for Lotus 1-2-3 compatibility,
//! 1900 is treated as a leap year, so serial 60 displays as the nonexistent
//! 29 February 1900 and serial 0 as the equally nonexistent 0 January 1900.
//! The 1904 system is a plain 1462-day shift with no such quirks.
//!
//! [`ExcelDateTime`] converts a serial into calendar fields reproducing
//! those displays by keeping a real calendar timestamp plus a
//! day-of-month-only correction: `day()` can then report 0 or 29 without
//! the other fields noticing.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::error::FormatError;
use crate::options::DateSystem;
use crate::value::Value;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Days between the 1900-system epoch (30 Dec 1899) and the 1904 epoch.
const DATE_1904_OFFSET_DAYS: f64 = 1462.0;

/// A calendar timestamp derived from an Excel serial number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExcelDateTime {
    adjusted: NaiveDateTime,
    /// Correction applied when reading the day of month, and only then.
    day_adjust: i32,
}

impl ExcelDateTime {
    /// Convert a serial day count under the given date system.
    ///
    /// Returns `None` when the serial is too large (or too small) to land
    /// inside the representable calendar range.
    pub fn from_serial(serial: f64, date_system: DateSystem) -> Option<Self> {
        match date_system {
            DateSystem::Date1904 => {
                let adjusted = serial_to_datetime(serial + DATE_1904_OFFSET_DAYS)?;
                Some(ExcelDateTime {
                    adjusted,
                    day_adjust: 0,
                })
            }
            DateSystem::Date1900 => {
                let internal = serial_to_datetime(serial)?;
                let zeroeth_min = date(1899, 12, 30)?;
                let zeroeth_max = date(1899, 12, 31)?;
                let leap_min = date(1900, 2, 28)?;
                let leap_max = date(1900, 3, 1)?;

                // Serials below 1 land in December 1899 internally and must
                // display two days later; serial 0 additionally reads back a
                // day of 0. Serials 1..=59 shift one day. Serial 60 is the
                // fictitious leap day: the timestamp stays on 28 February
                // but the day of month reads 29. From 1 March 1900 on, the
                // phantom day is already absorbed and nothing shifts.
                let (shift_days, day_adjust) = if internal < zeroeth_min {
                    (2, 0)
                } else if internal < zeroeth_max {
                    (2, -1)
                } else if internal < leap_min {
                    (1, 0)
                } else if internal < leap_max {
                    (0, 1)
                } else {
                    (0, 0)
                };

                let adjusted = internal.checked_add_signed(TimeDelta::days(shift_days))?;
                Some(ExcelDateTime {
                    adjusted,
                    day_adjust,
                })
            }
        }
    }

    /// Wrap an ordinary calendar timestamp.
    pub fn from_datetime(value: NaiveDateTime) -> Self {
        ExcelDateTime {
            adjusted: value,
            day_adjust: 0,
        }
    }

    /// Interpret a value as a date: serial numbers convert, timestamps
    /// wrap, everything else is a mismatch.
    pub fn try_convert(value: &Value, date_system: DateSystem) -> Result<Self, FormatError> {
        match value {
            Value::Number(serial) => Self::from_serial(*serial, date_system)
                .ok_or(FormatError::DateOutOfRange { serial: *serial }),
            Value::DateTime(dt) => Ok(Self::from_datetime(*dt)),
            other => Err(FormatError::TypeMismatch {
                expected: "date",
                got: other.type_name(),
            }),
        }
    }

    pub fn year(&self) -> i32 {
        self.adjusted.year()
    }

    pub fn month(&self) -> u32 {
        self.adjusted.month()
    }

    /// Day of month, with the epoch-quirk correction applied.
    pub fn day(&self) -> i32 {
        self.adjusted.day() as i32 + self.day_adjust
    }

    pub fn hour(&self) -> u32 {
        self.adjusted.hour()
    }

    pub fn minute(&self) -> u32 {
        self.adjusted.minute()
    }

    pub fn second(&self) -> u32 {
        self.adjusted.second()
    }

    pub fn millisecond(&self) -> u32 {
        self.adjusted.nanosecond() / 1_000_000
    }

    /// Day of week, 0 = Sunday.
    pub fn weekday(&self) -> usize {
        self.adjusted.weekday().num_days_from_sunday() as usize
    }
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}

/// Raw serial → timestamp against the 30 Dec 1899 epoch, rounded to the
/// nearest millisecond.
///
/// Negative serials mean "days before the epoch", but their fractional
/// part still measures time forward into that day: -12.25 is minus 12 days
/// plus 6 hours. The remainder correction below flips the fraction.
fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    let half = if serial >= 0.0 { 0.5 } else { -0.5 };
    let total = serial * MILLIS_PER_DAY as f64 + half;
    if !total.is_finite() || total.abs() >= i64::MAX as f64 {
        return None;
    }

    let mut millis = total as i64;
    if millis < 0 {
        millis -= (millis % MILLIS_PER_DAY) * 2;
    }

    let epoch = date(1899, 12, 30)?;
    epoch.checked_add_signed(TimeDelta::try_milliseconds(millis)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(serial: f64, system: DateSystem) -> (i32, u32, i32) {
        let dt = ExcelDateTime::from_serial(serial, system).unwrap();
        (dt.year(), dt.month(), dt.day())
    }

    #[test]
    fn test_serial_1_is_new_years_1900() {
        assert_eq!(fields(1.0, DateSystem::Date1900), (1900, 1, 1));
        assert_eq!(fields(2.0, DateSystem::Date1900), (1900, 1, 2));
    }

    #[test]
    fn test_serial_0_is_zeroeth_of_january() {
        assert_eq!(fields(0.0, DateSystem::Date1900), (1900, 1, 0));
    }

    #[test]
    fn test_leap_year_bug_window() {
        assert_eq!(fields(59.0, DateSystem::Date1900), (1900, 2, 28));
        // The phantom leap day.
        assert_eq!(fields(60.0, DateSystem::Date1900), (1900, 2, 29));
        assert_eq!(fields(61.0, DateSystem::Date1900), (1900, 3, 1));
    }

    #[test]
    fn test_modern_serial() {
        // Serial 46031 is 9 January 2026.
        assert_eq!(fields(46031.0, DateSystem::Date1900), (2026, 1, 9));
    }

    #[test]
    fn test_time_fraction() {
        let dt = ExcelDateTime::from_serial(46031.75, DateSystem::Date1900).unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (18, 0, 0));
    }

    #[test]
    fn test_1904_system() {
        assert_eq!(fields(0.0, DateSystem::Date1904), (1904, 1, 1));
        assert_eq!(fields(1.0, DateSystem::Date1904), (1904, 1, 2));
    }

    #[test]
    fn test_negative_serial_fraction_runs_forward() {
        let dt = ExcelDateTime::from_serial(-12.25, DateSystem::Date1900).unwrap();
        assert_eq!(dt.hour(), 6);
    }

    #[test]
    fn test_out_of_range_serial() {
        assert!(ExcelDateTime::from_serial(1e300, DateSystem::Date1900).is_none());
    }

    #[test]
    fn test_weekday() {
        // 1 January 2026 is a Thursday.
        let dt = ExcelDateTime::from_serial(46023.0, DateSystem::Date1900).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2026, 1, 1));
        assert_eq!(dt.weekday(), 4);
    }
}
