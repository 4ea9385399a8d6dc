//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` used to order posts by their
//! frontmatter `date`.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15").unwrap();
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
//! let dt = DateTimeUtc::parse("2024-06-15T20:00:45+05:30").unwrap();
//! assert_eq!(dt.to_rfc3339(), "2024-06-15T14:30:45Z");
//! ```

use anyhow::{Result, bail};
use std::fmt;

/// UTC datetime without timezone complexity.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse a frontmatter date.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`, the same with a fractional
    /// second part (`.000`), a space instead of `T`, and a trailing `Z` or
    /// `±HH:MM` offset. Offsets are converted to UTC.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let (hour, minute, second, offset) = if bytes.len() == 10 {
            (0, 0, 0, 0)
        } else {
            if !matches!(bytes[10], b'T' | b' ') || bytes.len() < 19 {
                return None;
            }
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            // bytes 0..19 are ASCII at this point, so slicing is on a char boundary
            let rest = &s[19..];
            let rest = match rest.strip_prefix('.') {
                Some(fraction) => fraction.trim_start_matches(|c: char| c.is_ascii_digit()),
                None => rest,
            };
            (
                parse_u8(&bytes[11..13])?,
                parse_u8(&bytes[14..16])?,
                parse_u8(&bytes[17..19])?,
                parse_offset(rest)?,
            )
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        dt.shift_minutes(-offset)
    }

    /// Move by `delta` minutes, `|delta|` below one day.
    fn shift_minutes(self, delta: i32) -> Option<Self> {
        const DAY: i32 = 24 * 60;
        let total = i32::from(self.hour) * 60 + i32::from(self.minute) + delta;
        let in_day = total.rem_euclid(DAY);
        let mut dt = Self {
            hour: u8::try_from(in_day / 60).ok()?,
            minute: u8::try_from(in_day % 60).ok()?,
            ..self
        };

        match total.div_euclid(DAY) {
            0 => {}
            1 if dt.day < Self::days_in_month(dt.year, dt.month) => dt.day += 1,
            1 => {
                dt.day = 1;
                if dt.month == 12 {
                    dt.month = 1;
                    dt.year = dt.year.checked_add(1)?;
                } else {
                    dt.month += 1;
                }
            }
            -1 if dt.day > 1 => dt.day -= 1,
            -1 => {
                if dt.month == 1 {
                    dt.month = 12;
                    dt.year = dt.year.checked_sub(1)?;
                } else {
                    dt.month -= 1;
                }
                dt.day = Self::days_in_month(dt.year, dt.month);
            }
            _ => return None,
        }
        Some(dt)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as RFC 3339: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl fmt::Display for DateTimeUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Minutes east of UTC for `""`, `Z`, `±HH:MM`, `±HHMM` or `±HH`.
fn parse_offset(s: &str) -> Option<i32> {
    if s.is_empty() || s.eq_ignore_ascii_case("z") {
        return Some(0);
    }

    let sign = match s.as_bytes()[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let body = s[1..].as_bytes();
    let (hours, minutes) = match body.len() {
        2 => (parse_u8(body)?, 0),
        4 => (parse_u8(&body[0..2])?, parse_u8(&body[2..4])?),
        5 if body[2] == b':' => (parse_u8(&body[0..2])?, parse_u8(&body[3..5])?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (i32::from(hours) * 60 + i32::from(minutes)))
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2024-06-15").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2024, 6, 15));
    }

    #[test]
    fn test_parse_with_time() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 6, 15, 14, 30, 45));

        let dt = DateTimeUtc::parse("2024-06-15T14:30:45").unwrap();
        assert_eq!(dt.hour, 14);

        let dt = DateTimeUtc::parse("2024-06-15 08:00:00").unwrap();
        assert_eq!(dt.hour, 8);
    }

    #[test]
    fn test_parse_with_fraction() {
        let dt = DateTimeUtc::parse("2019-12-01T10:00:00.000Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2019, 12, 1, 10, 0, 0));
    }

    #[test]
    fn test_parse_with_offset() {
        let dt = DateTimeUtc::parse("2019-11-24T10:00:00+05:30").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2019, 11, 24, 4, 30, 0));

        let dt = DateTimeUtc::parse("2019-11-24T10:00:00.250-0800").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2019, 11, 24, 18, 0, 0));

        let dt = DateTimeUtc::parse("2019-11-24T10:00:00+00:00").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2019, 11, 24, 10, 0, 0));
    }

    #[test]
    fn test_offset_crosses_day_boundaries() {
        let dt = DateTimeUtc::parse("2024-01-01T02:00:00+05:00").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2023, 12, 31, 21, 0, 0));

        let dt = DateTimeUtc::parse("2024-02-28T22:00:00-03:00").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 2, 29, 1, 0, 0));

        let dt = DateTimeUtc::parse("2023-12-31T23:30:00-01").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 1, 1, 0, 30, 0));

        let dt = DateTimeUtc::parse("2024-03-01T00:15:00+00:30").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 2, 29, 23, 45, 0));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DateTimeUtc::parse("").is_none());
        assert!(DateTimeUtc::parse("2024/06/15").is_none());
        assert!(DateTimeUtc::parse("2024-13-01").is_none());
        assert!(DateTimeUtc::parse("2023-02-29").is_none());
        assert!(DateTimeUtc::parse("2024-06-15T14:30").is_none());
        assert!(DateTimeUtc::parse("2024-06-15T14:30:45+8").is_none());
        assert!(DateTimeUtc::parse("2024-06-15T14:30:45+24:00").is_none());
        assert!(DateTimeUtc::parse("2024-06-15T14:30:45 CET").is_none());
        assert!(DateTimeUtc::parse("yesterday").is_none());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let older = DateTimeUtc::parse("2023-12-31T23:59:59Z").unwrap();
        let newer = DateTimeUtc::parse("2024-01-01").unwrap();
        assert!(older < newer);

        let morning = DateTimeUtc::parse("2024-01-01T08:00:00Z").unwrap();
        assert!(newer < morning);
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2023, 2, 29, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_invalid_time() {
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 30, 60).validate().is_err());
    }

    #[test]
    fn test_display_and_rfc3339() {
        let dt = DateTimeUtc::new(2024, 1, 5, 9, 3, 7);
        assert_eq!(dt.to_string(), "2024-01-05");
        assert_eq!(dt.to_rfc3339(), "2024-01-05T09:03:07Z");
    }
}
