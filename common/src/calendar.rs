//! Calendar time for the clock screen.
//!
//! Converts seconds since the Unix epoch into local civil time (proleptic
//! Gregorian calendar) and formats the two lines the clock screen shows:
//!
//! ```text
//! 14:05
//! Sun, 18 Oct 2026
//! ```

use core::fmt::Write;

use heapless::String;

const SECS_PER_DAY: i64 = 86_400;

/// Days between 0000-03-01 and 1970-01-01 in the shifted calendar below.
const EPOCH_SHIFT_DAYS: i64 = 719_468;

/// Days in one 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Day of the week.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Weekday of a day count relative to 1970-01-01 (a Thursday).
    fn from_epoch_days(days: i64) -> Self { Self::ALL[(days + 3).rem_euclid(7) as usize] }

    /// Three-letter English abbreviation.
    pub const fn short_name(self) -> &'static str { WEEKDAY_NAMES[self as usize] }
}

/// Local calendar date and time of day.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CivilTime {
    pub year: i32,
    /// 1..=12
    pub month: u8,
    /// 1..=31
    pub day: u8,
    pub weekday: Weekday,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CivilTime {
    /// Build from calendar fields, e.g. as read back from an RTC chip.
    ///
    /// Returns `None` for an impossible date or time of day.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        let days = days_from_civil(year, month, day);
        Some(Self {
            year,
            month,
            day,
            weekday: Weekday::from_epoch_days(days),
            hour,
            minute,
            second,
        })
    }

    /// Local time for `unix_secs` (UTC) shifted by `offset_secs`.
    pub fn from_unix(
        unix_secs: i64,
        offset_secs: i32,
    ) -> Self {
        let local = unix_secs + i64::from(offset_secs);
        let days = local.div_euclid(SECS_PER_DAY);
        let secs_of_day = local.rem_euclid(SECS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        Self {
            year,
            month,
            day,
            weekday: Weekday::from_epoch_days(days),
            hour: (secs_of_day / 3600) as u8,
            minute: ((secs_of_day % 3600) / 60) as u8,
            second: (secs_of_day % 60) as u8,
        }
    }

    /// Three-letter month abbreviation ("Jan".."Dec").
    pub const fn month_short(&self) -> &'static str { MONTH_NAMES[(self.month - 1) as usize] }

    /// Three-letter weekday abbreviation ("Mon".."Sun").
    pub const fn weekday_short(&self) -> &'static str { self.weekday.short_name() }

    /// 24-hour time of day, `HH:MM`.
    pub fn hh_mm(&self) -> String<5> {
        let mut out = String::new();
        let _ = write!(out, "{:02}:{:02}", self.hour, self.minute);
        out
    }

    /// Date line, `Www, DD Mmm YYYY`.
    pub fn date_line(&self) -> String<20> {
        let mut out = String::new();
        let _ = write!(
            out,
            "{}, {:02} {} {}",
            self.weekday_short(),
            self.day,
            self.month_short(),
            self.year
        );
        out
    }
}

const fn is_leap_year(year: i32) -> bool { (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 }

const fn days_in_month(
    year: i32,
    month: u8,
) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Days since 1970-01-01 for a calendar date.
fn days_from_civil(
    year: i32,
    month: u8,
    day: u8,
) -> i64 {
    // Count years from March so the leap day is the last day of the year
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT_DAYS
}

/// Calendar date for a count of days since 1970-01-01.
fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + EPOCH_SHIFT_DAYS;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as i32, month, day)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let t = CivilTime::from_unix(0, 0);
        assert_eq!((t.year, t.month, t.day), (1970, 1, 1));
        assert_eq!((t.hour, t.minute, t.second), (0, 0, 0));
        assert_eq!(t.weekday, Weekday::Thursday);
    }

    #[test]
    fn test_leap_days() {
        let t = CivilTime::from_unix(951_782_400, 0);
        assert_eq!((t.year, t.month, t.day), (2000, 2, 29));
        assert_eq!(t.weekday, Weekday::Tuesday);

        let t = CivilTime::from_unix(1_709_164_800, 0);
        assert_eq!((t.year, t.month, t.day), (2024, 2, 29));
        assert_eq!(t.weekday, Weekday::Thursday);
    }

    #[test]
    fn test_before_epoch() {
        let t = CivilTime::from_unix(-86_400, 0);
        assert_eq!((t.year, t.month, t.day), (1969, 12, 31));
        assert_eq!(t.weekday, Weekday::Wednesday);
    }

    #[test]
    fn test_end_of_century() {
        let t = CivilTime::from_unix(4_102_444_799, 0);
        assert_eq!((t.year, t.month, t.day), (2099, 12, 31));
        assert_eq!((t.hour, t.minute, t.second), (23, 59, 59));
    }

    #[test]
    fn test_offset_crosses_new_year() {
        // 2024-12-31 23:30 UTC is 00:30 on New Year's Day at UTC+1
        let t = CivilTime::from_unix(1_735_687_800, 3_600);
        assert_eq!((t.year, t.month, t.day), (2025, 1, 1));
        assert_eq!((t.hour, t.minute), (0, 30));
        assert_eq!(t.weekday, Weekday::Wednesday);
    }

    #[test]
    fn test_new_matches_from_unix() {
        let from_fields = CivilTime::new(2026, 10, 18, 0, 0, 0).unwrap();
        let from_secs = CivilTime::from_unix(1_792_281_600, 0);
        assert_eq!(from_fields, from_secs);
        assert_eq!(from_fields.weekday, Weekday::Sunday);
    }

    #[test]
    fn test_new_rejects_bad_fields() {
        assert!(CivilTime::new(2023, 2, 29, 0, 0, 0).is_none());
        assert!(CivilTime::new(2024, 13, 1, 0, 0, 0).is_none());
        assert!(CivilTime::new(2024, 4, 31, 0, 0, 0).is_none());
        assert!(CivilTime::new(2024, 1, 1, 24, 0, 0).is_none());
        assert!(CivilTime::new(2024, 2, 29, 23, 59, 59).is_some());
    }

    #[test]
    fn test_formatting() {
        let t = CivilTime::new(2026, 10, 18, 9, 5, 0).unwrap();
        assert_eq!(t.hh_mm().as_str(), "09:05");
        assert_eq!(t.date_line().as_str(), "Sun, 18 Oct 2026");
    }

    #[test]
    fn test_month_and_day_names() {
        let t = CivilTime::new(2025, 1, 6, 0, 0, 0).unwrap();
        assert_eq!(t.month_short(), "Jan");
        assert_eq!(t.weekday_short(), "Mon");
    }
}
