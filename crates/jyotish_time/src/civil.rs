//! Civil (proleptic Gregorian) date and time.
//!
//! `CivilDateTime` is the only way time enters the pipeline. Construction
//! validates every field, including deserialization; nothing downstream
//! ever clamps or defaults a calendar value. No timezone is attached: the caller decides whether the
//! wall-clock reading is local or UT, and may shift it with
//! [`CivilDateTime::offset_jd`].

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Largest accepted UTC offset magnitude, in minutes.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Calendar date with time of day, proleptic Gregorian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCivilDateTime")]
pub struct CivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

/// Unchecked wire form; only reachable through [`CivilDateTime::new`].
#[derive(Deserialize)]
struct RawCivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    #[serde(default)]
    hour: u32,
    #[serde(default)]
    minute: u32,
    #[serde(default)]
    second: f64,
}

impl TryFrom<RawCivilDateTime> for CivilDateTime {
    type Error = TimeError;

    fn try_from(raw: RawCivilDateTime) -> Result<Self, TimeError> {
        Self::new(raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second)
    }
}

impl CivilDateTime {
    /// Build a validated date-time.
    ///
    /// `second` may carry a fractional part and must lie in [0, 60).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        if NaiveTime::from_hms_opt(hour, minute, 0).is_none() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Midnight at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Parse a `YYYY-MM-DD` date and an `HH:MM` or `HH:MM:SS` time.
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        let d = parse_date(date)?;
        let t = parse_time(time)?;
        Self::new(
            d.year(),
            d.month(),
            d.day(),
            t.hour(),
            t.minute(),
            t.second() as f64,
        )
    }

    /// Parse a `YYYY-MM-DD` date at 00:00.
    pub fn parse_date(date: &str) -> Result<Self, TimeError> {
        let d = parse_date(date)?;
        Self::date(d.year(), d.month(), d.day())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Seconds, possibly fractional, in [0, 60).
    pub fn second(&self) -> f64 {
        self.second
    }

    /// Day of month with the time of day folded in as a fraction.
    pub fn day_fraction(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0
    }

    /// Julian Day of this civil instant, taken as-is.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day_fraction())
    }

    /// Julian Day after removing a UTC offset (east positive, minutes).
    ///
    /// A reading of 06:30 at +05:30 yields the Julian Day of 01:00 UT.
    pub fn offset_jd(&self, utc_offset_minutes: i32) -> Result<f64, TimeError> {
        if utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::InvalidOffset(utc_offset_minutes));
        }
        Ok(self.to_jd() - utc_offset_minutes as f64 / 1440.0)
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TimeError::Parse {
        what: "date",
        input: s.to_string(),
    })
}

fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| TimeError::Parse {
            what: "time",
            input: s.to_string(),
        })
}
