//! Date source for new leaderboard entries

use chrono::{Local, NaiveDate};

/// Date format written into entries (ISO 8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Supplies the date stamped on a newly added entry
pub trait Clock {
    fn today(&self) -> String;
}

/// Local calendar date of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> String {
        Local::now().date_naive().format(DATE_FORMAT).to_string()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}
