//! Calendar date used to address one day's rate table

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, NaiveDate};
use std::fmt::Display;
use std::str::FromStr;

/// A (year, month, day) triple as supplied by the caller.
///
/// No calendar validation happens here: `2021-02-30` is a perfectly good
/// `DateKey` and is forwarded to the rate service as-is, which then rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateKey {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        DateKey { year, month, day }
    }

    pub fn today() -> Self {
        chrono::Local::now().date_naive().into()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey::new(date.year(), date.month(), date.day())
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(anyhow!("Invalid date '{}', expected YYYY-MM-DD", s));
        };

        Ok(DateKey {
            year: year
                .parse()
                .with_context(|| format!("Invalid year in date: {s}"))?,
            month: month
                .parse()
                .with_context(|| format!("Invalid month in date: {s}"))?,
            day: day
                .parse()
                .with_context(|| format!("Invalid day in date: {s}"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_month_and_day() {
        assert_eq!(DateKey::new(2010, 6, 9).to_string(), "2010-06-09");
        assert_eq!(DateKey::new(2010, 6, 25).to_string(), "2010-06-25");
        assert_eq!(DateKey::new(1999, 12, 31).to_string(), "1999-12-31");
    }

    #[test]
    fn test_parse_date() {
        let date: DateKey = "2010-6-9".parse().unwrap();
        assert_eq!(date, DateKey::new(2010, 6, 9));

        let date: DateKey = "2021-02-30".parse().unwrap();
        assert_eq!(date.to_string(), "2021-02-30");
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!("2010-06".parse::<DateKey>().is_err());
        assert!("2010-xx-01".parse::<DateKey>().is_err());
        assert!("".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
        assert_eq!(DateKey::from(naive).to_string(), "2020-01-05");
    }
}
