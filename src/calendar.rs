use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::errors::{CalculationError, Result};

/// injected set of bank holidays
///
/// The engine never looks holidays up on its own; callers build the
/// calendar from whatever source they use. An empty calendar is legal and
/// simply excludes nothing beyond weekends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HolidayCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// calendar with no holidays
    pub fn empty() -> Self {
        HolidayCalendar::default()
    }

    pub fn from_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        HolidayCalendar {
            holidays: dates.into_iter().collect(),
        }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// a business day is neither a weekend day nor a holiday
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// count elapsed calendar and business days over `(start, end]`
    ///
    /// The start day itself is not counted; `end` must be strictly after
    /// `start`.
    pub fn count_days(&self, start: NaiveDate, end: NaiveDate) -> Result<DaySpan> {
        if end <= start {
            return Err(CalculationError::InvalidDateRange {
                contribution: start,
                maturity: end,
            });
        }

        let calendar_days = (end - start).num_days() as u32;

        let mut business_days = 0;
        let mut day = start + Duration::days(1);
        while day <= end {
            if self.is_business_day(day) {
                business_days += 1;
            }
            day += Duration::days(1);
        }

        Ok(DaySpan {
            calendar_days,
            business_days,
        })
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        HolidayCalendar::from_dates(iter)
    }
}

/// elapsed day counts between contribution and the assessment date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySpan {
    pub calendar_days: u32,
    pub business_days: u32,
}
