use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::dateerror::DateError;
use crate::time::utility::days_of_month;
use super::recurringholiday::RecurringHoliday;

/// The last given weekday of a month, e.g. the last Monday of May.
#[derive(Debug, Clone)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Result<LastWeekdayHoliday, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::invalid_holiday_rule(format!("month {} is out of range", month)));
        }
        Ok(LastWeekdayHoliday { month, weekday })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn holidays_in(&self, year: i32) -> BTreeSet<NaiveDate> {
        let Some(eom) = NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month)) else {
            return BTreeSet::new();
        };

        // Walk back from the month end to the target weekday.
        let days_back = (eom.weekday().num_days_from_monday() + 7
                         - self.weekday.num_days_from_monday()) % 7;

        eom.checked_sub_days(Days::new(u64::from(days_back)))
            .into_iter()
            .collect()
    }
}
