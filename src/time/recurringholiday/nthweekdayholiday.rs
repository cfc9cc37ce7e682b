use std::collections::BTreeSet;

use chrono::{
    NaiveDate,
    Weekday
};

use crate::dateerror::DateError;
use super::recurringholiday::RecurringHoliday;

/// The `n`-th given weekday of a month, e.g. the fourth Thursday of November.
#[derive(Debug, Clone)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Result<NthWeekdayHoliday, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::invalid_holiday_rule(format!("month {} is out of range", month)));
        }
        if !(1..=5).contains(&n) {
            return Err(DateError::invalid_holiday_rule(format!("occurrence {} must be within 1..=5", n)));
        }
        Ok(NthWeekdayHoliday { month, n, weekday })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn holidays_in(&self, year: i32) -> BTreeSet<NaiveDate> {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thanksgiving() {
        let thanksgiving = NthWeekdayHoliday::new(11, 4, Weekday::Thu).unwrap();
        assert!(thanksgiving.is_holiday(&NaiveDate::from_ymd_opt(2024, 11, 28).unwrap()));
        assert!(thanksgiving.is_holiday(&NaiveDate::from_ymd_opt(2023, 11, 23).unwrap()));
    }

    #[test]
    fn fifth_occurrence_may_not_exist() {
        // February 2023 has only four Mondays.
        let rule = NthWeekdayHoliday::new(2, 5, Weekday::Mon).unwrap();
        assert!(rule.holidays_in(2023).is_empty());
    }

    #[test]
    fn invalid_fields_are_rejected() {
        assert!(NthWeekdayHoliday::new(0, 1, Weekday::Mon).is_err());
        assert!(NthWeekdayHoliday::new(1, 6, Weekday::Mon).is_err());
    }
}
