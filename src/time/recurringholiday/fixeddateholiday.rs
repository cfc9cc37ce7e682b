use std::collections::{BTreeSet, HashMap};

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::dateerror::DateError;
use crate::time::utility::days_of_month;
use super::recurringholiday::RecurringHoliday;
use super::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};

/// Same month and day every year, optionally observed on a neighbouring
/// weekday when it falls on a weekend.
#[derive(Debug, Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    weekend_adjustment_rule: WeekendAdjustmentRule
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32, weekend_adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> Result<FixedDateHoliday, DateError> {
        // Feb 29 is accepted; it simply has no occurrence in common years.
        if !(1..=12).contains(&month) || day == 0 || day > days_of_month(2000, month) {
            return Err(DateError::invalid_holiday_rule(format!("no such day {:02}-{:02}", month, day)));
        }

        Ok(FixedDateHoliday {
            month,
            day,
            weekend_adjustment_rule: WeekendAdjustmentRule::new(weekend_adjustment_map)?
        })
    }

    pub fn unadjusted(month: u32, day: u32) -> Result<FixedDateHoliday, DateError> {
        FixedDateHoliday::new(month, day, &HashMap::new())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekend_adjustment_rule(&self) -> &WeekendAdjustmentRule {
        &self.weekend_adjustment_rule
    }

    fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .and_then(|d| self.weekend_adjustment_rule.adjust(d))
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn holidays_in(&self, year: i32) -> BTreeSet<NaiveDate> {
        // Observance can push Jan 1 into the previous year or Dec 31 into the
        // next one, so neighbouring years are evaluated too.
        let candidates: &[i32] = if self.weekend_adjustment_rule.max_shift() > 0 {
            &[-1, 0, 1]
        } else {
            &[0]
        };

        candidates
            .iter()
            .filter_map(|offset| year.checked_add(*offset))
            .filter_map(|y| self.observed_in(y))
            .filter(|d| d.year() == year)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn observed() -> HashMap<Weekday, WeekendAdjustment> {
        HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday)
        ])
    }

    #[test]
    fn unadjusted_date_every_year() {
        let christmas = FixedDateHoliday::unadjusted(12, 25).unwrap();
        assert_eq!(christmas.holidays_in(2024), BTreeSet::from([ymd(2024, 12, 25)]));
        assert!(christmas.is_holiday(&ymd(2022, 12, 25)));
        assert!(!christmas.is_holiday(&ymd(2022, 12, 26)));
    }

    #[test]
    fn observed_new_year_moves_into_previous_year() {
        let new_year = FixedDateHoliday::new(1, 1, &observed()).unwrap();
        // 2022-01-01 is a Saturday, observed 2021-12-31.
        assert_eq!(new_year.holidays_in(2022), BTreeSet::new());
        assert_eq!(new_year.holidays_in(2021), BTreeSet::from([ymd(2021, 1, 1), ymd(2021, 12, 31)]));
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        let leap_day = FixedDateHoliday::unadjusted(2, 29).unwrap();
        assert_eq!(leap_day.holidays_in(2024).len(), 1);
        assert!(leap_day.holidays_in(2023).is_empty());
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert!(FixedDateHoliday::unadjusted(2, 30).is_err());
        assert!(FixedDateHoliday::unadjusted(13, 1).is_err());
        assert!(FixedDateHoliday::unadjusted(4, 0).is_err());
    }
}
