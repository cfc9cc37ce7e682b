use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// Month and day of the holidays recognised when nothing else is configured:
/// New Year's Day, Independence Day and Christmas Day, never shifted for
/// weekends.
pub const DEFAULT_FIXED_HOLIDAYS: [(u32, u32); 3] = [
    (1, 1),
    (7, 4),
    (12, 25)
];

/// The set of dates treated as holidays, derived per year from recurring
/// rules plus one-off additions and removals.
#[derive(Clone)]
pub struct HolidayPolicy {
    rules: Vec<Arc<dyn RecurringHoliday>>,
    additional_holidays: BTreeSet<NaiveDate>,
    removed_holidays: BTreeSet<NaiveDate>
}

impl HolidayPolicy {
    /// # Arguments
    /// * `rules` - Recurring holiday rules
    /// * `additional_holidays` - One-time holidays
    /// * `removed_holidays` - Dates that are never holidays, overriding both of the above
    pub fn new(
        rules: Vec<Arc<dyn RecurringHoliday>>,
        additional_holidays: Vec<NaiveDate>,
        removed_holidays: Vec<NaiveDate>
    ) -> HolidayPolicy {
        HolidayPolicy {
            rules,
            additional_holidays: additional_holidays.into_iter().collect(),
            removed_holidays: removed_holidays.into_iter().collect()
        }
    }

    pub fn from_rules(rules: Vec<Arc<dyn RecurringHoliday>>) -> HolidayPolicy {
        HolidayPolicy::new(rules, Vec::new(), Vec::new())
    }

    pub fn rules(&self) -> &[Arc<dyn RecurringHoliday>] {
        &self.rules
    }

    pub fn additional_holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.additional_holidays
    }

    pub fn removed_holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.removed_holidays
    }

    /// Holidays of `year` in chronological order, without duplicates.
    pub fn holidays_in(&self, year: i32) -> Vec<NaiveDate> {
        let mut holiday_set: BTreeSet<NaiveDate> = BTreeSet::new();

        for rule in self.rules.iter() {
            holiday_set.extend(rule.holidays_in(year));
        }

        holiday_set.extend(
            self.additional_holidays
                .iter()
                .filter(|d| d.year() == year)
                .copied()
        );

        holiday_set
            .into_iter()
            .filter(|d| !self.removed_holidays.contains(d))
            .collect()
    }
}

impl Default for HolidayPolicy {
    fn default() -> HolidayPolicy {
        let rules = DEFAULT_FIXED_HOLIDAYS
            .iter()
            .filter_map(|&(month, day)| FixedDateHoliday::unadjusted(month, day).ok())
            .map(|h| Arc::new(h) as Arc<dyn RecurringHoliday>)
            .collect();
        HolidayPolicy::from_rules(rules)
    }
}
