use std::collections::HashMap;

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use crate::dateerror::DateError;

/// What to do with a holiday that lands on a given weekend day.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted,
    NextWeekday,
    PreviousWeekday
}

/// Per-weekday shift, indexed by `Weekday::num_days_from_monday()`.
///
/// Every key of the adjustment map counts as a weekend day, so a Saturday
/// holiday moved forward skips a Sunday that is also in the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekendAdjustmentRule {
    shift_days: [i64; 7]
}

impl WeekendAdjustmentRule {
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> Result<WeekendAdjustmentRule, DateError> {
        let mut shift_days = [0i64; 7];

        for (&weekday, &adj) in adjustment_map {
            let step: i64 = match adj {
                WeekendAdjustment::Unadjusted => continue,
                WeekendAdjustment::NextWeekday => 1,
                WeekendAdjustment::PreviousWeekday => -1
            };

            let mut to_weekday = weekday;
            let mut shift = 0i64;
            while adjustment_map.contains_key(&to_weekday) {
                if shift.abs() >= 7 {
                    return Err(DateError::invalid_holiday_rule("every weekday is marked as weekend"));
                }
                to_weekday = if step > 0 { to_weekday.succ() } else { to_weekday.pred() };
                shift += step;
            }

            shift_days[weekday.num_days_from_monday() as usize] = shift;
        }

        Ok(WeekendAdjustmentRule { shift_days })
    }

    pub fn unadjusted() -> WeekendAdjustmentRule {
        WeekendAdjustmentRule::default()
    }

    /// Largest number of days any weekday is moved by.
    pub fn max_shift(&self) -> u64 {
        self.shift_days.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0)
    }

    pub fn adjust(&self, d: NaiveDate) -> Option<NaiveDate> {
        let shift = self.shift_days[d.weekday().num_days_from_monday() as usize];
        if shift >= 0 {
            d.checked_add_days(Days::new(shift as u64))
        } else {
            d.checked_sub_days(Days::new(shift.unsigned_abs()))
        }
    }
}
