use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

/// A holiday rule that can be evaluated for any year.
pub trait RecurringHoliday: Send + Sync {
    /// Dates this rule produces in `year`, ascending. Empty when the rule has
    /// no occurrence that year.
    fn holidays_in(&self, year: i32) -> BTreeSet<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.holidays_in(d.year()).contains(d)
    }
}
