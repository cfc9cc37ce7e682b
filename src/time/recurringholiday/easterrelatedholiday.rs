use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::recurringholiday::RecurringHoliday;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox
}

/// Years for which the Easter computus below is valid.
pub const EASTER_YEARS: std::ops::RangeInclusive<i32> = 1583..=4099;

/// Easter Sunday, or `None` outside [`EASTER_YEARS`]. Orthodox Easter is
/// returned as a Gregorian date.
pub fn easter_sunday(year: i32, easter_type: EasterType) -> Option<NaiveDate> {
    if !EASTER_YEARS.contains(&year) {
        return None;
    }

    let g = year % 19;

    let p = match easter_type {
        EasterType::Orthodox => {
            let i = (19 * g + 15) % 30;
            let j = (year + year / 4 + i) % 7;
            let e = if year <= 1600 {
                10
            } else {
                10 + year / 100 - 16 - (year / 100 - 16) / 4
            };
            i - j + e
        },
        EasterType::Western => {
            let c = year / 100;
            let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
            let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
            let j = (year + year / 4 + i + 2 - c + c / 4) % 7;
            i - j
        }
    };

    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// A holiday at a fixed offset from Easter Sunday (Good Friday is -2).
#[derive(Debug, Clone)]
pub struct EasterRelatedHoliday {
    easter_type: EasterType,
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(easter_type: EasterType, shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday { easter_type, shift_days }
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn holidays_in(&self, year: i32) -> BTreeSet<NaiveDate> {
        let shift = Duration::days(i64::from(self.shift_days));
        // A large offset can carry a neighbouring year's Easter into `year`.
        let span = i32::try_from(self.shift_days.unsigned_abs() / 365 + 1).unwrap_or(i32::MAX);
        let first = year.saturating_sub(span).max(*EASTER_YEARS.start());
        let last = year.saturating_add(span).min(*EASTER_YEARS.end());
        (first..=last)
            .filter_map(|y| easter_sunday(y, self.easter_type))
            .filter_map(|easter| easter.checked_add_signed(shift))
            .filter(|d| d.year() == year)
            .collect()
    }
}
