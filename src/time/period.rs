use std::fmt;
use std::str::FromStr;

use chrono::{
    Datelike,
    Duration,
    NaiveDateTime
};
use serde::{
    Deserialize,
    Serialize
};

use crate::dateerror::DateError;
use crate::time::utility::clamped_ymd;

/// Calendar unit an amount is expressed in.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateUnit {
    Seconds,
    Minutes,
    Hours,
    #[default]
    Days,
    Weeks,
    Months,
    Years
}

impl DateUnit {
    pub const ALL: [DateUnit; 7] = [
        DateUnit::Seconds,
        DateUnit::Minutes,
        DateUnit::Hours,
        DateUnit::Days,
        DateUnit::Weeks,
        DateUnit::Months,
        DateUnit::Years
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DateUnit::Seconds => "seconds",
            DateUnit::Minutes => "minutes",
            DateUnit::Hours => "hours",
            DateUnit::Days => "days",
            DateUnit::Weeks => "weeks",
            DateUnit::Months => "months",
            DateUnit::Years => "years"
        }
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateUnit {
    type Err = DateError;

    fn from_str(s: &str) -> Result<DateUnit, DateError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => Ok(DateUnit::Seconds),
            "min" | "minute" | "minutes" => Ok(DateUnit::Minutes),
            "h" | "hour" | "hours" => Ok(DateUnit::Hours),
            "d" | "day" | "days" => Ok(DateUnit::Days),
            "w" | "week" | "weeks" => Ok(DateUnit::Weeks),
            "m" | "month" | "months" => Ok(DateUnit::Months),
            "y" | "year" | "years" => Ok(DateUnit::Years),
            other => Err(DateError::invalid_argument(format!("unknown date unit '{}'", other)))
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Period {
    number: i64,
    unit: DateUnit
}

impl Period {
    pub fn new(number: i64, unit: DateUnit) -> Period {
        Period { number, unit }
    }

    pub fn days(number: i64) -> Period {
        Period::new(number, DateUnit::Days)
    }

    pub fn months(number: i64) -> Period {
        Period::new(number, DateUnit::Months)
    }

    pub fn years(number: i64) -> Period {
        Period::new(number, DateUnit::Years)
    }

    /// Converts a caller-supplied amount into a period. The amount must be a
    /// finite whole number that fits in `i64`.
    pub fn from_amount(amount: f64, unit: DateUnit) -> Result<Period, DateError> {
        if !amount.is_finite() {
            return Err(DateError::invalid_argument(format!("amount must be a finite number, got {}", amount)));
        }
        if amount.fract() != 0.0 {
            return Err(DateError::invalid_argument(format!("amount must be a whole number of {}, got {}", unit, amount)));
        }
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
        if amount < i64::MIN as f64 || amount >= i64::MAX as f64 {
            return Err(DateError::invalid_argument(format!("amount {} is out of range", amount)));
        }
        Ok(Period::new(amount as i64, unit))
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn unit(&self) -> DateUnit {
        self.unit
    }

    /// Shifts `horizon` by this period. `None` when the result (or the
    /// intermediate duration) is outside chrono's representable range.
    pub fn checked_add_to(&self, horizon: NaiveDateTime) -> Option<NaiveDateTime> {
        let n = self.number;
        let delta = match self.unit {
            DateUnit::Seconds => Duration::try_seconds(n)?,
            DateUnit::Minutes => Duration::try_minutes(n)?,
            DateUnit::Hours => Duration::try_hours(n)?,
            DateUnit::Days => Duration::try_days(n)?,
            DateUnit::Weeks => Duration::try_weeks(n)?,
            DateUnit::Months => return shift_months(horizon, n),
            DateUnit::Years => return shift_years(horizon, n)
        };
        horizon.checked_add_signed(delta)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.number, self.unit)
    }
}

fn shift_months(horizon: NaiveDateTime, number: i64) -> Option<NaiveDateTime> {
    let total = i64::from(horizon.month0()).checked_add(number)?;
    let new_year = i64::from(horizon.year()).checked_add(total.div_euclid(12))?;
    let new_year = i32::try_from(new_year).ok()?;
    let new_month = total.rem_euclid(12) as u32 + 1;
    clamped_ymd(new_year, new_month, horizon.day()).map(|d| d.and_time(horizon.time()))
}

fn shift_years(horizon: NaiveDateTime, number: i64) -> Option<NaiveDateTime> {
    let new_year = i64::from(horizon.year()).checked_add(number)?;
    let new_year = i32::try_from(new_year).ok()?;
    clamped_ymd(new_year, horizon.month(), horizon.day()).map(|d| d.and_time(horizon.time()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn days_cross_month_and_year_boundaries() {
        assert_eq!(Period::days(5).checked_add_to(at(2020, 1, 1, 0)), Some(at(2020, 1, 6, 0)));
        assert_eq!(Period::days(1).checked_add_to(at(2020, 12, 31, 9)), Some(at(2021, 1, 1, 9)));
        assert_eq!(Period::days(-1).checked_add_to(at(2020, 3, 1, 0)), Some(at(2020, 2, 29, 0)));
    }

    #[test]
    fn months_clamp_to_month_end_and_keep_time() {
        assert_eq!(Period::months(1).checked_add_to(at(2024, 1, 31, 8)), Some(at(2024, 2, 29, 8)));
        assert_eq!(Period::months(-2).checked_add_to(at(2024, 1, 15, 0)), Some(at(2023, 11, 15, 0)));
        assert_eq!(Period::months(12).checked_add_to(at(2023, 5, 20, 0)), Some(at(2024, 5, 20, 0)));
    }

    #[test]
    fn years_clamp_leap_day() {
        assert_eq!(Period::years(1).checked_add_to(at(2024, 2, 29, 0)), Some(at(2025, 2, 28, 0)));
        assert_eq!(Period::years(-4).checked_add_to(at(2024, 2, 29, 0)), Some(at(2020, 2, 29, 0)));
    }

    #[test]
    fn time_units_are_exact() {
        let base = at(2020, 1, 1, 23);
        assert_eq!(Period::new(1, DateUnit::Hours).checked_add_to(base), Some(at(2020, 1, 2, 0)));
        assert_eq!(Period::new(90, DateUnit::Minutes).checked_add_to(base), Some(base + Duration::minutes(90)));
        assert_eq!(Period::new(2, DateUnit::Weeks).checked_add_to(base), Some(at(2020, 1, 15, 23)));
    }

    #[test]
    fn overflow_yields_none() {
        let base = at(2020, 1, 1, 0);
        assert_eq!(Period::years(i64::MAX).checked_add_to(base), None);
        assert_eq!(Period::months(i64::MIN).checked_add_to(base), None);
        assert_eq!(Period::days(i64::MAX).checked_add_to(base), None);
    }

    #[test]
    fn from_amount_rejects_non_finite_and_fractional() {
        assert!(Period::from_amount(f64::NAN, DateUnit::Days).unwrap_err().is_invalid_argument());
        assert!(Period::from_amount(f64::INFINITY, DateUnit::Days).is_err());
        assert!(Period::from_amount(1.5, DateUnit::Days).is_err());
        assert!(Period::from_amount(1e30, DateUnit::Days).is_err());
        assert_eq!(Period::from_amount(-3.0, DateUnit::Months), Ok(Period::months(-3)));
    }

    #[test]
    fn unit_parses_names_and_codes() {
        assert_eq!("days".parse::<DateUnit>(), Ok(DateUnit::Days));
        assert_eq!("M".parse::<DateUnit>(), Ok(DateUnit::Months));
        assert_eq!(" Years ".parse::<DateUnit>(), Ok(DateUnit::Years));
        assert!("fortnight".parse::<DateUnit>().is_err());
        for unit in DateUnit::ALL {
            assert_eq!(unit.name().parse::<DateUnit>(), Ok(unit));
        }
    }

    #[test]
    fn default_unit_is_days() {
        assert_eq!(DateUnit::default(), DateUnit::Days);
        assert_eq!(Period::days(3).to_string(), "3 days");
    }

    #[test]
    fn unit_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&DateUnit::Weeks).unwrap(), "\"weeks\"");
        assert_eq!(serde_json::from_str::<DateUnit>("\"months\"").unwrap(), DateUnit::Months);
    }
}
