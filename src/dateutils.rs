use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::dateerror::DateError;
use crate::time::calendardate::{self, CalendarDate, ToCalendarDate};
use crate::time::holiday::holidaysource::{HolidaySource, PolicyHolidaySource};
use crate::time::period::{DateUnit, Period};
use crate::time::rangeofdates::RangeOfDates;

/// Returns `date` shifted by `amount` units.
///
/// Fails with `InvalidArgument` when `date` is not a valid date, when
/// `amount` is not a finite whole number, or when the result is not
/// representable.
pub fn add<D: ToCalendarDate>(date: D, amount: f64, unit: DateUnit) -> Result<CalendarDate, DateError> {
    let horizon = date.to_calendar_date()?;
    let period = Period::from_amount(amount, unit)?;
    period
        .checked_add_to(horizon)
        .ok_or_else(|| DateError::invalid_argument(format!("{} shifted by {} is out of range", horizon, period)))
}

/// [`add`] in the default unit, days.
pub fn add_days<D: ToCalendarDate>(date: D, amount: f64) -> Result<CalendarDate, DateError> {
    add(date, amount, DateUnit::default())
}

/// Inclusive membership `from <= date <= to` on full instants. Fails with
/// `InvalidArgument` when `from` is after `to`.
pub fn is_within_range<D, F, T>(date: D, from: F, to: T) -> Result<bool, DateError>
where
    D: ToCalendarDate,
    F: ToCalendarDate,
    T: ToCalendarDate
{
    let range = RangeOfDates::new(from.to_calendar_date()?, to.to_calendar_date()?)?;
    Ok(range.contain(date.to_calendar_date()?))
}

/// Strict `a < b` on full instants. Fails only when an input is not a date.
pub fn is_date_before<A: ToCalendarDate, B: ToCalendarDate>(a: A, b: B) -> Result<bool, DateError> {
    Ok(calendardate::is_date_before(a.to_calendar_date()?, b.to_calendar_date()?))
}

pub fn is_same_day<A: ToCalendarDate, B: ToCalendarDate>(a: A, b: B) -> Result<bool, DateError> {
    Ok(calendardate::is_same_day(a.to_calendar_date()?, b.to_calendar_date()?))
}

/// Inclusive range of years the holiday lookup accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedYears {
    min: i32,
    max: i32
}

impl SupportedYears {
    pub fn new(min: i32, max: i32) -> Result<SupportedYears, DateError> {
        if min > max {
            return Err(DateError::invalid_argument(format!("supported years {}..={} are inverted", min, max)));
        }
        Ok(SupportedYears { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    pub fn check(&self, year: i32) -> Result<(), DateError> {
        if self.contains(year) {
            Ok(())
        } else {
            Err(DateError::UnsupportedYear { year, min: self.min, max: self.max })
        }
    }
}

impl Default for SupportedYears {
    fn default() -> SupportedYears {
        SupportedYears { min: 1, max: 9999 }
    }
}

/// Date utilities bound to a clock and a holiday source.
///
/// The synchronous operations are pure; `get_holidays` and `is_holiday`
/// suspend on the holiday source and report every failure through their
/// `Result`.
#[derive(Clone)]
pub struct DateUtils {
    clock: Arc<dyn Clock>,
    holiday_source: Arc<dyn HolidaySource>,
    supported_years: SupportedYears,
    lookup_timeout: Option<Duration>
}

impl DateUtils {
    pub fn new(clock: Arc<dyn Clock>, holiday_source: Arc<dyn HolidaySource>) -> DateUtils {
        DateUtils {
            clock,
            holiday_source,
            supported_years: SupportedYears::default(),
            lookup_timeout: None
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> DateUtils {
        self.clock = clock;
        self
    }

    pub fn with_holiday_source(mut self, holiday_source: Arc<dyn HolidaySource>) -> DateUtils {
        self.holiday_source = holiday_source;
        self
    }

    pub fn with_supported_years(mut self, supported_years: SupportedYears) -> DateUtils {
        self.supported_years = supported_years;
        self
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Option<Duration>) -> DateUtils {
        self.lookup_timeout = lookup_timeout;
        self
    }

    pub fn supported_years(&self) -> SupportedYears {
        self.supported_years
    }

    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout
    }

    pub fn current_year(&self) -> i32 {
        self.clock.now().year()
    }

    pub fn add<D: ToCalendarDate>(&self, date: D, amount: f64, unit: DateUnit) -> Result<CalendarDate, DateError> {
        add(date, amount, unit)
    }

    pub fn add_days<D: ToCalendarDate>(&self, date: D, amount: f64) -> Result<CalendarDate, DateError> {
        add_days(date, amount)
    }

    pub fn is_within_range<D, F, T>(&self, date: D, from: F, to: T) -> Result<bool, DateError>
    where
        D: ToCalendarDate,
        F: ToCalendarDate,
        T: ToCalendarDate
    {
        is_within_range(date, from, to)
    }

    pub fn is_date_before<A: ToCalendarDate, B: ToCalendarDate>(&self, a: A, b: B) -> Result<bool, DateError> {
        is_date_before(a, b)
    }

    pub fn is_same_day<A: ToCalendarDate, B: ToCalendarDate>(&self, a: A, b: B) -> Result<bool, DateError> {
        is_same_day(a, b)
    }

    /// Holidays of `year` in chronological order.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_holidays(&self, year: i32) -> Result<Vec<NaiveDate>, DateError> {
        if let Err(e) = self.supported_years.check(year) {
            warn!(%e, "rejected holiday lookup");
            return Err(e);
        }

        let lookup = self.holiday_source.holidays(year);
        let mut holidays = match self.lookup_timeout {
            Some(timeout) => match tokio::time::timeout(timeout, lookup).await {
                Ok(result) => result?,
                Err(_) => {
                    let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                    warn!(timeout_ms, "holiday lookup timed out");
                    return Err(DateError::LookupTimedOut { year, timeout_ms });
                }
            },
            None => lookup.await?
        };

        // Sources are external; keep the ordering contract regardless.
        holidays.retain(|d| d.year() == year);
        holidays.sort_unstable();
        holidays.dedup();

        debug!(count = holidays.len(), "resolved holidays");
        Ok(holidays)
    }

    /// Whether the calendar day of `date` is one of its year's holidays.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn is_holiday<D: ToCalendarDate>(&self, date: D) -> Result<bool, DateError> {
        let day = date.to_calendar_date()?.date();
        let holidays = self.get_holidays(day.year()).await?;
        Ok(holidays.binary_search(&day).is_ok())
    }
}

impl Default for DateUtils {
    fn default() -> DateUtils {
        DateUtils::new(Arc::new(SystemClock), Arc::new(PolicyHolidaySource::default()))
    }
}
