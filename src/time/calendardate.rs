use chrono::{
    DateTime,
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
    TimeZone
};

use crate::dateerror::DateError;

/// An instant with year, month, day and time-of-day. No timezone.
pub type CalendarDate = NaiveDateTime;

const DATE_TIME_FORMATS: [&str; 2] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f"
];

/// Anything a caller may hand over as a date. Conversion fails with
/// `InvalidArgument` when the value does not denote a valid instant.
pub trait ToCalendarDate {
    fn to_calendar_date(&self) -> Result<CalendarDate, DateError>;
}

impl ToCalendarDate for NaiveDateTime {
    fn to_calendar_date(&self) -> Result<CalendarDate, DateError> {
        Ok(*self)
    }
}

impl ToCalendarDate for NaiveDate {
    fn to_calendar_date(&self) -> Result<CalendarDate, DateError> {
        Ok(self.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> ToCalendarDate for DateTime<Tz> {
    fn to_calendar_date(&self) -> Result<CalendarDate, DateError> {
        Ok(self.naive_local())
    }
}

impl ToCalendarDate for str {
    fn to_calendar_date(&self) -> Result<CalendarDate, DateError> {
        let s = self.trim();
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return d.to_calendar_date();
        }
        if let Ok(zoned) = DateTime::parse_from_rfc3339(s) {
            return zoned.to_calendar_date();
        }
        DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .ok_or_else(|| DateError::invalid_argument(format!("'{}' is not a valid date", self)))
    }
}

impl ToCalendarDate for String {
    fn to_calendar_date(&self) -> Result<CalendarDate, DateError> {
        self.as_str().to_calendar_date()
    }
}

impl<T: ToCalendarDate + ?Sized> ToCalendarDate for &T {
    fn to_calendar_date(&self) -> Result<CalendarDate, DateError> {
        (**self).to_calendar_date()
    }
}

/// Strict ordering on full instants.
#[inline]
pub fn is_date_before(a: CalendarDate, b: CalendarDate) -> bool {
    a < b
}

/// Calendar-day equality; time-of-day is ignored.
#[inline]
pub fn is_same_day(a: CalendarDate, b: CalendarDate) -> bool {
    a.date() == b.date()
}
