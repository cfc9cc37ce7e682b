use crate::dateerror::DateError;
use crate::time::calendardate::CalendarDate;

/// Inclusive `[start, end]` interval of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: CalendarDate,
    end_date: CalendarDate
}

impl RangeOfDates {
    /// Fails with `InvalidArgument` when `start_date` is after `end_date`.
    pub fn new(start_date: CalendarDate, end_date: CalendarDate) -> Result<RangeOfDates, DateError> {
        if start_date > end_date {
            return Err(DateError::invalid_argument(format!(
                "invalid range: start {} is after end {}", start_date, end_date
            )));
        }
        Ok(RangeOfDates { start_date, end_date })
    }

    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    pub fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    pub fn contain(&self, d: CalendarDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }
}
