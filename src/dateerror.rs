/// Error type for every fallible operation of the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// A caller-supplied value was rejected: not a date, a non-finite or
    /// fractional amount, an inverted range or an unrepresentable result.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        reason: String
    },

    /// Holiday lookup for a year outside the supported range.
    #[error("year {year} is outside the supported range {min}..={max}")]
    UnsupportedYear {
        year: i32,
        min: i32,
        max: i32
    },

    /// The holiday source did not answer within the configured timeout.
    #[error("holiday lookup for {year} timed out after {timeout_ms} ms")]
    LookupTimedOut {
        year: i32,
        timeout_ms: u64
    },

    /// The holiday source reported a failure of its own.
    #[error("holiday source failed: {reason}")]
    HolidaySource {
        reason: String
    },

    #[error("invalid holiday rule: {reason}")]
    InvalidHolidayRule {
        reason: String
    }
}

impl DateError {
    pub fn invalid_argument(reason: impl Into<String>) -> DateError {
        DateError::InvalidArgument { reason: reason.into() }
    }

    pub fn invalid_holiday_rule(reason: impl Into<String>) -> DateError {
        DateError::InvalidHolidayRule { reason: reason.into() }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DateError::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let e = DateError::invalid_argument("amount is NaN");
        assert_eq!(e.to_string(), "invalid argument: amount is NaN");
        assert!(e.is_invalid_argument());
    }

    #[test]
    fn unsupported_year_message() {
        let e = DateError::UnsupportedYear { year: 0, min: 1, max: 9999 };
        assert_eq!(e.to_string(), "year 0 is outside the supported range 1..=9999");
        assert!(!e.is_invalid_argument());
    }

    #[test]
    fn lookup_timed_out_message() {
        let e = DateError::LookupTimedOut { year: 2024, timeout_ms: 50 };
        assert_eq!(e.to_string(), "holiday lookup for 2024 timed out after 50 ms");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<DateError>();
    }
}
