use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::dateerror::DateError;
use crate::dateutils::{DateUtils, SupportedYears};
use crate::time::holiday::holidaypolicy::HolidayPolicy;
use crate::time::holiday::holidaysource::PolicyHolidaySource;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustment;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterType,
    EasterRelatedHoliday
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] DateError)
}

/// One recurring holiday rule as written in the configuration file, tagged by
/// `holiday_type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "holiday_type")]
pub enum HolidayRuleJsonProp {
    FixedDate {
        month: u32,
        day: u32,
        #[serde(default)]
        weekend_adjustment_map: HashMap<Weekday, WeekendAdjustment>
    },
    NthWeekday {
        month: u32,
        n: u8,
        weekday: Weekday
    },
    LastWeekday {
        month: u32,
        weekday: Weekday
    },
    EasterRelated {
        easter_type: EasterType,
        shift_days: i32
    }
}

impl HolidayRuleJsonProp {
    pub fn to_rule(&self) -> Result<Arc<dyn RecurringHoliday>, DateError> {
        let rule: Arc<dyn RecurringHoliday> = match self {
            HolidayRuleJsonProp::FixedDate { month, day, weekend_adjustment_map } => {
                Arc::new(FixedDateHoliday::new(*month, *day, weekend_adjustment_map)?)
            },
            HolidayRuleJsonProp::NthWeekday { month, n, weekday } => {
                Arc::new(NthWeekdayHoliday::new(*month, *n, *weekday)?)
            },
            HolidayRuleJsonProp::LastWeekday { month, weekday } => {
                Arc::new(LastWeekdayHoliday::new(*month, *weekday)?)
            },
            HolidayRuleJsonProp::EasterRelated { easter_type, shift_days } => {
                Arc::new(EasterRelatedHoliday::new(*easter_type, *shift_days))
            }
        };
        Ok(rule)
    }
}

/// Holiday policy and lookup behaviour. Every field is optional; an empty
/// object yields the default policy with an immediate, untimed lookup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// `None` keeps the default holidays; `Some(vec![])` means no rules.
    holidays: Option<Vec<HolidayRuleJsonProp>>,
    additional_holidays: Vec<NaiveDate>,
    removed_holidays: Vec<NaiveDate>,
    supported_years: Option<SupportedYearsJsonProp>,
    lookup_latency_ms: u64,
    lookup_timeout_ms: Option<u64>
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct SupportedYearsJsonProp {
    min: i32,
    max: i32
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let configuration: Configuration = serde_json::from_reader(reader)?;
        info!(
            rules = configuration.holidays.as_ref().map(|h| h.len()),
            additional = configuration.additional_holidays.len(),
            removed = configuration.removed_holidays.len(),
            "loaded date utils configuration"
        );
        Ok(configuration)
    }

    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        Configuration::from_reader(BufReader::new(file))
    }

    pub fn lookup_latency(&self) -> Duration {
        Duration::from_millis(self.lookup_latency_ms)
    }

    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_ms.map(Duration::from_millis)
    }

    pub fn supported_years(&self) -> Result<SupportedYears, DateError> {
        match self.supported_years {
            Some(years) => SupportedYears::new(years.min, years.max),
            None => Ok(SupportedYears::default())
        }
    }

    pub fn holiday_policy(&self) -> Result<HolidayPolicy, DateError> {
        let rules = match &self.holidays {
            Some(rules_json) => rules_json
                .iter()
                .map(|r| r.to_rule())
                .collect::<Result<Vec<_>, DateError>>()?,
            None => HolidayPolicy::default().rules().to_vec()
        };
        Ok(HolidayPolicy::new(
            rules,
            self.additional_holidays.clone(),
            self.removed_holidays.clone()
        ))
    }

    pub fn build(&self) -> Result<DateUtils, ConfigurationError> {
        self.build_with_clock(Arc::new(SystemClock))
    }

    pub fn build_with_clock(&self, clock: Arc<dyn Clock>) -> Result<DateUtils, ConfigurationError> {
        let source = PolicyHolidaySource::new(self.holiday_policy()?)
            .with_latency(self.lookup_latency());
        Ok(DateUtils::new(clock, Arc::new(source))
            .with_supported_years(self.supported_years()?)
            .with_lookup_timeout(self.lookup_timeout()))
    }
}
