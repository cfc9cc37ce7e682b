use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::dateerror::DateError;
use crate::time::holiday::holidaypolicy::HolidayPolicy;

/// Asynchronous provider of a year's holidays.
///
/// Implementations may be local computations or remote calendar services;
/// callers only rely on the returned dates belonging to `year`.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn holidays(&self, year: i32) -> Result<Vec<NaiveDate>, DateError>;
}

/// Evaluates a [`HolidayPolicy`] after an optional simulated lookup delay.
#[derive(Clone, Default)]
pub struct PolicyHolidaySource {
    policy: HolidayPolicy,
    latency: Duration
}

impl PolicyHolidaySource {
    pub fn new(policy: HolidayPolicy) -> PolicyHolidaySource {
        PolicyHolidaySource { policy, latency: Duration::ZERO }
    }

    pub fn with_latency(mut self, latency: Duration) -> PolicyHolidaySource {
        self.latency = latency;
        self
    }

    pub fn policy(&self) -> &HolidayPolicy {
        &self.policy
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl HolidaySource for PolicyHolidaySource {
    async fn holidays(&self, year: i32) -> Result<Vec<NaiveDate>, DateError> {
        // Zero latency never touches the timer, so runtimes without the time
        // driver can still use the default source.
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.policy.holidays_in(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_source_resolves_policy() {
        let source = PolicyHolidaySource::default();
        let holidays = source.holidays(2024).await.unwrap();
        assert_eq!(holidays.len(), 3);
        assert_eq!(holidays[0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn latency_is_waited_out() {
        let source = PolicyHolidaySource::default().with_latency(Duration::from_millis(100));
        let start = tokio::time::Instant::now();
        let holidays = source.holidays(2024).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert_eq!(holidays.last(), NaiveDate::from_ymd_opt(2024, 12, 25).as_ref());
    }
}
