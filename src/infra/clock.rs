use chrono::{DateTime, NaiveDate, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::domain::ports::{Clock, IdGenerator};

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock pinned to a single instant.
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Yields `prefix-1`, `prefix-2`, ...
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sequential_ids_are_distinct() {
        let ids = SequentialIdGenerator::new("apt");
        assert_eq!(ids.next_id(), "apt-1");
        assert_eq!(ids.next_id(), "apt-2");
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let ids = UuidGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn test_system_clock_today_follows_utc_now() {
        let clock = SystemClock;
        let before = clock.now().date_naive();
        let today = clock.today();
        let after = clock.now().date_naive();
        assert!(today == before || today == after);
    }

    #[test]
    fn test_fixed_clock_today() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 12, 15, 0, 0).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
    }
}
