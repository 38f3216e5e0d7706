//! Daily report quota: a single persisted slot holding `"<date>:<count>"`.
//!
//! The free tier allows [`FREE_REPORTS_PER_DAY`] reports per calendar day, keyed
//! by the client's local date. Keying on the local clock is an accepted
//! limitation: resetting the clock or clearing storage evades the limit, and
//! that trade-off is deliberate for a client-only gate.

use time::{OffsetDateTime, UtcOffset};

use super::storage::KeyValueStore;

pub const FREE_REPORTS_PER_DAY: u32 = 1;

const QUOTA_SLOT: &str = "daily_report_count";

/// The persisted usage counter for one calendar day. A record whose `date`
/// differs from today is stale and counts as `{today, 0}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaRecord {
    pub date: String,
    pub count: u32,
}

impl QuotaRecord {
    pub fn empty() -> Self {
        Self {
            date: String::new(),
            count: 0,
        }
    }

    /// Parses the raw slot value. Absent, malformed, or non-numeric input all
    /// yield the empty record; this path never errors.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(raw) => raw,
            None => return Self::empty(),
        };
        let (date, count_str) = match raw.split_once(':') {
            Some(parts) => parts,
            None => return Self::empty(),
        };
        if date.is_empty() || count_str.is_empty() {
            return Self::empty();
        }
        match count_str.parse::<u32>() {
            Ok(count) => Self {
                date: date.to_string(),
                count,
            },
            Err(_) => Self::empty(),
        }
    }

    /// True when this record does not belong to `today` (the empty record is
    /// always a new day).
    pub fn is_new_day(&self, today: &str) -> bool {
        self.date != today
    }
}

/// Reads and rewrites the single quota slot.
pub struct QuotaStore<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> QuotaStore<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    pub fn read(&self) -> QuotaRecord {
        QuotaRecord::parse(self.store.get(QUOTA_SLOT).as_deref())
    }

    pub fn write(&self, date: &str, count: u32) {
        self.store.set(QUOTA_SLOT, &format!("{date}:{count}"));
    }

    /// Rolls a stale record over to `{today, 0}` as a side effect of checking
    /// it, then returns the current record. Idempotent within a day.
    pub fn ensure_today(&self, today: &str) -> QuotaRecord {
        let record = self.read();
        if record.is_new_day(today) {
            self.write(today, 0);
            return QuotaRecord {
                date: today.to_string(),
                count: 0,
            };
        }
        record
    }

    /// Consumes one unit of today's allowance after a successful submission.
    /// Guards against a date rollover that happened mid-request: a count from
    /// another day restarts from zero. Returns the new count.
    pub fn record_success(&self, today: &str) -> u32 {
        let record = self.read();
        let base = if record.date == today { record.count } else { 0 };
        let next = base.saturating_add(1);
        self.write(today, next);
        next
    }
}

/// Today's calendar-day key, `YYYY-MM-DD`, in the client's local offset when
/// the platform exposes it (UTC otherwise).
pub fn today_key() -> String {
    let now = OffsetDateTime::now_utc();
    let now = match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset),
        Err(_) => now,
    };
    let date = now.date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn parse_accepts_well_formed_slots() {
        let record = QuotaRecord::parse(Some("2026-08-30:1"));
        assert_eq!(record.date, "2026-08-30");
        assert_eq!(record.count, 1);
    }

    #[test]
    fn parse_fails_soft_on_bad_input() {
        assert_eq!(QuotaRecord::parse(None), QuotaRecord::empty());
        assert_eq!(QuotaRecord::parse(Some("")), QuotaRecord::empty());
        assert_eq!(QuotaRecord::parse(Some("no-separator")), QuotaRecord::empty());
        assert_eq!(QuotaRecord::parse(Some("2026-08-30:")), QuotaRecord::empty());
        assert_eq!(QuotaRecord::parse(Some(":3")), QuotaRecord::empty());
        assert_eq!(
            QuotaRecord::parse(Some("2026-08-30:many")),
            QuotaRecord::empty()
        );
        assert_eq!(
            QuotaRecord::parse(Some("2026-08-30:-1")),
            QuotaRecord::empty()
        );
    }

    #[test]
    fn is_new_day_matches_only_the_same_date() {
        let record = QuotaRecord {
            date: "2026-08-30".to_string(),
            count: 1,
        };
        assert!(!record.is_new_day("2026-08-30"));
        assert!(record.is_new_day("2026-08-31"));
        assert!(QuotaRecord::empty().is_new_day("2026-08-30"));
    }

    #[test]
    fn ensure_today_rolls_over_stale_records() {
        let store = MemoryStore::new();
        let quota = QuotaStore::new(&store);
        quota.write("2026-08-29", 1);

        let record = quota.ensure_today("2026-08-30");
        assert_eq!(record.date, "2026-08-30");
        assert_eq!(record.count, 0);
        assert_eq!(store.get("daily_report_count").as_deref(), Some("2026-08-30:0"));

        // Same-day recheck leaves the slot alone.
        quota.write("2026-08-30", 1);
        let record = quota.ensure_today("2026-08-30");
        assert_eq!(record.count, 1);
    }

    #[test]
    fn record_success_increments_from_todays_base() {
        let store = MemoryStore::new();
        let quota = QuotaStore::new(&store);

        assert_eq!(quota.record_success("2026-08-30"), 1);
        assert_eq!(store.get("daily_report_count").as_deref(), Some("2026-08-30:1"));
    }

    #[test]
    fn record_success_restarts_after_midnight_rollover() {
        let store = MemoryStore::new();
        let quota = QuotaStore::new(&store);
        quota.write("2026-08-29", 1);

        // The date advanced between the preflight check and the response.
        assert_eq!(quota.record_success("2026-08-30"), 1);
        assert_eq!(store.get("daily_report_count").as_deref(), Some("2026-08-30:1"));
    }

    #[test]
    fn today_key_is_iso_calendar_day() {
        let key = today_key();
        assert_eq!(key.len(), 10);
        assert_eq!(key.as_bytes()[4], b'-');
        assert_eq!(key.as_bytes()[7], b'-');
    }
}
