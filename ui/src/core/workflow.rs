//! The quota-gated upload workflow.
//!
//! The state machine is deliberately split from rendering: views hold an
//! [`UploadPhase`] plus a `blocked` flag and drive both through the free
//! functions here, which own every read and write of the quota slot. The
//! network call itself lives in [`crate::api`]; this module decides whether it
//! may happen and settles the quota afterwards.

use crate::api::AnalysisReport;

use super::quota::{QuotaStore, FREE_REPORTS_PER_DAY};
use super::storage::KeyValueStore;

/// Where the submission workflow currently stands. `Completed` and the blocked
/// flag coexist: a successful submission leaves the report on screen while the
/// day's allowance is spent.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadPhase {
    /// No file chosen yet.
    #[default]
    Idle,
    /// A file is chosen and waiting for the user to submit.
    Ready,
    /// The single request to the analysis service is in flight.
    Submitting,
    /// The service answered and the report is held for presentation.
    Completed(AnalysisReport),
    /// The request failed. The allowance is only consumed on success, so a
    /// failed submission never counts against the day.
    Failed(String),
}

impl UploadPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// The user's current file selection, read eagerly off the file input. One at
/// a time; a new selection replaces the old, and the bytes are dropped once a
/// request settles successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Outcome of the pre-submission quota check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGate {
    /// Allowance available; the caller may perform the network request.
    Proceed,
    /// Today's allowance is spent; no request is made.
    Blocked,
}

/// Checks today's allowance before any network traffic. Reading the slot rolls
/// a stale record over to `{today, 0}`, so merely attempting a submission on a
/// new day resets the counter.
pub fn preflight(store: &dyn KeyValueStore, today: &str) -> SubmitGate {
    let record = QuotaStore::new(store).ensure_today(today);
    if record.count >= FREE_REPORTS_PER_DAY {
        SubmitGate::Blocked
    } else {
        SubmitGate::Proceed
    }
}

/// Consumes one unit of allowance after a successful response and returns the
/// new blocked flag. With a limit of one this always blocks for the rest of
/// the day: the allowance is spent by submitting, not by viewing.
pub fn settle_success(store: &dyn KeyValueStore, today: &str) -> bool {
    QuotaStore::new(store).record_success(today) >= FREE_REPORTS_PER_DAY
}

/// Page-load recheck: same rollover rule as [`preflight`], no network call.
/// Keeps the blocked indicator correct straight after a reload, a date change,
/// or an external edit of the slot. Idempotent within a day.
pub fn blocked_on_load(store: &dyn KeyValueStore, today: &str) -> bool {
    let record = QuotaStore::new(store).ensure_today(today);
    record.count >= FREE_REPORTS_PER_DAY
}
