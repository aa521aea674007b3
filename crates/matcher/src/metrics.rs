//! Process-wide observer for glossary searches.
//!
//! The binary and the tests install a [`SearchMetrics`] to count searches
//! per [`OutcomeKind`]; with nothing installed a search only pays for one
//! read lock.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::Lazy;

use crate::types::OutcomeKind;

type Slot = RwLock<Option<Arc<dyn SearchMetrics>>>;

static RECORDER: Lazy<Slot> = Lazy::new(|| RwLock::new(None));

/// Receives one call per [`Matcher::search`](crate::Matcher::search).
pub trait SearchMetrics: Send + Sync {
    /// `hit_count` is the number of matching records, zero for
    /// [`OutcomeKind::NoActiveQuery`] and [`OutcomeKind::Unavailable`].
    fn record_search(&self, kind: OutcomeKind, latency: Duration, hit_count: usize);
}

/// Replace the installed observer; `None` turns reporting off.
pub fn set_search_metrics(recorder: Option<Arc<dyn SearchMetrics>>) {
    match RECORDER.write() {
        Ok(mut slot) => *slot = recorder,
        Err(poisoned) => *poisoned.into_inner() = recorder,
    }
}

pub(crate) fn report(kind: OutcomeKind, latency: Duration, hit_count: usize) {
    let recorder = match RECORDER.read() {
        Ok(slot) => slot.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    if let Some(recorder) = recorder {
        recorder.record_search(kind, latency, hit_count);
    }
}
