//! In-memory request counters.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A counter metric.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub const fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counters for ad operations.
#[derive(Debug, Default)]
pub struct Metrics {
    pub requests: Counter,
    pub ads_created: Counter,
    pub ads_updated: Counter,
    pub ads_deleted: Counter,
    pub validation_failures: Counter,
    pub conflicts: Counter,
    pub not_found: Counter,
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            requests: Counter::new(),
            ads_created: Counter::new(),
            ads_updated: Counter::new(),
            ads_deleted: Counter::new(),
            validation_failures: Counter::new(),
            conflicts: Counter::new(),
            not_found: Counter::new(),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.get(),
            ads_created: self.ads_created.get(),
            ads_updated: self.ads_updated.get(),
            ads_deleted: self.ads_deleted.get(),
            validation_failures: self.validation_failures.get(),
            conflicts: self.conflicts.get(),
            not_found: self.not_found.get(),
        }
    }
}

/// Point-in-time copy of all counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub ads_created: u64,
    pub ads_updated: u64,
    pub ads_deleted: u64,
    pub validation_failures: u64,
    pub conflicts: u64,
    pub not_found: u64,
}

/// Global metrics.
pub static METRICS: Metrics = Metrics::new();

/// Get the global metrics.
pub fn metrics() -> &'static Metrics {
    &METRICS
}
