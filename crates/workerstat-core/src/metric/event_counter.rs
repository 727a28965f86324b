//! Push-based counter aggregated per reporting interval.
//!
//! Samples are folded into a running Welford aggregate (count, mean, m2,
//! min, max) under a short lock. A snapshot reports mean and population
//! standard deviation and starts a fresh interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use super::{CounterKind, CounterPayload, MetricDescriptor};

#[derive(Debug, Default, Clone, Copy)]
struct Aggregate {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Aggregate {
    fn add(&mut self, v: f64) {
        if self.count == 0 {
            self.min = v;
            self.max = v;
        } else {
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        }
        self.count += 1;
        let delta = v - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (v - self.mean);
    }
}

#[derive(Debug)]
pub struct EventCounter {
    desc: MetricDescriptor,
    agg: Mutex<Aggregate>,
    disposed: AtomicBool,
}

impl EventCounter {
    pub fn new(desc: MetricDescriptor) -> Self {
        Self {
            desc,
            agg: Mutex::new(Aggregate::default()),
            disposed: AtomicBool::new(false),
        }
    }

    pub fn descriptor(&self) -> &MetricDescriptor {
        &self.desc
    }

    /// Record one sample. Dropped silently once disposed.
    pub fn write_metric(&self, value: f64) {
        if self.disposed.load(Ordering::Acquire) {
            return;
        }
        self.agg
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add(value);
    }

    /// Number of samples recorded in the current interval.
    pub fn pending(&self) -> u64 {
        self.agg.lock().unwrap_or_else(PoisonError::into_inner).count
    }

    /// Report the current interval and reset the aggregate.
    pub fn take_snapshot(&self, interval: Duration) -> CounterPayload {
        let mut out = CounterPayload::empty(&self.desc, CounterKind::Mean, interval);
        if self.disposed.load(Ordering::Acquire) {
            return out;
        }

        let agg = std::mem::take(
            &mut *self.agg.lock().unwrap_or_else(PoisonError::into_inner),
        );
        if agg.count == 0 {
            return out;
        }

        // m2 stays non-negative in exact arithmetic; clamp rounding noise.
        let variance = (agg.m2 / agg.count as f64).max(0.0);

        out.mean = agg.mean;
        out.standard_deviation = variance.sqrt();
        out.count = agg.count;
        out.min = agg.min;
        out.max = agg.max;
        out
    }

    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
        *self.agg.lock().unwrap_or_else(PoisonError::into_inner) = Aggregate::default();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}
