use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::{CounterKind, CounterPayload, MetricDescriptor};

type Reader = Box<dyn Fn() -> f64 + Send + Sync>;

/// Pull-based gauge: the value is read through `reader` each time the
/// listener polls.
pub struct PollingGauge {
    desc: MetricDescriptor,
    reader: Reader,
    disposed: AtomicBool,
}

impl PollingGauge {
    pub fn new<F>(desc: MetricDescriptor, reader: F) -> Self
    where
        F: Fn() -> f64 + Send + Sync + 'static,
    {
        Self {
            desc,
            reader: Box::new(reader),
            disposed: AtomicBool::new(false),
        }
    }

    pub fn descriptor(&self) -> &MetricDescriptor {
        &self.desc
    }

    /// Read the current value. Returns `None` once disposed.
    pub fn value(&self) -> Option<f64> {
        if self.disposed.load(Ordering::Acquire) {
            return None;
        }
        Some((self.reader)())
    }

    pub fn poll(&self, interval: Duration) -> CounterPayload {
        let mut out = CounterPayload::empty(&self.desc, CounterKind::Gauge, interval);
        if let Some(v) = self.value() {
            out.mean = v;
            out.min = v;
            out.max = v;
            out.count = 1;
        }
        out
    }

    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

impl fmt::Debug for PollingGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollingGauge")
            .field("desc", &self.desc)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
