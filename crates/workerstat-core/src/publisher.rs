//! In-flight work and processing-time publisher.
//!
//! One instance per process, shared behind an `Arc` by every worker that
//! reports work items and by the listener that collects metrics. Producer
//! calls are lock-free on the counter; the export objects sit behind an
//! `RwLock` that only the command callback and disposal ever write.
//!
//! Lifecycle:
//! - `Uninitialized` until the first `Enable` command.
//! - `Active` once both export objects exist. Further enables are no-ops.
//! - `Disposed` after [`MetricsPublisher::dispose`]. Terminal.
//!
//! `Disable` does not tear the export objects down. They stay allocated until
//! disposal.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use crate::command::ListenerCommand;
use crate::metric::{CounterPayload, EventCounter, MetricDescriptor, PollingGauge};

/// Processing time of one completed work item, pushed per completion.
pub const PROCESSING_TIME: MetricDescriptor = MetricDescriptor::new(
    "unit-processing-time",
    "Unit of work processing time",
    "milliseconds",
);

/// Number of work items started but not yet completed, polled.
pub const QUEUE_LENGTH: MetricDescriptor =
    MetricDescriptor::new("worker-queue-length", "Worker queue length", "items");

/// Shared lifecycle of the two export objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    Uninitialized,
    Active,
    Disposed,
}

impl ExportState {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportState::Uninitialized => "uninitialized",
            ExportState::Active => "active",
            ExportState::Disposed => "disposed",
        }
    }
}

#[derive(Debug)]
struct Exports {
    state: ExportState,
    processing_time: Option<Arc<EventCounter>>,
    queue_length: Option<Arc<PollingGauge>>,
}

/// Process-wide publisher of in-flight count and processing time.
#[derive(Debug)]
pub struct MetricsPublisher {
    in_flight: Arc<AtomicI64>,
    exports: RwLock<Exports>,
}

impl Default for MetricsPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsPublisher {
    /// Fresh publisher: count at zero, no export objects yet.
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(AtomicI64::new(0)),
            exports: RwLock::new(Exports {
                state: ExportState::Uninitialized,
                processing_time: None,
                queue_length: None,
            }),
        }
    }

    /// A work item was admitted.
    pub fn work_item_started(&self) {
        self.in_flight.fetch_add(1, Ordering::AcqRel);
    }

    /// A work item finished after `elapsed_millis`.
    ///
    /// The sample is dropped when no listener has activated the publisher.
    /// Calls must pair 1:1 with [`work_item_started`](Self::work_item_started);
    /// an unpaired call skews the count and is not detected.
    pub fn work_item_completed(&self, elapsed_millis: f64) {
        if let Some(counter) = self.processing_time() {
            counter.write_metric(elapsed_millis);
        }
        self.in_flight.fetch_sub(1, Ordering::AcqRel);
    }

    /// A started work item was dropped before it was processed. Undoes the
    /// admission without recording a processing-time sample.
    pub fn work_item_rejected(&self) {
        self.in_flight.fetch_sub(1, Ordering::AcqRel);
    }

    /// Convenience for callers holding a measured `Duration`.
    pub fn work_item_completed_after(&self, elapsed: Duration) {
        self.work_item_completed(elapsed.as_secs_f64() * 1000.0);
    }

    /// Current in-flight count. Acquire-consistent with every completed
    /// increment/decrement.
    pub fn in_flight(&self) -> i64 {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Listener command callback.
    pub fn on_command(&self, cmd: ListenerCommand) {
        match cmd {
            ListenerCommand::Enable { interval } => self.activate(interval),
            ListenerCommand::Disable | ListenerCommand::Update => {
                tracing::trace!(
                    command = cmd.as_str(),
                    state = self.state().as_str(),
                    "listener command ignored"
                );
            }
        }
    }

    fn activate(&self, interval: Duration) {
        let mut ex = self.exports.write().unwrap_or_else(PoisonError::into_inner);
        match ex.state {
            ExportState::Active => return,
            ExportState::Disposed => {
                tracing::debug!("enable after dispose ignored");
                return;
            }
            ExportState::Uninitialized => {}
        }

        // Construction happens under the write lock, so concurrent enables
        // observe `Active` and never build a second instance.
        if ex.processing_time.is_none() {
            ex.processing_time = Some(Arc::new(EventCounter::new(PROCESSING_TIME)));
        }
        if ex.queue_length.is_none() {
            let count = Arc::clone(&self.in_flight);
            ex.queue_length = Some(Arc::new(PollingGauge::new(QUEUE_LENGTH, move || {
                count.load(Ordering::Acquire) as f64
            })));
        }
        ex.state = ExportState::Active;

        tracing::debug!(
            interval_ms = interval.as_millis() as u64,
            "metrics publisher activated"
        );
    }

    /// Release both export objects. Safe without prior activation and safe to
    /// repeat.
    pub fn dispose(&self) {
        let mut ex = self.exports.write().unwrap_or_else(PoisonError::into_inner);
        if ex.state == ExportState::Disposed {
            return;
        }

        if let Some(c) = ex.processing_time.take() {
            c.dispose();
        }
        if let Some(g) = ex.queue_length.take() {
            g.dispose();
        }
        let prev = ex.state;
        ex.state = ExportState::Disposed;

        tracing::debug!(
            from = prev.as_str(),
            in_flight = self.in_flight(),
            "metrics publisher disposed"
        );
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ExportState {
        self.exports.read().unwrap_or_else(PoisonError::into_inner).state
    }

    /// True once enabled and until disposal.
    pub fn is_active(&self) -> bool {
        self.state() == ExportState::Active
    }

    /// The processing-time counter, if active.
    pub fn processing_time(&self) -> Option<Arc<EventCounter>> {
        self.exports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .processing_time
            .clone()
    }

    /// The queue-length gauge, if active.
    pub fn queue_length(&self) -> Option<Arc<PollingGauge>> {
        self.exports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .queue_length
            .clone()
    }

    /// Snapshot every active export object for one reporting interval.
    /// Empty when not active.
    pub fn collect(&self, interval: Duration) -> Vec<CounterPayload> {
        let (counter, gauge) = {
            let ex = self.exports.read().unwrap_or_else(PoisonError::into_inner);
            (ex.processing_time.clone(), ex.queue_length.clone())
        };

        let mut out = Vec::with_capacity(2);
        if let Some(c) = counter {
            out.push(c.take_snapshot(interval));
        }
        if let Some(g) = gauge {
            out.push(g.poll(interval));
        }
        out
    }
}

impl Drop for MetricsPublisher {
    fn drop(&mut self) {
        self.dispose();
    }
}
