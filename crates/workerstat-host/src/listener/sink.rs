use std::sync::{Arc, Mutex, PoisonError};

use workerstat_core::CounterPayload;

/// Destination for collected payloads.
pub trait PayloadSink: Send + Sync {
    fn emit(&self, payload: &CounterPayload);
}

/// Logs each payload as a structured `info` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl PayloadSink for TracingSink {
    fn emit(&self, p: &CounterPayload) {
        tracing::info!(
            metric = p.name,
            units = p.display_units,
            mean = p.mean,
            stddev = p.standard_deviation,
            count = p.count,
            min = p.min,
            max = p.max,
            interval_sec = p.interval_sec,
            "{}",
            p.display_name
        );
    }
}

/// Keeps every payload in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    inner: Arc<Mutex<Vec<CounterPayload>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payloads(&self) -> Vec<CounterPayload> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Most recent payload per metric name, in first-seen order.
    pub fn latest(&self) -> Vec<CounterPayload> {
        let all = self.payloads();
        let mut out: Vec<CounterPayload> = Vec::new();
        for p in all {
            match out.iter_mut().find(|x| x.name == p.name) {
                Some(slot) => *slot = p,
                None => out.push(p),
            }
        }
        out
    }
}

impl PayloadSink for MemorySink {
    fn emit(&self, payload: &CounterPayload) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payload.clone());
    }
}

/// Keeps only the most recent payload per metric name, in first-seen order.
/// Memory stays bounded by the number of distinct metrics.
#[derive(Debug, Default, Clone)]
pub struct LatestSink {
    inner: Arc<Mutex<Vec<CounterPayload>>>,
}

impl LatestSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Vec<CounterPayload> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl PayloadSink for LatestSink {
    fn emit(&self, payload: &CounterPayload) {
        let mut slots = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match slots.iter_mut().find(|x| x.name == payload.name) {
            Some(slot) => *slot = payload.clone(),
            None => slots.push(payload.clone()),
        }
    }
}
