use serde::Serialize;
use std::time::Duration;

use super::MetricDescriptor;

/// How a payload was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CounterKind {
    /// Aggregated from pushed samples.
    Mean,
    /// Read at poll time.
    Gauge,
}

/// One metric's report for one reporting interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterPayload {
    pub name: &'static str,
    pub display_name: &'static str,
    pub display_units: &'static str,
    pub mean: f64,
    pub standard_deviation: f64,
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub interval_sec: f64,
    pub counter_type: CounterKind,
}

impl CounterPayload {
    /// Payload with no observations (disposed object or empty interval).
    pub fn empty(desc: &MetricDescriptor, kind: CounterKind, interval: Duration) -> Self {
        Self {
            name: desc.name,
            display_name: desc.display_name,
            display_units: desc.display_units,
            mean: 0.0,
            standard_deviation: 0.0,
            count: 0,
            min: 0.0,
            max: 0.0,
            interval_sec: interval.as_secs_f64(),
            counter_type: kind,
        }
    }
}
