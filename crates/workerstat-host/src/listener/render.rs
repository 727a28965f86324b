//! One-shot textual dumps of collected payloads.

use std::fmt::Write;

use workerstat_core::error::{Result, WorkerStatError};
use workerstat_core::{CounterKind, CounterPayload};

/// Metric names use `-`; exposition names use `_`.
fn exposition_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Render in a Prometheus-like text format.
pub fn render_text(payloads: &[CounterPayload]) -> String {
    let mut out = String::new();
    for p in payloads {
        let name = exposition_name(p.name);
        let _ = writeln!(out, "# HELP {} {} ({})", name, p.display_name, p.display_units);
        match p.counter_type {
            CounterKind::Gauge => {
                let _ = writeln!(out, "# TYPE {} gauge", name);
                let _ = writeln!(out, "{} {}", name, p.mean);
            }
            CounterKind::Mean => {
                let _ = writeln!(out, "# TYPE {} summary", name);
                let _ = writeln!(out, "{}_mean {}", name, p.mean);
                let _ = writeln!(out, "{}_stddev {}", name, p.standard_deviation);
                let _ = writeln!(out, "{}_min {}", name, p.min);
                let _ = writeln!(out, "{}_max {}", name, p.max);
                let _ = writeln!(out, "{}_count {}", name, p.count);
            }
        }
    }
    out
}

pub fn render_json(payloads: &[CounterPayload]) -> Result<String> {
    serde_json::to_string_pretty(payloads)
        .map_err(|e| WorkerStatError::Internal(format!("render json failed: {e}")))
}
