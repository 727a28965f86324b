//! Run lifecycle: attach listener, drive workload, detach, dispose.

use tokio::sync::watch;

use workerstat_core::error::{Result, WorkerStatError};
use workerstat_core::CounterPayload;

use crate::app_state::AppState;
use crate::listener::{LatestSink, ListenerSession, PayloadSink, TracingSink};

/// Outcome of one host run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub processed: u64,
    /// Last payload per metric seen by the listener. Empty without one.
    pub last: Vec<CounterPayload>,
    pub in_flight_at_exit: i64,
}

/// Forwards to the log and keeps the last payload per metric.
#[derive(Debug, Default, Clone)]
struct TeeSink {
    log: TracingSink,
    latest: LatestSink,
}

impl PayloadSink for TeeSink {
    fn emit(&self, payload: &CounterPayload) {
        self.log.emit(payload);
        self.latest.emit(payload);
    }
}

pub async fn run(state: AppState) -> Result<RunReport> {
    let publisher = state.publisher();
    let monitor = &state.cfg().monitor;

    let (stop_tx, stop_rx) = watch::channel(false);
    let listener = if monitor.enabled {
        let session = ListenerSession::attach(
            publisher.clone(),
            TeeSink::default(),
            monitor.interval(),
        );
        Some(tokio::spawn(session.run(stop_rx)))
    } else {
        None
    };

    tracing::info!(
        workers = state.cfg().workload.workers,
        items = state.cfg().workload.items,
        monitor = monitor.enabled,
        "workload starting"
    );
    let processed = crate::workload::run(&state.cfg().workload, publisher.clone()).await;

    let _ = stop_tx.send(true);
    let last = match listener {
        Some(handle) => handle
            .await
            .map_err(|e| WorkerStatError::Internal(format!("listener task failed: {e}")))?
            .latest
            .latest(),
        None => Vec::new(),
    };

    publisher.dispose();
    let processed = processed?;
    let in_flight_at_exit = publisher.in_flight();
    tracing::info!(processed, in_flight_at_exit, "workload finished");

    Ok(RunReport {
        processed,
        last,
        in_flight_at_exit,
    })
}
