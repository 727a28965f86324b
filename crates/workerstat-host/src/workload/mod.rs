//! Simulated worker pool driving the publisher.
//!
//! Every item is reported as started when it is admitted to the queue and as
//! completed once a worker finishes it, so the in-flight count doubles as the
//! queue length. Processing time is measured from dequeue to completion.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

use workerstat_core::error::{Result, WorkerStatError};
use workerstat_core::MetricsPublisher;

use crate::config::WorkloadSection;

/// Simulated work duration for item `id`: base plus a small spread.
pub fn work_duration(base_ms: u64, id: u64) -> Duration {
    Duration::from_millis(base_ms + id % 5)
}

/// Run `cfg.items` items over `cfg.workers` workers. Returns items processed.
pub async fn run(cfg: &WorkloadSection, publisher: Arc<MetricsPublisher>) -> Result<u64> {
    let (tx, rx) = mpsc::channel::<u64>(cfg.workers * 4);
    let rx = Arc::new(Mutex::new(rx));

    let mut workers = JoinSet::new();
    for worker in 0..cfg.workers {
        let rx = Arc::clone(&rx);
        let publisher = Arc::clone(&publisher);
        let base_ms = cfg.work_ms;
        workers.spawn(async move {
            let mut done = 0u64;
            loop {
                let next = rx.lock().await.recv().await;
                let Some(id) = next else { break };

                let started = Instant::now();
                tokio::time::sleep(work_duration(base_ms, id)).await;
                publisher.work_item_completed_after(started.elapsed());
                done += 1;
            }
            tracing::debug!(worker, done, "worker finished");
            done
        });
    }

    for id in 0..cfg.items {
        publisher.work_item_started();
        if tx.send(id).await.is_err() {
            // every worker is gone; undo the admission we just reported
            publisher.work_item_rejected();
            return Err(WorkerStatError::Internal("worker pool closed early".into()));
        }
    }
    drop(tx);

    let mut processed = 0u64;
    while let Some(res) = workers.join_next().await {
        processed +=
            res.map_err(|e| WorkerStatError::Internal(format!("worker task failed: {e}")))?;
    }
    Ok(processed)
}
