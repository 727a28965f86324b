use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use workerstat_core::{ListenerCommand, MetricsPublisher};

use super::PayloadSink;

/// One attached listener. Sends `Enable` on attach and `Disable` on detach.
pub struct ListenerSession<S> {
    publisher: Arc<MetricsPublisher>,
    sink: S,
    interval: Duration,
    attached: bool,
}

impl<S: PayloadSink> ListenerSession<S> {
    pub fn attach(publisher: Arc<MetricsPublisher>, sink: S, interval: Duration) -> Self {
        publisher.on_command(ListenerCommand::Enable { interval });
        tracing::debug!(interval_ms = interval.as_millis() as u64, "listener attached");
        Self {
            publisher,
            sink,
            interval,
            attached: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Collect one reporting interval and forward it to the sink.
    /// Returns the number of payloads forwarded.
    pub fn tick(&self) -> usize {
        let payloads = self.publisher.collect(self.interval);
        for p in &payloads {
            self.sink.emit(p);
        }
        payloads.len()
    }

    /// Poll until `shutdown` flips to `true` (or its sender drops), flush one
    /// last interval, then detach. Hands the sink back.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> S {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick();
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        self.tick();
        self.detach();
        self.sink
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.publisher.on_command(ListenerCommand::Disable);
        tracing::debug!("listener detached");
    }
}
