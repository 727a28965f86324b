use std::time::Duration;

use serde::Deserialize;
use workerstat_core::error::{Result, WorkerStatError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    pub version: u32,

    #[serde(default)]
    pub monitor: MonitorSection,

    #[serde(default)]
    pub workload: WorkloadSection,
}

impl HostConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(WorkerStatError::UnsupportedVersion);
        }
        self.monitor.validate()?;
        self.workload.validate()?;
        Ok(())
    }
}

/// What to print once the run finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DumpFormat {
    #[default]
    None,
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    /// Attach a listener session for the duration of the run.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default)]
    pub dump: DumpFormat,
}

impl Default for MonitorSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            interval_ms: default_interval_ms(),
            dump: DumpFormat::default(),
        }
    }
}

impl MonitorSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=60_000).contains(&self.interval_ms) {
            return Err(WorkerStatError::InvalidConfig(
                "monitor.interval_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkloadSection {
    #[serde(default = "default_workers")]
    pub workers: usize,

    #[serde(default = "default_items")]
    pub items: u64,

    /// Base simulated processing time per item.
    #[serde(default = "default_work_ms")]
    pub work_ms: u64,
}

impl Default for WorkloadSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            items: default_items(),
            work_ms: default_work_ms(),
        }
    }
}

impl WorkloadSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=256).contains(&self.workers) {
            return Err(WorkerStatError::InvalidConfig(
                "workload.workers must be between 1 and 256".into(),
            ));
        }
        if !(1..=1_000_000).contains(&self.items) {
            return Err(WorkerStatError::InvalidConfig(
                "workload.items must be between 1 and 1000000".into(),
            ));
        }
        if self.work_ms > 10_000 {
            return Err(WorkerStatError::InvalidConfig(
                "workload.work_ms must be at most 10000".into(),
            ));
        }
        Ok(())
    }
}

fn default_enabled() -> bool {
    true
}
fn default_interval_ms() -> u64 {
    1000
}
fn default_workers() -> usize {
    4
}
fn default_items() -> u64 {
    64
}
fn default_work_ms() -> u64 {
    5
}
