#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use workerstat_host::config::{self, DumpFormat};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
monitor:
  intervl_ms: 500 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert!(cfg.monitor.enabled);
    assert_eq!(cfg.monitor.interval_ms, 1000);
    assert_eq!(cfg.monitor.dump, DumpFormat::None);
    assert_eq!(cfg.workload.workers, 4);
    assert_eq!(cfg.workload.items, 64);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
monitor:
  enabled: false
  interval_ms: 250
  dump: json
workload:
  workers: 2
  items: 10
  work_ms: 0
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert!(!cfg.monitor.enabled);
    assert_eq!(cfg.monitor.interval().as_millis(), 250);
    assert_eq!(cfg.monitor.dump, DumpFormat::Json);
    assert_eq!(cfg.workload.work_ms, 0);
}

#[test]
fn rejects_wrong_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_out_of_range_values() {
    for bad in [
        "version: 1\nmonitor: { interval_ms: 10 }\n",
        "version: 1\nmonitor: { interval_ms: 60001 }\n",
        "version: 1\nworkload: { workers: 0 }\n",
        "version: 1\nworkload: { items: 0 }\n",
        "version: 1\nworkload: { work_ms: 10001 }\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.code(), "INVALID_CONFIG", "{bad}");
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = config::load_from_file("/nonexistent/workerstat.yaml").expect_err("must fail");
    assert_eq!(err.code(), "IO");
}
