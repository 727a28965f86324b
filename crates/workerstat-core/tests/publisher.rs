#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use workerstat_core::{CounterKind, ExportState, ListenerCommand, MetricsPublisher};

const TICK: Duration = Duration::from_secs(1);

fn enable() -> ListenerCommand {
    ListenerCommand::Enable { interval: TICK }
}

#[test]
fn concurrent_starts_and_completions_lose_no_updates() {
    let p = Arc::new(MetricsPublisher::new());
    p.on_command(enable());

    let threads = 8;
    let starts_per_thread = 5_000;
    let completes_per_thread = 3_000;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let p = Arc::clone(&p);
            thread::spawn(move || {
                for i in 0..starts_per_thread {
                    p.work_item_started();
                    if i < completes_per_thread {
                        p.work_item_completed(1.0);
                    }
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let n = (threads * starts_per_thread) as i64;
    let m = (threads * completes_per_thread) as i64;
    assert_eq!(p.in_flight(), n - m);
    assert_eq!(p.processing_time().unwrap().pending(), m as u64);
}

#[test]
fn concurrent_enable_builds_one_instance() {
    let p = Arc::new(MetricsPublisher::new());
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let p = Arc::clone(&p);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                p.on_command(enable());
                (p.processing_time().unwrap(), p.queue_length().unwrap())
            })
        })
        .collect();

    let seen: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let (c0, g0) = &seen[0];
    for (c, g) in &seen {
        assert!(Arc::ptr_eq(c, c0));
        assert!(Arc::ptr_eq(g, g0));
    }
    assert_eq!(p.state(), ExportState::Active);
}

#[test]
fn repeated_enable_keeps_the_same_objects() {
    let p = MetricsPublisher::new();
    p.on_command(enable());
    let c = p.processing_time().unwrap();
    let g = p.queue_length().unwrap();

    p.on_command(enable());
    assert!(Arc::ptr_eq(&c, &p.processing_time().unwrap()));
    assert!(Arc::ptr_eq(&g, &p.queue_length().unwrap()));
    // publisher + our clone; a discarded duplicate would not be referenced here
    assert_eq!(Arc::strong_count(&c), 2);
}

#[test]
fn dispose_clears_exports_and_later_completion_is_noop() {
    let p = MetricsPublisher::new();
    p.on_command(enable());
    let held = p.processing_time().unwrap();

    p.work_item_started();
    p.dispose();

    assert_eq!(p.state(), ExportState::Disposed);
    assert!(p.processing_time().is_none());
    assert!(p.queue_length().is_none());
    assert!(held.is_disposed());

    p.work_item_completed(7.0);
    assert_eq!(p.in_flight(), 0);
    assert!(p.collect(TICK).is_empty());
}

#[test]
fn dispose_without_activation_is_fine() {
    let p = MetricsPublisher::new();
    p.dispose();
    p.dispose();
    assert_eq!(p.state(), ExportState::Disposed);
    assert!(p.processing_time().is_none());
    assert!(p.queue_length().is_none());
}

#[test]
fn enable_after_dispose_is_ignored() {
    let p = MetricsPublisher::new();
    p.dispose();
    p.on_command(enable());
    assert_eq!(p.state(), ExportState::Disposed);
    assert!(p.processing_time().is_none());
}

#[test]
fn disable_keeps_metrics_allocated() {
    let p = MetricsPublisher::new();
    p.on_command(enable());
    p.on_command(ListenerCommand::Disable);
    p.on_command(ListenerCommand::Update);
    assert!(p.is_active());
    assert!(p.processing_time().is_some());
    assert!(p.queue_length().is_some());
}

#[test]
fn poll_sees_increment_and_decrement_from_joined_thread() {
    let p = Arc::new(MetricsPublisher::new());
    p.on_command(enable());
    let gauge = p.queue_length().unwrap();
    p.work_item_started();

    let other = Arc::clone(&p);
    thread::spawn(move || {
        other.work_item_started();
        other.work_item_started();
        other.work_item_completed(3.0);
    })
    .join()
    .unwrap();

    assert_eq!(gauge.value(), Some(2.0));
}

#[test]
fn poll_tracks_live_value_across_threads() {
    let p = Arc::new(MetricsPublisher::new());
    p.on_command(enable());
    let gauge = p.queue_length().unwrap();
    let ready = Arc::new(AtomicBool::new(false));

    let (p2, ready2) = (Arc::clone(&p), Arc::clone(&ready));
    let h = thread::spawn(move || {
        p2.work_item_started();
        ready2.store(true, Ordering::Release);
    });
    while !ready.load(Ordering::Acquire) {
        std::hint::spin_loop();
    }
    assert_eq!(gauge.value(), Some(1.0));
    h.join().unwrap();
}

#[test]
fn three_starts_one_completion_when_active() {
    let p = MetricsPublisher::new();
    p.on_command(enable());
    for _ in 0..3 {
        p.work_item_started();
    }
    p.work_item_completed(12.0);

    assert_eq!(p.in_flight(), 2);
    let out = p.collect(TICK);
    let time = out.iter().find(|x| x.name == "unit-processing-time").unwrap();
    assert_eq!(time.count, 1);
    assert_eq!(time.mean, 12.0);
    assert_eq!(time.counter_type, CounterKind::Mean);
    let queue = out.iter().find(|x| x.name == "worker-queue-length").unwrap();
    assert_eq!(queue.mean, 2.0);
    assert_eq!(queue.display_units, "items");
}

#[test]
fn three_starts_one_completion_when_inactive() {
    let p = MetricsPublisher::new();
    for _ in 0..3 {
        p.work_item_started();
    }
    p.work_item_completed(12.0);

    assert_eq!(p.in_flight(), 2);
    assert_eq!(p.state(), ExportState::Uninitialized);
    assert!(p.collect(TICK).is_empty());

    // activation later does not resurrect dropped samples
    p.on_command(enable());
    assert_eq!(p.processing_time().unwrap().pending(), 0);
}

#[test]
fn zero_millis_sample_is_recorded() {
    let p = MetricsPublisher::new();
    p.on_command(enable());
    p.work_item_started();
    p.work_item_completed(0.0);

    let snap = p.processing_time().unwrap().take_snapshot(TICK);
    assert_eq!(snap.count, 1);
    assert_eq!(snap.min, 0.0);
    assert_eq!(snap.max, 0.0);
}

#[test]
fn unpaired_completion_goes_negative_silently() {
    let p = MetricsPublisher::new();
    p.work_item_completed(1.0);
    assert_eq!(p.in_flight(), -1);
}

#[test]
fn rejected_item_undoes_admission_without_sample() {
    let p = MetricsPublisher::new();
    p.on_command(enable());
    p.work_item_started();
    p.work_item_started();
    p.work_item_rejected();

    assert_eq!(p.in_flight(), 1);
    assert_eq!(p.processing_time().unwrap().pending(), 0);
}

#[test]
fn duration_completion_converts_to_millis() {
    let p = MetricsPublisher::new();
    p.on_command(enable());
    p.work_item_started();
    p.work_item_completed_after(Duration::from_micros(2_500));

    let snap = p.processing_time().unwrap().take_snapshot(TICK);
    assert!((snap.mean - 2.5).abs() < 1e-9);
}
