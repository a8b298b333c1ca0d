//! Observability tests for the clean-up pass.
//!
//! These verify that structured tracing events are emitted for clean-up
//! start, skip, per-tag drops and finish.

use fragment_retention::fakes::FakeNavigationHost;
use fragment_retention::obs::{emit_bucket_dropped, emit_cleanup_skipped, RetentionSpan};
use fragment_retention::{FragmentModelStore, RetentionConfig};
use tracing_test::traced_test;

#[traced_test]
#[test]
fn test_clean_up_logs_before_and_after() {
    let mut store = FragmentModelStore::with_config(RetentionConfig::for_host("main"));
    store.add("A", "k", 1_u8);
    store.add("B", "k", 1_u8);

    store.clean_up(&FakeNavigationHost::new().with_attached("A"));

    assert!(logs_contain("cleanup.started"));
    assert!(logs_contain("before=2"));
    assert!(logs_contain("cleanup.finished"));
    assert!(logs_contain("after=1"));
    assert!(!logs_contain("cleanup.bucket_dropped"));
}

#[traced_test]
#[test]
fn test_empty_store_logs_skip() {
    let mut store = FragmentModelStore::new();
    store.clean_up(&FakeNavigationHost::new().untouchable());

    assert!(logs_contain("cleanup.skipped"));
    assert!(!logs_contain("cleanup.finished"));
}

#[traced_test]
#[test]
fn test_dropped_tags_traced_when_configured() {
    let mut store = FragmentModelStore::with_config(RetentionConfig {
        trace_dropped_tags: true,
        ..RetentionConfig::for_host("detail-host")
    });
    store.add("stale-screen", "k", 1_u8);

    store.clean_up(&FakeNavigationHost::new());

    assert!(logs_contain("cleanup.bucket_dropped"));
    assert!(logs_contain("stale-screen"));
    assert!(logs_contain("detail-host"));
}

#[traced_test]
#[test]
fn test_emitters_record_host_label() {
    let span = RetentionSpan::enter("span-host");
    emit_cleanup_skipped("span-host");
    emit_bucket_dropped("span-host", "orphan-tag");
    drop(span);

    assert!(logs_contain("cleanup.skipped"));
    assert!(logs_contain("cleanup.bucket_dropped"));
    assert!(logs_contain("span-host"));
    assert!(logs_contain("orphan-tag"));
}
