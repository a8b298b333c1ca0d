//! Structured observability hooks for the clean-up pass.
//!
//! This module provides:
//! - A host-scoped tracing span via the `RetentionSpan` RAII guard
//! - Emission functions for clean-up start, skip, per-tag drop and finish
//!
//! Events are emitted at `debug!` level under the `fragment_retention`
//! target. The embedding host's subscriber decides what is recorded.

use tracing::debug;

use crate::store::CleanupReport;

/// RAII guard that enters a host-scoped span for the duration of a clean-up.
///
/// ```ignore
/// let _span = RetentionSpan::enter("main-activity");
/// // events emitted now carry host = "main-activity"
/// ```
pub struct RetentionSpan {
    _span: tracing::span::EnteredSpan,
}

impl RetentionSpan {
    pub fn enter(host_label: &str) -> Self {
        let span = tracing::debug_span!("fragment_retention.cleanup", host = %host_label);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: clean-up started with the number of retained tags.
pub fn emit_cleanup_started(host_label: &str, before: usize) {
    debug!(event = "cleanup.started", host = %host_label, before = before);
}

/// Emit event: clean-up skipped because the store was empty.
pub fn emit_cleanup_skipped(host_label: &str) {
    debug!(event = "cleanup.skipped", host = %host_label, reason = "empty");
}

/// Emit event: a tag's bucket was unreachable and dropped.
pub fn emit_bucket_dropped(host_label: &str, tag: &str) {
    debug!(event = "cleanup.bucket_dropped", host = %host_label, tag = %tag);
}

/// Emit event: clean-up finished.
pub fn emit_cleanup_finished(host_label: &str, report: &CleanupReport) {
    debug!(
        event = "cleanup.finished",
        host = %host_label,
        before = report.before,
        after = report.after,
        dropped = report.dropped_tags.len(),
        kept_attached = report.kept_via_attached,
        kept_back_stack = report.kept_via_back_stack,
    );
}
