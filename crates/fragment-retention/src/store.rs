//! Fragment-scoped model store with navigation-driven clean-up.

use std::any::{type_name, Any};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bucket::ModelBucket;
use crate::config::RetentionConfig;
use crate::error::{RetentionError, RetentionResult};
use crate::host::{BackStackEntry, NavigationHost, TaggedFragment};
use crate::obs::{
    emit_bucket_dropped, emit_cleanup_finished, emit_cleanup_skipped, emit_cleanup_started,
    RetentionSpan,
};

/// Outcome of one clean-up pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupReport {
    /// Tags retained before the pass
    pub before: usize,
    /// Tags retained after the pass
    pub after: usize,
    /// Tags whose buckets were dropped, sorted
    pub dropped_tags: Vec<String>,
    /// Tags kept because an attached fragment resolved to them
    pub kept_via_attached: usize,
    /// Tags kept only because a back-stack entry is named after them
    pub kept_via_back_stack: usize,
    /// The store was empty and the host was never consulted
    pub skipped: bool,
}

/// Models retained per fragment tag for a single navigation host.
///
/// Buckets live until a [`clean_up`](Self::clean_up) pass finds their tag
/// unreachable from both the attached fragments and the back stack.
///
/// The store is meant to be driven from the host's UI thread. Values are
/// `Box<dyn Any>`, so it is neither `Send` nor `Sync`.
#[derive(Debug, Default)]
pub struct FragmentModelStore {
    models: HashMap<String, ModelBucket>,
    config: RetentionConfig,
}

impl FragmentModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RetentionConfig) -> Self {
        Self {
            models: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &RetentionConfig {
        &self.config
    }

    /// Upsert one model under `tag`, creating the bucket on first use.
    pub fn add<T: Any>(&mut self, tag: impl Into<String>, key: impl Into<String>, model: T) {
        self.models.entry(tag.into()).or_default().insert(key, model);
    }

    /// Merge a whole bucket under `tag`, or install it if the tag is new.
    ///
    /// Existing keys are overwritten by the incoming bucket.
    pub fn add_bucket(&mut self, tag: impl Into<String>, bucket: ModelBucket) {
        match self.models.entry(tag.into()) {
            Entry::Occupied(mut existing) => existing.get_mut().merge(bucket),
            Entry::Vacant(slot) => {
                slot.insert(bucket);
            }
        }
    }

    /// [`add`](Self::add) keyed by the fragment's tag.
    ///
    /// Returns `false` and stores nothing if the fragment is untagged.
    pub fn add_for<T: Any>(
        &mut self,
        fragment: &(impl TaggedFragment + ?Sized),
        key: impl Into<String>,
        model: T,
    ) -> bool {
        match fragment.fragment_tag() {
            Some(tag) => {
                self.add(tag, key, model);
                true
            }
            None => false,
        }
    }

    /// [`add_bucket`](Self::add_bucket) keyed by the fragment's tag.
    pub fn add_bucket_for(
        &mut self,
        fragment: &(impl TaggedFragment + ?Sized),
        bucket: ModelBucket,
    ) -> bool {
        match fragment.fragment_tag() {
            Some(tag) => {
                self.add_bucket(tag, bucket);
                true
            }
            None => false,
        }
    }

    /// Look up a model for a fragment as `T`.
    pub fn get<T: Any>(&self, fragment: &(impl TaggedFragment + ?Sized), key: &str) -> Option<&T> {
        self.get_by_tag(fragment.fragment_tag()?, key)
    }

    /// Look up a model by tag alone, for fragments that are not attached.
    ///
    /// Returns `None` for an unknown tag, an unknown key, or a model that
    /// is not a `T`.
    pub fn get_by_tag<T: Any>(&self, tag: &str, key: &str) -> Option<&T> {
        self.models.get(tag)?.get(key)
    }

    /// Mutable variant of [`get_by_tag`](Self::get_by_tag), for updating a
    /// retained model in place.
    pub fn get_mut_by_tag<T: Any>(&mut self, tag: &str, key: &str) -> Option<&mut T> {
        self.models.get_mut(tag)?.get_mut(key)
    }

    /// Like [`get_by_tag`](Self::get_by_tag), but reports why nothing was found.
    pub fn require<T: Any>(&self, tag: &str, key: &str) -> RetentionResult<&T> {
        let bucket = self
            .models
            .get(tag)
            .ok_or_else(|| RetentionError::TagNotFound { tag: tag.into() })?;

        if let Some(model) = bucket.get::<T>(key) {
            return Ok(model);
        }
        if bucket.holds_other_type::<T>(key) {
            return Err(RetentionError::TypeMismatch {
                tag: tag.into(),
                key: key.into(),
                expected: type_name::<T>(),
            });
        }
        Err(RetentionError::KeyNotFound {
            tag: tag.into(),
            key: key.into(),
        })
    }

    pub fn bucket(&self, tag: &str) -> Option<&ModelBucket> {
        self.models.get(tag)
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.models.contains_key(tag)
    }

    /// Retained tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.models.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Drop every bucket whose tag is unreachable from the host.
    ///
    /// A tag survives iff an attached fragment resolves to it or a
    /// back-stack entry carries it as a non-empty name. Each call is a full
    /// sweep. An empty store returns before the host is consulted.
    pub fn clean_up<H: NavigationHost + ?Sized>(&mut self, host: &H) -> CleanupReport {
        let label = self.config.host_label.as_str();
        let _span = RetentionSpan::enter(label);

        let before = self.models.len();
        emit_cleanup_started(label, before);

        if self.models.is_empty() {
            emit_cleanup_skipped(label);
            return CleanupReport {
                skipped: true,
                ..CleanupReport::default()
            };
        }

        let mut keep: HashMap<String, ModelBucket> = HashMap::with_capacity(before);
        let mut kept_via_attached = 0;
        let mut kept_via_back_stack = 0;

        if !self.config.history_only && host.capabilities().attached_fragments {
            for fragment in host.attached_fragments() {
                let Some(tag) = fragment.fragment_tag() else {
                    continue;
                };
                if let Some((tag, bucket)) = self.models.remove_entry(tag) {
                    keep.insert(tag, bucket);
                    kept_via_attached += 1;
                }
            }
        }

        for index in 0..host.back_stack_entry_count() {
            let name = host.back_stack_entry_at(index).and_then(|entry| entry.name());
            let Some(name) = name.filter(|name| !name.is_empty()) else {
                continue;
            };
            // Already-kept tags were moved out of `models` above.
            if let Some((tag, bucket)) = self.models.remove_entry(name) {
                keep.insert(tag, bucket);
                kept_via_back_stack += 1;
            }
        }

        let mut dropped_tags: Vec<String> = self.models.drain().map(|(tag, _)| tag).collect();
        dropped_tags.sort_unstable();
        if self.config.trace_dropped_tags {
            for tag in &dropped_tags {
                emit_bucket_dropped(label, tag);
            }
        }

        self.models = keep;

        let report = CleanupReport {
            before,
            after: self.models.len(),
            dropped_tags,
            kept_via_attached,
            kept_via_back_stack,
            skipped: false,
        };
        emit_cleanup_finished(label, &report);
        report
    }
}
