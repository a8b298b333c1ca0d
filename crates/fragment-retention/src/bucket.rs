//! Per-fragment model bucket.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Type-erased mapping from entry key to a retained model.
///
/// Values are stored as `Box<dyn Any>` and recovered with a downcast at
/// lookup time; a downcast to the wrong type reads as a missing entry.
#[derive(Default)]
pub struct ModelBucket {
    models: HashMap<String, Box<dyn Any>>,
}

impl ModelBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ModelBucket::insert`].
    pub fn with<T: Any>(mut self, key: impl Into<String>, model: T) -> Self {
        self.insert(key, model);
        self
    }

    /// Upsert a model, replacing any previous value under `key`.
    pub fn insert<T: Any>(&mut self, key: impl Into<String>, model: T) {
        self.models.insert(key.into(), Box::new(model));
    }

    /// Look up a model as `T`. `None` if absent or of another type.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.models.get(key)?.downcast_ref::<T>()
    }

    /// Mutable variant of [`ModelBucket::get`].
    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.models.get_mut(key)?.downcast_mut::<T>()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.models.contains_key(key)
    }

    /// Whether `key` holds a value that is not a `T`.
    pub(crate) fn holds_other_type<T: Any>(&self, key: &str) -> bool {
        self.models.get(key).is_some_and(|m| !m.is::<T>())
    }

    /// Move every entry of `other` into this bucket, overwriting on conflict.
    pub fn merge(&mut self, other: ModelBucket) {
        self.models.extend(other.models);
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Entry keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }
}

impl fmt::Debug for ModelBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("ModelBucket").field("keys", &keys).finish()
    }
}
