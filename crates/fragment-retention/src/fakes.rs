//! In-memory navigation host doubles (testing only)
//!
//! Provides `FakeFragment`, `FakeBackStackEntry`, and `FakeNavigationHost`
//! that satisfy the liveness ports without a real UI toolkit.

use std::cell::Cell;

use crate::host::{BackStackEntry, HostCapabilities, NavigationHost, TaggedFragment};

// ---------------------------------------------------------------------------
// FakeFragment / FakeBackStackEntry
// ---------------------------------------------------------------------------

/// A fragment with an optional retention tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeFragment {
    tag: Option<String>,
}

impl FakeFragment {
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
        }
    }

    pub fn untagged() -> Self {
        Self::default()
    }
}

impl TaggedFragment for FakeFragment {
    fn fragment_tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

/// A back-stack entry with an optional name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeBackStackEntry {
    name: Option<String>,
}

impl FakeBackStackEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn unnamed() -> Self {
        Self::default()
    }
}

impl BackStackEntry for FakeBackStackEntry {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// ---------------------------------------------------------------------------
// FakeNavigationHost
// ---------------------------------------------------------------------------

/// Navigation host backed by two `Vec`s, counting how often each liveness
/// source is enumerated.
///
/// An [`untouchable`](Self::untouchable) host panics as soon as any source
/// or its capabilities are read.
#[derive(Debug, Default)]
pub struct FakeNavigationHost {
    attached: Vec<FakeFragment>,
    back_stack: Vec<FakeBackStackEntry>,
    history_only: bool,
    untouchable: bool,
    attached_traversals: Cell<usize>,
    back_stack_traversals: Cell<usize>,
}

impl FakeNavigationHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attached(mut self, tag: impl Into<String>) -> Self {
        self.attached.push(FakeFragment::tagged(tag));
        self
    }

    pub fn with_untagged_attached(mut self) -> Self {
        self.attached.push(FakeFragment::untagged());
        self
    }

    /// Push an entry on top of the back stack.
    pub fn with_back_stack_entry(mut self, name: Option<&str>) -> Self {
        self.back_stack.push(FakeBackStackEntry {
            name: name.map(str::to_string),
        });
        self
    }

    /// Report that attached fragments cannot be enumerated.
    pub fn history_only(mut self) -> Self {
        self.history_only = true;
        self
    }

    /// Panic on any read. Used to prove a code path never consults the host.
    pub fn untouchable(mut self) -> Self {
        self.untouchable = true;
        self
    }

    pub fn attached_traversals(&self) -> usize {
        self.attached_traversals.get()
    }

    pub fn back_stack_traversals(&self) -> usize {
        self.back_stack_traversals.get()
    }

    /// Detach every fragment, as when the host's view hierarchy is torn down
    /// while the back stack survives.
    pub fn detach_all(&mut self) {
        self.attached.clear();
    }

    /// Pop the top back-stack entry.
    pub fn pop_back_stack(&mut self) -> Option<FakeBackStackEntry> {
        self.back_stack.pop()
    }

    fn touch(&self, source: &str) {
        if self.untouchable {
            panic!("untouchable navigation host was read: {source}");
        }
    }
}

impl NavigationHost for FakeNavigationHost {
    type Fragment = FakeFragment;
    type Entry = FakeBackStackEntry;

    fn capabilities(&self) -> HostCapabilities {
        self.touch("capabilities");
        if self.history_only {
            HostCapabilities::history_only()
        } else {
            HostCapabilities::default()
        }
    }

    fn attached_fragments(&self) -> Box<dyn Iterator<Item = &FakeFragment> + '_> {
        self.touch("attached_fragments");
        self.attached_traversals.set(self.attached_traversals.get() + 1);
        Box::new(self.attached.iter())
    }

    fn back_stack_entry_count(&self) -> usize {
        self.touch("back_stack_entry_count");
        self.back_stack_traversals
            .set(self.back_stack_traversals.get() + 1);
        self.back_stack.len()
    }

    fn back_stack_entry_at(&self, index: usize) -> Option<&FakeBackStackEntry> {
        self.touch("back_stack_entry_at");
        self.back_stack.get(index)
    }
}
