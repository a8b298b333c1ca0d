//! Liveness ports supplied by the navigation host.
//!
//! The store never sees a concrete navigation controller. Reconciliation
//! reads two sources through these traits:
//! - the fragments currently attached to the view hierarchy
//! - the back stack, bottom to top, whose entries may carry a name
//!
//! In-memory implementations live in the `fakes` module.

/// Resolves a fragment instance to its retention tag.
///
/// The tag must be stable for the lifetime of the instance and equal to the
/// name a back-stack entry carries for the same fragment.
pub trait TaggedFragment {
    /// `None` means the fragment participates in no retention.
    fn fragment_tag(&self) -> Option<&str>;
}

/// One entry of the host's back stack.
pub trait BackStackEntry {
    fn name(&self) -> Option<&str>;
}

/// What the host is able to enumerate at the moment of a clean-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Whether attached fragments can be listed. When `false`,
    /// reconciliation falls back to back-stack liveness only.
    pub attached_fragments: bool,
}

impl HostCapabilities {
    /// A host that can only report its back stack.
    pub fn history_only() -> Self {
        Self {
            attached_fragments: false,
        }
    }
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            attached_fragments: true,
        }
    }
}

/// Read-only view of a navigation host.
pub trait NavigationHost {
    type Fragment: TaggedFragment + ?Sized;
    type Entry: BackStackEntry + ?Sized;

    fn capabilities(&self) -> HostCapabilities {
        HostCapabilities::default()
    }

    /// Fragments currently attached. Only called when
    /// [`HostCapabilities::attached_fragments`] is set.
    fn attached_fragments(&self) -> Box<dyn Iterator<Item = &Self::Fragment> + '_>;

    fn back_stack_entry_count(&self) -> usize;

    /// Entry at `index`, counted from the bottom of the stack.
    fn back_stack_entry_at(&self, index: usize) -> Option<&Self::Entry>;
}

impl<F: TaggedFragment + ?Sized> TaggedFragment for &F {
    fn fragment_tag(&self) -> Option<&str> {
        (**self).fragment_tag()
    }
}

impl TaggedFragment for str {
    fn fragment_tag(&self) -> Option<&str> {
        Some(self)
    }
}

impl TaggedFragment for String {
    fn fragment_tag(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: TaggedFragment> TaggedFragment for Option<T> {
    fn fragment_tag(&self) -> Option<&str> {
        self.as_ref()?.fragment_tag()
    }
}

impl BackStackEntry for Option<String> {
    fn name(&self) -> Option<&str> {
        self.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capabilities_include_attached_fragments() {
        assert!(HostCapabilities::default().attached_fragments);
        assert!(!HostCapabilities::history_only().attached_fragments);
    }

    #[test]
    fn test_plain_strings_are_their_own_tag() {
        assert_eq!("home".fragment_tag(), Some("home"));
        assert_eq!(String::from("detail").fragment_tag(), Some("detail"));
    }

    #[test]
    fn test_absent_fragment_has_no_tag() {
        let none: Option<String> = None;
        assert_eq!(none.fragment_tag(), None);
        assert_eq!(Some(String::from("x")).fragment_tag(), Some("x"));
    }

    #[test]
    fn test_optional_name_entry() {
        assert_eq!(Some(String::from("A")).name(), Some("A"));
        assert_eq!(None::<String>.name(), None);
    }
}
