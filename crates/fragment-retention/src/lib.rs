//! Fragment-Retention: per-host model store for navigation fragments
//!
//! Screens keep models (view state, loaded pages, selections) keyed by the
//! tag of the fragment that owns them. The store outlives individual
//! fragments and is reconciled against the navigation host on demand.
//!
//! ## Key Components
//!
//! - `FragmentModelStore`: tag -> `ModelBucket` map with add/get/merge
//!   and the `clean_up` reconciliation pass
//! - `NavigationHost`: read-only port exposing attached fragments and the
//!   back stack; a bucket survives clean-up iff either source reaches it
//! - `fakes`: in-memory hosts for tests
//!
//! ```
//! use fragment_retention::fakes::FakeNavigationHost;
//! use fragment_retention::FragmentModelStore;
//!
//! let mut store = FragmentModelStore::new();
//! store.add("home", "scroll", 120_u32);
//! store.add("settings", "dirty", true);
//!
//! let host = FakeNavigationHost::new().with_back_stack_entry(Some("home"));
//! let report = store.clean_up(&host);
//!
//! assert_eq!(report.dropped_tags, vec!["settings".to_string()]);
//! assert_eq!(store.get_by_tag::<u32>("home", "scroll"), Some(&120));
//! ```

mod bucket;
mod config;
mod error;
pub mod fakes;
pub mod host;
pub mod obs;
mod store;

pub use bucket::ModelBucket;
pub use config::RetentionConfig;
pub use error::{RetentionError, RetentionResult};
pub use host::{BackStackEntry, HostCapabilities, NavigationHost, TaggedFragment};
pub use obs::RetentionSpan;
pub use store::{CleanupReport, FragmentModelStore};
