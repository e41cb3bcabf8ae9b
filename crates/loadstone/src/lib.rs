// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A memoizing object cache with pluggable loaders.
//!
//! This crate provides [`MemoCache`], a generic store that maps a composite
//! lookup key to a lazily computed value:
//! - A caller-supplied [`Loader`] produces values on first access.
//! - For a given (loader, key) pair the loader runs at most once across
//!   concurrent callers.
//! - Entries are keyed by the loader's identity combined with the lookup
//!   key, so unrelated loaders can safely share one cache.
//!
//! The cache never evicts, expires, or bounds its entries: it grows for the
//! lifetime of its owner and is deliberately simple. [`MemoCache::clear`]
//! discards all entries and leaves the cache usable.
//!
//! # Examples
//!
//! ```
//! use std::{convert::Infallible, sync::Arc};
//!
//! use loadstone::{MemoCache, loader_fn};
//!
//! let cache = MemoCache::<u32, String>::new();
//! let loader = Arc::new(loader_fn(|id: &u32| {
//!     Ok::<_, Infallible>(Some(format!("user-{id}")))
//! }));
//!
//! // Loaded on first access, served from the cache afterwards.
//! let value = cache.get_or_load(&loader, Some(&7))?;
//! assert_eq!(value.as_deref(), Some("user-7"));
//! # Ok::<(), Infallible>(())
//! ```
//!
//! # Concurrency
//!
//! [`MemoCache`] is `Send + Sync` and meant to be shared across plain OS
//! threads. Lookups that hit take a shared read and never wait on loads in
//! flight. Misses serialize behind a single exclusive load region: while one
//! value is being computed, every other cache miss waits its turn. This
//! favors correctness and simplicity over throughput under many concurrent
//! misses; see [`MemoCache::get_or_load`] for the full contract.
//!
//! # Feature flags
//!
//! - `logs`: emit structured [`tracing`] events for cache activity.

mod builder;
mod cache;
mod loader;
#[cfg(feature = "logs")]
mod telemetry;

pub use builder::MemoCacheBuilder;
pub use cache::{CacheName, MemoCache};
pub use loader::{Loader, LoaderFn, loader_fn};
pub use multikey::{IndexOutOfRange, InvalidArgument, KeyComponent, MultiKey};
