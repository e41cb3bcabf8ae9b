// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The loader capability consumed by [`MemoCache`](crate::MemoCache).

use std::{
    fmt::{self, Debug},
    marker::PhantomData,
};

/// Loads values into a cache on demand.
///
/// A loader is a single-operation capability: given a key, produce a value,
/// report that there is none, or fail. The cache stores successful `Some`
/// results and serves them on subsequent lookups without calling the loader
/// again.
///
/// The loader's identity, not its configuration, keys the cache: two
/// distinct loader instances populate independent entries even when they
/// compute the same function over the same keys.
///
/// # Absent results
///
/// `Ok(None)` is returned to the caller but never stored. The cache cannot
/// tell "no entry" apart from "entry with no value", so a loader that
/// produces `None` for a key runs again on every lookup of that key. Keep
/// load cost in mind for keys that legitimately resolve to nothing.
///
/// # Failures
///
/// Errors propagate to the caller of
/// [`get_or_load`](crate::MemoCache::get_or_load) unchanged and are never
/// cached; the next lookup for the same key retries the load.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
///
/// use loadstone::Loader;
///
/// struct Doubler;
///
/// impl Loader for Doubler {
///     type Key = u32;
///     type Value = u32;
///     type Error = Infallible;
///
///     fn load(&self, key: &u32) -> Result<Option<u32>, Infallible> {
///         Ok(Some(key * 2))
///     }
/// }
/// ```
pub trait Loader: Send + Sync {
    /// The lookup key type.
    type Key;

    /// The loaded value type.
    type Value;

    /// The failure type produced by [`load`](Self::load).
    ///
    /// Use [`Infallible`](std::convert::Infallible) for loaders that cannot
    /// fail.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Loads the value for `key`.
    fn load(&self, key: &Self::Key) -> Result<Option<Self::Value>, Self::Error>;
}

/// A [`Loader`] backed by a closure.
///
/// Created by [`loader_fn`].
pub struct LoaderFn<F, K, V, E> {
    func: F,
    _marker: PhantomData<fn(&K) -> Result<Option<V>, E>>,
}

/// Wraps a closure as a [`Loader`].
///
/// Each call to `loader_fn` produces a loader with its own identity: two
/// loaders built from the same closure still populate independent cache
/// entries.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
///
/// use loadstone::{Loader, loader_fn};
///
/// let loader = loader_fn(|key: &String| Ok::<_, Infallible>(Some(key.len())));
/// assert_eq!(loader.load(&"banana".to_string()), Ok(Some(6)));
/// ```
#[must_use]
pub fn loader_fn<F, K, V, E>(func: F) -> LoaderFn<F, K, V, E>
where
    F: Fn(&K) -> Result<Option<V>, E> + Send + Sync,
    E: std::error::Error + Send + Sync + 'static,
{
    LoaderFn {
        func,
        _marker: PhantomData,
    }
}

impl<F, K, V, E> Loader for LoaderFn<F, K, V, E>
where
    F: Fn(&K) -> Result<Option<V>, E> + Send + Sync,
    E: std::error::Error + Send + Sync + 'static,
{
    type Key = K;
    type Value = V;
    type Error = E;

    fn load(&self, key: &K) -> Result<Option<V>, E> {
        (self.func)(key)
    }
}

impl<F, K, V, E> Debug for LoaderFn<F, K, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderFn").finish_non_exhaustive()
    }
}
