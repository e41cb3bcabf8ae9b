// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The memoizing cache type.

use std::{
    any::Any,
    collections::HashMap,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    marker::PhantomData,
    sync::Arc,
};

use foldhash::fast::RandomState;
use multikey::MultiKey;
use parking_lot::{Mutex, RwLock};

use crate::Loader;
#[cfg(feature = "logs")]
use crate::telemetry::{self, CacheActivity};

/// Type alias for cache names used in log output.
pub type CacheName = &'static str;

/// A memoizing object cache.
///
/// `MemoCache` maps a composite key, built from a loader's identity and a
/// caller-supplied lookup key, to the value that loader produced. Values are
/// computed on first access through [`get_or_load`](Self::get_or_load) and
/// served from the cache afterwards; for a given (loader, key) pair the
/// loader runs at most once across concurrent callers.
///
/// The cache holds entries for the lifetime of its owner: there is no
/// eviction, expiration, or size bound. [`clear`](Self::clear) discards all
/// entries and leaves the instance usable. There is no process-wide
/// instance; construct one per owning scope and pass it where it is needed.
///
/// # Examples
///
/// ```
/// use std::{convert::Infallible, sync::Arc};
///
/// use loadstone::{MemoCache, loader_fn};
///
/// let cache = MemoCache::<String, usize>::new();
/// let loader = Arc::new(loader_fn(|key: &String| Ok::<_, Infallible>(Some(key.len()))));
///
/// let len = cache.get_or_load(&loader, Some(&"banana".to_string()))?;
/// assert_eq!(len, Some(6));
/// # Ok::<(), Infallible>(())
/// ```
pub struct MemoCache<K, V> {
    name: CacheName,
    entries: RwLock<HashMap<MultiKey, V, RandomState>>,
    /// Serializes the re-check/load/store sequence for every cache miss.
    load_lock: Mutex<()>,
    _phantom: PhantomData<fn(&K)>,
}

/// Constructor and maintenance methods.
impl<K, V> MemoCache<K, V> {
    /// Creates a cache with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new cache builder.
    ///
    /// The builder allows setting a name for log output and pre-sizing the
    /// entry map before constructing the cache.
    #[must_use]
    pub fn builder() -> crate::MemoCacheBuilder<K, V> {
        crate::MemoCacheBuilder::new()
    }

    pub(crate) fn from_builder(name: CacheName, initial_capacity: Option<usize>) -> Self {
        let entries = match initial_capacity {
            Some(capacity) => HashMap::with_capacity_and_hasher(capacity, RandomState::default()),
            None => HashMap::with_hasher(RandomState::default()),
        };
        Self {
            name,
            entries: RwLock::new(entries),
            load_lock: Mutex::new(()),
            _phantom: PhantomData,
        }
    }

    /// Returns the name of this cache for log identification.
    #[must_use]
    pub fn name(&self) -> CacheName {
        self.name
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Discards every stored entry.
    ///
    /// The cache stays usable; lookups after the clear reload through their
    /// loaders. Calls racing with a clear either complete against the old
    /// state or observe a miss and reload; individual entries are never torn.
    pub fn clear(&self) {
        self.entries.write().clear();
        #[cfg(feature = "logs")]
        telemetry::record(self.name, CacheActivity::Cleared);
    }
}

impl<K, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lookup methods.
impl<K, V> MemoCache<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Returns the value for `key`, loading it on first access.
    ///
    /// The entry key combines the identity of `loader` with `key`, so
    /// distinct loader instances with the same lookup key occupy independent
    /// entries and unrelated loaders can safely share one cache. A `None`
    /// key is never memoized: the call returns `Ok(None)` without touching
    /// the stored mapping and without invoking the loader.
    ///
    /// Already-loaded entries are served from a shared read and never wait
    /// on loads in flight. On a miss the cache takes its single exclusive
    /// load region, re-checks the mapping (another caller may have completed
    /// the same load in the meantime), and only then invokes the loader, so
    /// each (loader, key) pair loads at most once no matter how many callers
    /// race for it. The loader runs while the region is held: a slow load
    /// delays every other cache miss, though never hits. There is no timeout
    /// and no cancellation.
    ///
    /// # Absent results
    ///
    /// A loader returning `Ok(None)` produces `Ok(None)` here and stores
    /// nothing, so the loader runs again on the next lookup for that key.
    /// See [`Loader`] for the full account of this behavior.
    ///
    /// # Errors
    ///
    /// Loader failures propagate unchanged and are not cached: the entry
    /// stays absent and the next lookup for the same key retries the load.
    /// Callers that were waiting on the exclusive region when a load failed
    /// re-check, find no entry, and invoke the loader themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::{convert::Infallible, sync::Arc};
    ///
    /// use loadstone::{MemoCache, loader_fn};
    ///
    /// let cache = MemoCache::<u32, u32>::new();
    /// let loader = Arc::new(loader_fn(|key: &u32| Ok::<_, Infallible>(Some(key * 2))));
    ///
    /// assert_eq!(cache.get_or_load(&loader, Some(&21))?, Some(42));
    /// assert_eq!(cache.get_or_load(&loader, None)?, None);
    /// # Ok::<(), Infallible>(())
    /// ```
    pub fn get_or_load<L>(&self, loader: &Arc<L>, key: Option<&K>) -> Result<Option<V>, L::Error>
    where
        L: Loader<Key = K, Value = V> + 'static,
    {
        let Some(key) = key else {
            // Absent keys are never memoized.
            return Ok(None);
        };

        let entry_key = MultiKey::new(LoaderIdentity::of(loader), key.clone());

        if let Some(value) = self.entries.read().get(&entry_key) {
            #[cfg(feature = "logs")]
            telemetry::record(self.name, CacheActivity::Hit);
            return Ok(Some(value.clone()));
        }

        let _exclusive = self.load_lock.lock();

        // Another caller may have completed the same load while we waited.
        if let Some(value) = self.entries.read().get(&entry_key) {
            #[cfg(feature = "logs")]
            telemetry::record(self.name, CacheActivity::Hit);
            return Ok(Some(value.clone()));
        }

        #[cfg(feature = "logs")]
        telemetry::record(self.name, CacheActivity::Miss);

        match loader.load(key) {
            Ok(Some(value)) => {
                self.entries.write().insert(entry_key, value.clone());
                #[cfg(feature = "logs")]
                telemetry::record(self.name, CacheActivity::Loaded);
                Ok(Some(value))
            }
            Ok(None) => {
                // Not stored: the mapping cannot tell "no entry" from
                // "entry with no value", so absent results reload on every
                // lookup.
                #[cfg(feature = "logs")]
                telemetry::record(self.name, CacheActivity::AbsentResult);
                Ok(None)
            }
            Err(error) => {
                #[cfg(feature = "logs")]
                telemetry::record(self.name, CacheActivity::LoadFailed);
                Err(error)
            }
        }
    }

    /// Returns `true` if a value is stored for `loader` and `key`.
    #[must_use]
    pub fn contains<L>(&self, loader: &Arc<L>, key: &K) -> bool
    where
        L: Loader<Key = K, Value = V> + 'static,
    {
        let entry_key = MultiKey::new(LoaderIdentity::of(loader), key.clone());
        self.entries.read().contains_key(&entry_key)
    }
}

impl<K, V> Debug for MemoCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Key component carrying a loader's identity.
///
/// Equality and hashing follow the `Arc` allocation, not the loader's
/// contents: distinct loader instances never compare equal, even when their
/// configuration does. The clone stored in the entry key keeps the
/// allocation alive, so an address uniquely names one loader for as long as
/// any entry under it exists.
struct LoaderIdentity(Arc<dyn Any + Send + Sync>);

impl LoaderIdentity {
    fn of<L: Send + Sync + 'static>(loader: &Arc<L>) -> Self {
        Self(Arc::clone(loader) as Arc<dyn Any + Send + Sync>)
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>().addr()
    }
}

impl PartialEq for LoaderIdentity {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for LoaderIdentity {}

impl Hash for LoaderIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.addr());
    }
}

impl Debug for LoaderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoaderIdentity({:#x})", self.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_identity_follows_the_allocation() {
        let loader = Arc::new("loader");
        let alias = Arc::clone(&loader);
        let other = Arc::new("loader");

        assert_eq!(LoaderIdentity::of(&loader), LoaderIdentity::of(&alias));
        assert_ne!(LoaderIdentity::of(&loader), LoaderIdentity::of(&other));
    }

    #[test]
    fn loader_identity_hash_matches_equality() {
        let loader = Arc::new(7_u64);
        let alias = Arc::clone(&loader);

        assert_eq!(LoaderIdentity::of(&loader).addr(), LoaderIdentity::of(&alias).addr());
    }
}
