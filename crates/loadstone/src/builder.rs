// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builder for configuring a [`MemoCache`].

use std::marker::PhantomData;

use crate::{MemoCache, cache::CacheName};

/// Builder for [`MemoCache`] instances.
///
/// Created by [`MemoCache::builder`]. All settings are optional; `build`
/// produces a usable cache either way.
///
/// # Examples
///
/// ```
/// use loadstone::MemoCache;
///
/// let cache = MemoCache::<String, i32>::builder()
///     .name("sessions")
///     .initial_capacity(256)
///     .build();
///
/// assert_eq!(cache.name(), "sessions");
/// ```
#[derive(Debug)]
pub struct MemoCacheBuilder<K, V> {
    name: Option<CacheName>,
    initial_capacity: Option<usize>,
    _phantom: PhantomData<fn(&K) -> V>,
}

impl<K, V> MemoCacheBuilder<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            name: None,
            initial_capacity: None,
            _phantom: PhantomData,
        }
    }

    /// Sets the name used to identify this cache in log output.
    ///
    /// Defaults to the cache's type name.
    #[must_use]
    pub fn name(mut self, name: CacheName) -> Self {
        self.name = Some(name);
        self
    }

    /// Pre-allocates room for `capacity` entries.
    ///
    /// This only sizes the initial allocation; the cache never bounds or
    /// evicts its entries.
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Builds the cache with the configured settings.
    #[must_use]
    pub fn build(self) -> MemoCache<K, V> {
        MemoCache::from_builder(short_type_name::<MemoCache<K, V>>(self.name), self.initial_capacity)
    }
}

fn short_type_name<T>(user_name: Option<&'static str>) -> &'static str {
    if let Some(name) = user_name {
        name
    } else {
        let full = std::any::type_name::<T>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_type_name_with_user_name() {
        assert_eq!(short_type_name::<String>(Some("custom_name")), "custom_name");
    }

    #[test]
    fn short_type_name_without_user_name() {
        assert_eq!(short_type_name::<String>(None), "String");
    }

    #[test]
    fn short_type_name_strips_generic_parameters() {
        assert_eq!(short_type_name::<MemoCache<String, i32>>(None), "MemoCache");
    }
}
