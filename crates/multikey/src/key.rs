// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The multi key value type.

use std::{
    fmt::{self, Debug},
    hash::{BuildHasher, Hash, Hasher},
};

use foldhash::fast::FixedState;

use crate::{IndexOutOfRange, InvalidArgument, KeyComponent};

/// Seed for the combined component hash. Fixed so that equal keys built at
/// different times agree on their hash.
const COMPONENT_HASH_SEED: u64 = 0x6d75_6c74_696b_6579;

/// An immutable key composed of two or more opaque components.
///
/// The combined hash is computed once at construction and reused for every
/// comparison and every [`Hash`] call. Two keys are equal only when their
/// component sequences are element-wise equal, in order, with the same
/// length; a matching hash alone is never treated as equality.
///
/// A `MultiKey` is a pure value: it is never mutated after construction and
/// owns its components for as long as it lives (for a map key, as long as
/// the entry it indexes).
///
/// # Examples
///
/// ```
/// use multikey::MultiKey;
///
/// let key = MultiKey::new("session", 42_u64);
///
/// assert_eq!(key, MultiKey::new("session", 42_u64));
/// assert_ne!(key, MultiKey::new(42_u64, "session"));
/// assert_eq!(key.component(1)?.downcast_ref::<u64>(), Some(&42));
/// # Ok::<(), multikey::IndexOutOfRange>(())
/// ```
pub struct MultiKey {
    hash: u64,
    components: Box<[Box<dyn KeyComponent>]>,
}

impl MultiKey {
    /// Creates a key from its two components.
    ///
    /// For keys with more than two components use
    /// [`from_components`](Self::from_components).
    #[must_use]
    pub fn new(first: impl KeyComponent, second: impl KeyComponent) -> Self {
        let components: Vec<Box<dyn KeyComponent>> = vec![Box::new(first), Box::new(second)];
        Self::from_boxed(components.into_boxed_slice())
    }

    /// Creates a key from an arbitrary number of components.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if fewer than two components are supplied.
    pub fn from_components(components: Vec<Box<dyn KeyComponent>>) -> Result<Self, InvalidArgument> {
        if components.len() < 2 {
            return Err(InvalidArgument::new(components.len()));
        }
        Ok(Self::from_boxed(components.into_boxed_slice()))
    }

    fn from_boxed(components: Box<[Box<dyn KeyComponent>]>) -> Self {
        let hash = combined_hash(&components);
        Self { hash, components }
    }

    /// Returns the component at `index`.
    ///
    /// Use [`downcast_ref`](KeyComponent::downcast_ref) on the result for
    /// typed access.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `index` is not in `[0, len)`.
    pub fn component(&self, index: usize) -> Result<&dyn KeyComponent, IndexOutOfRange> {
        self.components
            .get(index)
            .map(|component| component.as_ref())
            .ok_or_else(|| IndexOutOfRange::new(index, self.components.len()))
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the key has no components.
    ///
    /// Always `false`: a key carries at least two components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the combined hash computed at construction.
    ///
    /// Stable for the key's lifetime.
    #[must_use]
    pub fn hash_value(&self) -> u64 {
        self.hash
    }
}

impl PartialEq for MultiKey {
    fn eq(&self, other: &Self) -> bool {
        // Differing hashes prove inequality; equal hashes still require the
        // full comparison, hash collisions must not count as hits.
        if self.hash != other.hash || self.components.len() != other.components.len() {
            return false;
        }
        self.components
            .iter()
            .zip(other.components.iter())
            .all(|(ours, theirs)| ours.dyn_eq(theirs.as_ref()))
    }
}

impl Eq for MultiKey {}

impl Hash for MultiKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Debug for MultiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiKey")
            .field("len", &self.components.len())
            .field("hash", &self.hash)
            .finish_non_exhaustive()
    }
}

fn combined_hash(components: &[Box<dyn KeyComponent>]) -> u64 {
    let mut hasher = FixedState::with_seed(COMPONENT_HASH_SEED).build_hasher();
    for component in components {
        component.dyn_hash(&mut hasher);
    }
    hasher.finish()
}
