// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Opaque key components with dynamic equality and hashing.

use std::{
    any::{Any, TypeId},
    hash::{Hash, Hasher},
};

/// A value usable as one component of a [`MultiKey`](crate::MultiKey).
///
/// This trait is implemented automatically for every
/// `Eq + Hash + Send + Sync + 'static` type; it is not meant to be
/// implemented by hand. Components carry their own notion of identity: two
/// components are equal only when they have the same concrete type and their
/// values compare equal.
pub trait KeyComponent: Send + Sync + 'static {
    /// Compares this component against another for equality.
    ///
    /// Components of different concrete types are never equal.
    fn dyn_eq(&self, other: &dyn KeyComponent) -> bool;

    /// Feeds this component into `state`.
    ///
    /// The concrete type participates in the hash, so equal bit patterns of
    /// different types rarely share a hash (they are unequal either way).
    fn dyn_hash(&self, state: &mut dyn Hasher);

    /// Returns this component as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T> KeyComponent for T
where
    T: Eq + Hash + Send + Sync + 'static,
{
    fn dyn_eq(&self, other: &dyn KeyComponent) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|other| self == other)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn KeyComponent {
    /// Returns a reference to the component if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Returns `true` if the component is of type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_requires_matching_types() {
        let component: &dyn KeyComponent = &1_u32;

        assert!(component.dyn_eq(&1_u32));
        assert!(!component.dyn_eq(&2_u32));
        assert!(!component.dyn_eq(&1_i64));
    }

    #[test]
    fn downcast_recovers_the_concrete_value() {
        let component: &dyn KeyComponent = &"tag";

        assert!(component.is::<&str>());
        assert_eq!(component.downcast_ref::<&str>(), Some(&"tag"));
        assert_eq!(component.downcast_ref::<String>(), None);
    }
}
