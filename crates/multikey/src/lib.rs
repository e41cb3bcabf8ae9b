// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Immutable composite keys with precomputed hashes.
//!
//! This crate provides [`MultiKey`], a key value composed of two or more
//! opaque components. The combined hash is computed once at construction and
//! reused for every comparison: differing hashes prove inequality cheaply,
//! while equal hashes still require the full element-wise comparison before
//! two keys are declared equal, since hash collisions are possible.
//!
//! Any `Eq + Hash + Send + Sync + 'static` value can serve as a component via
//! the blanket [`KeyComponent`] implementation. Components of different
//! concrete types never compare equal, even when their bit patterns agree.
//!
//! # Examples
//!
//! ```
//! use multikey::MultiKey;
//!
//! let key = MultiKey::new("track", 7_u32);
//! assert_eq!(key.len(), 2);
//!
//! // Equal components in equal order produce an equal key.
//! assert_eq!(key, MultiKey::new("track", 7_u32));
//!
//! // Order matters.
//! assert_ne!(key, MultiKey::new(7_u32, "track"));
//! ```

mod component;
mod error;
mod key;

pub use component::KeyComponent;
pub use error::{IndexOutOfRange, InvalidArgument};
pub use key::MultiKey;
