// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Two unrelated loaders sharing one cache without key collisions.
//!
//! Entries are keyed by loader identity combined with the lookup key, so
//! both loaders can use the same raw keys on the same cache instance.

use std::{convert::Infallible, sync::Arc};

use loadstone::{MemoCache, loader_fn};

#[expect(clippy::unwrap_used, reason = "Example code")]
fn main() {
    let cache = MemoCache::<String, String>::new();

    let upper = Arc::new(loader_fn(|key: &String| {
        Ok::<_, Infallible>(Some(key.to_uppercase()))
    }));
    let lower = Arc::new(loader_fn(|key: &String| {
        Ok::<_, Infallible>(Some(key.to_lowercase()))
    }));

    let key = "Greeting".to_string();

    let shouted = cache.get_or_load(&upper, Some(&key)).unwrap();
    let whispered = cache.get_or_load(&lower, Some(&key)).unwrap();

    println!("{shouted:?} / {whispered:?}");
    println!("entries: {}", cache.len());
}
