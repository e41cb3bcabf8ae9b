// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates basic memoization through a closure loader.

use std::{convert::Infallible, sync::Arc};

use loadstone::{MemoCache, loader_fn};

#[expect(clippy::unwrap_used, reason = "Example code")]
fn main() {
    let cache = MemoCache::<u32, String>::new();
    let loader = Arc::new(loader_fn(|id: &u32| {
        println!("loading user {id}");
        Ok::<_, Infallible>(Some(format!("user-{id}")))
    }));

    // The loader runs once; later lookups are served from the cache.
    for _ in 0..3 {
        let value = cache.get_or_load(&loader, Some(&7)).unwrap();
        println!("got {value:?}");
    }

    // Clearing discards the entry, so the next lookup loads again.
    cache.clear();
    let value = cache.get_or_load(&loader, Some(&7)).unwrap();
    println!("after clear: {value:?}");
}
