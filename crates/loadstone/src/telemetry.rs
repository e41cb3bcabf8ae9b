// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Log events for cache activity.

/// What happened during a cache operation.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CacheActivity {
    Hit,
    Miss,
    Loaded,
    AbsentResult,
    LoadFailed,
    Cleared,
}

impl CacheActivity {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "cache.hit",
            Self::Miss => "cache.miss",
            Self::Loaded => "cache.loaded",
            Self::AbsentResult => "cache.absent_result",
            Self::LoadFailed => "cache.load_failed",
            Self::Cleared => "cache.cleared",
        }
    }
}

/// Emits one structured event for `activity` on the named cache.
pub(crate) fn record(cache: &'static str, activity: CacheActivity) {
    tracing::debug!(cache, activity = activity.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_names_are_distinct() {
        let names = [
            CacheActivity::Hit.as_str(),
            CacheActivity::Miss.as_str(),
            CacheActivity::Loaded.as_str(),
            CacheActivity::AbsentResult.as_str(),
            CacheActivity::LoadFailed.as_str(),
            CacheActivity::Cleared.as_str(),
        ];

        for (index, name) in names.iter().enumerate() {
            assert!(names.iter().skip(index + 1).all(|other| other != name));
        }
    }
}
