// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error types for multi key construction and access.

/// A multi key was constructed with an invalid argument.
///
/// Returned by [`MultiKey::from_components`](crate::MultiKey::from_components)
/// when fewer than two components are supplied.
#[ohno::error]
#[display("a multi key requires at least two components, got {count}")]
pub struct InvalidArgument {
    count: usize,
}

/// A component index was outside the key's bounds.
///
/// Returned by [`MultiKey::component`](crate::MultiKey::component) when the
/// index is not in `[0, len)`.
#[ohno::error]
#[display("component index {index} is out of range for a multi key with {size} components")]
pub struct IndexOutOfRange {
    index: usize,
    size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display_names_the_count() {
        let error = InvalidArgument::new(1usize);
        assert!(format!("{error}").contains("got 1"));
    }

    #[test]
    fn index_out_of_range_display_names_index_and_size() {
        let error = IndexOutOfRange::new(5usize, 2usize);
        let rendered = format!("{error}");
        assert!(rendered.contains("index 5"));
        assert!(rendered.contains("2 components"));
    }
}
