//! Dotted field paths.
//!
//! A path such as `profile.address.street` names a leaf field on a nested
//! model. Every segment before the last names a child-model-valued property
//! on the model one level up.

use crate::PATH_SEPARATOR;
use thiserror::Error as ThisError;

///
/// PathError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PathError {
    #[error("field path is empty")]
    Empty,

    #[error("field path '{path}' has an empty segment at position {index}")]
    EmptySegment { path: String, index: usize },
}

impl PathError {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::EmptySegment { path, .. } => path,
        }
    }
}

///
/// split
///
/// Split at the first separator only. A path without a separator comes back
/// whole, with no remainder.
///
#[must_use]
pub fn split(path: &str) -> (&str, Option<&str>) {
    match path.split_once(PATH_SEPARATOR) {
        Some((head, tail)) => (head, Some(tail)),
        None => (path, None),
    }
}

/// Iterate the segments of a path, in order.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR)
}

/// Last segment of a path.
#[must_use]
pub fn leaf(path: &str) -> &str {
    path.rsplit_once(PATH_SEPARATOR)
        .map_or(path, |(_, leaf)| leaf)
}

#[must_use]
pub fn is_nested(path: &str) -> bool {
    path.contains(PATH_SEPARATOR)
}

///
/// validate
///
/// Reject the empty path and any empty segment produced by a leading,
/// trailing, or doubled separator.
///
pub fn validate(path: &str) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    match segments(path).position(str::is_empty) {
        Some(index) => Err(PathError::EmptySegment {
            path: path.to_string(),
            index,
        }),
        None => Ok(()),
    }
}

///
/// TESTS
///
