// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0

use core::fmt;

/// Which of the two element arguments was absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MissingElement {
    /// The child element was absent.
    Child,
    /// The ancestor element was absent.
    Ancestor,
    /// Neither element was given.
    Both,
}

impl MissingElement {
    /// Classifies a pair of optional arguments.
    ///
    /// Returns `None` when both are present.
    pub fn classify(child_present: bool, ancestor_present: bool) -> Option<Self> {
        match (child_present, ancestor_present) {
            (true, true) => None,
            (false, true) => Some(Self::Child),
            (true, false) => Some(Self::Ancestor),
            (false, false) => Some(Self::Both),
        }
    }
}

impl fmt::Display for MissingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Child => "child element is missing",
            Self::Ancestor => "ancestor element is missing",
            Self::Both => "child and ancestor elements are missing",
        })
    }
}

/// The ways measuring a relative rect can fail.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectError {
    /// An element argument was absent.
    ///
    /// Raised before the rendering surface is queried.
    #[error("invalid argument: both the child and the ancestor element must be provided ({0})")]
    InvalidArgument(MissingElement),
}
