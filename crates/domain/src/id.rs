//! Typed identifier newtype for student records.
//!
//! Unlike generated identifiers, student ids are supplied by the caller
//! as part of the request path, so the newtype wraps a plain `i64` and
//! serializes as a bare JSON integer.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Student`](crate::student::Student).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Wrap a raw integer id.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for StudentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for StudentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}
