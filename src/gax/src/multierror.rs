// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Aggregate multiple failures under a common prefix.
//!
//! Validating a request typically finds more than one problem. Reporting them
//! one at a time forces the application to fix one field, retry, and discover
//! the next problem. Instead, the parameter sets in this SDK collect every
//! failure into a [Prefixed] aggregator and report them all at once.
//!
//! Aggregators nest: a parameter set that embeds another parameter set adds the
//! embedded aggregator as a single entry, which renders with its own prefix.
//!
//! # Example
//! ```
//! use cloud_sdk_gax::multierror::Prefixed;
//! let mut inner = Prefixed::new("deployment params");
//! inner.push("api reference is required for the operation");
//! let mut outer = Prefixed::new("deployment resync");
//! outer.push(inner);
//! outer.push("region cannot be empty");
//! assert_eq!(
//!     outer.to_string(),
//!     "deployment resync: deployment params: api reference is required for the operation; region cannot be empty"
//! );
//! assert_eq!(outer.leaf_count(), 2);
//! ```

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// An ordered collection of failures sharing a common prefix.
///
/// An empty aggregator represents "no error", use [Prefixed::into_result] to
/// convert the aggregator into a `Result`.
#[derive(Debug)]
pub struct Prefixed {
    prefix: String,
    entries: Vec<Entry>,
}

/// A single failure recorded in a [Prefixed] aggregator.
#[derive(Debug)]
#[non_exhaustive]
pub enum Entry {
    /// A leaf message.
    Message(String),
    /// A nested aggregator, rendered with its own prefix.
    Nested(Prefixed),
    /// Any other error, for example an error returned by the service.
    Error(BoxError),
}

impl Prefixed {
    /// Creates a new, empty aggregator.
    pub fn new<T: Into<String>>(prefix: T) -> Self {
        Self {
            prefix: prefix.into(),
            entries: Vec::new(),
        }
    }

    /// Records a failure.
    ///
    /// Empty nested aggregators are ignored, they represent no failures.
    pub fn push<T: Into<Entry>>(&mut self, entry: T) {
        match entry.into() {
            Entry::Nested(p) if p.is_empty() => {}
            e => self.entries.push(e),
        }
    }

    /// Records a failure, returning the updated aggregator.
    pub fn append<T: Into<Entry>>(mut self, entry: T) -> Self {
        self.push(entry);
        self
    }

    /// Records the failure in `result`, if any.
    ///
    /// Returns the successful value, if any.
    pub fn push_result<T, E: Into<Entry>>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.push(e);
                None
            }
        }
    }

    /// Returns `Ok(())` when no failures were recorded, otherwise returns the
    /// aggregator as the error.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            return Ok(());
        }
        Err(self)
    }

    /// The prefix used when rendering this aggregator.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The recorded failures, in the order they were recorded.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The number of direct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no failures were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of leaf failures, counting through nested aggregators.
    pub fn leaf_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e {
                Entry::Nested(p) => p.leaf_count(),
                _ => 1,
            })
            .sum()
    }

    fn fmt_tree(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let count = self.entries.len();
        let noun = if count == 1 { "error" } else { "errors" };
        write!(f, "{}: {count} {noun} occurred:", self.prefix)?;
        let indent = "  ".repeat(depth + 1);
        for entry in &self.entries {
            write!(f, "\n{indent}* ")?;
            match entry {
                Entry::Nested(p) => p.fmt_tree(f, depth + 1)?,
                Entry::Message(m) => write!(f, "{m}")?,
                Entry::Error(e) => write!(f, "{e}")?,
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Prefixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            return self.fmt_tree(f, 0);
        }
        write!(f, "{}", self.prefix)?;
        // An aggregator without a prefix renders its entries only.
        let first = if self.prefix.is_empty() { "" } else { ": " };
        for (i, entry) in self.entries.iter().enumerate() {
            let sep = if i == 0 { first } else { "; " };
            write!(f, "{sep}{entry}")?;
        }
        Ok(())
    }
}

impl StdError for Prefixed {}

impl PartialEq for Prefixed {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix && self.entries == other.entries
    }
}

impl Entry {
    /// Wraps an arbitrary error as an entry.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self::Error(source.into())
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(m) => write!(f, "{m}"),
            Self::Nested(p) => write!(f, "{p}"),
            Self::Error(e) => write!(f, "{e}"),
        }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nested(a), Self::Nested(b)) => a == b,
            (a, b) => a.to_string() == b.to_string(),
        }
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<Prefixed> for Entry {
    fn from(value: Prefixed) -> Self {
        Self::Nested(value)
    }
}

impl From<crate::error::Error> for Entry {
    fn from(value: crate::error::Error) -> Self {
        match value.into_multierror() {
            Ok(p) => Self::Nested(p),
            Err(e) => Self::Error(Box::new(e)),
        }
    }
}
