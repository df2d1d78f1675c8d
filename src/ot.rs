//! Operational transformation primitives for concurrent text editing.
//!
//! Edits are modeled as actions, [insert](Operation::insert) and
//! [delete](Operation::delete) of a string at a position, rather than as
//! patches. An operation originated against some base document; before it can
//! be applied after a concurrent operation on the same base, it must be
//! adapted with the [inclusion transformation](Operation::include). The
//! transformation preserves user intent: concurrent inserts converge to the
//! same document whatever the application order.
//!
//! All positions and lengths are counted in code points, matching the
//! [Rope](crate::rope::Rope) documents the operations apply to.
//!
//! # Example
//!
//! ```
//! use edit_pt::ot::Operation;
//! use edit_pt::rope::Rope;
//!
//! let base = Rope::from("FOOBAZ");
//! let local = Operation::insert(3, "BAR");
//! let remote = Operation::insert(5, "!");
//!
//! // Apply local first, then the transformed remote ...
//! let one = remote.include(&local)[0]
//!     .apply(&local.apply(&base).unwrap())
//!     .unwrap();
//! // ... or remote first, then the transformed local.
//! let two = local.include(&remote)[0]
//!     .apply(&remote.apply(&base).unwrap())
//!     .unwrap();
//!
//! assert_eq!(one, two);
//! assert_eq!(one, Rope::from("FOOBARBA!Z"));
//! ```

use crate::rope::Rope;
use crate::RopeError;
use serde::{Deserialize, Serialize};

fn take_chars(string: &str, n: usize) -> String {
    string.chars().take(n).collect()
}

fn skip_chars(string: &str, n: usize) -> String {
    string.chars().skip(n).collect()
}

fn last_chars(string: &str, n: usize) -> String {
    let length = string.chars().count();
    skip_chars(string, length - n.min(length))
}

/// One user edit: a string inserted at or deleted from a position of the
/// document as it was when the operation originated.
///
/// Operations serialize as `{"kind": "insert"|"delete", "start": …, "string": …}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Operation {
    Insert { start: usize, string: String },
    Delete { start: usize, string: String },
}

impl Operation {
    pub fn insert(start: usize, string: impl Into<String>) -> Operation {
        Operation::Insert {
            start,
            string: string.into(),
        }
    }

    pub fn delete(start: usize, string: impl Into<String>) -> Operation {
        Operation::Delete {
            start,
            string: string.into(),
        }
    }

    pub fn start(&self) -> usize {
        match self {
            Operation::Insert { start, .. } | Operation::Delete { start, .. } => *start,
        }
    }

    pub fn string(&self) -> &str {
        match self {
            Operation::Insert { string, .. } | Operation::Delete { string, .. } => string,
        }
    }

    /// Length of the inserted or deleted string in code points.
    pub fn len(&self) -> usize {
        self.string().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.string().is_empty()
    }

    /// One past the last position touched by this operation.
    pub fn end(&self) -> usize {
        self.start() + self.len()
    }

    /// The operation undoing this one: the variants swap, position and string
    /// stay.
    pub fn undo(&self) -> Operation {
        match self {
            Operation::Insert { start, string } => Operation::delete(*start, string.clone()),
            Operation::Delete { start, string } => Operation::insert(*start, string.clone()),
        }
    }

    /// Applies the operation to a rope document. Deleting verifies the rope
    /// content against the operation's string and fails with a
    /// [RopeError] on a mismatch.
    pub fn apply(&self, document: &Rope) -> Result<Rope, RopeError> {
        match self {
            Operation::Insert { start, string } => {
                Ok(document.inserted(*start, &Rope::from(string.as_str())))
            }
            Operation::Delete { start, string } => {
                document.deleted(*start, &Rope::from(string.as_str()))
            }
        }
    }

    /// Inclusion transformation: adapts this operation so it can be applied
    /// after the concurrent `other`, both having originated against the same
    /// base document.
    ///
    /// The result is usually a single operation; a delete whose range an insert
    /// landed inside of splits into two.
    pub fn include(&self, other: &Operation) -> Vec<Operation> {
        match self {
            Operation::Insert { start, string } => match other {
                Operation::Insert { .. } => {
                    if *start >= other.start() {
                        vec![Operation::insert(start + other.len(), string.clone())]
                    } else {
                        vec![self.clone()]
                    }
                }
                Operation::Delete { .. } => {
                    if *start > other.end() {
                        vec![Operation::insert(start - other.len(), string.clone())]
                    } else if *start > other.start() {
                        vec![Operation::insert(other.start(), string.clone())]
                    } else {
                        vec![self.clone()]
                    }
                }
            },
            Operation::Delete { start, string } => match other {
                Operation::Insert { .. } => {
                    if self.end() <= other.start() {
                        vec![self.clone()]
                    } else if other.start() <= *start {
                        vec![Operation::delete(start + other.len(), string.clone())]
                    } else {
                        // The insert landed inside the deleted range; delete
                        // around it in two steps.
                        let split = other.start() - start;
                        vec![
                            Operation::delete(*start, take_chars(string, split)),
                            Operation::delete(
                                other.start() + other.len(),
                                skip_chars(string, split),
                            ),
                        ]
                    }
                }
                Operation::Delete { .. } => {
                    if other.start() >= self.end() {
                        vec![self.clone()]
                    } else if *start >= other.end() {
                        vec![Operation::delete(start - other.len(), string.clone())]
                    } else if other.start() <= *start {
                        if self.end() <= other.end() {
                            vec![Operation::delete(*start, String::new())]
                        } else {
                            vec![Operation::delete(
                                other.start(),
                                last_chars(string, self.end() - other.end()),
                            )]
                        }
                    } else if other.end() >= self.end() {
                        vec![Operation::delete(
                            *start,
                            skip_chars(string, other.start() - start),
                        )]
                    } else {
                        let head = take_chars(string, other.start() - start);
                        let tail = skip_chars(string, other.start() - start + other.len());
                        vec![Operation::delete(*start, format!("{}{}", head, tail))]
                    }
                }
            },
        }
    }
}
