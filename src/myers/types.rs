use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Alias for a vector of EditRecord
/// Result of the Myers diff function, input of `patch::apply`
pub type EditScript<T> = Vec<EditRecord<T>>;

/// Each record in a script is
/// unchanged in old and new (Equal)
/// removed from old (Delete)
/// added by new (Insert)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditOp {
    Equal,
    Delete,
    Insert,
}

impl EditOp {
    /// Prefix used by the text codec and by `Display`.
    pub fn marker(self) -> char {
        match self {
            EditOp::Equal => ' ',
            EditOp::Delete => '-',
            EditOp::Insert => '+',
        }
    }

    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            ' ' => Some(EditOp::Equal),
            '-' => Some(EditOp::Delete),
            '+' => Some(EditOp::Insert),
            _ => None,
        }
    }
}

/// A single operation together with the line it carries.
///
/// `Equal` and `Delete` carry the old line under the cursor, `Insert`
/// carries the line taken from the new sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditRecord<T> {
    pub op: EditOp,
    pub line: T,
}

impl<T> EditRecord<T> {
    pub fn new(op: EditOp, line: T) -> Self {
        EditRecord { op, line }
    }

    pub fn equal(line: T) -> Self {
        Self::new(EditOp::Equal, line)
    }

    pub fn delete(line: T) -> Self {
        Self::new(EditOp::Delete, line)
    }

    pub fn insert(line: T) -> Self {
        Self::new(EditOp::Insert, line)
    }

    pub fn op(&self) -> EditOp {
        self.op
    }

    pub fn line(&self) -> &T {
        &self.line
    }

    pub fn into_line(self) -> T {
        self.line
    }

    /// True for records that advance the cursor over the old sequence.
    pub fn consumes_old(&self) -> bool {
        matches!(self.op, EditOp::Equal | EditOp::Delete)
    }

    /// True for records whose line ends up in the new sequence.
    pub fn produces_new(&self) -> bool {
        matches!(self.op, EditOp::Equal | EditOp::Insert)
    }
}

impl<T: fmt::Display> fmt::Display for EditRecord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.marker(), self.line)
    }
}

/// Number of non-`Equal` records, i.e. the edit distance a script realises.
pub fn distance<T>(script: &[EditRecord<T>]) -> usize {
    script.iter().filter(|r| r.op != EditOp::Equal).count()
}

/// Turns a script from old to new into a script from new to old.
///
/// ```
/// use linepatch::myers::{diff, invert};
/// use linepatch::patch::apply;
///
/// let old = vec!["a", "b", "c"];
/// let new = vec!["a", "x", "c"];
/// let back = invert(diff(&old, &new));
/// assert_eq!(apply(&new, &back).unwrap(), old);
/// ```
pub fn invert<T>(script: EditScript<T>) -> EditScript<T> {
    script
        .into_iter()
        .map(|r| {
            let op = match r.op {
                EditOp::Equal => EditOp::Equal,
                EditOp::Delete => EditOp::Insert,
                EditOp::Insert => EditOp::Delete,
            };
            EditRecord::new(op, r.line)
        })
        .collect()
}
