//! Line-level diff and patch engine.
//!
//! [`myers::diff`] computes a minimal edit script between two sequences and
//! [`patch::apply`] replays a script against the original sequence, rejecting
//! scripts that do not fit it.

pub mod error;
pub mod myers;
pub mod patch;
pub mod serialization;

pub use error::{PatchError, ScriptViolation};
pub use myers::{diff, diff_lines, EditOp, EditRecord, EditScript};
pub use patch::{apply, apply_lines};
