use crate::error::{PatchError, ScriptViolation};
use crate::myers::{EditOp, EditRecord};
use tracing::debug;

/// Replays `script` against `old` and returns the sequence it describes.
///
/// A single cursor walks `old`: `Equal` must match the line under the cursor
/// and copies it, `Delete` skips it, `Insert` emits its own line. The script is
/// rejected with [`PatchError::InvalidScript`] when it does not fit `old`:
/// a mismatching `Equal`, an `Equal`/`Delete` past the end of `old`, or old
/// lines left over once the script ends.
///
/// ```
/// use linepatch::myers::EditRecord;
/// use linepatch::patch::apply;
///
/// let old = vec!["a", "b", "c"];
/// let script = vec![
///     EditRecord::equal("a"),
///     EditRecord::delete("b"),
///     EditRecord::insert("x"),
///     EditRecord::equal("c"),
/// ];
/// assert_eq!(apply(&old, &script), Ok(vec!["a", "x", "c"]));
/// ```
pub fn apply<T: Eq + Clone>(old: &[T], script: &[EditRecord<T>]) -> Result<Vec<T>, PatchError> {
    let mut result = Vec::with_capacity(script.len());
    let mut old_line = 0;

    for (index, record) in script.iter().enumerate() {
        if record.consumes_old() && old_line >= old.len() {
            return Err(ScriptViolation::Overrun {
                index,
                len: old.len(),
            }
            .into());
        }
        match record.op {
            EditOp::Equal => {
                if old[old_line] != record.line {
                    return Err(ScriptViolation::EqualMismatch { index: old_line }.into());
                }
                result.push(old[old_line].clone());
                old_line += 1;
            }
            // deleted content is carried for display only
            EditOp::Delete => old_line += 1,
            EditOp::Insert => result.push(record.line.clone()),
        }
    }

    if old_line != old.len() {
        return Err(ScriptViolation::Underconsumed {
            consumed: old_line,
            len: old.len(),
        }
        .into());
    }

    debug!(
        old_len = old.len(),
        records = script.len(),
        new_len = result.len(),
        "applied edit script"
    );
    Ok(result)
}

/// Applies `script` to a text split on `'\n'`, joining the result the same way.
pub fn apply_lines(old: &str, script: &[EditRecord<String>]) -> Result<String, PatchError> {
    let old_lines: Vec<String> = old.split('\n').map(ToString::to_string).collect();
    apply(&old_lines, script).map(|lines| lines.join("\n"))
}
