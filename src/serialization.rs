//! Line-oriented text form of an edit script.
//!
//! Each record becomes one text line: a marker (`' '`, `'-'` or `'+'`)
//! followed by the record's line verbatim. Records are joined with `'\n'`.

use crate::error::PatchError;
use crate::myers::{EditOp, EditRecord};

pub trait ToScript: Sized {
    fn to_script(&self) -> Result<String, PatchError>;
}

pub trait FromScript: Sized {
    fn from_script(s: &str) -> Result<Self, PatchError>;
}

impl<T: ToString> ToScript for EditRecord<T> {
    fn to_script(&self) -> Result<String, PatchError> {
        let line = self.line.to_string();
        if line.contains('\n') {
            return Err(PatchError::InvalidFormat(format!(
                "line contains a newline: {:?}",
                line
            )));
        }
        let mut out = String::with_capacity(line.len() + 1);
        out.push(self.op.marker());
        out.push_str(&line);
        Ok(out)
    }
}

impl FromScript for EditRecord<String> {
    fn from_script(s: &str) -> Result<Self, PatchError> {
        let mut chars = s.chars();
        match chars.next().and_then(EditOp::from_marker) {
            Some(op) => Ok(EditRecord::new(op, chars.as_str().to_string())),
            None => Err(PatchError::UnexpectedToken(s.to_string())),
        }
    }
}

impl<T: ToString> ToScript for Vec<EditRecord<T>> {
    fn to_script(&self) -> Result<String, PatchError> {
        let lines = self
            .iter()
            .map(|r| r.to_script())
            .collect::<Result<Vec<String>, _>>()?;
        Ok(lines.join("\n"))
    }
}

impl FromScript for Vec<EditRecord<String>> {
    fn from_script(s: &str) -> Result<Self, PatchError> {
        if s.is_empty() {
            return Ok(vec![]);
        }

        // can't use `.lines()` because of Windows \r
        // would break the roundtrip property
        s.split('\n').map(EditRecord::from_script).collect()
    }
}
