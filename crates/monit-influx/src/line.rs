//! Line protocol encoding for a single point.
//!
//! `measurement[,tag=value...] value=<field> <unix-nanos>`

use std::fmt::Write;
use std::time::UNIX_EPOCH;

use monit_core::error::{MonitError, Result};
use monit_core::{DataPoint, FieldValue};

fn escape_measurement(s: &str) -> String {
    escape(s, &[',', ' '])
}

/// Tag keys, tag values and field keys.
fn escape_key(s: &str) -> String {
    escape(s, &[',', '=', ' '])
}

/// Line breaks become spaces. A backslash that would pair with an escaped
/// character or the following delimiter is doubled.
fn escape(s: &str, special: &[char]) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .peekable();
    while let Some(c) = chars.next() {
        if special.contains(&c) {
            out.push('\\');
            out.push(c);
        } else if c == '\\' {
            let next = chars.peek().copied();
            out.push('\\');
            if next.map_or(true, |n| special.contains(&n)) {
                out.push('\\');
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn encode_field(v: &FieldValue) -> Result<String> {
    Ok(match v {
        FieldValue::Float(f) => {
            if !f.is_finite() {
                return Err(MonitError::Encode(format!("non-finite float: {f}")));
            }
            format!("{f}")
        }
        FieldValue::Integer(i) => format!("{i}i"),
        FieldValue::UInteger(u) => format!("{u}u"),
        FieldValue::Boolean(b) => b.to_string(),
        FieldValue::Text(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
    })
}

/// Encode `point` as one line (no trailing newline).
pub fn encode(point: &DataPoint) -> Result<String> {
    if point.measurement().is_empty() {
        return Err(MonitError::Encode("empty measurement".into()));
    }

    let nanos = point
        .timestamp()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| MonitError::Encode("timestamp before unix epoch".into()))?
        .as_nanos();

    let mut out = escape_measurement(point.measurement());
    for (k, v) in point.tags() {
        // Line protocol has no representation for empty tag keys or values.
        if k.is_empty() || v.is_empty() {
            continue;
        }
        let _ = write!(out, ",{}={}", escape_key(k), escape_key(v));
    }
    let _ = write!(out, " value={} {}", encode_field(point.value())?, nanos);
    Ok(out)
}
