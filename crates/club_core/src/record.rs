//! Single-line player record format.
//!
//! Each player serializes to one brace-wrapped line of `"key":value` pairs.
//! The format looks like JSON but was never guaranteed to be valid JSON, so
//! reading goes through a permissive key-literal scan instead of a JSON
//! parser: locate `"key":`, then read a quoted string, a bare number, or a
//! bare bool. Key order does not matter and unknown keys are ignored, which
//! keeps old files loadable.

use std::fmt::Write;

/// Accumulates one record line, inserting field separators as it goes.
pub struct RecordWriter {
    buf: String,
}

impl RecordWriter {
    pub fn new() -> Self {
        Self { buf: String::from("{") }
    }

    fn sep(&mut self) {
        if self.buf.len() > 1 {
            self.buf.push(',');
        }
    }

    pub fn string(&mut self, key: &str, value: &str) {
        self.sep();
        let _ = write!(self.buf, "\"{}\":\"{}\"", key, value);
    }

    pub fn int(&mut self, key: &str, value: i64) {
        self.sep();
        let _ = write!(self.buf, "\"{}\":{}", key, value);
    }

    /// Bare float, shortest display form (`1.96`, `85`).
    pub fn number(&mut self, key: &str, value: f64) {
        self.sep();
        let _ = write!(self.buf, "\"{}\":{}", key, value);
    }

    /// Monetary amount, written with two decimals.
    pub fn money(&mut self, key: &str, value: f64) {
        self.sep();
        let _ = write!(self.buf, "\"{}\":{:.2}", key, value);
    }

    pub fn bool(&mut self, key: &str, value: bool) {
        self.sep();
        let _ = write!(self.buf, "\"{}\":{}", key, if value { "true" } else { "false" });
    }

    pub fn finish(mut self) -> String {
        self.buf.push('}');
        self.buf
    }
}

impl Default for RecordWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn value_start(data: &str, key: &str) -> Option<usize> {
    let pat = format!("\"{}\":", key);
    let pos = data.find(&pat)? + pat.len();
    let skipped = data[pos..].len() - data[pos..].trim_start_matches(' ').len();
    Some(pos + skipped)
}

/// Quoted string value for `key`, or `None` when the key is absent.
pub fn find_string(data: &str, key: &str) -> Option<String> {
    let start = value_start(data, key)?;
    let rest = &data[start..];
    let inner = rest.strip_prefix('"')?;
    let end = inner.find('"')?;
    Some(inner[..end].to_string())
}

/// Bare numeric value for `key`. Malformed digits read as `None` so the
/// caller can substitute its default.
pub fn find_number(data: &str, key: &str) -> Option<f64> {
    let start = value_start(data, key)?;
    let rest = &data[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Integer view of a bare numeric value, truncating any fraction.
pub fn find_int(data: &str, key: &str) -> Option<i64> {
    find_number(data, key).map(|n| n as i64)
}

pub fn find_bool(data: &str, key: &str) -> Option<bool> {
    let start = value_start(data, key)?;
    let rest = &data[start..];
    if rest.starts_with("true") {
        Some(true)
    } else if rest.starts_with("false") {
        Some(false)
    } else {
        None
    }
}
