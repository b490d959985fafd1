//! Property file adapter.
//!
//! Reads line-oriented property files. The key ends at the first `=`, `:` or
//! whitespace, so `key=value`, `key: value` and `key value` are all accepted.
//! Lines whose first non-blank character is `#` or `!` are comments, and a
//! line ending in an odd number of backslashes continues on the next line.
//! Keys are case-sensitive. A line starting with `[` is rejected: sections
//! are not part of the format, and reading one would hide every key below it.
//!
//! Values lose surrounding whitespace, trailing whitespace included.

use crate::domain::error::TwsConfError;
use crate::ports::property_port::PropertyPort;
use configparser::ini::Ini;
use std::path::Path;

/// Every entry is handed to `Ini` outside any section, so it lands here.
const DEFAULT_SECTION: &str = "default";

pub struct PropertyFileAdapter {
    config: Ini,
}

impl PropertyFileAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TwsConfError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TwsConfError::ConfigLoad {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_string(&content).map_err(|reason| TwsConfError::ConfigLoad {
            file: path.display().to_string(),
            reason,
        })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new_cs();
        // Comment lines are dropped by logical_lines; a '#' inside a
        // value such as a password must survive.
        config.set_comment_symbols(&[]);
        config.read(canonical_entries(content)?)?;
        Ok(Self { config })
    }
}

impl PropertyPort for PropertyFileAdapter {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.config.get(DEFAULT_SECTION, key)
    }
}

/// Rewrites every logical line as `key=value`, the one form `Ini` reads
/// without guessing.
fn canonical_entries(content: &str) -> Result<String, String> {
    let mut out = String::with_capacity(content.len());
    for (number, line) in logical_lines(content) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('[') {
            return Err(format!("line {number}: section headers are not supported: {line}"));
        }
        let key_end = line
            .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
            .unwrap_or(line.len());
        let (key, rest) = line.split_at(key_end);
        if key.is_empty() {
            return Err(format!("line {number}: missing key: {line}"));
        }
        let rest = rest.trim_start();
        let value = rest.strip_prefix(['=', ':']).unwrap_or(rest).trim_start();
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    Ok(out)
}

/// Drops comment lines and folds backslash continuations into one line,
/// tagging each logical line with the number of its first physical line.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut logical = String::new();
    let mut start = 0;
    let mut continuing = false;

    for (index, line) in content.lines().enumerate() {
        let line = if continuing {
            line.trim_start()
        } else {
            let trimmed = line.trim_start();
            if trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            start = index + 1;
            line
        };

        let backslashes = line.len() - line.trim_end_matches('\\').len();
        if backslashes % 2 == 1 {
            logical.push_str(&line[..line.len() - 1]);
            continuing = true;
        } else {
            logical.push_str(line);
            out.push((start, std::mem::take(&mut logical)));
            continuing = false;
        }
    }
    if !logical.is_empty() {
        out.push((start, logical));
    }
    out
}
