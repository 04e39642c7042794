//! Parser for `.properties` files written by Android tooling.
//!
//! The accepted syntax is deliberately narrow: `key=value` lines, `#`
//! comments and blank lines. Anything else marks the whole file as
//! malformed. Failures are reported by returning `None` (and logging a
//! warning), never by returning an error.

use std::collections::BTreeMap;
use std::path::Path;

/// Parses the property file at `path`.
///
/// Returns `None` when the file cannot be read as UTF-8 text or contains a
/// line that is neither blank, a comment, nor `key=value`.
pub fn parse_property_file(path: &Path) -> Option<BTreeMap<String, String>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read {}: {e}", path.display());
            return None;
        }
    };
    parse_property_str(&content, &path.display().to_string())
}

/// Parses property text already in memory. `origin` names the source in log
/// messages.
pub fn parse_property_str(content: &str, origin: &str) -> Option<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match split_property(line) {
            Some((key, value)) => {
                map.insert(key.to_string(), value.to_string());
            }
            None => {
                tracing::warn!(
                    "Error parsing '{origin}': line {}: \"{line}\" is not a valid syntax",
                    index + 1
                );
                return None;
            }
        }
    }
    Some(map)
}

/// Returns `true` if `key` can be written to and read back from a property file.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

fn split_property(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim_end();
    if !is_valid_key(key) {
        return None;
    }
    Some((key, value.trim_start()))
}
