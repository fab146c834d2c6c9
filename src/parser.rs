use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{EnvDiffError, Result};
use crate::types::EnvMap;

/// Loads and parses an env file.
///
/// # Errors
/// Returns [`EnvDiffError::FileNotFound`] when `path` does not exist and
/// [`EnvDiffError::Io`] when it cannot be read (permissions, invalid UTF-8).
pub fn load_file(path: &Path) -> Result<EnvMap> {
    let file = File::open(path).map_err(|e| EnvDiffError::from_read(path, e))?;
    let mut reader = BufReader::new(file);
    let env = parse_reader(&mut reader).map_err(|e| EnvDiffError::from_read(path, e))?;
    tracing::debug!(path = %path.display(), keys = env.len(), "loaded env file");
    Ok(env)
}

/// Parses `KEY=VALUE` lines from a buffered reader.
///
/// # Errors
/// Returns an error if reading from the reader fails or the input is not UTF-8.
pub fn parse_reader<R: BufRead + ?Sized>(reader: &mut R) -> std::io::Result<EnvMap> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_str(&text))
}

/// Parses `KEY=VALUE` lines; `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_str(input: &str) -> EnvMap {
    input
        .split(['\r', '\n'])
        .filter_map(parse_line)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Snapshot of the current process environment, values trimmed.
pub fn from_process_env() -> EnvMap {
    let env: EnvMap = std::env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().trim().to_string(),
            )
        })
        .collect();
    tracing::debug!(keys = env.len(), "captured process environment");
    env
}

/// Parses one line into a key/value pair, or `None` when the line carries no assignment.
///
/// Everything from the first `#` on is dropped, including a `#` inside quotes.
pub fn parse_line(raw: &str) -> Option<(&str, &str)> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = match line.split_once('#') {
        Some((before, _)) => before.trim(),
        None => line,
    };
    let Some((key, value)) = line.split_once('=') else {
        tracing::trace!(line = raw, "skipping line without '='");
        return None;
    };
    let key = key.trim();
    if key.is_empty() {
        tracing::trace!(line = raw, "skipping line with empty key");
        return None;
    }
    Some((key, strip_quotes(value.trim())))
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            // a lone quote character counts as both ends
            return value.get(1..value.len() - 1).unwrap_or("");
        }
    }
    value
}
