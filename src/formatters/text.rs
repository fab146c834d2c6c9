use std::io::{self, Write};

use super::Comparison;
use crate::color::{Palette, Role};
use crate::types::EnvMap;

/// Writes the human-readable diff and returns whether anything differed.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn render<W: Write + ?Sized>(
    out: &mut W,
    c: &Comparison<'_>,
    colors: &Palette,
) -> io::Result<bool> {
    writeln!(out, "Diff: {} -> {}", c.left_name, c.right_name)?;

    if !c.diff.removed.is_empty() {
        writeln!(out, "{}", colors.paint("REMOVED:", Role::Header))?;
        for key in &c.diff.removed {
            let line = format!("-{key}={}", value_of(c.left, key));
            writeln!(out, "  {}", colors.paint(&line, Role::Removed))?;
        }
    }

    if !c.diff.changed.is_empty() {
        writeln!(out, "{}", colors.paint("CHANGED:", Role::Header))?;
        for key in &c.diff.changed {
            let old = format!("{key}={}", value_of(c.left, key));
            writeln!(
                out,
                "  {} -> {}",
                colors.paint(&old, Role::ChangedOld),
                colors.paint(value_of(c.right, key), Role::ChangedNew)
            )?;
        }
    }

    if !c.diff.added.is_empty() {
        writeln!(out, "{}", colors.paint("ADDED:", Role::Header))?;
        for key in &c.diff.added {
            let line = format!("+{key}={}", value_of(c.right, key));
            writeln!(out, "  {}", colors.paint(&line, Role::Added))?;
        }
    }

    let has_diff = c.has_differences();
    if !has_diff {
        writeln!(out, "No differences.")?;
    }
    Ok(has_diff)
}

fn value_of<'a>(env: &'a EnvMap, key: &str) -> &'a str {
    env.get(key).map_or("", String::as_str)
}
