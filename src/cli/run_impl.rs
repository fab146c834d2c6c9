use std::borrow::Cow;
use std::io::Write;

use crate::color::Palette;
use crate::differ::diff;
use crate::error::{Outcome, Result};
use crate::formatters::{self, Comparison};
use crate::parser;

use super::{Args, CURRENT_ENV_LABEL, Inputs};

/// Resolve inputs, parse both sides, diff, and render to `out`.
///
/// # Errors
/// Returns an error on bad arguments, unreadable inputs, or a failed write.
pub fn run_with_args<W: Write + ?Sized>(args: &Args, out: &mut W) -> Result<Outcome> {
    let inputs = args.inputs()?;

    let (left_name, left, right_path) = match &inputs {
        Inputs::CurrentEnv { right } => {
            tracing::debug!(right = %right.display(), "comparing current environment");
            (
                Cow::Borrowed(CURRENT_ENV_LABEL),
                parser::from_process_env(),
                right,
            )
        }
        Inputs::Files { left, right } => {
            tracing::debug!(left = %left.display(), right = %right.display(), "comparing files");
            (
                Cow::Owned(left.display().to_string()),
                parser::load_file(left)?,
                right,
            )
        }
    };
    let right_name = right_path.display().to_string();
    let right = parser::load_file(right_path)?;

    let d = diff(&left, &right);
    tracing::debug!(
        removed = d.removed.len(),
        added = d.added.len(),
        changed = d.changed.len(),
        "computed diff"
    );

    let comparison = Comparison {
        left_name: &left_name,
        right_name: &right_name,
        left: &left,
        right: &right,
        diff: &d,
    };

    let has_diff = if args.json {
        formatters::json::render(&mut *out, &comparison)?
    } else {
        let colors = Palette::from_choice(args.color_choice());
        formatters::text::render(&mut *out, &comparison, &colors)?
    };
    out.flush()?;
    Ok(Outcome::from_has_differences(has_diff))
}
