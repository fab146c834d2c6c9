use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, ValueHint};

use crate::color::ColorChoice;
use crate::error::{EnvDiffError, Outcome, Result};

mod run_impl;

/// Label used for the left side in `--current` mode.
pub const CURRENT_ENV_LABEL: &str = "CURRENT";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "envdiff",
    version,
    about = "Compare two .env files or the current environment, showing added, removed, and changed variables",
    long_about = None
)]
pub struct Args {
    /// One or two .env files
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Compare current environment (left) to the given file (right)
    #[arg(long = "current", short = 'c', action = ArgAction::SetTrue)]
    pub current: bool,

    /// Output JSON instead of colorized text
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// When to colorize text output
    #[arg(long = "color", value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Disable colors (same as --color never)
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Verbose logging to stderr (-v debug, -vv trace)
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the two sides of the comparison come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inputs {
    Files { left: PathBuf, right: PathBuf },
    CurrentEnv { right: PathBuf },
}

impl Args {
    /// Checks the positional argument count against the selected mode.
    ///
    /// # Errors
    /// Returns [`EnvDiffError::Usage`] for a wrong number of files.
    pub fn inputs(&self) -> Result<Inputs> {
        match (self.current, self.files.as_slice()) {
            (true, [right]) => Ok(Inputs::CurrentEnv {
                right: right.clone(),
            }),
            (true, _) => Err(EnvDiffError::Usage(
                "--current requires exactly one file".to_string(),
            )),
            (false, [left, right]) => Ok(Inputs::Files {
                left: left.clone(),
                right: right.clone(),
            }),
            (false, _) => Err(EnvDiffError::Usage(
                "without --current, provide exactly two files".to_string(),
            )),
        }
    }

    pub fn color_choice(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else {
            self.color
        }
    }
}

/// Runs a comparison and writes the result to stdout.
///
/// # Errors
/// Returns an error on bad arguments, unreadable inputs, or a failed write.
pub fn run(args: &Args) -> Result<Outcome> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_impl::run_with_args(args, &mut out)
}

pub use run_impl::run_with_args;

pub fn usage() -> String {
    Args::command().render_usage().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("envdiff").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn two_files_select_file_mode() {
        let args = parse(&["a.env", "b.env"]);
        assert_eq!(
            args.inputs().unwrap(),
            Inputs::Files {
                left: PathBuf::from("a.env"),
                right: PathBuf::from("b.env"),
            }
        );
    }

    #[test]
    fn current_flag_takes_one_file() {
        let args = parse(&["-c", "b.env"]);
        assert_eq!(
            args.inputs().unwrap(),
            Inputs::CurrentEnv {
                right: PathBuf::from("b.env"),
            }
        );
    }

    #[test]
    fn wrong_counts_are_usage_errors() {
        let cases: [&[&str]; 5] = [
            &[],
            &["a.env"],
            &["a", "b", "c"],
            &["--current"],
            &["--current", "a", "b"],
        ];
        for argv in cases {
            let err = parse(argv).inputs().unwrap_err();
            assert!(matches!(err, EnvDiffError::Usage(_)), "argv {argv:?}");
        }
    }

    #[test]
    fn no_color_overrides_color_flag() {
        let forced_off = parse(&["--color", "always", "--no-color", "a", "b"]);
        assert_eq!(forced_off.color_choice(), ColorChoice::Never);
        let forced_on = parse(&["--color", "always", "a", "b"]);
        assert_eq!(forced_on.color_choice(), ColorChoice::Always);
        assert_eq!(parse(&["a", "b"]).color_choice(), ColorChoice::Auto);
    }

    #[test]
    fn version_flag_is_handled_by_clap() {
        let err = Args::try_parse_from(["envdiff", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn usage_mentions_binary() {
        assert!(usage().contains("envdiff"));
    }
}
