//! Compare `.env`-style files, or the current process environment against a file,
//! and report removed, changed, and added keys.

pub mod cli;
pub mod color;
pub mod differ;
pub mod error;
pub mod formatters;
pub mod parser;
pub mod types;

pub use differ::diff;
pub use error::{EnvDiffError, Outcome};
pub use types::{DiffResult, EnvMap};
