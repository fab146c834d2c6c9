use crate::types::{DiffResult, EnvMap};

pub mod json;
pub mod text;

/// Both sides of a comparison plus the computed diff, bundled for the formatters.
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    pub left_name: &'a str,
    pub right_name: &'a str,
    pub left: &'a EnvMap,
    pub right: &'a EnvMap,
    pub diff: &'a DiffResult,
}

impl Comparison<'_> {
    pub fn has_differences(&self) -> bool {
        !self.diff.is_empty()
    }
}
