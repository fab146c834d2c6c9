use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnvDiffError>;

/// Result of a completed comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoDifferences,
    DifferencesFound,
}

impl Outcome {
    pub fn from_has_differences(has_diff: bool) -> Self {
        if has_diff {
            Outcome::DifferencesFound
        } else {
            Outcome::NoDifferences
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::NoDifferences => 0,
            Outcome::DifferencesFound => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum EnvDiffError {
    #[error("{0}")]
    Usage(String),

    #[error("file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing output: {0}")]
    Render(#[from] std::io::Error),

    #[error("serializing output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EnvDiffError {
    /// Classifies a failed read of `path`.
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            EnvDiffError::FileNotFound { path }
        } else {
            EnvDiffError::Io { path, source }
        }
    }

    /// Process exit status; 0 and 1 are reserved for [`Outcome`].
    pub fn exit_code(&self) -> i32 {
        match self {
            EnvDiffError::Usage(_) => 2,
            EnvDiffError::FileNotFound { .. } | EnvDiffError::Io { .. } => 3,
            EnvDiffError::Render(_) | EnvDiffError::Serialize(_) => 4,
        }
    }
}
