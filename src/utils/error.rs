// Common error types for vcmp

use std::path::PathBuf;

/// Reasons a version string fails to parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input string was empty
    #[error("version string is empty")]
    Empty,

    /// A section between two dots (or at either end) was empty
    #[error("section {index} is empty")]
    EmptySection { index: usize },

    /// A section contained something other than ASCII digits
    #[error("section {index} ('{token}') is not a non-negative integer")]
    InvalidSection { index: usize, token: String },

    /// A section was numeric but too large to represent
    #[error("section {index} ('{token}') is out of range")]
    Overflow { index: usize, token: String },
}

impl ParseError {
    /// Zero-based index of the offending section, if there is one
    pub fn section_index(&self) -> Option<usize> {
        match self {
            ParseError::Empty => None,
            ParseError::EmptySection { index }
            | ParseError::InvalidSection { index, .. }
            | ParseError::Overflow { index, .. } => Some(*index),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VcmpError {
    #[error("Invalid version '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VcmpError {
    pub fn parse(input: impl Into<String>, source: ParseError) -> Self {
        VcmpError::Parse { input: input.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, VcmpError>;

/// Exit code shared by every failure, matching the `error` comparison outcome
pub const ERROR_EXIT_CODE: i32 = 2;

/// User-facing rendering of a [`VcmpError`]
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_vcmp_error(err: &VcmpError) -> Self {
        let hint = match err {
            VcmpError::Parse { .. } => Some(
                "Versions are dot-separated non-negative integers:\n  ✓ 2.13.4\n  ✓ 10\n  ✗ 1.0-beta\n  ✗ 1..2".to_string(),
            ),
            VcmpError::Config(_) => Some(
                "Check the file passed via --config or VCMP_CONFIG.".to_string(),
            ),
            VcmpError::Io { .. } | VcmpError::Serialization(_) => None,
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code: ERROR_EXIT_CODE,
        }
    }

    pub fn print(&self) {
        eprintln!("error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{}", hint);
        }
    }
}
