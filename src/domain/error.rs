use thiserror::Error;

use crate::domain::platform::PlatformTag;
use crate::domain::value_objects::{ColumnName, Role};

/// A role could not be mapped to a column for a recognised platform.
///
/// Usually a malformed export, or an export variant the resolver does not
/// know about yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("{} column not found ({} export, expected {})", .role.label(), .platform.label(), .expected.join(" or "))]
    MissingRole {
        platform: PlatformTag,
        role: Role,
        expected: Vec<String>,
    },

    #[error("no column mapping exists for an unrecognised platform")]
    UnknownPlatform,
}

impl ResolutionError {
    pub fn role(&self) -> Option<Role> {
        match self {
            ResolutionError::MissingRole { role, .. } => Some(*role),
            ResolutionError::UnknownPlatform => None,
        }
    }
}

/// A resolved column is absent from the table being aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("{} column '{name}' not found in the file", .role.label())]
    MissingColumn { role: Role, name: ColumnName },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("SKU '{0}' is not in the summary")]
    UnknownSku(String),
}

/// Outcome of a failed pipeline run.
///
/// Every variant terminates the run. The variants stay distinct so the
/// caller can tell "wrong file source" from "wrong file structure".
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("format not recognized: the file does not look like a TikTok Shop or Shopee order export")]
    UnrecognizedFormat,

    #[error("required column not found: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("required column not found: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("failed to process file: {0:#}")]
    FileProcessing(anyhow::Error),
}

impl PipelineError {
    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::UnrecognizedFormat => 2,
            PipelineError::Resolution(_) | PipelineError::Aggregation(_) => 3,
            PipelineError::FileProcessing(_) => 1,
        }
    }

    /// The role that could not be located, when the failure is about one.
    pub fn missing_role(&self) -> Option<Role> {
        match self {
            PipelineError::Resolution(e) => e.role(),
            PipelineError::Aggregation(AggregationError::MissingColumn { role, .. }) => Some(*role),
            _ => None,
        }
    }
}
