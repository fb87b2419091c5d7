//! Core error types for pipeline construction and layout
//!
//! Every failure in this crate is a local construction or validation
//! failure. Nothing is retried; errors are surfaced to the caller at the
//! point of violation and leave the model untouched.

use thiserror::Error;

/// Errors raised while building or laying out a pipeline diagram
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Duplicate slot: '{label}' already exists on operation '{operation}'")]
    DuplicateSlot { label: String, operation: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Unsupported operand: cannot use {operand} in {context}")]
    UnsupportedOperand {
        operand: &'static str,
        context: &'static str,
    },

    #[error("Dangling reference: slot '{label}' belongs to operation '{operation}' which is not part of the pipeline")]
    DanglingReference { label: String, operation: String },

    #[error("Empty layout: the pipeline has no slots, so the time axis is undefined")]
    EmptyLayout,
}

impl PipelineError {
    /// Create a new duplicate slot error
    pub fn duplicate_slot(label: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::DuplicateSlot {
            label: label.into(),
            operation: operation.into(),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new unsupported operand error
    pub fn unsupported_operand(operand: &'static str, context: &'static str) -> Self {
        Self::UnsupportedOperand { operand, context }
    }

    /// Create a new dangling reference error
    pub fn dangling_reference(label: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::DanglingReference {
            label: label.into(),
            operation: operation.into(),
        }
    }
}

/// Result alias used by the model and layout layers
pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
