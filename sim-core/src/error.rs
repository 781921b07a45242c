//! Error types for the simulation core.

use thiserror::Error;

/// Errors produced by registry lookups and parameter edits.
///
/// Numerical divergence is deliberately absent here: non-finite
/// coordinates produced by unstable parameter choices are ordinary
/// data and flow through the engine unmodified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// The requested attractor id is not in the registry.
    #[error("unknown attractor: '{id}'")]
    UnknownAttractor { id: String },

    /// A raw parameter edit could not be parsed as a number.
    ///
    /// The previous value is retained; the edit is a no-op.
    #[error("invalid value '{raw}' for parameter '{name}'")]
    InvalidParameterValue { name: String, raw: String },
}
