// This module defines the error taxonomy of the emission core using the thiserror crate.
// EmitError has exactly two variants: CycleDetected, raised by the ordering pass when a
// record's direct dependencies lead back to a record that is still being visited, and Io,
// raised when a write to the header, implementation or initializer stream fails. Both are
// fatal to the emission pass and are returned as values so the driving compiler can report
// a diagnostic and stop. Everything else the placement rules can encounter (unknown symbols,
// empty text buffers, private symbols without a declaration) is a normal state handled by
// a silent no-op. EmitResult<T> is the convenience alias used throughout the crate.

//! Error types for the emission core.

use crate::core::symbol::SymbolId;
use thiserror::Error;

/// Main error type for ordering and emission.
#[derive(Error, Debug)]
pub enum EmitError {
    /// The visit of `symbol` reached a direct dependency that was still in progress.
    #[error("direct dependency cycle through symbol {symbol}")]
    CycleDetected {
        symbol: SymbolId,
    },

    /// Writing to one of the output streams failed.
    #[error("failed to write output stream: {0}")]
    Io(#[from] std::io::Error),
}

impl EmitError {
    /// The record that closed the cycle, if this is a cycle error.
    pub fn cycle_symbol(&self) -> Option<SymbolId> {
        match self {
            EmitError::CycleDetected { symbol } => Some(*symbol),
            EmitError::Io(_) => None,
        }
    }
}

/// Result type alias for emission operations.
pub type EmitResult<T> = Result<T, EmitError>;
