// This module is the hub for the infrastructure shared by the translation and emission
// phases: the arena-backed symbol table that hands out stable SymbolId handles, the error
// taxonomy (cycle detection and stream write failures) built on thiserror, the
// configuration consumed by the inline heuristic, and the statistics gathered while writing
// a unit. Everything here is independent of the declaration model itself so the front end
// can intern symbols before any record exists.

//! Core infrastructure.
//!
//! # Key Components
//!
//! ## Symbols (`symbol`)
//! - `SymbolId` handles interned into a `bumpalo` arena
//!
//! ## Errors (`error`)
//! - `EmitError::CycleDetected` and `EmitError::Io`
//!
//! ## Configuration (`config`) and statistics (`stats`)

pub mod config;
pub mod error;
pub mod stats;
pub mod symbol;

pub use config::{EmitConfig, DEFAULT_INLINE_THRESHOLD};
pub use error::{EmitError, EmitResult};
pub use stats::EmitStats;
pub use symbol::{SymbolId, SymbolTable};
