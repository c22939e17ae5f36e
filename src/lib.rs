//! decl-emit - declaration placement for C-emitting compilers.
//!
//! This crate is the stage of a source-to-C compiler for embedded targets that
//! sits between the translating front end and the files on disk. The front end
//! hands it one record per symbol (rendered C text plus the symbols that text
//! references); the crate orders the records so every direct dependency comes
//! first, picks the header or implementation stream and the linkage qualifier
//! for each declaration and definition, and marks small functions as
//! `static inline`.
//!
//! # Primary Usage
//!
//! ```ignore
//! use bumpalo::Bump;
//! use decl_emit::{DeclKind, DeclarationSet, EmitConfig, SymbolTable, emit_unit};
//!
//! let arena = Bump::new();
//! let symbols = SymbolTable::new(&arena);
//! let config = EmitConfig::default();
//!
//! // Translation phase
//! let mut set = DeclarationSet::new();
//! let point = symbols.intern("Point");
//! set.declare(point, DeclKind::Type, true).write_decl(b"typedef struct Point Point;\n");
//! let area = set.declare(symbols.intern("area"), DeclKind::Function, true);
//! area.observe(point, true);
//! area.write_decl(b"int area(Point p);\n");
//! area.write_def(b"int area(Point p) { return p.x * p.y; }\n");
//! area.finish(3, &config);
//!
//! // Emission phase
//! let stats = emit_unit(&set.seal(), header_file, source_file)?;
//! ```
//!
//! # Architecture
//!
//! - [`core`] - Symbols, errors, configuration, statistics
//! - [`decl`] - Declaration records, dependency tracking, inline heuristic
//! - [`emit`] - Emission order, placement policy, stream writer
//! - [`listing`] - Textual unit description used by the driver and tests

pub mod core;
pub mod decl;
pub mod emit;
pub mod listing;

pub use crate::core::{
    EmitConfig, EmitError, EmitResult, EmitStats, SymbolId, SymbolTable, DEFAULT_INLINE_THRESHOLD,
};
pub use crate::decl::{DeclKind, Declaration, DeclarationSet, Region, SealedSet, UseMap};
pub use crate::emit::{
    declaration_placement, definition_placement, emit_unit, Placement, Qualifier, Stream,
    UnitEmitter,
};
pub use crate::listing::{parse_listing, ListingError};
