//! Declaration listings.
//!
//! A listing is a plain-text description of an already translated unit: one
//! block per symbol with its kind, visibility, complexity, rendered text and
//! the symbols it references. The `declemit` driver and the integration tests
//! use it in place of a real front end.
//!
//! # Listing Format
//!
//! ```text
//! ; Comments start with semicolon
//! type Point export
//!     decl "typedef struct Point Point;\n"
//!     def "struct Point { int x; int y; };\n"
//!
//! func area export complexity 3
//!     sig Point
//!     body scale
//!     decl "int area(Point p);\n"
//!     def "int area(Point p) { return scale(p.x * p.y); }\n"
//! ```
//!
//! Record header options: `export`, `complexity <n>`, `stream header|impl`,
//! `nesting <n>`. Items: `sig`/`sig-ref` (header-level use, direct/indirect),
//! `body`/`body-ref` (body use), `decl`/`def`/`init` (append quoted text,
//! escapes `\n \t \" \\`).

pub mod parser;

pub use parser::parse_listing;

use thiserror::Error;

/// A malformed listing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ListingError {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

impl ListingError {
    pub(crate) fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}
