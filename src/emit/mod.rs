//! Emission phase.
//!
//! Given a [`SealedSet`](crate::decl::SealedSet), the emission phase first
//! computes a dependency-respecting order ([`order`]), then writes every
//! declaration and every definition to the header or implementation stream
//! chosen by the visibility policy ([`placement`], [`writer`]).
//!
//! ```ignore
//! let sealed = set.seal();
//! let order = sealed.emission_order()?;
//! let mut emitter = UnitEmitter::new(header_file, source_file);
//! emitter.emit(&order)?;
//! ```

pub mod order;
pub mod placement;
pub mod writer;

pub use placement::{declaration_placement, definition_placement, Placement, Qualifier, Stream};
pub use writer::{emit_unit, UnitEmitter};
