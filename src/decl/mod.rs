//! Declaration records and the translation phase.
//!
//! The front end creates one [`Declaration`] per symbol through a
//! [`DeclarationSet`], reports the symbols each record references while it
//! renders text, and finishes each record once its body is translated.
//! Sealing the set hands a read-only [`SealedSet`] to the emission phase.

pub mod inline;
pub mod record;
pub mod set;
pub mod tracker;

pub use inline::qualifies_for_inline;
pub use record::{DeclKind, Declaration};
pub use set::{DeclarationSet, SealedSet};
pub use tracker::{Region, UseMap};
