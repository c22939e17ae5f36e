// This module encodes the visibility policy that decides, for every declaration and every
// definition, which output stream receives it and which linkage qualifier prefixes it. The
// header stream is what other units include; the implementation stream is private to this
// unit. Functions small enough to be inline live entirely in the header as static inline;
// private functions and variables get static linkage in the implementation; exported
// variables are declared extern in the header and defined in the implementation; constants
// only ever produce an exported declaration. Type and import declarations carry no implicit
// qualifier and go where the front end pointed them. A None placement means "emit nothing".

//! Stream and linkage selection.

use crate::decl::{DeclKind, Declaration};

/// Output stream of a compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Shared header, visible to other units.
    Header,
    /// Private implementation unit.
    Implementation,
}

/// Linkage qualifier written in front of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    None,
    Static,
    StaticInline,
    Extern,
}

impl Qualifier {
    /// Text written before the fragment, including the separating space.
    pub fn as_str(self) -> &'static str {
        match self {
            Qualifier::None => "",
            Qualifier::Static => "static ",
            Qualifier::StaticInline => "static inline ",
            Qualifier::Extern => "extern ",
        }
    }
}

/// Where and how a fragment is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub stream: Stream,
    pub qualifier: Qualifier,
}

impl Placement {
    pub const fn new(stream: Stream, qualifier: Qualifier) -> Self {
        Self { stream, qualifier }
    }
}

/// Default stream of a type or import record without a hint.
fn visibility_stream(decl: &Declaration) -> Stream {
    if decl.is_exported() {
        Stream::Header
    } else {
        Stream::Implementation
    }
}

/// Placement of a record's forward declaration.
pub fn declaration_placement(decl: &Declaration) -> Option<Placement> {
    use Qualifier::*;
    use Stream::*;

    match decl.kind() {
        DeclKind::Function => {
            if decl.is_inline() {
                Some(Placement::new(Header, StaticInline))
            } else if !decl.is_exported() && decl.has_definition() {
                Some(Placement::new(Implementation, Static))
            } else if decl.is_exported() {
                Some(Placement::new(Header, None))
            } else {
                Option::None
            }
        }
        DeclKind::Variable => decl
            .is_exported()
            .then(|| Placement::new(Header, Extern)),
        DeclKind::Constant => decl.is_exported().then(|| Placement::new(Header, None)),
        DeclKind::Type | DeclKind::Import => {
            let stream = decl.stream_hint().unwrap_or_else(|| visibility_stream(decl));
            Some(Placement::new(stream, None))
        }
    }
}

/// Placement of a record's definition.
pub fn definition_placement(decl: &Declaration) -> Option<Placement> {
    use Qualifier::*;
    use Stream::*;

    match decl.kind() {
        DeclKind::Function => Some(match (decl.is_exported(), decl.is_inline()) {
            (true, true) => Placement::new(Header, StaticInline),
            (true, false) => Placement::new(Implementation, None),
            (false, _) => Placement::new(Implementation, Static),
        }),
        DeclKind::Variable => Some(if decl.is_exported() {
            Placement::new(Implementation, None)
        } else {
            Placement::new(Implementation, Static)
        }),
        DeclKind::Constant => Option::None,
        DeclKind::Type => Some(Placement::new(visibility_stream(decl), None)),
        DeclKind::Import => Some(Placement::new(Implementation, None)),
    }
}
