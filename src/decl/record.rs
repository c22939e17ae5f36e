// This module defines the Declaration record, the unit of data exchanged between the
// translating front end and the emission phase. One record exists per translated symbol and
// holds three rendered byte buffers (forward declaration, definition, initializer) plus the
// dependency metadata the tracker collects. The record also remembers which translation
// region the front end is currently rendering, the nesting level of local declarations, and
// an optional destination hint for type and import records. Buffers and use maps only grow
// while the symbol is being translated; once `finish` has run (which finalizes complexity
// and applies the inline heuristic) the record rejects further mutation. Dependency tracking
// lives in tracker.rs and the inline decision in inline.rs, both as impls on this type.

//! Declaration records.

use super::tracker::{Region, UseMap};
use crate::core::symbol::SymbolId;
use crate::emit::Stream;

/// Kind of symbol a record was translated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Function,
    Variable,
    Constant,
    Type,
    Import,
}

impl DeclKind {
    /// Keyword used by declaration listings.
    pub fn keyword(self) -> &'static str {
        match self {
            DeclKind::Function => "func",
            DeclKind::Variable => "var",
            DeclKind::Constant => "const",
            DeclKind::Type => "type",
            DeclKind::Import => "import",
        }
    }

    /// Parse a listing keyword.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Some(match word {
            "func" => DeclKind::Function,
            "var" => DeclKind::Variable,
            "const" => DeclKind::Constant,
            "type" => DeclKind::Type,
            "import" => DeclKind::Import,
            _ => return None,
        })
    }
}

/// A translated symbol: rendered text plus dependency metadata.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub(crate) origin: SymbolId,
    pub(crate) kind: DeclKind,
    pub(crate) exported: bool,
    pub(crate) inline: bool,
    pub(crate) complexity: u32,

    pub(crate) decl: Vec<u8>,
    pub(crate) def: Vec<u8>,
    pub(crate) init: Vec<u8>,

    /// References made from the header-level region.
    pub(crate) direct_uses: UseMap,
    /// References made from the body region.
    pub(crate) body_uses: UseMap,

    pub(crate) region: Region,
    pub(crate) nesting: u32,
    pub(crate) stream: Option<Stream>,
    pub(crate) finished: bool,
}

impl Declaration {
    /// Create a top-level record.
    pub fn new(origin: SymbolId, kind: DeclKind, exported: bool) -> Self {
        Self::nested(origin, kind, exported, 0)
    }

    /// Create a record at the given nesting level. Records nested inside a
    /// function body start in the body region.
    pub fn nested(origin: SymbolId, kind: DeclKind, exported: bool, nesting: u32) -> Self {
        Self {
            origin,
            kind,
            exported,
            inline: false,
            complexity: 0,
            decl: Vec::new(),
            def: Vec::new(),
            init: Vec::new(),
            direct_uses: UseMap::new(),
            body_uses: UseMap::new(),
            region: if nesting > 0 { Region::Body } else { Region::Header },
            nesting,
            stream: None,
            finished: false,
        }
    }

    pub fn origin(&self) -> SymbolId {
        self.origin
    }

    pub fn kind(&self) -> DeclKind {
        self.kind
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn complexity(&self) -> u32 {
        self.complexity
    }

    pub fn decl_text(&self) -> &[u8] {
        &self.decl
    }

    pub fn def_text(&self) -> &[u8] {
        &self.def
    }

    pub fn init_text(&self) -> &[u8] {
        &self.init
    }

    pub fn has_definition(&self) -> bool {
        !self.def.is_empty()
    }

    pub fn direct_uses(&self) -> &UseMap {
        &self.direct_uses
    }

    pub fn body_uses(&self) -> &UseMap {
        &self.body_uses
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn nesting(&self) -> u32 {
        self.nesting
    }

    /// Destination hint for type and import records.
    pub fn stream_hint(&self) -> Option<Stream> {
        self.stream
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Switch to rendering the body region.
    pub fn enter_body(&mut self) {
        self.set_region(Region::Body);
    }

    /// Switch back to rendering the header-level region.
    pub fn leave_body(&mut self) {
        self.set_region(Region::Header);
    }

    pub fn set_region(&mut self, region: Region) {
        if self.check_mutable("region") {
            self.region = region;
        }
    }

    /// Route the declaration of a type or import record to `stream`.
    pub fn set_stream(&mut self, stream: Stream) {
        if self.check_mutable("stream hint") {
            self.stream = Some(stream);
        }
    }

    /// Append to the forward declaration text.
    pub fn write_decl(&mut self, text: &[u8]) {
        if self.check_mutable("declaration") {
            self.decl.extend_from_slice(text);
        }
    }

    /// Append the contents of a render buffer plus a terminating suffix to the
    /// declaration text, leaving the buffer untouched.
    pub fn write_decl_with_suffix(&mut self, text: &[u8], suffix: &str) {
        if self.check_mutable("declaration") {
            self.decl.extend_from_slice(text);
            self.decl.extend_from_slice(suffix.as_bytes());
        }
    }

    /// Append to the definition text.
    pub fn write_def(&mut self, text: &[u8]) {
        if self.check_mutable("definition") {
            self.def.extend_from_slice(text);
        }
    }

    /// Append to the initializer text.
    pub fn write_init(&mut self, text: &[u8]) {
        if self.check_mutable("initializer") {
            self.init.extend_from_slice(text);
        }
    }

    /// Write one tab per nesting level into a render buffer.
    pub fn indent(&self, buf: &mut Vec<u8>) {
        buf.extend(std::iter::repeat(b'\t').take(self.nesting as usize));
    }

    pub(crate) fn check_mutable(&self, what: &str) -> bool {
        if self.finished {
            log::warn!("ignoring {} update to finished record {}", what, self.origin);
            return false;
        }
        true
    }
}
