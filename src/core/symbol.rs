// This module provides the symbol table that hands out the stable integer handles used as
// record identities. The front end interns every symbol name it discovers and passes the
// resulting SymbolId around instead of pointers into its own object graph, so records can
// be compared, hashed and moved freely. Names are copied into a bumpalo arena owned by the
// caller; the table only keeps arena slices, which share the arena lifetime. Interning is
// idempotent: the same name always yields the same id, and ids are dense in discovery
// order. The table uses interior mutability so a shared reference is enough to intern.

//! Arena-backed symbol interning.

use bumpalo::Bump;
use hashbrown::HashMap;
use std::cell::RefCell;
use std::fmt;

/// Stable handle for a symbol of the translated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Build a handle from a raw index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw index of this handle.
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interns symbol names into [`SymbolId`] handles.
pub struct SymbolTable<'arena> {
    /// Arena holding the interned names.
    arena: &'arena Bump,

    /// Names by handle index.
    names: RefCell<Vec<&'arena str>>,

    /// Reverse lookup from name to handle.
    ids: RefCell<HashMap<&'arena str, SymbolId>>,
}

impl<'arena> SymbolTable<'arena> {
    /// Create an empty table backed by the given arena.
    pub fn new(arena: &'arena Bump) -> Self {
        Self {
            arena,
            names: RefCell::new(Vec::new()),
            ids: RefCell::new(HashMap::new()),
        }
    }

    /// Intern a name, returning the existing handle if it was seen before.
    pub fn intern(&self, name: &str) -> SymbolId {
        if let Some(&id) = self.ids.borrow().get(name) {
            return id;
        }

        let interned: &'arena str = self.arena.alloc_str(name);
        let mut names = self.names.borrow_mut();
        let id = SymbolId(names.len() as u32);
        names.push(interned);
        self.ids.borrow_mut().insert(interned, id);
        log::trace!("interned symbol {} as {}", interned, id);
        id
    }

    /// Look up a name without interning it.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.ids.borrow().get(name).copied()
    }

    /// Name of an interned symbol.
    pub fn name(&self, id: SymbolId) -> Option<&'arena str> {
        self.names.borrow().get(id.0 as usize).copied()
    }

    /// Number of interned symbols.
    pub fn len(&self) -> usize {
        self.names.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.borrow().is_empty()
    }
}
