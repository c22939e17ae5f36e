// This module holds the record set of one compilation unit and enforces the two-phase
// discipline between translation and emission. DeclarationSet is the mutable,
// translation-phase container: the front end creates records through `declare` when it first
// discovers a symbol (re-discovery hands back the existing record) and mutates them while
// rendering. Records are stored in an append-only Vec in discovery order next to a
// SymbolId -> position index, which gives both O(1) lookup and a documented, reproducible
// enumeration order. Calling `seal` consumes the set, freezes every record and produces a
// SealedSet: the read-only, emission-phase view that alone exposes ordering and writing.

//! Translation-phase and emission-phase record sets.

use super::record::{DeclKind, Declaration};
use crate::core::symbol::SymbolId;
use hashbrown::HashMap;

/// Mutable record set used while the front end translates a unit.
#[derive(Debug, Default)]
pub struct DeclarationSet {
    /// Records in discovery order.
    records: Vec<Declaration>,

    /// Position of each record in `records`.
    index: HashMap<SymbolId, usize>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record for `origin`, creating a top-level record on first
    /// discovery.
    pub fn declare(&mut self, origin: SymbolId, kind: DeclKind, exported: bool) -> &mut Declaration {
        self.declare_nested(origin, kind, exported, 0)
    }

    /// Get the record for `origin`, creating it at `nesting` on first discovery.
    pub fn declare_nested(
        &mut self,
        origin: SymbolId,
        kind: DeclKind,
        exported: bool,
        nesting: u32,
    ) -> &mut Declaration {
        let pos = match self.index.get(&origin).copied() {
            Some(pos) => {
                let existing = &self.records[pos];
                if existing.kind != kind || existing.exported != exported {
                    log::warn!(
                        "symbol {} rediscovered as {:?} (exported: {}), keeping {:?} (exported: {})",
                        origin,
                        kind,
                        exported,
                        existing.kind,
                        existing.exported
                    );
                }
                pos
            }
            None => {
                let pos = self.records.len();
                self.records
                    .push(Declaration::nested(origin, kind, exported, nesting));
                self.index.insert(origin, pos);
                log::trace!("discovered {} as {:?}", origin, kind);
                pos
            }
        };
        &mut self.records[pos]
    }

    pub fn get(&self, origin: SymbolId) -> Option<&Declaration> {
        self.index.get(&origin).map(|&pos| &self.records[pos])
    }

    pub fn get_mut(&mut self, origin: SymbolId) -> Option<&mut Declaration> {
        let pos = self.index.get(&origin).copied()?;
        Some(&mut self.records[pos])
    }

    pub fn contains(&self, origin: SymbolId) -> bool {
        self.index.contains_key(&origin)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.records.iter()
    }

    /// End translation. Every record is frozen; records that were never
    /// finished keep their current complexity and stay non-inline.
    pub fn seal(mut self) -> SealedSet {
        let mut unfinished = 0;
        for record in &mut self.records {
            if !record.finished {
                record.finished = true;
                unfinished += 1;
            }
        }
        log::debug!(
            "sealed {} records ({} never finished)",
            self.records.len(),
            unfinished
        );

        SealedSet {
            records: self.records,
            index: self.index,
        }
    }
}

/// Read-only record set of a fully translated unit.
#[derive(Debug)]
pub struct SealedSet {
    records: Vec<Declaration>,
    index: HashMap<SymbolId, usize>,
}

impl SealedSet {
    pub fn get(&self, origin: SymbolId) -> Option<&Declaration> {
        self.index.get(&origin).map(|&pos| &self.records[pos])
    }

    /// Discovery position of `origin`.
    pub fn position(&self, origin: SymbolId) -> Option<usize> {
        self.index.get(&origin).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in discovery order.
    pub fn records(&self) -> &[Declaration] {
        &self.records
    }
}
