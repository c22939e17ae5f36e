// This module implements dependency tracking for declaration records. While the front end
// renders a symbol it reports every other symbol it references through Declaration::observe.
// References made while rendering the header-level region (signature, type expression) land
// in the record's direct-use map and are the only ones that can constrain emission order;
// references made inside a function body land in the body-use map and are bookkeeping only.
// Each map stores a per-target "direct" flag where the last report for a target wins, and a
// record never lists itself. UseMap keeps keys in first-reference order so the ordering pass
// visits dependencies the same way on every run.

//! Symbol-use bookkeeping.

use super::record::Declaration;
use crate::core::symbol::SymbolId;
use hashbrown::HashMap;

/// Translation region a reference was made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Signature or type-level text; references may constrain ordering.
    Header,
    /// Function body text; references never constrain ordering.
    Body,
}

/// Insertion-ordered map from referenced symbol to its "direct" flag.
#[derive(Debug, Default, Clone)]
pub struct UseMap {
    entries: Vec<(SymbolId, bool)>,
    positions: HashMap<SymbolId, usize>,
}

impl UseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the flag for `target`. An overwrite keeps the
    /// position of the first reference.
    pub fn insert(&mut self, target: SymbolId, direct: bool) {
        match self.positions.get(&target) {
            Some(&pos) => self.entries[pos].1 = direct,
            None => {
                self.positions.insert(target, self.entries.len());
                self.entries.push((target, direct));
            }
        }
    }

    /// Flag recorded for `target`, if it was referenced.
    pub fn get(&self, target: SymbolId) -> Option<bool> {
        self.positions.get(&target).map(|&pos| self.entries[pos].1)
    }

    pub fn contains(&self, target: SymbolId) -> bool {
        self.positions.contains_key(&target)
    }

    /// All references in first-reference order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, bool)> + '_ {
        self.entries.iter().copied()
    }

    /// Targets whose flag is currently set.
    pub fn direct(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.entries
            .iter()
            .filter(|(_, direct)| *direct)
            .map(|(target, _)| *target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Declaration {
    /// Record that the text being rendered for this symbol references `target`.
    ///
    /// Self-references are dropped. The reference goes to the direct-use map
    /// while rendering the header-level region and to the body-use map while
    /// rendering the body; a repeated reference overwrites the stored flag.
    pub fn observe(&mut self, target: SymbolId, direct: bool) {
        if target == self.origin || !self.check_mutable("use") {
            return;
        }
        match self.region {
            Region::Header => self.direct_uses.insert(target, direct),
            Region::Body => self.body_uses.insert(target, direct),
        }
    }
}
