//! Inline candidate selection.
//!
//! A function whose rendered body is small enough is emitted as
//! `static inline` so that small accessors cost nothing on the target.
//! The translator supplies the complexity score; this module only compares
//! it against the configured threshold.

use super::record::{DeclKind, Declaration};
use crate::core::config::EmitConfig;

/// Decide whether a record qualifies for inline emission.
///
/// Only function records with a definition can be inline, and only when
/// their complexity is strictly below the threshold.
pub fn qualifies_for_inline(decl: &Declaration, config: &EmitConfig) -> bool {
    decl.kind == DeclKind::Function
        && decl.has_definition()
        && decl.complexity < config.inline_threshold
}

impl Declaration {
    /// Complete translation of this record: store the final complexity score,
    /// then apply the inline heuristic. The record is frozen afterwards.
    pub fn finish(&mut self, complexity: u32, config: &EmitConfig) {
        if !self.check_mutable("complexity") {
            return;
        }
        self.complexity = complexity;
        self.inline = qualifies_for_inline(self, config);
        self.finished = true;

        if self.inline {
            log::trace!(
                "{} marked inline (complexity {} < {})",
                self.origin,
                complexity,
                config.inline_threshold
            );
        }
    }
}
