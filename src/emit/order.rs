// This module implements the topological emitter that turns a sealed record set into a safe
// emission order. It performs a depth-first post-order walk over direct header-level edges
// only: body references and indirect signature references never constrain the order. Roots
// are taken in discovery order and each record's dependencies in first-reference order, so
// independent records keep a reproducible relative order across runs. Dependencies that are
// not part of the set are external and ignored. Visitation marks (Unvisited, InProgress,
// Done) live in a side-table owned by the pass, and the walk uses an explicit stack of
// (record, dependency cursor) frames so deep declaration chains cannot exhaust the call
// stack. Reaching an InProgress record is reported as EmitError::CycleDetected.

//! Dependency-respecting emission order.

use crate::core::error::{EmitError, EmitResult};
use crate::decl::{Declaration, SealedSet};

/// Visitation state of a record during ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// Not yet visited.
    Unvisited,
    /// On the visit stack.
    InProgress,
    /// Emitted.
    Done,
}

impl SealedSet {
    /// Compute the order in which records must be emitted.
    ///
    /// Every record appears strictly after all records it reaches through
    /// direct edges. On a cycle the error names the record whose visit found
    /// a dependency that was still in progress.
    pub fn emission_order(&self) -> EmitResult<Vec<&Declaration>> {
        let records = self.records();
        let mut marks = vec![Mark::Unvisited; records.len()];
        let mut order = Vec::with_capacity(records.len());
        // (record position, index of the next use to inspect)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..records.len() {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::InProgress;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (pos, cursor) = *frame;
                let record = &records[pos];

                let next = record
                    .direct_uses()
                    .iter()
                    .enumerate()
                    .skip(cursor)
                    .filter(|(_, (_, direct))| *direct)
                    .find_map(|(i, (target, _))| self.position(target).map(|dep| (i, dep)));

                match next {
                    Some((i, dep)) => {
                        frame.1 = i + 1;
                        match marks[dep] {
                            Mark::Unvisited => {
                                marks[dep] = Mark::InProgress;
                                stack.push((dep, 0));
                            }
                            Mark::InProgress => {
                                log::debug!(
                                    "cycle: {} depends on {} which is still being visited",
                                    record.origin(),
                                    records[dep].origin()
                                );
                                return Err(EmitError::CycleDetected {
                                    symbol: record.origin(),
                                });
                            }
                            Mark::Done => {}
                        }
                    }
                    None => {
                        marks[pos] = Mark::Done;
                        log::trace!("emit position {}: {}", order.len(), record.origin());
                        order.push(record);
                        stack.pop();
                    }
                }
            }
        }

        log::debug!("emission order computed for {} records", order.len());
        Ok(order)
    }
}
