use std::collections::HashSet;

use foldhash::fast::FixedState;
use jw_reflect::IdentityKey;

// -----------------------------------------------------------------------------
// TraversalContext

/// The mutable state of one top-level write call.
///
/// A context is created fresh inside [`JsonEmitter::write`](crate::JsonEmitter::write),
/// threaded through the whole recursion, and dropped when the call returns;
/// it is never shared or reused, which is what makes concurrent writes with
/// separate sinks independent.
///
/// The visited set is global to the document and never pruned: a value seen
/// anywhere earlier in the write is a collision wherever it appears again,
/// matching whole-document identity tracking rather than per-branch
/// tracking.
pub struct TraversalContext {
    visited: HashSet<IdentityKey, FixedState>,
    depth_limit: usize,
}

impl TraversalContext {
    /// Creates a context with the resolved depth limit.
    pub(crate) fn new(depth_limit: usize) -> Self {
        Self {
            visited: HashSet::with_hasher(FixedState::default()),
            depth_limit,
        }
    }

    /// The depth limit in effect for this write.
    #[inline]
    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    /// Records an identity key; returns `false` when it was already present.
    #[inline]
    pub(crate) fn record(&mut self, key: IdentityKey) -> bool {
        self.visited.insert(key)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_twice_reports_collision() {
        let mut context = TraversalContext::new(64);
        let key = IdentityKey::from_parts(0x4000, "tests::Node");

        assert!(context.record(key));
        assert!(!context.record(key));
    }
}
