//! Stale-response guard for in-flight requests
//!
//! Each selection that triggers a fetch takes a fresh [`RequestId`] from its
//! [`RequestGeneration`]. The id travels with the request and comes back in
//! the completion message; only a completion whose id is still current may
//! touch state. Nothing is cancelled on the wire.

/// Identifies one issued request within its generation counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic counter deciding which completion is current
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    /// Supersede every earlier request and return the id of a new one
    pub fn next(&mut self) -> RequestId {
        self.current += 1;
        RequestId(self.current)
    }

    /// Supersede every earlier request without issuing a new one
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    /// Id of the most recent request (may already be invalidated)
    pub fn current(&self) -> RequestId {
        RequestId(self.current)
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_supersedes_previous() {
        let mut generation = RequestGeneration::default();
        let first = generation.next();
        let second = generation.next();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_invalidate_discards_pending() {
        let mut generation = RequestGeneration::default();
        let pending = generation.next();
        generation.invalidate();

        assert!(!generation.is_current(pending));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut generation = RequestGeneration::default();
        let a = generation.next();
        generation.invalidate();
        let b = generation.next();

        assert_ne!(a, b);
        assert!(b.value() > a.value());
    }
}
