//! Last-request-wins sequencing for list fetches
//!
//! List requests are never aborted once sent; instead every request takes a
//! ticket from a monotonically increasing counter and a response is applied
//! only if its ticket is still the newest one issued. Stale responses are
//! discarded so out-of-order arrivals cannot overwrite fresher data.

/// Sequence state for one fetch stream
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchSequence {
    issued: u64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a request about to be issued
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether a response holding `ticket` may update visible state
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut seq = FetchSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_stale_response_after_new_request() {
        let mut seq = FetchSequence::new();
        let a = seq.begin();
        // Response for `a` has not arrived yet when `b` is issued
        let b = seq.begin();
        // `a` arrives late and must be discarded
        assert!(!seq.is_current(a));
        // `b` arrives and is applied
        assert!(seq.is_current(b));
        // A duplicate/laggard for `b` after a third request is also stale
        let c = seq.begin();
        assert!(!seq.is_current(b));
        assert!(seq.is_current(c));
    }
}
