use std::cell::Cell;

use tracing::debug;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Sequence-number guard letting only the most recently issued request of a
/// fetch key apply its result.
///
/// Superseded requests are not cancelled; their results are dropped when
/// they arrive.
#[derive(Debug, Default)]
pub struct LatestRequest {
    issued: Cell<u64>,
}

impl LatestRequest {
    /// Creates a guard with no request issued yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a new request, superseding every earlier one.
    pub fn issue(&self) -> Ticket {
        let next = self.issued.get().wrapping_add(1);
        self.issued.set(next);
        Ticket(next)
    }

    /// Whether `ticket` belongs to the latest issued request.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.issued.get() == ticket.0
    }

    /// Passes `value` through when `ticket` is still the latest, drops it
    /// otherwise.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_latest(ticket) {
            Some(value)
        } else {
            debug!(
                ticket = ticket.0,
                latest = self.issued.get(),
                "dropping superseded response"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let guard = LatestRequest::new();
        let first = guard.issue();
        assert!(guard.is_latest(first));

        let second = guard.issue();
        assert!(!guard.is_latest(first));
        assert!(guard.is_latest(second));
        assert!(second > first);
    }

    #[test]
    fn test_accept_drops_superseded_results() {
        let guard = LatestRequest::new();
        let slow = guard.issue();
        let fast = guard.issue();

        // The newer request completes first, the older one afterwards.
        assert_eq!(guard.accept(fast, "march"), Some("march"));
        assert_eq!(guard.accept(slow, "february"), None);
    }
}
