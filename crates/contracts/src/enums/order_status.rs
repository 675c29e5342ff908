use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment lifecycle of an order.
///
/// `pending → confirmed → processing → shipped → delivered` is the nominal
/// path; `cancelled` is reachable from any non-terminal state. An operator
/// may move an order to any status as long as the current one is not
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.code() == code)
    }

    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    /// No transition may leave a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether an order in this status may transition to `next`.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        !self.is_terminal() || *self == next
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Status filter for the order list: all statuses or one concrete status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(s) => s.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Statuses",
            StatusFilter::Only(s) => s.display_name(),
        }
    }

    pub fn from_code(code: &str) -> Self {
        match OrderStatus::from_code(code) {
            Some(s) => StatusFilter::Only(s),
            None => StatusFilter::All,
        }
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_any_transition_from_non_terminal() {
        for target in OrderStatus::all() {
            assert!(OrderStatus::Pending.can_transition_to(*target));
            assert!(OrderStatus::Processing.can_transition_to(*target));
        }
    }

    #[test]
    fn test_no_transition_from_terminal() {
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Confirmed));
        // Re-selecting the same value is a no-op, not a violation
        assert!(OrderStatus::Delivered.can_transition_to(OrderStatus::Delivered));
    }

    #[test]
    fn test_code_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(*status));
        }
        assert_eq!(OrderStatus::from_code("archived"), None);
    }
}
