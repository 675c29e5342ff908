use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::enums::{OrderStatus, ProductCategory};
use crate::shared::money::{format_amount, parse_decimal};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a customer order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One line of an order. Owned exclusively by its order; product fields are
/// a snapshot taken at order time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub product: ProductRefSnapshot,
    pub quantity: u32,
    pub unit_price: String,
    pub total_price: String,
}

/// Product identity captured when the item was added
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRefSnapshot {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
}

impl OrderItem {
    pub fn new(
        product_id: String,
        product_name: String,
        product_category: ProductCategory,
        quantity: u32,
        unit_price: String,
    ) -> Self {
        let total = parse_decimal(&unit_price).unwrap_or(0.0) * quantity as f64;
        Self {
            id: Uuid::new_v4().to_string(),
            product: ProductRefSnapshot {
                id: product_id,
                name: product_name,
                category: product_category,
            },
            quantity,
            unit_price,
            total_price: format_amount(total),
        }
    }
}

/// Customer order with derived totals.
///
/// `items_count` and `total_amount` are recomputed whenever items change;
/// they are never accepted from a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    pub customer_address: String,
    pub status: OrderStatus,
    pub total_amount: String,
    #[serde(default)]
    pub notes: String,
    pub items: Vec<OrderItem>,
    pub items_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Attempted status change that the state machine forbids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTransitionError {
    /// Current status is terminal, nothing may follow it
    Terminal(OrderStatus),
}

impl fmt::Display for StatusTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusTransitionError::Terminal(status) => {
                write!(f, "Order is {} and can no longer change status", status)
            }
        }
    }
}

impl Order {
    /// Recompute the derived fields from the current item list
    pub fn recalculate(&mut self) {
        self.items_count = self.items.len();
        let total: f64 = self
            .items
            .iter()
            .map(|item| parse_decimal(&item.total_price).unwrap_or(0.0))
            .sum();
        self.total_amount = format_amount(total);
    }

    /// Apply an operator-selected status. Same-value selection is accepted
    /// and leaves the order untouched.
    pub fn transition_to(&mut self, next: OrderStatus) -> Result<(), StatusTransitionError> {
        if self.status == next {
            return Ok(());
        }
        if !self.status.can_transition_to(next) {
            return Err(StatusTransitionError::Terminal(self.status));
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Orders may only be deleted while still pending
    pub fn can_delete(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    /// Case-insensitive substring match over order number, customer name
    /// and customer email
    pub fn matches_search(&self, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }
        let needle = search.to_lowercase();
        self.order_number.to_lowercase().contains(&needle)
            || self.customer_name.to_lowercase().contains(&needle)
            || self.customer_email.to_lowercase().contains(&needle)
    }
}

/// Synthesize an order number: `ORD-<YYYYMMDD>-<NNNN>` with NNNN in
/// [1000, 9999]. The suffix is taken from fresh UUID randomness; uniqueness
/// is best-effort on the client, the server may reassign.
pub fn generate_order_number(now: DateTime<Utc>) -> String {
    let date = now.format("%Y%m%d");
    let bytes = Uuid::new_v4().into_bytes();
    let raw = u16::from_be_bytes([bytes[0], bytes[1]]);
    let suffix = 1000 + (raw % 9000);
    format!("ORD-{}-{}", date, suffix)
}

// ============================================================================
// List statistics
// ============================================================================

/// Per-status counts and revenue over a loaded order list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStats {
    pub total_orders: usize,
    pub pending: usize,
    pub delivered: usize,
    pub cancelled: usize,
    pub total_revenue: f64,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut stats = OrderStats {
            total_orders: orders.len(),
            ..OrderStats::default()
        };
        for order in orders {
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Cancelled => stats.cancelled += 1,
                _ => {}
            }
            stats.total_revenue += parse_decimal(&order.total_amount).unwrap_or(0.0);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order_with_items(items: Vec<OrderItem>) -> Order {
        let mut order = Order {
            id: OrderId::new_v4(),
            order_number: generate_order_number(Utc::now()),
            customer_name: "John Doe".to_string(),
            customer_email: "john@example.com".to_string(),
            customer_phone: String::new(),
            customer_address: "123 Main St".to_string(),
            status: OrderStatus::Pending,
            total_amount: "0.00".to_string(),
            notes: String::new(),
            items,
            items_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        order.recalculate();
        order
    }

    #[test]
    fn test_item_total_is_quantity_times_unit_price() {
        let item = OrderItem::new(
            "prod-a".to_string(),
            "Widget".to_string(),
            ProductCategory::Other,
            2,
            "10.00".to_string(),
        );
        assert_eq!(item.total_price, "20.00");
    }

    #[test]
    fn test_derived_fields_follow_items() {
        let order = order_with_items(vec![OrderItem::new(
            "prod-a".to_string(),
            "Widget".to_string(),
            ProductCategory::Other,
            2,
            "10.00".to_string(),
        )]);
        assert_eq!(order.items_count, 1);
        assert_eq!(order.total_amount, "20.00");

        let order = order_with_items(vec![
            OrderItem::new(
                "prod-a".to_string(),
                "Widget".to_string(),
                ProductCategory::Other,
                3,
                "29.99".to_string(),
            ),
            OrderItem::new(
                "prod-b".to_string(),
                "Gadget".to_string(),
                ProductCategory::Electronics,
                1,
                "149.99".to_string(),
            ),
        ]);
        assert_eq!(order.items_count, 2);
        assert_eq!(order.total_amount, "239.96");
    }

    #[test]
    fn test_transition_blocked_from_terminal() {
        let mut order = order_with_items(vec![]);
        order.transition_to(OrderStatus::Delivered).unwrap();
        let err = order.transition_to(OrderStatus::Pending).unwrap_err();
        assert_eq!(err, StatusTransitionError::Terminal(OrderStatus::Delivered));
        // The rejected selection leaves the stored status untouched
        assert_eq!(order.status, OrderStatus::Delivered);
        // Same-value re-selection stays a no-op
        assert!(order.transition_to(OrderStatus::Delivered).is_ok());
    }

    #[test]
    fn test_skip_ahead_transition_allowed() {
        let mut order = order_with_items(vec![]);
        assert!(order.transition_to(OrderStatus::Shipped).is_ok());
        assert!(order.transition_to(OrderStatus::Cancelled).is_ok());
    }

    #[test]
    fn test_delete_only_while_pending() {
        let mut order = order_with_items(vec![]);
        assert!(order.can_delete());
        order.transition_to(OrderStatus::Shipped).unwrap();
        assert!(!order.can_delete());
    }

    #[test]
    fn test_order_number_format() {
        let now = Utc.with_ymd_and_hms(2025, 8, 17, 12, 0, 0).unwrap();
        for _ in 0..50 {
            let number = generate_order_number(now);
            let parts: Vec<&str> = number.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0], "ORD");
            assert_eq!(parts[1], "20250817");
            let suffix: u16 = parts[2].parse().unwrap();
            assert!((1000..=9999).contains(&suffix), "suffix {}", suffix);
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut order = order_with_items(vec![]);
        order.order_number = "ORD-20250817-1001".to_string();
        assert!(order.matches_search("ord-2025"));
        assert!(order.matches_search("JOHN"));
        assert!(order.matches_search("john@example.com"));
        assert!(!order.matches_search("jane"));
    }

    #[test]
    fn test_stats() {
        let mut a = order_with_items(vec![OrderItem::new(
            "p".to_string(),
            "Widget".to_string(),
            ProductCategory::Other,
            1,
            "10.00".to_string(),
        )]);
        let mut b = a.clone();
        a.transition_to(OrderStatus::Delivered).unwrap();
        b.id = OrderId::new_v4();
        let stats = OrderStats::from_orders(&[a, b]);
        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.delivered, 1);
        assert_eq!(stats.pending, 1);
        assert!((stats.total_revenue - 20.0).abs() < 1e-9);
    }
}
