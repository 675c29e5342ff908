//! Order store and status state machine
//!
//! Owns the loaded order list. Status changes apply optimistically and the
//! server acknowledgment only decides which notification is emitted; delete
//! is rejected locally unless the order is still pending.

use contracts::domain::order::aggregate::OrderStats;
use contracts::domain::order::{Order, OrderDraft, OrderEditForm, OrderId};
use contracts::enums::order_status::StatusFilter;
use contracts::enums::OrderStatus;
use contracts::shared::validation::FieldErrors;
use leptos::logging::log;
use leptos::prelude::*;

use super::api;
use crate::shared::confirm::confirm;
use crate::shared::fetch_seq::FetchSequence;
use crate::shared::notify::Notifier;

/// Conjunctive filter: an order must satisfy both the status filter and the
/// case-insensitive search over order number, customer name and email.
pub fn filter_orders(orders: &[Order], status: StatusFilter, search: &str) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| status.matches(o.status) && o.matches_search(search))
        .cloned()
        .collect()
}

#[derive(Clone, Copy)]
pub struct OrderStore {
    pub orders: RwSignal<Vec<Order>>,
    pub loading: RwSignal<bool>,
    pub status_filter: RwSignal<StatusFilter>,
    pub search: RwSignal<String>,
    seq: StoredValue<FetchSequence>,
    notifier: Notifier,
}

impl OrderStore {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            orders: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            status_filter: RwSignal::new(StatusFilter::All),
            search: RwSignal::new(String::new()),
            seq: StoredValue::new(FetchSequence::new()),
            notifier,
        }
    }

    /// Orders to render under the active filter
    pub fn visible(&self) -> Vec<Order> {
        let status = self.status_filter.get();
        let search = self.search.get();
        self.orders
            .with(|items| filter_orders(items, status, &search))
    }

    pub fn stats(&self) -> OrderStats {
        self.orders.with(|items| OrderStats::from_orders(items))
    }

    /// Issue a list fetch with last-request-wins semantics
    pub fn load(&self) {
        let mut ticket = 0;
        self.seq.update_value(|seq| ticket = seq.begin());

        let store = *self;
        let status = self.status_filter.get_untracked();
        let search = self.search.get_untracked();
        self.loading.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::list(status, &search).await;
            let current = store.seq.with_value(|seq| seq.is_current(ticket));
            if !current {
                log!("Discarding stale order list response");
                return;
            }
            match result {
                Ok(items) => store.orders.set(items),
                Err(e) => log!("Failed to load orders: {}", e),
            }
            store.loading.set(false);
        });
    }

    /// Status-filter changes take effect immediately
    pub fn set_status_filter(&self, status: StatusFilter) {
        self.status_filter.set(status);
        self.load();
    }

    /// Apply a debounced search commit
    pub fn commit_search(&self, text: String) {
        if self.search.get_untracked() == text {
            return;
        }
        self.search.set(text);
        self.load();
    }

    /// Create an order from a validated draft. Field errors block the
    /// network call; on acknowledgment the new order is prepended (newest
    /// first) and the outcome notified.
    pub fn create_from_draft(&self, draft: &OrderDraft) -> Result<(), FieldErrors> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let payload = draft.to_payload();
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::create(&payload).await {
                Ok(order) => {
                    store.orders.update(|items| items.insert(0, order));
                    store.notifier.success("Order created successfully!");
                }
                Err(e) => {
                    log!("Create order failed: {}", e);
                    store.notifier.error("Failed to create order");
                }
            }
        });
        Ok(())
    }

    /// Operator selected a new status for an order. The local copy updates
    /// immediately; the server acknowledgment only decides the
    /// notification. Transitions out of a terminal status are rejected
    /// without a network call.
    pub fn update_status(&self, id: OrderId, next: OrderStatus) {
        let mut rejected: Option<String> = None;
        let mut changed = false;
        self.orders.update(|items| {
            if let Some(order) = items.iter_mut().find(|o| o.id == id) {
                if order.status == next {
                    return;
                }
                match order.transition_to(next) {
                    Ok(()) => changed = true,
                    Err(e) => rejected = Some(e.to_string()),
                }
            }
        });

        if let Some(message) = rejected {
            self.notifier.error(message);
            return;
        }
        if !changed {
            return;
        }

        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_status(id, next).await {
                Ok(updated) => {
                    store.orders.update(|items| {
                        if let Some(slot) = items.iter_mut().find(|o| o.id == id) {
                            *slot = updated;
                        }
                    });
                    store.notifier.success("Order status updated successfully!");
                }
                Err(e) => {
                    log!("Update order status failed: {}", e);
                    store.notifier.error("Failed to update order status");
                }
            }
        });
    }

    /// Edit customer details and notes of an existing order. Applies the
    /// edit to the local copy immediately; the server copy replaces it on
    /// acknowledgment.
    pub fn update_details(&self, id: OrderId, form: &OrderEditForm) -> Result<(), FieldErrors> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        self.orders.update(|items| {
            if let Some(order) = items.iter_mut().find(|o| o.id == id) {
                form.apply_to(order);
            }
        });
        let form = form.clone();
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_details(id, &form).await {
                Ok(updated) => {
                    store.orders.update(|items| {
                        if let Some(slot) = items.iter_mut().find(|o| o.id == id) {
                            *slot = updated;
                        }
                    });
                    store.notifier.success("Order updated successfully!");
                }
                Err(e) => {
                    log!("Update order failed: {}", e);
                    store.notifier.error("Failed to update order");
                }
            }
        });
        Ok(())
    }

    /// Delete an order. Allowed only while pending, and gated behind an
    /// operator confirmation; a non-pending order is rejected without any
    /// network call.
    pub fn delete(&self, id: OrderId) {
        let deletable = self
            .orders
            .with_untracked(|items| items.iter().find(|o| o.id == id).map(|o| o.can_delete()));
        match deletable {
            Some(true) => {}
            Some(false) => {
                self.notifier.error("Only pending orders can be deleted");
                return;
            }
            None => return,
        }
        if !confirm("Are you sure you want to delete this order?") {
            return;
        }

        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    store.orders.update(|items| items.retain(|o| o.id != id));
                    store.notifier.success("Order deleted successfully!");
                }
                Err(e) => {
                    log!("Delete order failed: {}", e);
                    store.notifier.error("Failed to delete order");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::order::aggregate::generate_order_number;

    fn order(number: &str, name: &str, email: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::new_v4(),
            order_number: number.to_string(),
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            customer_phone: String::new(),
            customer_address: "addr".to_string(),
            status,
            total_amount: "0.00".to_string(),
            notes: String::new(),
            items: Vec::new(),
            items_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let orders = vec![
            order(
                "ORD-20250817-1001",
                "John Doe",
                "john@example.com",
                OrderStatus::Pending,
            ),
            order(
                "ORD-20250817-1002",
                "Jane Smith",
                "jane@example.com",
                OrderStatus::Confirmed,
            ),
        ];

        // Search matches both, status narrows to one
        let result = filter_orders(&orders, StatusFilter::Only(OrderStatus::Pending), "ord-");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].customer_name, "John Doe");

        // Status matches, search does not
        let result = filter_orders(&orders, StatusFilter::Only(OrderStatus::Pending), "jane");
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_searches_number_name_and_email() {
        let orders = vec![order(
            "ORD-20250817-1001",
            "John Doe",
            "john@example.com",
            OrderStatus::Pending,
        )];
        assert_eq!(filter_orders(&orders, StatusFilter::All, "1001").len(), 1);
        assert_eq!(filter_orders(&orders, StatusFilter::All, "JOHN D").len(), 1);
        assert_eq!(
            filter_orders(&orders, StatusFilter::All, "example.com").len(),
            1
        );
        assert!(filter_orders(&orders, StatusFilter::All, "nothing").is_empty());
    }

    #[test]
    fn test_generated_numbers_searchable() {
        let number = generate_order_number(Utc::now());
        let orders = vec![order(&number, "A", "a@b.co", OrderStatus::Pending)];
        assert_eq!(filter_orders(&orders, StatusFilter::All, "ord-").len(), 1);
    }
}
