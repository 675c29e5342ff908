use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::aggregate::{generate_order_number, Order, OrderId, OrderItem};
use crate::domain::product::Product;
use crate::enums::{OrderStatus, ProductCategory};
use crate::shared::validation::{is_valid_email, FieldErrors, ValidationIssue};

/// One in-progress line of a draft. Carries the product snapshot taken when
/// the product was selected, so later catalog edits do not bleed into the
/// draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftItem {
    pub product_id: String,
    pub product_name: String,
    pub product_category: ProductCategory,
    pub unit_price: String,
    pub quantity: u32,
}

impl DraftItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.as_string(),
            product_name: product.name.clone(),
            product_category: product.category,
            unit_price: product.selling_price.clone(),
            quantity: 1,
        }
    }
}

/// An order under construction: customer details plus the items seeded from
/// the catalog selection. Discarding the draft has no side effects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub notes: String,
    pub items: Vec<DraftItem>,
}

impl OrderDraft {
    /// Seed a draft from the currently selected products, one item per
    /// product at quantity 1.
    pub fn from_selection<'a, I>(selected: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        Self {
            items: selected.into_iter().map(DraftItem::from_product).collect(),
            ..Self::default()
        }
    }

    /// Adjust an item quantity. Values below 1 clamp to 1.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity.max(1);
        }
    }

    /// Drop an item from the draft. The originating selection set is not
    /// touched.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.customer_name.trim().is_empty() {
            errors.insert("customer_name", ValidationIssue::Required);
        }
        let email = self.customer_email.trim();
        if email.is_empty() {
            errors.insert("customer_email", ValidationIssue::Required);
        } else if !is_valid_email(email) {
            errors.insert("customer_email", ValidationIssue::InvalidEmail);
        }
        if self.customer_address.trim().is_empty() {
            errors.insert("customer_address", ValidationIssue::Required);
        }
        if self.items.is_empty() {
            errors.insert("items", ValidationIssue::NoItems);
        }

        errors
    }

    /// Wire payload for order creation. Call only after `validate` passed.
    pub fn to_payload(&self) -> OrderCreatePayload {
        OrderCreatePayload {
            customer_name: self.customer_name.trim().to_string(),
            customer_email: self.customer_email.trim().to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            customer_address: self.customer_address.trim().to_string(),
            notes: self.notes.trim().to_string(),
            items: self
                .items
                .iter()
                .map(|item| OrderItemCreatePayload {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }

    /// Materialize a full pending order from the draft, with a fresh id,
    /// generated order number and recalculated totals.
    pub fn build_order(&self) -> Order {
        let now = Utc::now();
        let mut order = Order {
            id: OrderId::new_v4(),
            order_number: generate_order_number(now),
            customer_name: self.customer_name.trim().to_string(),
            customer_email: self.customer_email.trim().to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            customer_address: self.customer_address.trim().to_string(),
            status: OrderStatus::Pending,
            total_amount: "0.00".to_string(),
            notes: self.notes.trim().to_string(),
            items: self
                .items
                .iter()
                .map(|item| {
                    OrderItem::new(
                        item.product_id.clone(),
                        item.product_name.clone(),
                        item.product_category,
                        item.quantity,
                        item.unit_price.clone(),
                    )
                })
                .collect(),
            items_count: 0,
            created_at: now,
            updated_at: now,
        };
        order.recalculate();
        order
    }
}

/// JSON body for the order-creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatePayload {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub notes: String,
    pub items: Vec<OrderItemCreatePayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreatePayload {
    pub product_id: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductId;

    fn product(name: &str, selling: &str) -> Product {
        Product {
            id: ProductId::new_v4(),
            name: name.to_string(),
            category: ProductCategory::Stationary,
            cost_price: "1.00".to_string(),
            selling_price: selling.to_string(),
            description: None,
            stock_available: 10,
            units_sold: 0,
            demand_forecast: None,
            optimized_price: None,
        }
    }

    fn filled_draft() -> OrderDraft {
        let products = [product("Pen", "2.00"), product("Notebook", "5.50")];
        let mut draft = OrderDraft::from_selection(products.iter());
        draft.customer_name = "Jane Smith".to_string();
        draft.customer_email = "jane@example.com".to_string();
        draft.customer_address = "456 Oak Ave".to_string();
        draft
    }

    #[test]
    fn test_selection_seeds_items_at_quantity_one() {
        let draft = filled_draft();
        assert_eq!(draft.items.len(), 2);
        assert!(draft.items.iter().all(|i| i.quantity == 1));
        assert_eq!(draft.items[0].unit_price, "2.00");
    }

    #[test]
    fn test_quantity_floor_is_one() {
        let mut draft = filled_draft();
        draft.set_quantity(0, 0);
        assert_eq!(draft.items[0].quantity, 1);
        draft.set_quantity(0, 7);
        assert_eq!(draft.items[0].quantity, 7);
        // Out-of-range index is ignored
        draft.set_quantity(99, 3);
    }

    #[test]
    fn test_remove_item_keeps_other_items() {
        let mut draft = filled_draft();
        draft.remove_item(0);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].product_name, "Notebook");
        draft.remove_item(99);
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn test_validation_rules() {
        let mut draft = filled_draft();
        assert!(draft.validate().is_empty());

        draft.customer_email = "not-an-email".to_string();
        let errors = draft.validate();
        assert_eq!(
            errors.get("customer_email"),
            Some(&ValidationIssue::InvalidEmail)
        );

        draft.customer_email = String::new();
        draft.customer_name = String::new();
        draft.customer_address = " ".to_string();
        draft.items.clear();
        let errors = draft.validate();
        assert_eq!(errors.get("customer_name"), Some(&ValidationIssue::Required));
        assert_eq!(
            errors.get("customer_email"),
            Some(&ValidationIssue::Required)
        );
        assert_eq!(
            errors.get("customer_address"),
            Some(&ValidationIssue::Required)
        );
        assert_eq!(errors.get("items"), Some(&ValidationIssue::NoItems));
    }

    #[test]
    fn test_phone_and_notes_optional() {
        let draft = filled_draft();
        assert!(draft.customer_phone.is_empty());
        assert!(draft.notes.is_empty());
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_built_order_totals() {
        let products = [product("Widget", "10.00")];
        let mut draft = OrderDraft::from_selection(products.iter());
        draft.customer_name = "A".to_string();
        draft.customer_email = "a@b.co".to_string();
        draft.customer_address = "St".to_string();
        draft.set_quantity(0, 2);

        let order = draft.build_order();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items_count, 1);
        assert_eq!(order.total_amount, "20.00");
        assert!(order.order_number.starts_with("ORD-"));
    }
}
