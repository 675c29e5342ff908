use serde::{Deserialize, Serialize};

use super::aggregate::Order;
use crate::shared::validation::{is_valid_email, FieldErrors, ValidationIssue};

/// Post-creation edit of an order: customer details and notes only.
/// Status, order number, items and totals are never form-editable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderEditForm {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub notes: String,
}

impl OrderEditForm {
    pub fn from_order(order: &Order) -> Self {
        Self {
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            customer_phone: order.customer_phone.clone(),
            customer_address: order.customer_address.clone(),
            notes: order.notes.clone(),
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
        errors
    }

    /// Apply the edited fields to an order copy (used for the optimistic
    /// local update while the server call is in flight)
    pub fn apply_to(&self, order: &mut Order) {
        order.customer_name = self.customer_name.trim().to_string();
        order.customer_email = self.customer_email.trim().to_string();
        order.customer_phone = self.customer_phone.trim().to_string();
        order.customer_address = self.customer_address.trim().to_string();
        order.notes = self.notes.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::aggregate::{generate_order_number, OrderId};
    use crate::enums::OrderStatus;
    use chrono::Utc;

    #[test]
    fn test_apply_to_overwrites_customer_fields_only() {
        let mut order = Order {
            id: OrderId::new_v4(),
            order_number: generate_order_number(Utc::now()),
            customer_name: "John Doe".to_string(),
            customer_email: "john@example.com".to_string(),
            customer_phone: String::new(),
            customer_address: "123 Main St".to_string(),
            status: OrderStatus::Processing,
            total_amount: "20.00".to_string(),
            notes: String::new(),
            items: Vec::new(),
            items_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let number = order.order_number.clone();

        let form = OrderEditForm {
            customer_name: "  Jane Smith  ".to_string(),
            customer_email: "jane@example.com".to_string(),
            customer_phone: "555-0100".to_string(),
            customer_address: "456 Oak Ave".to_string(),
            notes: "leave at door".to_string(),
        };
        form.apply_to(&mut order);

        assert_eq!(order.customer_name, "Jane Smith");
        assert_eq!(order.customer_email, "jane@example.com");
        assert_eq!(order.customer_phone, "555-0100");
        assert_eq!(order.customer_address, "456 Oak Ave");
        assert_eq!(order.notes, "leave at door");
        // Everything outside the form stays untouched
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.total_amount, "20.00");
        assert_eq!(order.order_number, number);
    }

    #[test]
    fn test_validation_mirrors_draft_customer_rules() {
        let mut form = OrderEditForm {
            customer_name: "Jane".to_string(),
            customer_email: "jane@example.com".to_string(),
            customer_address: "456 Oak Ave".to_string(),
            ..OrderEditForm::default()
        };
        assert!(form.validate().is_empty());

        form.customer_email = "broken".to_string();
        assert_eq!(
            form.validate().get("customer_email"),
            Some(&ValidationIssue::InvalidEmail)
        );
    }
}
