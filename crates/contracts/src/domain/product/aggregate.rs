use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::ProductCategory;
use crate::shared::money::parse_decimal;
use crate::shared::validation::{FieldErrors, ValidationIssue};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a catalog product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

/// Catalog product record as served by the product endpoint.
///
/// Prices are decimal strings on the wire. `demand_forecast` and
/// `optimized_price` are computed by an external pricing service and are
/// display-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    pub cost_price: String,
    pub selling_price: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stock_available: u32,
    #[serde(default)]
    pub units_sold: u32,
    #[serde(default)]
    pub demand_forecast: Option<String>,
    #[serde(default)]
    pub optimized_price: Option<String>,
}

impl Product {
    /// Case-insensitive substring match over the searchable fields
    pub fn matches_search(&self, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }
        let needle = search.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }
}

// ============================================================================
// Form
// ============================================================================

/// Create/update form for a product. Numeric fields are kept as raw input
/// strings until validation so the UI can echo back exactly what was typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductForm {
    pub id: Option<ProductId>,
    pub name: String,
    pub category: ProductCategory,
    pub cost_price: String,
    pub selling_price: String,
    pub description: String,
    pub stock_available: String,
    pub units_sold: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            category: ProductCategory::Stationary,
            cost_price: String::new(),
            selling_price: String::new(),
            description: String::new(),
            stock_available: String::new(),
            units_sold: String::new(),
        }
    }
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            category: product.category,
            cost_price: product.cost_price.clone(),
            selling_price: product.selling_price.clone(),
            description: product.description.clone().unwrap_or_default(),
            stock_available: product.stock_available.to_string(),
            units_sold: product.units_sold.to_string(),
        }
    }

    /// Local precondition check. An empty map means the form may be
    /// submitted; any entry blocks the network call.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", ValidationIssue::Required);
        }

        let cost = parse_decimal(&self.cost_price);
        let selling = parse_decimal(&self.selling_price);

        match cost {
            Some(v) if v > 0.0 => {}
            _ => {
                errors.insert("cost_price", ValidationIssue::NotAPositiveNumber);
            }
        }
        match selling {
            Some(v) if v > 0.0 => {}
            _ => {
                errors.insert("selling_price", ValidationIssue::NotAPositiveNumber);
            }
        }
        if let (Some(cost), Some(selling)) = (cost, selling) {
            if selling <= cost {
                errors.insert("selling_price", ValidationIssue::MustExceedCostPrice);
            }
        }

        for (field, value) in [
            ("stock_available", &self.stock_available),
            ("units_sold", &self.units_sold),
        ] {
            let trimmed = value.trim();
            if !trimmed.is_empty() && trimmed.parse::<i64>().map_or(true, |n| n < 0) {
                errors.insert(field, ValidationIssue::Negative);
            }
        }

        errors
    }

    /// Wire payload for create/update. Call only after `validate` passed.
    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            id: self.id,
            name: self.name.trim().to_string(),
            category: self.category,
            cost_price: self.cost_price.trim().to_string(),
            selling_price: self.selling_price.trim().to_string(),
            description: self.description.trim().to_string(),
            stock_available: self.stock_available.trim().parse().unwrap_or(0),
            units_sold: self.units_sold.trim().parse().unwrap_or(0),
        }
    }
}

/// JSON body for product create/update requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    pub category: ProductCategory,
    pub cost_price: String,
    pub selling_price: String,
    pub description: String,
    pub stock_available: u32,
    pub units_sold: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Pen".to_string(),
            cost_price: "1.00".to_string(),
            selling_price: "2.00".to_string(),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_name_required() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        let errors = form.validate();
        assert_eq!(errors.get("name"), Some(&ValidationIssue::Required));
    }

    #[test]
    fn test_selling_must_exceed_cost() {
        let mut form = valid_form();
        form.selling_price = "1.00".to_string();
        let errors = form.validate();
        assert_eq!(
            errors.get("selling_price"),
            Some(&ValidationIssue::MustExceedCostPrice)
        );

        form.selling_price = "0.50".to_string();
        let errors = form.validate();
        assert_eq!(
            errors.get("selling_price"),
            Some(&ValidationIssue::MustExceedCostPrice)
        );
    }

    #[test]
    fn test_prices_must_be_positive() {
        let mut form = valid_form();
        form.cost_price = "0".to_string();
        form.selling_price = "".to_string();
        let errors = form.validate();
        assert_eq!(
            errors.get("cost_price"),
            Some(&ValidationIssue::NotAPositiveNumber)
        );
        assert_eq!(
            errors.get("selling_price"),
            Some(&ValidationIssue::NotAPositiveNumber)
        );
    }

    #[test]
    fn test_counters_cannot_be_negative() {
        let mut form = valid_form();
        form.stock_available = "-1".to_string();
        form.units_sold = "5".to_string();
        let errors = form.validate();
        assert_eq!(
            errors.get("stock_available"),
            Some(&ValidationIssue::Negative)
        );
        assert_eq!(errors.get("units_sold"), None);
    }

    #[test]
    fn test_empty_counters_default_to_zero() {
        let form = valid_form();
        assert!(form.validate().is_empty());
        let payload = form.to_payload();
        assert_eq!(payload.stock_available, 0);
        assert_eq!(payload.units_sold, 0);
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let product = Product {
            id: ProductId::new_v4(),
            name: "Wireless Headphones".to_string(),
            category: ProductCategory::Electronics,
            cost_price: "80.00".to_string(),
            selling_price: "149.99".to_string(),
            description: Some("Noise cancelling".to_string()),
            stock_available: 10,
            units_sold: 2,
            demand_forecast: None,
            optimized_price: None,
        };
        assert!(product.matches_search("wireless"));
        assert!(product.matches_search("CANCELLING"));
        assert!(!product.matches_search("pencil"));
        assert!(product.matches_search(""));
    }
}
