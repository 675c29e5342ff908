use serde::{Deserialize, Serialize};

/// Product catalog categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Stationary,
    Electronics,
    Clothing,
    Books,
    Home,
    Sports,
    Other,
}

impl ProductCategory {
    /// Wire code used in query strings and payloads
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Stationary => "stationary",
            ProductCategory::Electronics => "electronics",
            ProductCategory::Clothing => "clothing",
            ProductCategory::Books => "books",
            ProductCategory::Home => "home",
            ProductCategory::Sports => "sports",
            ProductCategory::Other => "other",
        }
    }

    /// Human-readable label for selects and badges
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Stationary => "Stationary",
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Books => "Books",
            ProductCategory::Home => "Home & Garden",
            ProductCategory::Sports => "Sports",
            ProductCategory::Other => "Other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.code() == code)
    }

    pub fn all() -> &'static [ProductCategory] {
        &[
            ProductCategory::Stationary,
            ProductCategory::Electronics,
            ProductCategory::Clothing,
            ProductCategory::Books,
            ProductCategory::Home,
            ProductCategory::Sports,
            ProductCategory::Other,
        ]
    }
}

impl Default for ProductCategory {
    fn default() -> Self {
        ProductCategory::Stationary
    }
}

/// Category filter for the catalog list: either every category or one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(c) => c.display_name(),
        }
    }

    pub fn from_code(code: &str) -> Self {
        match ProductCategory::from_code(code) {
            Some(c) => CategoryFilter::Only(c),
            None => CategoryFilter::All,
        }
    }

    pub fn matches(&self, category: ProductCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for cat in ProductCategory::all() {
            assert_eq!(ProductCategory::from_code(cat.code()), Some(*cat));
        }
        assert_eq!(ProductCategory::from_code("unknown"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ProductCategory::Home).unwrap();
        assert_eq!(json, "\"home\"");
        let back: ProductCategory = serde_json::from_str("\"electronics\"").unwrap();
        assert_eq!(back, ProductCategory::Electronics);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(ProductCategory::Books));
        assert!(CategoryFilter::Only(ProductCategory::Books).matches(ProductCategory::Books));
        assert!(!CategoryFilter::Only(ProductCategory::Books).matches(ProductCategory::Sports));
    }
}
