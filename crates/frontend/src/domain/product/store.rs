//! Catalog store
//!
//! Owns the loaded product page and the active filter. All writes to the
//! visible list go through these mutation operations; a failed list fetch
//! leaves the previously displayed data untouched.

use contracts::domain::product::{Product, ProductForm, ProductId};
use contracts::enums::product_category::CategoryFilter;
use contracts::shared::validation::FieldErrors;
use leptos::logging::log;
use leptos::prelude::*;

use super::api;
use crate::shared::confirm::confirm;
use crate::shared::fetch_seq::FetchSequence;
use crate::shared::notify::Notifier;

/// Conjunctive local filter: a product appears only when it matches the
/// category filter AND the search substring.
pub fn filter_products(
    products: &[Product],
    category: CategoryFilter,
    search: &str,
) -> Vec<Product> {
    products
        .iter()
        .filter(|p| category.matches(p.category) && p.matches_search(search))
        .cloned()
        .collect()
}

#[derive(Clone, Copy)]
pub struct CatalogStore {
    pub products: RwSignal<Vec<Product>>,
    pub loading: RwSignal<bool>,
    pub category: RwSignal<CategoryFilter>,
    pub search: RwSignal<String>,
    seq: StoredValue<FetchSequence>,
    notifier: Notifier,
}

impl CatalogStore {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            category: RwSignal::new(CategoryFilter::All),
            search: RwSignal::new(String::new()),
            seq: StoredValue::new(FetchSequence::new()),
            notifier,
        }
    }

    /// Products to render: loaded page narrowed by the active filter
    pub fn visible(&self) -> Vec<Product> {
        let category = self.category.get();
        let search = self.search.get();
        self.products
            .with(|items| filter_products(items, category, &search))
    }

    /// Issue a list fetch. Only the response of the most recently issued
    /// request may update visible state; fetch failures keep the previous
    /// page on screen (no error UI is defined for listing).
    pub fn load(&self) {
        let mut ticket = 0;
        self.seq.update_value(|seq| ticket = seq.begin());

        let store = *self;
        let category = self.category.get_untracked();
        let search = self.search.get_untracked();
        self.loading.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::list(category, &search).await;
            let current = store.seq.with_value(|seq| seq.is_current(ticket));
            if !current {
                log!("Discarding stale product list response");
                return;
            }
            match result {
                Ok(items) => store.products.set(items),
                Err(e) => log!("Failed to load products: {}", e),
            }
            store.loading.set(false);
        });
    }

    /// Category changes bypass the debounce and refetch immediately
    pub fn set_category(&self, category: CategoryFilter) {
        self.category.set(category);
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

    /// Create a product. Field errors block the network call entirely.
    pub fn create(&self, form: &ProductForm) -> Result<(), FieldErrors> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let payload = form.to_payload();
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::create(&payload).await {
                Ok(_) => {
                    store.notifier.success("Product added successfully!");
                    store.load();
                }
                Err(e) => {
                    log!("Create product failed: {}", e);
                    store.notifier.error("Failed to add product");
                }
            }
        });
        Ok(())
    }

    /// Update an existing product, same preconditions as `create`
    pub fn update(&self, form: &ProductForm) -> Result<(), FieldErrors> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let Some(id) = form.id else {
            return Ok(());
        };
        let payload = form.to_payload();
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::update(id, &payload).await {
                Ok(_) => {
                    store.notifier.success("Product updated successfully!");
                    store.load();
                }
                Err(e) => {
                    log!("Update product failed: {}", e);
                    store.notifier.error("Failed to update product");
                }
            }
        });
        Ok(())
    }

    /// Delete a product after operator confirmation. Declining the dialog
    /// is a silent no-op.
    pub fn delete(&self, id: ProductId) {
        if !confirm("Are you sure you want to delete this product?") {
            return;
        }
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    store.notifier.success("Product deleted successfully!");
                    store.load();
                }
                Err(e) => {
                    log!("Delete product failed: {}", e);
                    store.notifier.error("Failed to delete product");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ProductCategory;

    fn product(name: &str, category: ProductCategory) -> Product {
        Product {
            id: ProductId::new_v4(),
            name: name.to_string(),
            category,
            cost_price: "1.00".to_string(),
            selling_price: "2.00".to_string(),
            description: None,
            stock_available: 0,
            units_sold: 0,
            demand_forecast: None,
            optimized_price: None,
        }
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let products = vec![
            product("Pen", ProductCategory::Stationary),
            product("Pencil", ProductCategory::Stationary),
            product("Penlight", ProductCategory::Electronics),
        ];

        let both = filter_products(
            &products,
            CategoryFilter::Only(ProductCategory::Stationary),
            "pen",
        );
        assert_eq!(both.len(), 2);
        assert!(both.iter().all(|p| p.category == ProductCategory::Stationary));

        // Matching the search alone is not enough
        let narrowed = filter_products(
            &products,
            CategoryFilter::Only(ProductCategory::Electronics),
            "pen",
        );
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].name, "Penlight");
    }

    #[test]
    fn test_filter_search_case_insensitive() {
        let products = vec![product("Pen", ProductCategory::Stationary)];
        let found = filter_products(&products, CategoryFilter::All, "PEN");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_new_product_visible_under_its_category() {
        let products = vec![product("Pen", ProductCategory::Stationary)];
        let visible = filter_products(
            &products,
            CategoryFilter::Only(ProductCategory::Stationary),
            "",
        );
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Pen");
    }
}
