//! Product catalog page

use contracts::domain::order::OrderDraft;
use contracts::domain::product::{Product, ProductForm};
use contracts::enums::product_category::CategoryFilter;
use contracts::enums::ProductCategory;
use contracts::shared::money::format_currency;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use super::form::ProductFormModal;
use crate::app::{AppContext, Page};
use crate::domain::product::store::CatalogStore;
use crate::shared::debounce::SearchInput;
use crate::shared::selection::SelectionSet;

const TH_STYLE: &str = "padding: 10px 12px; text-align: left; font-size: 0.8rem; text-transform: uppercase; color: #6c757d; border-bottom: 2px solid #dee2e6;";
const TD_STYLE: &str = "padding: 10px 12px; border-bottom: 1px solid #e9ecef; font-size: 0.875rem; vertical-align: middle;";
const ACTION_BTN_STYLE: &str = "padding: 4px 10px; border: 1px solid #ced4da; border-radius: 4px; background: white; cursor: pointer; font-size: 0.8rem; margin-right: 6px;";

/// Empty-table message: distinguishes a filtered-out view from a catalog
/// with no products at all
fn empty_state_message(filter_active: bool) -> &'static str {
    if filter_active {
        "No products match your search criteria."
    } else {
        "No products found. Add your first product to get started."
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = CatalogStore::new(ctx.notifier);
    let selection = RwSignal::new(SelectionSet::new());

    let is_loaded = RwSignal::new(false);
    Effect::new(move |_| {
        if !is_loaded.get() {
            is_loaded.set(true);
            store.load();
        }
    });

    let form = RwSignal::new(ProductForm::default());
    let form_errors = RwSignal::new(FieldErrors::new());
    let show_form = RwSignal::new(false);
    let viewing = RwSignal::new(None::<Product>);

    let open_add = move |_| {
        form.set(ProductForm::default());
        form_errors.set(FieldErrors::new());
        show_form.set(true);
    };

    let save_form = Callback::new(move |_| {
        let current = form.get_untracked();
        let result = if current.id.is_some() {
            store.update(&current)
        } else {
            store.create(&current)
        };
        match result {
            Ok(()) => show_form.set(false),
            Err(errors) => form_errors.set(errors),
        }
    });

    let place_order = move |_| {
        let selected: Vec<Product> = store.products.with_untracked(|items| {
            selection.with_untracked(|sel| {
                items
                    .iter()
                    .filter(|p| sel.contains(&p.id.as_string()))
                    .cloned()
                    .collect()
            })
        });
        if selected.is_empty() {
            ctx.notifier
                .error("Please select at least one product to place an order");
            return;
        }
        ctx.pending_draft
            .set(Some(OrderDraft::from_selection(selected.iter())));
        selection.update(|sel| sel.clear());
        ctx.page.set(Page::Orders);
    };

    view! {
        <div style="padding: 20px;">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; flex-wrap: wrap; gap: 12px;">
                <div>
                    <h2 style="margin: 0 0 4px 0;">"Products"</h2>
                    <span style="color: #6c757d; font-size: 0.875rem;">
                        {move || format!("{} products", store.visible().len())}
                    </span>
                </div>
                <div style="display: flex; gap: 10px; align-items: center; flex-wrap: wrap;">
                    <SearchInput
                        placeholder="Search products..."
                        on_commit=Callback::new(move |text| store.commit_search(text))
                    />
                    <select
                        style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: white;"
                        on:change=move |ev| {
                            let code = event_target_value(&ev);
                            let filter = ProductCategory::from_code(&code)
                                .map(CategoryFilter::Only)
                                .unwrap_or(CategoryFilter::All);
                            store.set_category(filter);
                        }
                    >
                        <option value="all">"All Categories"</option>
                        {ProductCategory::all().iter().map(|category| view! {
                            <option value=category.code()>{category.display_name()}</option>
                        }).collect_view()}
                    </select>
                    <button
                        style="padding: 8px 16px; border: none; border-radius: 4px; background: #28a745; color: white; cursor: pointer; font-weight: 500;"
                        on:click=place_order
                    >
                        {move || {
                            let count = selection.with(|sel| sel.len());
                            if count > 0 {
                                format!("Place Order ({})", count)
                            } else {
                                "Place Order".to_string()
                            }
                        }}
                    </button>
                    <button
                        style="padding: 8px 16px; border: none; border-radius: 4px; background: #dc3545; color: white; cursor: pointer; font-weight: 500;"
                        on:click=open_add
                    >"+ Add Product"</button>
                </div>
            </div>

            {move || {
                if store.loading.get() {
                    view! {
                        <div style="text-align: center; padding: 40px; color: #6c757d;">"Loading products..."</div>
                    }.into_any()
                } else {
                    let visible = store.visible();
                    if visible.is_empty() {
                        let filter_active = !store.search.get().is_empty()
                            || store.category.get() != CategoryFilter::All;
                        view! {
                            <div style="text-align: center; padding: 40px; color: #6c757d;">
                                {empty_state_message(filter_active)}
                            </div>
                        }.into_any()
                    } else {
                        let visible_ids: Vec<String> =
                            visible.iter().map(|p| p.id.as_string()).collect();
                        let header_ids = visible_ids.clone();
                        view! {
                            <div style="background: white; border: 1px solid #dee2e6; border-radius: 8px; overflow-x: auto;">
                                <table style="width: 100%; border-collapse: collapse;">
                                    <thead>
                                        <tr>
                                            <th style=TH_STYLE>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || {
                                                        selection.with(|sel| sel.all_selected(&header_ids))
                                                    }
                                                    on:change={
                                                        let ids = visible_ids.clone();
                                                        move |_| selection.update(|sel| sel.select_all(&ids))
                                                    }
                                                />
                                            </th>
                                            <th style=TH_STYLE>"Product"</th>
                                            <th style=TH_STYLE>"Category"</th>
                                            <th style=TH_STYLE>"Cost"</th>
                                            <th style=TH_STYLE>"Price"</th>
                                            <th style=TH_STYLE>"Optimized"</th>
                                            <th style=TH_STYLE>"Stock"</th>
                                            <th style=TH_STYLE>"Sold"</th>
                                            <th style=TH_STYLE>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible.into_iter().map(|product| {
                                            let row_id = product.id.as_string();
                                            let toggle_id = row_id.clone();
                                            let checked_id = row_id.clone();
                                            let view_product = product.clone();
                                            let edit_product = product.clone();
                                            let delete_id = product.id;
                                            view! {
                                                <tr>
                                                    <td style=TD_STYLE>
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=move || {
                                                                selection.with(|sel| sel.contains(&checked_id))
                                                            }
                                                            on:change=move |_| {
                                                                selection.update(|sel| sel.toggle(&toggle_id))
                                                            }
                                                        />
                                                    </td>
                                                    <td style=TD_STYLE>
                                                        <div style="font-weight: 500;">{product.name.clone()}</div>
                                                        {product.description.clone().map(|d| view! {
                                                            <div style="color: #6c757d; font-size: 0.8rem;">{d}</div>
                                                        })}
                                                    </td>
                                                    <td style=TD_STYLE>{product.category.display_name()}</td>
                                                    <td style=TD_STYLE>{format_currency(&product.cost_price)}</td>
                                                    <td style=TD_STYLE>{format_currency(&product.selling_price)}</td>
                                                    <td style=TD_STYLE>
                                                        {product.optimized_price.clone()
                                                            .map(|p| format_currency(&p))
                                                            .unwrap_or_else(|| "—".to_string())}
                                                    </td>
                                                    <td style=TD_STYLE>{product.stock_available}</td>
                                                    <td style=TD_STYLE>{product.units_sold}</td>
                                                    <td style=format!("{} white-space: nowrap;", TD_STYLE)>
                                                        <button
                                                            style=ACTION_BTN_STYLE
                                                            on:click=move |_| viewing.set(Some(view_product.clone()))
                                                        >"View"</button>
                                                        <button
                                                            style=ACTION_BTN_STYLE
                                                            on:click=move |_| {
                                                                form.set(ProductForm::from_product(&edit_product));
                                                                form_errors.set(FieldErrors::new());
                                                                show_form.set(true);
                                                            }
                                                        >"Edit"</button>
                                                        <button
                                                            style="padding: 4px 10px; border: 1px solid #dc3545; border-radius: 4px; background: white; color: #dc3545; cursor: pointer; font-size: 0.8rem;"
                                                            on:click=move |_| store.delete(delete_id)
                                                        >"Delete"</button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }.into_any()
                    }
                }
            }}

            {move || {
                if show_form.get() {
                    let title = if form.with_untracked(|f| f.id.is_some()) {
                        "Edit Product"
                    } else {
                        "Add New Product"
                    };
                    let save_label = if form.with_untracked(|f| f.id.is_some()) {
                        "Update Product"
                    } else {
                        "Add Product"
                    };
                    view! {
                        <ProductFormModal
                            title=title
                            form=form
                            errors=form_errors
                            save_label=save_label
                            on_save=save_form
                            on_cancel=Callback::new(move |_| show_form.set(false))
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if let Some(product) = viewing.get() {
                    view! {
                        <ProductViewModal
                            product=product
                            on_close=Callback::new(move |_| viewing.set(None))
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn DetailRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div style="display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #f1f3f5;">
            <span style="color: #6c757d; font-size: 0.875rem;">{label}</span>
            <span style="font-size: 0.875rem; font-weight: 500;">{value}</span>
        </div>
    }
}

#[component]
fn ProductViewModal(product: Product, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 100;">
            <div style="background: white; border-radius: 8px; padding: 24px; width: 100%; max-width: 480px;">
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;">
                    <h3 style="margin: 0;">{product.name.clone()}</h3>
                    <button
                        style="background: none; border: none; cursor: pointer; font-size: 18px; color: #666;"
                        on:click=move |_| on_close.run(())
                    >"✕"</button>
                </div>
                {product.description.clone().map(|d| view! {
                    <p style="color: #6c757d; margin: 0 0 12px 0;">{d}</p>
                })}
                <DetailRow label="Category" value=product.category.display_name() />
                <DetailRow label="Cost Price" value=format_currency(&product.cost_price) />
                <DetailRow label="Selling Price" value=format_currency(&product.selling_price) />
                {product.optimized_price.clone().map(|p| view! {
                    <DetailRow label="Optimized Price" value=format_currency(&p) />
                })}
                {product.demand_forecast.clone().map(|f| view! {
                    <DetailRow label="Demand Forecast" value=f />
                })}
                <DetailRow label="Stock Available" value=product.stock_available.to_string() />
                <DetailRow label="Units Sold" value=product.units_sold.to_string() />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_distinguishes_filtered_from_empty() {
        assert_eq!(
            empty_state_message(false),
            "No products found. Add your first product to get started."
        );
        assert_eq!(
            empty_state_message(true),
            "No products match your search criteria."
        );
    }
}
