//! Add/edit product modal

use contracts::domain::product::ProductForm;
use contracts::enums::ProductCategory;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

fn field_error(errors: &FieldErrors, field: &'static str) -> Option<&'static str> {
    errors.get(field).map(|issue| issue.message())
}

const LABEL_STYLE: &str =
    "display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px; color: #495057;";
const INPUT_STYLE: &str = "width: 100%; padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; box-sizing: border-box;";
const ERROR_STYLE: &str = "color: #dc3545; font-size: 0.8rem; margin: 4px 0 0 0;";

#[component]
fn FieldErrorText(
    errors: RwSignal<FieldErrors>,
    field: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            if let Some(message) = errors.with(|e| field_error(e, field)) {
                view! { <p style=ERROR_STYLE>{message}</p> }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

/// Modal form shared by "Add New Product" and "Edit Product". The caller
/// owns the form signal and decides create vs update on save.
#[component]
pub fn ProductFormModal(
    #[prop(into)] title: String,
    form: RwSignal<ProductForm>,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] save_label: String,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 100;">
            <div style="background: white; border-radius: 8px; padding: 24px; width: 100%; max-width: 640px; max-height: 90vh; overflow-y: auto;">
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;">
                    <h3 style="margin: 0;">{title}</h3>
                    <button
                        style="background: none; border: none; cursor: pointer; font-size: 18px; color: #666;"
                        on:click=move |_| on_cancel.run(())
                    >"✕"</button>
                </div>

                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px;">
                    <div>
                        <label style=LABEL_STYLE>"Product Name " <span style="color: #dc3545;">"*"</span></label>
                        <input
                            type="text"
                            style=INPUT_STYLE
                            placeholder="Enter product name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <FieldErrorText errors=errors field="name" />
                    </div>
                    <div>
                        <label style=LABEL_STYLE>"Category " <span style="color: #dc3545;">"*"</span></label>
                        <select
                            style=INPUT_STYLE
                            on:change=move |ev| {
                                let code = event_target_value(&ev);
                                if let Some(category) = ProductCategory::from_code(&code) {
                                    form.update(|f| f.category = category);
                                }
                            }
                        >
                            {ProductCategory::all().iter().map(|category| {
                                let category = *category;
                                view! {
                                    <option
                                        value=category.code()
                                        selected=move || form.with(|f| f.category == category)
                                    >
                                        {category.display_name()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div>
                        <label style=LABEL_STYLE>"Cost Price " <span style="color: #dc3545;">"*"</span></label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            style=INPUT_STYLE
                            placeholder="0.00"
                            prop:value=move || form.with(|f| f.cost_price.clone())
                            on:input=move |ev| form.update(|f| f.cost_price = event_target_value(&ev))
                        />
                        <FieldErrorText errors=errors field="cost_price" />
                    </div>
                    <div>
                        <label style=LABEL_STYLE>"Selling Price " <span style="color: #dc3545;">"*"</span></label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            style=INPUT_STYLE
                            placeholder="0.00"
                            prop:value=move || form.with(|f| f.selling_price.clone())
                            on:input=move |ev| form.update(|f| f.selling_price = event_target_value(&ev))
                        />
                        <FieldErrorText errors=errors field="selling_price" />
                    </div>
                </div>

                <div style="margin-top: 12px;">
                    <label style=LABEL_STYLE>"Description"</label>
                    <textarea
                        style=format!("{} resize: none;", INPUT_STYLE)
                        rows="3"
                        placeholder="Enter product description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-top: 12px;">
                    <div>
                        <label style=LABEL_STYLE>"Stock Available"</label>
                        <input
                            type="number"
                            min="0"
                            style=INPUT_STYLE
                            placeholder="0"
                            prop:value=move || form.with(|f| f.stock_available.clone())
                            on:input=move |ev| form.update(|f| f.stock_available = event_target_value(&ev))
                        />
                        <FieldErrorText errors=errors field="stock_available" />
                    </div>
                    <div>
                        <label style=LABEL_STYLE>"Units Sold"</label>
                        <input
                            type="number"
                            min="0"
                            style=INPUT_STYLE
                            placeholder="0"
                            prop:value=move || form.with(|f| f.units_sold.clone())
                            on:input=move |ev| form.update(|f| f.units_sold = event_target_value(&ev))
                        />
                        <FieldErrorText errors=errors field="units_sold" />
                    </div>
                </div>

                <div style="display: flex; justify-content: flex-end; gap: 12px; margin-top: 20px;">
                    <button
                        style="padding: 8px 20px; border: 1px solid #ced4da; border-radius: 4px; background: white; cursor: pointer;"
                        on:click=move |_| on_cancel.run(())
                    >"Cancel"</button>
                    <button
                        style="padding: 8px 20px; border: none; border-radius: 4px; background: #dc3545; color: white; cursor: pointer; font-weight: 500;"
                        on:click=move |_| on_save.run(())
                    >{save_label}</button>
                </div>
            </div>
        </div>
    }
}
