//! Order creation modal
//!
//! Fed by the catalog selection: every selected product arrives as one item
//! at quantity 1. The operator fills in customer details, adjusts
//! quantities (floor 1) and may drop items before submitting.

use contracts::domain::order::OrderDraft;
use contracts::shared::money::{format_amount, format_currency, parse_decimal};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

const LABEL_STYLE: &str =
    "display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px; color: #495057;";
const INPUT_STYLE: &str = "width: 100%; padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; box-sizing: border-box;";
const ERROR_STYLE: &str = "color: #dc3545; font-size: 0.8rem; margin: 4px 0 0 0;";

fn draft_total(draft: &OrderDraft) -> String {
    let total: f64 = draft
        .items
        .iter()
        .map(|item| parse_decimal(&item.unit_price).unwrap_or(0.0) * item.quantity as f64)
        .sum();
    format_amount(total)
}

#[component]
fn DraftFieldError(
    errors: RwSignal<FieldErrors>,
    field: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            if let Some(message) = errors.with(|e| e.get(field).map(|i| i.message())) {
                view! { <p style=ERROR_STYLE>{message}</p> }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

#[component]
pub fn CreateOrderModal(
    draft: RwSignal<OrderDraft>,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 100;">
            <div style="background: white; border-radius: 8px; padding: 24px; width: 100%; max-width: 720px; max-height: 90vh; overflow-y: auto;">
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;">
                    <h3 style="margin: 0;">"Create Order"</h3>
                    <button
                        style="background: none; border: none; cursor: pointer; font-size: 18px; color: #666;"
                        on:click=move |_| on_cancel.run(())
                    >"✕"</button>
                </div>

                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px;">
                    <div>
                        <label style=LABEL_STYLE>"Customer Name " <span style="color: #dc3545;">"*"</span></label>
                        <input
                            type="text"
                            style=INPUT_STYLE
                            placeholder="Enter customer name"
                            prop:value=move || draft.with(|d| d.customer_name.clone())
                            on:input=move |ev| draft.update(|d| d.customer_name = event_target_value(&ev))
                        />
                        <DraftFieldError errors=errors field="customer_name" />
                    </div>
                    <div>
                        <label style=LABEL_STYLE>"Customer Email " <span style="color: #dc3545;">"*"</span></label>
                        <input
                            type="email"
                            style=INPUT_STYLE
                            placeholder="customer@example.com"
                            prop:value=move || draft.with(|d| d.customer_email.clone())
                            on:input=move |ev| draft.update(|d| d.customer_email = event_target_value(&ev))
                        />
                        <DraftFieldError errors=errors field="customer_email" />
                    </div>
                    <div>
                        <label style=LABEL_STYLE>"Customer Phone"</label>
                        <input
                            type="tel"
                            style=INPUT_STYLE
                            placeholder="Optional"
                            prop:value=move || draft.with(|d| d.customer_phone.clone())
                            on:input=move |ev| draft.update(|d| d.customer_phone = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label style=LABEL_STYLE>"Shipping Address " <span style="color: #dc3545;">"*"</span></label>
                        <input
                            type="text"
                            style=INPUT_STYLE
                            placeholder="Enter shipping address"
                            prop:value=move || draft.with(|d| d.customer_address.clone())
                            on:input=move |ev| draft.update(|d| d.customer_address = event_target_value(&ev))
                        />
                        <DraftFieldError errors=errors field="customer_address" />
                    </div>
                </div>

                <div style="margin-top: 12px;">
                    <label style=LABEL_STYLE>"Notes"</label>
                    <textarea
                        style=format!("{} resize: none;", INPUT_STYLE)
                        rows="2"
                        placeholder="Optional order notes"
                        prop:value=move || draft.with(|d| d.notes.clone())
                        on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                    ></textarea>
                </div>

                <h4 style="margin: 16px 0 8px 0;">"Order Items"</h4>
                <DraftFieldError errors=errors field="items" />
                {move || {
                    draft.with(|d| d.items.iter().enumerate().map(|(index, item)| {
                        let name = item.product_name.clone();
                        let unit_price = item.unit_price.clone();
                        let quantity = item.quantity;
                        let line_total = format_amount(
                            parse_decimal(&unit_price).unwrap_or(0.0) * quantity as f64,
                        );
                        view! {
                            <div style="display: flex; align-items: center; gap: 12px; padding: 8px 12px; border: 1px solid #e9ecef; border-radius: 4px; margin-bottom: 6px;">
                                <div style="flex: 1;">
                                    <div style="font-weight: 500; font-size: 0.875rem;">{name}</div>
                                    <div style="color: #6c757d; font-size: 0.8rem;">
                                        {format!("{} each", format_currency(&unit_price))}
                                    </div>
                                </div>
                                <input
                                    type="number"
                                    min="1"
                                    style="width: 70px; padding: 4px 8px; border: 1px solid #ced4da; border-radius: 4px;"
                                    prop:value=quantity.to_string()
                                    on:input=move |ev| {
                                        let parsed = event_target_value(&ev).parse::<u32>().unwrap_or(1);
                                        draft.update(|d| d.set_quantity(index, parsed));
                                    }
                                />
                                <span style="width: 80px; text-align: right; font-size: 0.875rem; font-weight: 500;">
                                    {format!("${}", line_total)}
                                </span>
                                <button
                                    style="background: none; border: none; color: #dc3545; cursor: pointer; font-size: 16px;"
                                    on:click=move |_| draft.update(|d| d.remove_item(index))
                                >"✕"</button>
                            </div>
                        }
                    }).collect_view())
                }}

                <div style="display: flex; justify-content: space-between; align-items: center; margin-top: 16px; padding-top: 12px; border-top: 2px solid #dee2e6;">
                    <span style="font-weight: 600;">
                        {move || format!("Total: ${}", draft.with(draft_total))}
                    </span>
                    <div style="display: flex; gap: 12px;">
                        <button
                            style="padding: 8px 20px; border: 1px solid #ced4da; border-radius: 4px; background: white; cursor: pointer;"
                            on:click=move |_| on_cancel.run(())
                        >"Cancel"</button>
                        <button
                            style="padding: 8px 20px; border: none; border-radius: 4px; background: #28a745; color: white; cursor: pointer; font-weight: 500;"
                            on:click=move |_| on_submit.run(())
                        >"Create Order"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::order::DraftItem;
    use contracts::enums::ProductCategory;

    #[test]
    fn test_draft_total_sums_lines() {
        let draft = OrderDraft {
            items: vec![
                DraftItem {
                    product_id: "a".to_string(),
                    product_name: "Pen".to_string(),
                    product_category: ProductCategory::Stationary,
                    unit_price: "2.00".to_string(),
                    quantity: 3,
                },
                DraftItem {
                    product_id: "b".to_string(),
                    product_name: "Notebook".to_string(),
                    product_category: ProductCategory::Stationary,
                    unit_price: "5.50".to_string(),
                    quantity: 1,
                },
            ],
            ..OrderDraft::default()
        };
        assert_eq!(draft_total(&draft), "11.50");
    }

    #[test]
    fn test_draft_total_empty() {
        assert_eq!(draft_total(&OrderDraft::default()), "0.00");
    }
}
