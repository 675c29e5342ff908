//! Order management page

use contracts::domain::order::{Order, OrderDraft, OrderEditForm, OrderId};
use contracts::enums::order_status::StatusFilter;
use contracts::enums::OrderStatus;
use contracts::shared::money::{format_amount, format_currency};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use super::create::CreateOrderModal;
use crate::app::AppContext;
use crate::domain::order::store::OrderStore;
use crate::shared::debounce::SearchInput;

const TH_STYLE: &str = "padding: 10px 12px; text-align: left; font-size: 0.8rem; text-transform: uppercase; color: #6c757d; border-bottom: 2px solid #dee2e6;";
const TD_STYLE: &str = "padding: 10px 12px; border-bottom: 1px solid #e9ecef; font-size: 0.875rem; vertical-align: middle;";
const ACTION_BTN_STYLE: &str = "padding: 4px 10px; border: 1px solid #ced4da; border-radius: 4px; background: white; cursor: pointer; font-size: 0.8rem; margin-right: 6px;";
/// Empty-table message: distinguishes a filtered-out view from an order
/// list with nothing in it
fn empty_state_message(filter_active: bool) -> &'static str {
    if filter_active {
        "No orders match your search criteria."
    } else {
        "No orders found. Create your first order to get started."
    }
}

const LABEL_STYLE: &str =
    "display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px; color: #495057;";
const INPUT_STYLE: &str = "width: 100%; padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; box-sizing: border-box;";

/// Background and text color of a status badge/select
fn status_colors(status: OrderStatus) -> (&'static str, &'static str) {
    match status {
        OrderStatus::Pending => ("#fff3cd", "#856404"),
        OrderStatus::Confirmed => ("#cce5ff", "#004085"),
        OrderStatus::Processing => ("#e2d9f3", "#4b2e83"),
        OrderStatus::Shipped => ("#d1ecf1", "#0c5460"),
        OrderStatus::Delivered => ("#d4edda", "#155724"),
        OrderStatus::Cancelled => ("#f8d7da", "#721c24"),
    }
}

#[component]
fn StatCard(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div style="background: white; border: 1px solid #dee2e6; border-radius: 8px; padding: 12px 16px; min-width: 120px;">
            <div style="color: #6c757d; font-size: 0.8rem;">{label}</div>
            <div style="font-size: 1.25rem; font-weight: 600;">{value}</div>
        </div>
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = OrderStore::new(ctx.notifier);

    let draft = RwSignal::new(OrderDraft::default());
    let draft_errors = RwSignal::new(FieldErrors::new());
    let show_create = RwSignal::new(false);

    let editing = RwSignal::new(None::<OrderId>);
    let edit_form = RwSignal::new(OrderEditForm::default());
    let edit_errors = RwSignal::new(FieldErrors::new());

    let viewing = RwSignal::new(None::<Order>);

    // Load once; a pending draft handed over from the catalog opens the
    // create modal pre-seeded.
    let is_loaded = RwSignal::new(false);
    Effect::new(move |_| {
        if !is_loaded.get() {
            is_loaded.set(true);
            store.load();
            if let Some(pending) = ctx.pending_draft.get_untracked() {
                ctx.pending_draft.set(None);
                draft.set(pending);
                draft_errors.set(FieldErrors::new());
                show_create.set(true);
            }
        }
    });

    let submit_create = Callback::new(move |_| {
        let current = draft.get_untracked();
        match store.create_from_draft(&current) {
            Ok(()) => {
                show_create.set(false);
                draft.set(OrderDraft::default());
            }
            Err(errors) => draft_errors.set(errors),
        }
    });

    let save_edit = Callback::new(move |_| {
        let Some(id) = editing.get_untracked() else {
            return;
        };
        let current = edit_form.get_untracked();
        match store.update_details(id, &current) {
            Ok(()) => editing.set(None),
            Err(errors) => edit_errors.set(errors),
        }
    });

    view! {
        <div style="padding: 20px;">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; flex-wrap: wrap; gap: 12px;">
                <h2 style="margin: 0;">"Orders"</h2>
                <div style="display: flex; gap: 10px; align-items: center;">
                    <SearchInput
                        placeholder="Search orders..."
                        on_commit=Callback::new(move |text| store.commit_search(text))
                    />
                    <select
                        style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: white;"
                        on:change=move |ev| {
                            let filter = StatusFilter::from_code(&event_target_value(&ev));
                            store.set_status_filter(filter);
                        }
                    >
                        <option value="all">"All Statuses"</option>
                        {OrderStatus::all().iter().map(|status| view! {
                            <option value=status.code()>{status.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            {move || {
                let stats = store.stats();
                view! {
                    <div style="display: flex; gap: 12px; margin-bottom: 16px; flex-wrap: wrap;">
                        <StatCard label="Total Orders" value=stats.total_orders.to_string() />
                        <StatCard label="Pending" value=stats.pending.to_string() />
                        <StatCard label="Delivered" value=stats.delivered.to_string() />
                        <StatCard label="Cancelled" value=stats.cancelled.to_string() />
                        <StatCard
                            label="Total Revenue"
                            value=format!("${}", format_amount(stats.total_revenue))
                        />
                    </div>
                }
            }}

            {move || {
                if store.loading.get() {
                    view! {
                        <div style="text-align: center; padding: 40px; color: #6c757d;">"Loading orders..."</div>
                    }.into_any()
                } else {
                    let visible = store.visible();
                    if visible.is_empty() {
                        let filter_active = !store.search.get().is_empty()
                            || store.status_filter.get() != StatusFilter::All;
                        view! {
                            <div style="text-align: center; padding: 40px; color: #6c757d;">
                                {empty_state_message(filter_active)}
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div style="background: white; border: 1px solid #dee2e6; border-radius: 8px; overflow-x: auto;">
                                <table style="width: 100%; border-collapse: collapse;">
                                    <thead>
                                        <tr>
                                            <th style=TH_STYLE>"Order"</th>
                                            <th style=TH_STYLE>"Customer"</th>
                                            <th style=TH_STYLE>"Items"</th>
                                            <th style=TH_STYLE>"Total"</th>
                                            <th style=TH_STYLE>"Date"</th>
                                            <th style=TH_STYLE>"Status"</th>
                                            <th style=TH_STYLE>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible.into_iter().map(|order| {
                                            let id = order.id;
                                            let status = order.status;
                                            let (badge_bg, badge_fg) = status_colors(status);
                                            let view_order = order.clone();
                                            let edit_order = order.clone();
                                            let deletable = order.can_delete();
                                            view! {
                                                <tr>
                                                    <td style=TD_STYLE>
                                                        <span style="font-family: monospace; font-weight: 500;">
                                                            {order.order_number.clone()}
                                                        </span>
                                                    </td>
                                                    <td style=TD_STYLE>
                                                        <div style="font-weight: 500;">{order.customer_name.clone()}</div>
                                                        <div style="color: #6c757d; font-size: 0.8rem;">
                                                            {order.customer_email.clone()}
                                                        </div>
                                                    </td>
                                                    <td style=TD_STYLE>{order.items_count}</td>
                                                    <td style=TD_STYLE>{format_currency(&order.total_amount)}</td>
                                                    <td style=TD_STYLE>
                                                        {order.created_at.format("%b %d, %Y").to_string()}
                                                    </td>
                                                    <td style=TD_STYLE>
                                                        <select
                                                            style=format!(
                                                                "padding: 4px 8px; border: none; border-radius: 12px; font-size: 0.8rem; font-weight: 500; cursor: pointer; background: {}; color: {};",
                                                                badge_bg, badge_fg
                                                            )
                                                            // Tracks the store so a rejected change snaps
                                                            // back to the order's actual status
                                                            prop:value=move || {
                                                                store.orders.with(|items| {
                                                                    items
                                                                        .iter()
                                                                        .find(|o| o.id == id)
                                                                        .map(|o| o.status.code().to_string())
                                                                        .unwrap_or_default()
                                                                })
                                                            }
                                                            on:change=move |ev| {
                                                                if let Some(next) = OrderStatus::from_code(&event_target_value(&ev)) {
                                                                    store.update_status(id, next);
                                                                }
                                                            }
                                                        >
                                                            {OrderStatus::all().iter().map(|option| {
                                                                let option = *option;
                                                                view! {
                                                                    <option
                                                                        value=option.code()
                                                                        selected=option == status
                                                                    >
                                                                        {option.display_name()}
                                                                    </option>
                                                                }
                                                            }).collect_view()}
                                                        </select>
                                                    </td>
                                                    <td style=format!("{} white-space: nowrap;", TD_STYLE)>
                                                        <button
                                                            style=ACTION_BTN_STYLE
                                                            on:click=move |_| viewing.set(Some(view_order.clone()))
                                                        >"View"</button>
                                                        <button
                                                            style=ACTION_BTN_STYLE
                                                            on:click=move |_| {
                                                                editing.set(Some(edit_order.id));
                                                                edit_form.set(OrderEditForm::from_order(&edit_order));
                                                                edit_errors.set(FieldErrors::new());
                                                            }
                                                        >"Edit"</button>
                                                        {deletable.then(|| view! {
                                                            <button
                                                                style="padding: 4px 10px; border: 1px solid #dc3545; border-radius: 4px; background: white; color: #dc3545; cursor: pointer; font-size: 0.8rem;"
                                                                on:click=move |_| store.delete(id)
                                                            >"Delete"</button>
                                                        })}
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
                if show_create.get() {
                    view! {
                        <CreateOrderModal
                            draft=draft
                            errors=draft_errors
                            on_submit=submit_create
                            on_cancel=Callback::new(move |_| {
                                show_create.set(false);
                                draft.set(OrderDraft::default());
                            })
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if editing.get().is_some() {
                    view! {
                        <OrderEditModal
                            form=edit_form
                            errors=edit_errors
                            on_save=save_edit
                            on_cancel=Callback::new(move |_| editing.set(None))
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if let Some(order) = viewing.get() {
                    view! {
                        <OrderViewModal
                            order=order
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
fn EditFieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    view! {
        {move || {
            if let Some(message) = errors.with(|e| e.get(field).map(|i| i.message())) {
                view! {
                    <p style="color: #dc3545; font-size: 0.8rem; margin: 4px 0 0 0;">{message}</p>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

#[component]
fn OrderEditModal(
    form: RwSignal<OrderEditForm>,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 100;">
            <div style="background: white; border-radius: 8px; padding: 24px; width: 100%; max-width: 540px;">
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;">
                    <h3 style="margin: 0;">"Edit Order"</h3>
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
                            prop:value=move || form.with(|f| f.customer_name.clone())
                            on:input=move |ev| form.update(|f| f.customer_name = event_target_value(&ev))
                        />
                        <EditFieldError errors=errors field="customer_name" />
                    </div>
                    <div>
                        <label style=LABEL_STYLE>"Customer Email " <span style="color: #dc3545;">"*"</span></label>
                        <input
                            type="email"
                            style=INPUT_STYLE
                            prop:value=move || form.with(|f| f.customer_email.clone())
                            on:input=move |ev| form.update(|f| f.customer_email = event_target_value(&ev))
                        />
                        <EditFieldError errors=errors field="customer_email" />
                    </div>
                    <div>
                        <label style=LABEL_STYLE>"Customer Phone"</label>
                        <input
                            type="tel"
                            style=INPUT_STYLE
                            prop:value=move || form.with(|f| f.customer_phone.clone())
                            on:input=move |ev| form.update(|f| f.customer_phone = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label style=LABEL_STYLE>"Shipping Address " <span style="color: #dc3545;">"*"</span></label>
                        <input
                            type="text"
                            style=INPUT_STYLE
                            prop:value=move || form.with(|f| f.customer_address.clone())
                            on:input=move |ev| form.update(|f| f.customer_address = event_target_value(&ev))
                        />
                        <EditFieldError errors=errors field="customer_address" />
                    </div>
                </div>

                <div style="margin-top: 12px;">
                    <label style=LABEL_STYLE>"Notes"</label>
                    <textarea
                        style=format!("{} resize: none;", INPUT_STYLE)
                        rows="2"
                        prop:value=move || form.with(|f| f.notes.clone())
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    ></textarea>
                </div>

                <div style="display: flex; justify-content: flex-end; gap: 12px; margin-top: 20px;">
                    <button
                        style="padding: 8px 20px; border: 1px solid #ced4da; border-radius: 4px; background: white; cursor: pointer;"
                        on:click=move |_| on_cancel.run(())
                    >"Cancel"</button>
                    <button
                        style="padding: 8px 20px; border: none; border-radius: 4px; background: #dc3545; color: white; cursor: pointer; font-weight: 500;"
                        on:click=move |_| on_save.run(())
                    >"Save Changes"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn OrderViewModal(order: Order, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let (badge_bg, badge_fg) = status_colors(order.status);
    view! {
        <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 100;">
            <div style="background: white; border-radius: 8px; padding: 24px; width: 100%; max-width: 600px; max-height: 90vh; overflow-y: auto;">
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;">
                    <h3 style="margin: 0; font-family: monospace;">{order.order_number.clone()}</h3>
                    <button
                        style="background: none; border: none; cursor: pointer; font-size: 18px; color: #666;"
                        on:click=move |_| on_close.run(())
                    >"✕"</button>
                </div>

                <span style=format!(
                    "display: inline-block; padding: 4px 12px; border-radius: 12px; font-size: 0.8rem; font-weight: 500; background: {}; color: {}; margin-bottom: 12px;",
                    badge_bg, badge_fg
                )>
                    {order.status.display_name()}
                </span>

                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 4px 16px; margin-bottom: 12px; font-size: 0.875rem;">
                    <div><strong>"Customer: "</strong>{order.customer_name.clone()}</div>
                    <div><strong>"Email: "</strong>{order.customer_email.clone()}</div>
                    {(!order.customer_phone.is_empty()).then(|| view! {
                        <div><strong>"Phone: "</strong>{order.customer_phone.clone()}</div>
                    })}
                    <div><strong>"Address: "</strong>{order.customer_address.clone()}</div>
                    <div><strong>"Created: "</strong>{order.created_at.format("%b %d, %Y %H:%M").to_string()}</div>
                </div>

                {(!order.notes.is_empty()).then(|| view! {
                    <p style="background: #f8f9fa; border-radius: 4px; padding: 8px 12px; font-size: 0.875rem; margin: 0 0 12px 0;">
                        {order.notes.clone()}
                    </p>
                })}

                <table style="width: 100%; border-collapse: collapse; margin-bottom: 12px;">
                    <thead>
                        <tr>
                            <th style=TH_STYLE>"Product"</th>
                            <th style=TH_STYLE>"Qty"</th>
                            <th style=TH_STYLE>"Unit Price"</th>
                            <th style=TH_STYLE>"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {order.items.iter().map(|item| view! {
                            <tr>
                                <td style=TD_STYLE>{item.product.name.clone()}</td>
                                <td style=TD_STYLE>{item.quantity}</td>
                                <td style=TD_STYLE>{format_currency(&item.unit_price)}</td>
                                <td style=TD_STYLE>{format_currency(&item.total_price)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>

                <div style="text-align: right; font-weight: 600; font-size: 1rem;">
                    {format!("Total: {}", format_currency(&order.total_amount))}
                </div>
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
            "No orders found. Create your first order to get started."
        );
        assert_eq!(
            empty_state_message(true),
            "No orders match your search criteria."
        );
    }

    #[test]
    fn test_every_status_has_distinct_colors() {
        let mut seen = std::collections::BTreeSet::new();
        for status in OrderStatus::all() {
            let (bg, _) = status_colors(*status);
            assert!(seen.insert(bg), "duplicate badge color for {}", status);
        }
    }
}
