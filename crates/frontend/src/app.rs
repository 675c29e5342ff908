use contracts::domain::order::OrderDraft;
use leptos::prelude::*;

use crate::domain::order::ui::OrderList;
use crate::domain::product::ui::ProductList;
use crate::shared::notify::{NotificationHost, Notifier};

/// Top-level views of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Products,
    Orders,
}

/// App-wide state shared via context: the active page, the draft handed
/// from the catalog selection to the order page, and the notification
/// channel.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub page: RwSignal<Page>,
    pub pending_draft: RwSignal<Option<OrderDraft>>,
    pub notifier: Notifier,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Products),
            pending_draft: RwSignal::new(None),
            notifier: Notifier::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

fn nav_button_style(active: bool) -> String {
    let (background, color) = if active {
        ("#dc3545", "white")
    } else {
        ("transparent", "#495057")
    };
    format!(
        "padding: 8px 20px; border: none; border-radius: 4px; cursor: pointer; font-weight: 500; font-size: 0.9rem; background: {}; color: {};",
        background, color
    )
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <div style="min-height: 100vh; background: #f8f9fa; font-family: system-ui, sans-serif;">
            <header style="background: white; border-bottom: 1px solid #dee2e6; padding: 12px 20px; display: flex; align-items: center; gap: 24px;">
                <h1 style="margin: 0; font-size: 1.25rem;">"Storefront Console"</h1>
                <nav style="display: flex; gap: 8px;">
                    <button
                        style=move || nav_button_style(ctx.page.get() == Page::Products)
                        on:click=move |_| ctx.page.set(Page::Products)
                    >"Products"</button>
                    <button
                        style=move || nav_button_style(ctx.page.get() == Page::Orders)
                        on:click=move |_| ctx.page.set(Page::Orders)
                    >"Orders"</button>
                </nav>
            </header>

            <NotificationHost notifier=ctx.notifier />

            {move || match ctx.page.get() {
                Page::Products => view! { <ProductList /> }.into_any(),
                Page::Orders => view! { <OrderList /> }.into_any(),
            }}
        </div>
    }
}
