//! Order endpoint client

use contracts::domain::order::{Order, OrderCreatePayload, OrderEditForm, OrderId};
use contracts::enums::order_status::StatusFilter;
use contracts::enums::OrderStatus;
use gloo_net::http::Request;
use serde::Serialize;

use crate::shared::api_utils::{api_url, decode_envelope};

/// List orders narrowed by status and search on the server side
pub async fn list(status: StatusFilter, search: &str) -> Result<Vec<Order>, String> {
    let mut query: Vec<String> = Vec::new();
    if let StatusFilter::Only(s) = status {
        query.push(format!("status={}", s.code()));
    }
    if !search.is_empty() {
        query.push(format!("search={}", urlencoding::encode(search)));
    }

    let base = api_url("/api/orders/");
    let url = if query.is_empty() {
        base
    } else {
        format!("{}?{}", base, query.join("&"))
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch orders: {}", e))?;
    if response.status() != 200 {
        return Err(format!("Server error: {}", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    decode_envelope(&text)
}

pub async fn create(payload: &OrderCreatePayload) -> Result<Order, String> {
    let response = Request::post(&api_url("/api/orders/"))
        .json(payload)
        .map_err(|e| format!("Failed to encode order: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to create order: {}", e))?;
    if !(200..300).contains(&response.status()) {
        return Err(format!("Server error: {}", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    decode_envelope(&text)
}

#[derive(Serialize)]
struct StatusUpdateBody {
    status: OrderStatus,
}

/// Ask the server to acknowledge an operator-selected status
pub async fn update_status(id: OrderId, status: OrderStatus) -> Result<Order, String> {
    let url = api_url(&format!("/api/orders/{}/", id.as_string()));
    let response = Request::put(&url)
        .json(&StatusUpdateBody { status })
        .map_err(|e| format!("Failed to encode status: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update order status: {}", e))?;
    if !(200..300).contains(&response.status()) {
        return Err(format!("Server error: {}", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    decode_envelope(&text)
}

/// Update customer details and notes of an existing order
pub async fn update_details(id: OrderId, form: &OrderEditForm) -> Result<Order, String> {
    let url = api_url(&format!("/api/orders/{}/", id.as_string()));
    let response = Request::put(&url)
        .json(form)
        .map_err(|e| format!("Failed to encode order: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update order: {}", e))?;
    if !(200..300).contains(&response.status()) {
        return Err(format!("Server error: {}", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    decode_envelope(&text)
}

pub async fn delete(id: OrderId) -> Result<(), String> {
    let url = api_url(&format!("/api/orders/{}/", id.as_string()));
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to delete order: {}", e))?;
    if !(200..300).contains(&response.status()) {
        return Err(format!("Server error: {}", response.status()));
    }
    Ok(())
}
