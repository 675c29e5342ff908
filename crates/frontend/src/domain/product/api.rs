//! Product endpoint client
//!
//! Thin wrappers over the external product API. Errors surface as plain
//! strings; the store decides how to report them.

use contracts::domain::product::aggregate::ProductPayload;
use contracts::domain::product::{Product, ProductId};
use contracts::enums::product_category::CategoryFilter;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, decode_envelope};

/// List products matching the active category and committed search text
pub async fn list(category: CategoryFilter, search: &str) -> Result<Vec<Product>, String> {
    let mut query: Vec<String> = Vec::new();
    if let CategoryFilter::Only(c) = category {
        query.push(format!("category={}", c.code()));
    }
    if !search.is_empty() {
        query.push(format!("search={}", urlencoding::encode(search)));
    }

    let base = api_url("/api/products/");
    let url = if query.is_empty() {
        base
    } else {
        format!("{}?{}", base, query.join("&"))
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch products: {}", e))?;
    if response.status() != 200 {
        return Err(format!("Server error: {}", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    decode_envelope(&text)
}

pub async fn create(payload: &ProductPayload) -> Result<Product, String> {
    let response = Request::post(&api_url("/api/products/"))
        .json(payload)
        .map_err(|e| format!("Failed to encode product: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to create product: {}", e))?;
    if !(200..300).contains(&response.status()) {
        return Err(format!("Server error: {}", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    decode_envelope(&text)
}

pub async fn update(id: ProductId, payload: &ProductPayload) -> Result<Product, String> {
    let url = api_url(&format!("/api/products/{}/", id.as_string()));
    let response = Request::put(&url)
        .json(payload)
        .map_err(|e| format!("Failed to encode product: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update product: {}", e))?;
    if !(200..300).contains(&response.status()) {
        return Err(format!("Server error: {}", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    decode_envelope(&text)
}

pub async fn delete(id: ProductId) -> Result<(), String> {
    let url = api_url(&format!("/api/products/{}/", id.as_string()));
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to delete product: {}", e))?;
    if !(200..300).contains(&response.status()) {
        return Err(format!("Server error: {}", response.status()));
    }
    Ok(())
}
