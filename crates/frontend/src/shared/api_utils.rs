//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and decoding the
//! `{ meta, data }` envelope the backend wraps every payload in.

use serde::Deserialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Standard response envelope: `{ "meta": {...}, "data": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Decode an envelope body into its data payload
pub fn decode_envelope<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, String> {
    serde_json::from_str::<ApiResponse<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let body = r#"{"meta":{"message":"ok"},"data":[1,2,3]}"#;
        let data: Vec<u32> = decode_envelope(body).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_envelope_bad_body() {
        let result: Result<Vec<u32>, String> = decode_envelope("not json");
        assert!(result.is_err());
    }
}
