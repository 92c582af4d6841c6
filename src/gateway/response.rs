use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Binary(Vec<u8>),
    Empty,
}

/// Outgoing response. Every constructor attaches the permissive CORS origin
/// header, so no route can forget it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: ResponseBody,
}

impl ApiResponse {
    fn base_headers() -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "Access-Control-Allow-Origin".to_string(),
            "*".to_string(),
        );
        headers
    }

    pub fn json(status: u16, value: Value) -> Self {
        let mut headers = Self::base_headers();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status,
            headers,
            body: ResponseBody::Json(value),
        }
    }

    pub fn binary(content_type: &str, body: Vec<u8>) -> Self {
        let mut headers = Self::base_headers();
        headers.insert("Content-Type".to_string(), content_type.to_string());
        Self {
            status: 200,
            headers,
            body: ResponseBody::Binary(body),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, serde_json::json!({ "error": message }))
    }

    /// CORS preflight short-circuit: 204, empty body, the full header set.
    pub fn preflight() -> Self {
        let mut headers = Self::base_headers();
        headers.insert(
            "Access-Control-Allow-Methods".to_string(),
            "GET, POST".to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        );
        headers.insert("Access-Control-Max-Age".to_string(), "3600".to_string());
        Self {
            status: 204,
            headers,
            body: ResponseBody::Empty,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
