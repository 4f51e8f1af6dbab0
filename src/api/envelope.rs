use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The wire envelope every gateway API response uses:
/// `{ success, data?, error?, meta? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl Envelope {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: None,
        }
    }

    pub fn ok_paged(data: Value, meta: PageMeta) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: Some(meta),
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            meta: None,
        }
    }
}

/// Pagination block attached to list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl PageMeta {
    pub fn compute(page: u32, limit: u32, total: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = (total as f64 / limit as f64).ceil() as u32;
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// Slice a fixture list for the requested page and compute its meta block
pub fn paginate(items: &[Value], page: u32, limit: u32) -> (Vec<Value>, PageMeta) {
    let page = page.max(1);
    let limit = limit.clamp(1, 100);
    let meta = PageMeta::compute(page, limit, items.len() as u64);

    let start = ((page - 1) as usize) * (limit as usize);
    let slice = if start >= items.len() {
        Vec::new()
    } else {
        items[start..(start + limit as usize).min(items.len())].to_vec()
    };
    (slice, meta)
}

/// Wrapper for handler responses that automatically adds the success envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: Option<PageMeta>,
    pub status_code: Option<StatusCode>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(data: T) -> Self {
        Self {
            data,
            meta: None,
            status_code: None, // Default to 200 OK
        }
    }

    /// Create a successful list response carrying pagination meta
    pub fn paged(data: T, meta: PageMeta) -> Self {
        Self {
            data,
            meta: Some(meta),
            status_code: None,
        }
    }

    /// Create an API response with custom status code
    pub fn with_status(data: T, status_code: StatusCode) -> Self {
        Self {
            data,
            meta: None,
            status_code: Some(status_code),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);

        // Convert data to JSON Value for consistent envelope format
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "error": "Failed to serialize response data"
                    })),
                )
                    .into_response();
            }
        };

        let mut envelope = json!({
            "success": true,
            "data": data_value
        });
        if let Some(meta) = self.meta {
            envelope["meta"] = json!(meta);
        }

        (status, Json(envelope)).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<Value> {
        (0..n).map(|i| json!({ "i": i })).collect()
    }

    #[test]
    fn paginate_slices_and_computes_meta() {
        let all = items(23);
        let (page2, meta) = paginate(&all, 2, 10);
        assert_eq!(page2.len(), 10);
        assert_eq!(page2[0]["i"], json!(10));
        assert_eq!(
            meta,
            PageMeta {
                page: 2,
                limit: 10,
                total: 23,
                total_pages: 3
            }
        );
    }

    #[test]
    fn paginate_past_the_end_is_empty() {
        let all = items(5);
        let (page, meta) = paginate(&all, 4, 10);
        assert!(page.is_empty());
        assert_eq!(meta.total_pages, 1);
    }

    #[test]
    fn meta_serializes_total_pages_camel_case() {
        let meta = PageMeta::compute(1, 10, 23);
        let v = serde_json::to_value(meta).unwrap();
        assert_eq!(v["totalPages"], json!(3));
    }

    #[test]
    fn envelope_round_trips() {
        let env = Envelope::ok_paged(json!([1, 2, 3]), PageMeta::compute(1, 3, 9));
        let text = serde_json::to_string(&env).unwrap();
        let back: Envelope = serde_json::from_str(&text).unwrap();
        assert!(back.success);
        assert_eq!(back.meta.unwrap().total_pages, 3);
        assert!(back.error.is_none());
    }
}
