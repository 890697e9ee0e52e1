//! API request handlers
//!
//! Handlers for all REST API endpoints. Structured endpoints answer with the
//! [`ApiResponse`] envelope and HTTP 200 either way (the `success` flag and
//! `error` field carry the outcome); the export endpoint streams raw xlsx
//! bytes and falls back to a 500 envelope when the workbook cannot be built.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::convert::PdfConverter;
use crate::excel::{XlsxReader, XlsxWriter};
use crate::mapper::{GridDecoder, GridEncoder};
use crate::user::User;

use super::server::AppState;

/// Content type of an xlsx download
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Disposition offered to clients downloading the user table
pub const EXPORT_DISPOSITION: &str = "attachment; filename=export.xlsx";

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    /// Epoch milliseconds at response time
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Rowmap API Server".to_string(),
        version: state.version.clone(),
        description: "HTTP API for the user table: list, spreadsheet export/import, PDF conversion"
            .to_string(),
        endpoints: vec![
            EndpointInfo {
                path: "/health".to_string(),
                method: "GET".to_string(),
                description: "Health check endpoint".to_string(),
            },
            EndpointInfo {
                path: "/version".to_string(),
                method: "GET".to_string(),
                description: "Get server version".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/users".to_string(),
                method: "GET".to_string(),
                description: "List the user table".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/users/export".to_string(),
                method: "GET".to_string(),
                description: "Download the user table as an xlsx file".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/users/import".to_string(),
                method: "POST".to_string(),
                description: "Upload an xlsx payload and replace the user table".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/convert".to_string(),
                method: "POST".to_string(),
                description: "Convert a PDF on disk to Markdown".to_string(),
            },
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_message: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        uptime_message: "Server is running".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec![
            "users".to_string(),
            "export".to_string(),
            "import".to_string(),
            "convert".to_string(),
        ],
    }))
}

/// Users list response
#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub count: usize,
}

/// GET /api/v1/users - List the user table
///
/// An empty table answers with an empty list, not an error.
pub async fn list_users(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.list() {
        Ok(users) => {
            let count = users.len();
            Json(ApiResponse::ok(UsersResponse { users, count }))
        }
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

/// GET /api/v1/users/export - Download the user table as xlsx
pub async fn export_users(State(state): State<Arc<AppState>>) -> Response {
    let payload = state
        .store
        .list()
        .map(|users| GridEncoder::new(&users).encode())
        .and_then(|grid| XlsxWriter::new(&grid).to_buffer());

    match payload {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
                (header::CONTENT_DISPOSITION, EXPORT_DISPOSITION),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::err(e.to_string())),
        )
            .into_response(),
    }
}

/// Import result payload
#[derive(Serialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub users: Vec<User>,
}

/// POST /api/v1/users/import - Upload an xlsx payload, replace the table
///
/// The body is the raw xlsx binary. A decode failure reports the offending
/// row, field and value in the envelope's `error` field and leaves the
/// stored table untouched.
pub async fn import_users(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let outcome = XlsxReader::from_bytes(body.to_vec())
        .read()
        .map_err(|e| e.to_string())
        .and_then(|grid| {
            GridDecoder::new(&grid)
                .decode::<User>()
                .map_err(|e| e.to_string())
        })
        .and_then(|users| {
            state
                .store
                .replace_all(users.clone())
                .map(|imported| (imported, users))
                .map_err(|e| e.to_string())
        });

    match outcome {
        Ok((imported, users)) => Json(ApiResponse::ok(ImportResponse { imported, users })),
        Err(message) => Json(ApiResponse::err(message)),
    }
}

/// Convert request
#[derive(Deserialize)]
pub struct ConvertRequest {
    pub input_path: String,
    pub output_path: String,
    /// Optional per-request override of the converter deadline
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Convert response
#[derive(Serialize)]
pub struct ConvertResponse {
    pub input_path: String,
    pub output_path: String,
    pub message: String,
}

/// POST /api/v1/convert - Convert a PDF on disk to Markdown
pub async fn convert_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConvertRequest>,
) -> impl IntoResponse {
    let mut converter = PdfConverter::new(&state.convert_script);
    if let Some(secs) = req.timeout_secs {
        converter = converter.with_timeout(Duration::from_secs(secs));
    }

    match converter
        .convert(Path::new(&req.input_path), Path::new(&req.output_path))
        .await
    {
        Ok(()) => Json(ApiResponse::ok(ConvertResponse {
            input_path: req.input_path,
            output_path: req.output_path,
            message: "Conversion completed".to_string(),
        })),
        Err(e) => Json(ApiResponse::err(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ApiResponse Tests ====================

    #[test]
    fn test_api_response_ok_creates_success_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test data".to_string());

        assert!(response.success);
        assert_eq!(response.data, Some("test data".to_string()));
        assert!(response.error.is_none());
        assert!(response.timestamp > 0);
        // Verify UUID format (8-4-4-4-12)
        assert_eq!(response.request_id.len(), 36);
    }

    #[test]
    fn test_api_response_err_creates_error_response() {
        let response: ApiResponse<String> = ApiResponse::err("Something went wrong");

        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.error, Some("Something went wrong".to_string()));
        assert!(!response.request_id.is_empty());
    }

    #[test]
    fn test_api_response_request_id_is_unique() {
        let response1: ApiResponse<String> = ApiResponse::ok("test1".to_string());
        let response2: ApiResponse<String> = ApiResponse::ok("test2".to_string());

        assert_ne!(response1.request_id, response2.request_id);
    }

    #[test]
    fn test_api_response_serializes_without_none_fields() {
        let response: ApiResponse<String> = ApiResponse::ok("data".to_string());
        let json = serde_json::to_string(&response).unwrap();

        // error field should be skipped when None
        assert!(!json.contains("\"error\""));
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"data\":\"data\""));
        assert!(json.contains("\"timestamp\""));
    }

    #[test]
    fn test_api_response_error_serializes_without_data() {
        let response: ApiResponse<String> = ApiResponse::err("error message");
        let json = serde_json::to_string(&response).unwrap();

        // data field should be skipped when None
        assert!(!json.contains("\"data\""));
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"error\":\"error message\""));
    }

    // ==================== Export Header Tests ====================

    #[test]
    fn test_export_headers_match_the_excel_convention() {
        assert_eq!(
            XLSX_CONTENT_TYPE,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(EXPORT_DISPOSITION, "attachment; filename=export.xlsx");
    }

    // ==================== Request Deserialization Tests ====================

    #[test]
    fn test_convert_request_deserialize() {
        let json = r#"{"input_path": "in.pdf", "output_path": "out.md"}"#;
        let req: ConvertRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.input_path, "in.pdf");
        assert_eq!(req.output_path, "out.md");
        assert!(req.timeout_secs.is_none());
    }

    #[test]
    fn test_convert_request_deserialize_with_timeout() {
        let json = r#"{"input_path": "in.pdf", "output_path": "out.md", "timeout_secs": 5}"#;
        let req: ConvertRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.timeout_secs, Some(5));
    }

    // ==================== Response Serialization Tests ====================

    #[test]
    fn test_health_response_serialize() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            uptime_message: "Server is running".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"uptime_message\":\"Server is running\""));
    }

    #[test]
    fn test_users_response_serialize() {
        let response = UsersResponse {
            users: vec![User {
                user_id: 1,
                user_name: "alice".to_string(),
                user_status: 1,
                user_grade: 3,
                update_time: None,
                update_user: 100,
            }],
            count: 1,
        };
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"count\":1"));
        assert!(json.contains("\"user_name\":\"alice\""));
        // update_time is None and stays out of the payload
        assert!(!json.contains("update_time"));
    }

    #[test]
    fn test_import_response_serialize() {
        let response = ImportResponse {
            imported: 2,
            users: Vec::new(),
        };
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"imported\":2"));
        assert!(json.contains("\"users\":[]"));
    }

    // ==================== EndpointInfo Tests ====================

    #[test]
    fn test_endpoint_info_serialize() {
        let info = EndpointInfo {
            path: "/api/v1/users".to_string(),
            method: "GET".to_string(),
            description: "List the user table".to_string(),
        };
        let json = serde_json::to_string(&info).unwrap();

        assert!(json.contains("\"path\":\"/api/v1/users\""));
        assert!(json.contains("\"method\":\"GET\""));
        assert!(json.contains("\"description\":\"List the user table\""));
    }
}
