//! 统一 API 响应与错误码

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::FolioError;
use crate::validation::FieldErrors;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: 表单与查询校验错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,

    // 校验错误 3000-3099
    ValidationFailed = 3000,
}

impl From<&FolioError> for ErrorCode {
    fn from(err: &FolioError) -> Self {
        match err {
            FolioError::Validation(_) => ErrorCode::ValidationFailed,
            FolioError::NotFound(_) => ErrorCode::NotFound,
            _ => ErrorCode::InternalServerError,
        }
    }
}

/// 响应信封 `{code, message, data}`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

/// 构建成功响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(data))
}

/// 构建错误响应
pub fn error_response(status: StatusCode, error_code: ErrorCode, message: &str) -> HttpResponse {
    json_response::<()>(status, error_code, message, None)
}

/// 字段校验失败：400 + `data.errors`
pub fn validation_response(errors: &FieldErrors) -> HttpResponse {
    json_response(
        StatusCode::BAD_REQUEST,
        ErrorCode::ValidationFailed,
        "Validation failed",
        Some(json!({ "errors": errors })),
    )
}

/// 从 FolioError 构建错误响应
pub fn error_from_folio(err: &FolioError) -> HttpResponse {
    let code = ErrorCode::from(err);
    let status = match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, code, err.message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::ValidationFailed).unwrap(), "3000");
        assert_eq!(serde_json::to_string(&ErrorCode::Success).unwrap(), "0");
    }

    #[test]
    fn test_envelope_omits_missing_data() {
        let resp = ApiResponse::<()> {
            code: ErrorCode::NotFound as i32,
            message: "Project not found".to_string(),
            data: None,
        };
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"code": 1004, "message": "Project not found"})
        );
    }

    #[test]
    fn test_folio_error_mapping() {
        assert_eq!(
            ErrorCode::from(&FolioError::not_found("x")),
            ErrorCode::NotFound
        );
        assert_eq!(
            ErrorCode::from(&FolioError::render("x")),
            ErrorCode::InternalServerError
        );
        let resp = error_from_folio(&FolioError::validation("bad"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
