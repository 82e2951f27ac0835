//! 外链验证模块
//!
//! 项目的 live / source 链接必须是绝对 http(s) 地址

use url::Url;

/// 外链验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    UnsupportedScheme(String),
    InvalidFormat(String),
    MissingHost,
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "must not be empty"),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "uses unsupported scheme '{}', only http and https are allowed",
                scheme
            ),
            Self::InvalidFormat(msg) => write!(f, "is not a valid URL: {}", msg),
            Self::MissingHost => write!(f, "must include a host"),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 验证外链
///
/// 检查项目：
/// 1. 不为空
/// 2. 能被解析为绝对 URL
/// 3. scheme 为 http 或 https（javascript:, data: 等一律拒绝）
/// 4. 带主机名
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}
