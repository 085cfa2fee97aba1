use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnaplinkError {
    InvalidUrl(String),
    InvalidSlug(String),
    SlugTaken(String),
    NotFound(String),
    Expired(String),
    FileOperation(String),
    Serialization(String),
    Internal(String),
}

impl SnaplinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SnaplinkError::InvalidUrl(_) => "E001",
            SnaplinkError::InvalidSlug(_) => "E002",
            SnaplinkError::SlugTaken(_) => "E003",
            SnaplinkError::NotFound(_) => "E004",
            SnaplinkError::Expired(_) => "E005",
            SnaplinkError::FileOperation(_) => "E006",
            SnaplinkError::Serialization(_) => "E007",
            SnaplinkError::Internal(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SnaplinkError::InvalidUrl(_) => "Invalid URL",
            SnaplinkError::InvalidSlug(_) => "Invalid Slug",
            SnaplinkError::SlugTaken(_) => "Slug Already Taken",
            SnaplinkError::NotFound(_) => "Resource Not Found",
            SnaplinkError::Expired(_) => "Link Expired",
            SnaplinkError::FileOperation(_) => "File Operation Error",
            SnaplinkError::Serialization(_) => "Serialization Error",
            SnaplinkError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SnaplinkError::InvalidUrl(msg) => msg,
            SnaplinkError::InvalidSlug(msg) => msg,
            SnaplinkError::SlugTaken(msg) => msg,
            SnaplinkError::NotFound(msg) => msg,
            SnaplinkError::Expired(msg) => msg,
            SnaplinkError::FileOperation(msg) => msg,
            SnaplinkError::Serialization(msg) => msg,
            SnaplinkError::Internal(msg) => msg,
        }
    }

    /// HTTP status the error maps to at the API boundary.
    /// Validation failures are 400, slug conflicts 409, lookup misses and
    /// expired links 404, the rest collapse to 500.
    pub fn http_status(&self) -> StatusCode {
        match self {
            SnaplinkError::InvalidUrl(_) | SnaplinkError::InvalidSlug(_) => StatusCode::BAD_REQUEST,
            SnaplinkError::SlugTaken(_) => StatusCode::CONFLICT,
            SnaplinkError::NotFound(_) | SnaplinkError::Expired(_) => StatusCode::NOT_FOUND,
            SnaplinkError::FileOperation(_)
            | SnaplinkError::Serialization(_)
            | SnaplinkError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SnaplinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SnaplinkError {}

// 便捷的构造函数
impl SnaplinkError {
    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::InvalidUrl(msg.into())
    }

    pub fn invalid_slug<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::InvalidSlug(msg.into())
    }

    pub fn slug_taken<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::SlugTaken(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::NotFound(msg.into())
    }

    pub fn expired<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Expired(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Serialization(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Internal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for SnaplinkError {
    fn from(err: std::io::Error) -> Self {
        SnaplinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SnaplinkError {
    fn from(err: serde_json::Error) -> Self {
        SnaplinkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SnaplinkError>;
