use std::fmt;

#[derive(Debug, Clone)]
pub enum FolioError {
    Config(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    CatalogParse(String),
    DateParse(String),
    Render(String),
}

impl FolioError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            FolioError::Config(_) => "E001",
            FolioError::FileOperation(_) => "E002",
            FolioError::Validation(_) => "E003",
            FolioError::NotFound(_) => "E004",
            FolioError::Serialization(_) => "E005",
            FolioError::CatalogParse(_) => "E006",
            FolioError::DateParse(_) => "E007",
            FolioError::Render(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            FolioError::Config(_) => "Configuration Error",
            FolioError::FileOperation(_) => "File Operation Error",
            FolioError::Validation(_) => "Validation Error",
            FolioError::NotFound(_) => "Resource Not Found",
            FolioError::Serialization(_) => "Serialization Error",
            FolioError::CatalogParse(_) => "Catalog Parse Error",
            FolioError::DateParse(_) => "Date Parse Error",
            FolioError::Render(_) => "Render Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            FolioError::Config(msg)
            | FolioError::FileOperation(msg)
            | FolioError::Validation(msg)
            | FolioError::NotFound(msg)
            | FolioError::Serialization(msg)
            | FolioError::CatalogParse(msg)
            | FolioError::DateParse(msg)
            | FolioError::Render(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    #[cfg(feature = "server")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for FolioError {}

// 便捷的构造函数
impl FolioError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        FolioError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        FolioError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        FolioError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        FolioError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        FolioError::Serialization(msg.into())
    }

    pub fn catalog_parse<T: Into<String>>(msg: T) -> Self {
        FolioError::CatalogParse(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        FolioError::DateParse(msg.into())
    }

    pub fn render<T: Into<String>>(msg: T) -> Self {
        FolioError::Render(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::CatalogParse(err.to_string())
    }
}

impl From<chrono::ParseError> for FolioError {
    fn from(err: chrono::ParseError) -> Self {
        FolioError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
