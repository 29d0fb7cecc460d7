use std::fmt;

#[derive(Debug, Clone)]
pub enum AppError {
    SchemaRead(String),
    SchemaParse(String),
    SchemaMismatch(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
}

impl AppError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AppError::SchemaRead(_) => "E001",
            AppError::SchemaParse(_) => "E002",
            AppError::SchemaMismatch(_) => "E003",
            AppError::Config(_) => "E004",
            AppError::FileOperation(_) => "E005",
            AppError::Serialization(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::SchemaRead(_) => "Schema Read Error",
            AppError::SchemaParse(_) => "Schema Parse Error",
            AppError::SchemaMismatch(_) => "Schema Mismatch",
            AppError::Config(_) => "Configuration Error",
            AppError::FileOperation(_) => "File Operation Error",
            AppError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            AppError::SchemaRead(msg) => msg,
            AppError::SchemaParse(msg) => msg,
            AppError::SchemaMismatch(msg) => msg,
            AppError::Config(msg) => msg,
            AppError::FileOperation(msg) => msg,
            AppError::Serialization(msg) => msg,
        }
    }

    /// Colored rendering for terminal output during startup
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

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn schema_read<T: Into<String>>(msg: T) -> Self {
        AppError::SchemaRead(msg.into())
    }

    pub fn schema_parse<T: Into<String>>(msg: T) -> Self {
        AppError::SchemaParse(msg.into())
    }

    pub fn schema_mismatch<T: Into<String>>(msg: T) -> Self {
        AppError::SchemaMismatch(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        AppError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        AppError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        AppError::Serialization(msg.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<async_graphql::parser::Error> for AppError {
    fn from(err: async_graphql::parser::Error) -> Self {
        AppError::SchemaParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
