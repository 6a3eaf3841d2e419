// ==========================================
// 禅道需求同步工具 - 配置错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    MissingField(String),

    #[error("配置项 {field} 无效: {message}")]
    InvalidValue { field: String, message: String },

    #[error("无法读取配置文件 {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
