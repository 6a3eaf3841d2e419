// ==========================================
// 禅道需求同步工具 - 禅道接口错误类型
// ==========================================
// 覆盖: 网络失败 / 认证失败 / 非成功状态码 / 响应格式错误
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZentaoError {
    #[error("网络请求失败: {0}")]
    Network(String),

    #[error("认证失败: {0}")]
    Authentication(String),

    #[error("服务端返回错误状态 {status}: {message}")]
    Status { status: u16, message: String },

    #[error("响应解析失败: {0}")]
    InvalidResponse(String),

    #[error("客户端配置错误: {0}")]
    Configuration(String),
}

impl ZentaoError {
    /// 服务端返回的状态码 (仅 Status 错误)
    pub fn status(&self) -> Option<u16> {
        match self {
            ZentaoError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ZentaoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ZentaoError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            ZentaoError::Configuration(err.to_string())
        } else {
            ZentaoError::Network(err.to_string())
        }
    }
}

/// Result 类型别名
pub type ZentaoResult<T> = Result<T, ZentaoError>;
