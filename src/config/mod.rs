// ==========================================
// 禅道需求同步工具 - 配置层
// ==========================================
// 职责: YAML 配置加载、校验、命令行覆写
// ==========================================

pub mod app_config;
pub mod error;

pub use app_config::{AppConfig, DEFAULT_EXCEL_FILE, DEFAULT_TIMEOUT_SECS};
pub use error::{ConfigError, ConfigResult};
