// ==========================================
// 禅道需求同步工具 - 应用配置
// ==========================================
// 格式: YAML, 键名 camelCase
// 示例:
//   zentaoUrl: http://zentao.example.com
//   zentaoUsername: admin
//   zentaoPassword: secret
//   excelFile: requirements.xlsx
//   defaultPriority: 3
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::story::{is_valid_priority, FALLBACK_PRIORITY, MAX_PRIORITY, MIN_PRIORITY};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 默认表格文件
pub const DEFAULT_EXCEL_FILE: &str = "requirements.xlsx";

/// 默认请求超时 (秒)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_priority() -> i32 {
    FALLBACK_PRIORITY
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub zentao_url: String,
    #[serde(default)]
    pub zentao_username: String,
    #[serde(default)]
    pub zentao_password: String,

    /// 表格文件路径 (命令行 --excel 优先)
    #[serde(default)]
    pub excel_file: Option<PathBuf>,

    /// 未填写优先级时使用的默认值
    #[serde(default = "default_priority")]
    pub default_priority: i32,

    /// 列表请求的 limit 参数
    #[serde(default)]
    pub page_size: Option<usize>,

    /// 导出最多获取的页数, 不设置则不限制
    #[serde(default)]
    pub max_pages: Option<u32>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            zentao_url: String::new(),
            zentao_username: String::new(),
            zentao_password: String::new(),
            excel_file: None,
            default_priority: FALLBACK_PRIORITY,
            page_size: None,
            max_pages: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// 从 YAML 文件加载配置 (不校验)
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), "配置文件已加载");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// 校验必填项与取值范围
    pub fn validate(&self) -> ConfigResult<()> {
        if self.zentao_url.trim().is_empty() {
            return Err(ConfigError::MissingField("禅道URL不能为空".to_string()));
        }
        if self.zentao_username.trim().is_empty() {
            return Err(ConfigError::MissingField("禅道用户名不能为空".to_string()));
        }
        if self.zentao_password.is_empty() {
            return Err(ConfigError::MissingField("禅道密码不能为空".to_string()));
        }
        if !is_valid_priority(self.default_priority) {
            return Err(ConfigError::InvalidValue {
                field: "defaultPriority".to_string(),
                message: format!(
                    "{} 不在 {}-{} 范围内",
                    self.default_priority, MIN_PRIORITY, MAX_PRIORITY
                ),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeoutSecs".to_string(),
                message: "必须大于 0".to_string(),
            });
        }
        if self.page_size == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "pageSize".to_string(),
                message: "必须大于 0".to_string(),
            });
        }
        if self.max_pages == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "maxPages".to_string(),
                message: "必须大于 0".to_string(),
            });
        }
        Ok(())
    }

    /// 确定表格文件路径并转为绝对路径
    ///
    /// 优先级: 命令行参数 > 配置文件 excelFile > requirements.xlsx
    pub fn resolve_excel_file(&mut self, cli_path: Option<PathBuf>) -> ConfigResult<PathBuf> {
        let chosen = cli_path
            .or_else(|| self.excel_file.take())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXCEL_FILE));

        if chosen.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("Excel文件路径不能为空".to_string()));
        }

        let absolute = if chosen.is_absolute() {
            chosen
        } else {
            std::env::current_dir()
                .map_err(|e| ConfigError::InvalidValue {
                    field: "excelFile".to_string(),
                    message: format!("无法获取当前目录: {}", e),
                })?
                .join(chosen)
        };

        self.excel_file = Some(absolute.clone());
        Ok(absolute)
    }
}
