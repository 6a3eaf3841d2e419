// ==========================================
// 禅道需求同步工具 - 核心库
// ==========================================
// 功能: Excel/CSV 表格与禅道服务器之间的需求导入/导出
// 技术栈: tokio + reqwest + calamine/rust_xlsxwriter + tracing
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 需求与运行结果
pub mod domain;

// 表格层 - Excel/CSV 读写
pub mod spreadsheet;

// 禅道接口层 - REST 客户端与字段映射
pub mod zentao;

// 引擎层 - 导入/导出/报告
pub mod engine;

// 配置层 - YAML 配置
pub mod config;

// 日志系统
pub mod logging;

// 运行流程 - 命令行入口调用
pub mod runner;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{AppConfig, ConfigError};
pub use domain::{ExportOutcome, ImportOutcome, Story, SyncAction};
pub use engine::{build_export_summary, build_report, StoryExporter, StoryImporter};
pub use runner::RunStatus;
pub use spreadsheet::{read_stories, SheetError, UniversalFileWriter, ValidationError};
pub use zentao::{StoryApi, ZentaoClient, ZentaoError};

// ==========================================
// 系统常量
// ==========================================

/// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 系统名称
pub const APP_NAME: &str = "禅道需求同步工具";
