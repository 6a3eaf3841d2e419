// ==========================================
// 禅道需求同步工具 - 领域模型层
// ==========================================
// 职责: 定义需求实体、处理结果、领域类型
// 红线: 不含文件读写逻辑, 不含网络调用
// ==========================================

pub mod outcome;
pub mod story;
pub mod types;

// 重导出核心类型
pub use outcome::{ExportOutcome, ImportOutcome, PageControl, PageState, PageStop};
pub use story::{normalize_priority, is_valid_priority, Story};
pub use types::SyncAction;
