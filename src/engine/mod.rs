// ==========================================
// 禅道需求同步工具 - 引擎层
// ==========================================
// 职责: 导入/导出流程编排, 运行报告
// 依赖: zentao::StoryApi (远端), domain (结果类型)
// ==========================================

pub mod report;
pub mod story_exporter;
pub mod story_importer;

pub use report::{build_export_summary, build_report};
pub use story_exporter::StoryExporter;
pub use story_importer::{StoryImporter, CREATE_SUCCESS_STATUS};
