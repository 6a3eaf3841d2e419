// ==========================================
// 禅道需求同步工具 - 运行流程
// ==========================================
// 导入: 读取表格 → 登录 → 逐条创建 → 输出报告
// 导出: 校验产品ID → 登录 → 分页获取 → 写入表格
// 表格读取/校验失败在任何网络请求之前终止
// ==========================================

use crate::config::AppConfig;
use crate::domain::outcome::ExportOutcome;
use crate::domain::story::Story;
use crate::engine::report::{build_export_summary, build_report};
use crate::engine::story_exporter::StoryExporter;
use crate::engine::story_importer::StoryImporter;
use crate::spreadsheet::file_parser::read_stories;
use crate::spreadsheet::file_writer::UniversalFileWriter;
use crate::zentao::client::ZentaoClient;
use crate::zentao::story_api_trait::StoryApi;
use anyhow::{bail, Context};
use std::path::Path;
use tracing::{info, Instrument, Span};

/// 运行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// 全部成功
    Success,
    /// 存在失败条目 (导入) 或导出失败
    Failed,
    /// 没有可导出的需求
    NothingToExport,
}

impl RunStatus {
    /// 进程退出码: 仅 Failed 为 1
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Failed => 1,
            RunStatus::Success | RunStatus::NothingToExport => 0,
        }
    }
}

// ==========================================
// 导入
// ==========================================

/// 从表格导入需求到禅道
pub async fn run_import(config: &AppConfig, excel_file: &Path, span: Span) -> anyhow::Result<RunStatus> {
    let stories = read_stories(excel_file, config.default_priority)
        .with_context(|| format!("读取Excel数据失败: {}", excel_file.display()))?;

    let client = ZentaoClient::from_config(config)
        .instrument(span.clone())
        .await
        .context("创建导入器失败")?;

    Ok(import_stories(client, &stories, span).await)
}

/// 使用给定接口导入已解析的需求并打印报告
pub async fn import_stories<A: StoryApi>(api: A, stories: &[Story], span: Span) -> RunStatus {
    println!("开始导入 {} 个需求...", stories.len());

    let importer = StoryImporter::new(api, span);
    let outcomes = importer.import_all(stories).await;

    let report = build_report(&outcomes);
    println!("{}", report);

    if outcomes.iter().all(|o| o.success) {
        RunStatus::Success
    } else {
        RunStatus::Failed
    }
}

// ==========================================
// 导出
// ==========================================

/// 从禅道导出产品需求到表格
pub async fn run_export(
    config: &AppConfig,
    product_id: i64,
    excel_file: &Path,
    span: Span,
) -> anyhow::Result<RunStatus> {
    if product_id == 0 {
        bail!("导出操作需要指定产品ID (--product 参数)");
    }

    let client = ZentaoClient::from_config(config)
        .instrument(span.clone())
        .await
        .context("创建导出器失败")?;

    export_stories(client, product_id, excel_file, config.max_pages, span).await
}

/// 使用给定接口导出需求并写入文件
pub async fn export_stories<A: StoryApi>(
    api: A,
    product_id: i64,
    excel_file: &Path,
    max_pages: Option<u32>,
    span: Span,
) -> anyhow::Result<RunStatus> {
    let exporter = StoryExporter::new(api, span.clone()).with_max_pages(max_pages);
    let (stories, outcome) = exporter.export_all(product_id).await;

    span.in_scope(|| finish_export(product_id, excel_file, &stories, &outcome))
}

fn finish_export(
    product_id: i64,
    excel_file: &Path,
    stories: &[Story],
    outcome: &ExportOutcome,
) -> anyhow::Result<RunStatus> {
    info!("{}", build_export_summary(outcome));

    if !outcome.success {
        return Ok(RunStatus::Failed);
    }

    if stories.is_empty() {
        info!(product_id = product_id, "没有找到需要导出的需求");
        println!("没有找到需要导出的需求");
        return Ok(RunStatus::NothingToExport);
    }

    UniversalFileWriter
        .write(excel_file, stories)
        .with_context(|| format!("写入Excel文件失败: {}", excel_file.display()))?;

    info!(count = stories.len(), file = %excel_file.display(), "需求导出成功");
    println!("成功导出 {} 个需求到Excel文件: {}", stories.len(), excel_file.display());

    Ok(RunStatus::Success)
}
