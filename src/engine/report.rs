// ==========================================
// 禅道需求同步工具 - 运行报告
// ==========================================
// 导入报告: 逐条结果 + 汇总统计 (总数/成功/失败/耗时/成功率)
// 导出摘要: 状态 + 数量 + 耗时
// ==========================================

use crate::domain::outcome::{ExportOutcome, ImportOutcome};
use std::time::Duration;

const NOT_AVAILABLE: &str = "N/A";

/// 生成导入报告
///
/// 纯函数: 相同输入得到相同文本; 空输入时平均耗时与成功率为 N/A
pub fn build_report(outcomes: &[ImportOutcome]) -> String {
    let mut report = String::from("\n=== 需求导入报告 ===\n\n");

    let mut total_elapsed = Duration::ZERO;
    let mut success = 0usize;

    for (idx, outcome) in outcomes.iter().enumerate() {
        total_elapsed += outcome.elapsed;
        let line = if outcome.success {
            success += 1;
            format!(
                "✓ 需求 #{} 导入成功 (ID: {}, 耗时: {:?})\n",
                idx + 1,
                outcome.story_id.unwrap_or_default(),
                outcome.elapsed
            )
        } else {
            format!(
                "✗ 需求 #{} 导入失败: {}\n",
                idx + 1,
                outcome.error.as_deref().unwrap_or("未知错误")
            )
        };
        report.push_str(&line);
    }

    let total = outcomes.len();
    let (average, rate) = match u32::try_from(total) {
        Ok(count) if count > 0 => (
            format!("{:?}", total_elapsed / count),
            format!("{:.1}%", success as f64 * 100.0 / total as f64),
        ),
        _ => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    };

    report.push_str("\n总计统计:\n");
    report.push_str(&format!("- 总需求数: {}\n", total));
    report.push_str(&format!("- 成功导入: {}\n", success));
    report.push_str(&format!("- 失败数量: {}\n", total - success));
    report.push_str(&format!("- 总耗时: {:?}\n", total_elapsed));
    report.push_str(&format!("- 平均耗时: {}\n", average));
    report.push_str(&format!("- 成功率: {}\n", rate));

    report
}

/// 生成导出摘要
pub fn build_export_summary(outcome: &ExportOutcome) -> String {
    let status = if outcome.success {
        format!("- 导出状态: 成功\n- 需求数量: {}\n", outcome.story_count)
    } else {
        format!(
            "- 导出状态: 失败\n- 失败原因: {}\n",
            outcome.error.as_deref().unwrap_or("未知错误")
        )
    };

    format!(
        "\n=== 需求导出报告 ===\n\n{}- 总耗时: {:?}\n",
        status, outcome.elapsed
    )
}
