// ==========================================
// 禅道需求同步工具 - 行解析器
// ==========================================
// 职责: 一行单元格文本 → 校验后的 Story
// 规则: 位置列, 默认值填充, 类型转换
// ==========================================

use crate::domain::story::{is_valid_priority, Story};
use crate::spreadsheet::columns::*;
use crate::spreadsheet::error::ValidationError;

/// 解析一行单元格为需求
///
/// # 参数
/// - cells: 按列顺序排列的单元格文本
/// - default_priority: 优先级为空时使用的默认值 (原样使用, 不再校验)
///
/// # 校验顺序
/// 1. 列数 < 4 → IncompleteRow
/// 2. 产品ID 非正整数 → InvalidProductId
/// 3. 优先级非空且不在 [1,4] → InvalidPriority
/// 4. 标题 → 分类 → 需求描述 为空
///
/// 父需求ID/预计工时 解析失败时静默保持 0
pub fn parse_row<S: AsRef<str>>(
    cells: &[S],
    default_priority: i32,
) -> Result<Story, ValidationError> {
    if cells.len() < REQUIRED_COLUMNS {
        return Err(ValidationError::IncompleteRow(cells.len()));
    }

    let cell = |idx: usize| cell_text(cells, idx);

    // 产品ID
    let product_raw = cell(COL_PRODUCT_ID);
    let product_id = match product_raw.parse::<i64>() {
        Ok(id) if id > 0 => id,
        _ => return Err(ValidationError::InvalidProductId(product_raw.to_string())),
    };

    // 优先级
    let priority_raw = cell(COL_PRIORITY);
    let priority = if priority_raw.is_empty() {
        default_priority
    } else {
        match priority_raw.parse::<i32>() {
            Ok(p) if is_valid_priority(p) => p,
            _ => return Err(ValidationError::InvalidPriority(priority_raw.to_string())),
        }
    };

    let title = cell(COL_TITLE);
    if title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    let category = cell(COL_CATEGORY);
    if category.is_empty() {
        return Err(ValidationError::MissingCategory);
    }

    let spec = cell(COL_SPEC);
    if spec.is_empty() {
        return Err(ValidationError::MissingSpec);
    }

    Ok(Story {
        title: title.to_string(),
        product_id,
        priority,
        category: category.to_string(),
        spec: spec.to_string(),
        parent_id: cell(COL_PARENT_ID).parse::<i64>().unwrap_or(0),
        source: cell(COL_SOURCE).to_string(),
        source_note: cell(COL_SOURCE_NOTE).to_string(),
        estimate: parse_estimate(cell(COL_ESTIMATE)),
        keywords: cell(COL_KEYWORDS).to_string(),
        verify: cell(COL_VERIFY).to_string(),
    })
}

/// 取单元格文本 (去首尾空白), 列不存在视为空
fn cell_text<S: AsRef<str>>(cells: &[S], idx: usize) -> &str {
    cells.get(idx).map(|c| c.as_ref().trim()).unwrap_or("")
}

/// 预计工时: 非负实数, 否则视为未设置
fn parse_estimate(raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}
