// ==========================================
// 禅道需求同步工具 - 表格列布局
// ==========================================
// 读写共用同一套列顺序 (位置即含义, 不依赖表头文字)
// ==========================================

use crate::domain::Story;

pub const COL_TITLE: usize = 0;
pub const COL_PRODUCT_ID: usize = 1;
pub const COL_PRIORITY: usize = 2;
pub const COL_CATEGORY: usize = 3;
pub const COL_SPEC: usize = 4;
pub const COL_PARENT_ID: usize = 5;
pub const COL_SOURCE: usize = 6;
pub const COL_SOURCE_NOTE: usize = 7;
pub const COL_ESTIMATE: usize = 8;
pub const COL_KEYWORDS: usize = 9;
pub const COL_VERIFY: usize = 10;

/// 必须存在的列数 (标题/产品ID/优先级/分类)
pub const REQUIRED_COLUMNS: usize = 4;

/// 导出工作表名称
pub const SHEET_NAME: &str = "Stories";

/// 表头 (A-K 列)
pub const HEADERS: [&str; 11] = [
    "标题",     // A
    "产品ID",   // B
    "优先级",   // C
    "分类",     // D
    "需求描述", // E
    "父需求ID", // F
    "来源",     // G
    "来源备注", // H
    "预计工时", // I
    "关键词",   // J
    "验收标准", // K
];

/// 单元格取值
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    fn text(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }

    /// 转为文本 (CSV 输出用)
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

/// 将需求展开为一行单元格, 零值可选字段留空
pub fn story_to_cells(story: &Story) -> [CellValue; 11] {
    [
        CellValue::Text(story.title.clone()),
        CellValue::Number(story.product_id as f64),
        CellValue::Number(story.priority as f64),
        CellValue::text(&story.category),
        CellValue::text(&story.spec),
        if story.parent_id != 0 {
            CellValue::Number(story.parent_id as f64)
        } else {
            CellValue::Empty
        },
        CellValue::text(&story.source),
        CellValue::text(&story.source_note),
        if story.estimate != 0.0 {
            CellValue::Number(story.estimate)
        } else {
            CellValue::Empty
        },
        CellValue::text(&story.keywords),
        CellValue::text(&story.verify),
    ]
}
