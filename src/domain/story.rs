// ==========================================
// 禅道需求同步工具 - 需求领域模型
// ==========================================
// 职责: 定义需求 (Story) 的内存表示
// 来源: Excel 行解析 / 禅道 API 返回
// 用途: 导入时提交禅道, 导出时写入 Excel
// ==========================================

/// 优先级合法下限
pub const MIN_PRIORITY: i32 = 1;

/// 优先级合法上限
pub const MAX_PRIORITY: i32 = 4;

/// 远端优先级越界时的归一化取值
pub const FALLBACK_PRIORITY: i32 = 3;

// ==========================================
// Story - 需求
// ==========================================
// 红线: 创建后不再修改
// 约束: title/category/spec 非空, product_id 非零, priority ∈ [1,4]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Story {
    // ===== 必填字段 =====
    pub title: String,    // 标题
    pub product_id: i64,  // 产品ID
    pub priority: i32,    // 优先级 (1-4)
    pub category: String, // 分类
    pub spec: String,     // 需求描述

    // ===== 可选字段 =====
    pub parent_id: i64,      // 父需求ID (0 = 无父需求)
    pub source: String,      // 来源
    pub source_note: String, // 来源备注
    pub estimate: f64,       // 预计工时 (0 = 未设置)
    pub keywords: String,    // 关键词
    pub verify: String,      // 验收标准
}

impl Story {
    /// 是否为根需求 (无父需求)
    pub fn is_root(&self) -> bool {
        self.parent_id == 0
    }
}

/// 判断优先级是否合法
pub fn is_valid_priority(priority: i32) -> bool {
    (MIN_PRIORITY..=MAX_PRIORITY).contains(&priority)
}

/// 远端优先级归一化: 越界一律视为 3
pub fn normalize_priority(priority: i32) -> i32 {
    if is_valid_priority(priority) {
        priority
    } else {
        FALLBACK_PRIORITY
    }
}
