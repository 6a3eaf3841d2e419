// ==========================================
// 禅道需求同步工具 - 处理结果模型
// ==========================================
// 职责: 单条导入结果 / 整体导出结果 / 导出分页状态
// ==========================================

use std::time::Duration;

// ==========================================
// ImportOutcome - 单条需求导入结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub success: bool,
    pub story_id: Option<i64>,  // 禅道分配的需求ID (仅成功时)
    pub error: Option<String>,  // 失败原因 (仅失败时)
    pub elapsed: Duration,      // 本条耗时
}

impl ImportOutcome {
    pub fn succeeded(story_id: i64, elapsed: Duration) -> Self {
        Self {
            success: true,
            story_id: Some(story_id),
            error: None,
            elapsed,
        }
    }

    pub fn failed(error: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            success: false,
            story_id: None,
            error: Some(error.into()),
            elapsed,
        }
    }
}

// ==========================================
// ExportOutcome - 导出结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub success: bool,
    pub story_count: usize,
    pub error: Option<String>,
    pub elapsed: Duration,
}

impl ExportOutcome {
    pub fn succeeded(story_count: usize, elapsed: Duration) -> Self {
        Self {
            success: true,
            story_count,
            error: None,
            elapsed,
        }
    }

    pub fn failed(error: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            success: false,
            story_count: 0,
            error: Some(error.into()),
            elapsed,
        }
    }
}

// ==========================================
// PageState - 导出分页状态
// ==========================================
// 生命周期: 仅存在于一次导出调用内
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub page: u32,                // 当前页码 (从 1 开始)
    pub fetched: usize,           // 累计已获取条数
    pub last_page_count: usize,   // 上一页条数
    pub total: Option<usize>,     // 服务端返回的总数
    pub limit: Option<usize>,     // 服务端返回的每页条数
}

/// 分页循环的下一步动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// 继续请求下一页
    Continue,
    /// 结束循环
    Finished(PageStop),
}

/// 分页循环结束原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStop {
    /// 当前页为空
    EmptyPage,
    /// 当前页条数小于每页上限, 即最后一页
    ShortPage,
    /// 累计条数已达到服务端总数
    TotalReached,
    /// 达到配置的最大页数
    MaxPagesReached,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            page: 1,
            fetched: 0,
            last_page_count: 0,
            total: None,
            limit: None,
        }
    }

    /// 记录一页结果并判定是否继续
    ///
    /// # 判定顺序
    /// 1. 当前页为空 → 结束
    /// 2. 服务端给出 limit 且本页条数 < limit → 结束
    /// 3. 服务端给出 total 且累计条数 >= total → 结束
    /// 4. 达到 max_pages → 结束
    /// 5. 否则页码 +1 继续
    ///
    /// limit/total 为 0 视为服务端未提供
    pub fn record_page(
        &mut self,
        count: usize,
        limit: Option<usize>,
        total: Option<usize>,
        max_pages: Option<u32>,
    ) -> PageControl {
        self.last_page_count = count;
        self.limit = limit.filter(|l| *l > 0);
        self.total = total.filter(|t| *t > 0);

        if count == 0 {
            return PageControl::Finished(PageStop::EmptyPage);
        }

        self.fetched += count;

        if let Some(limit) = self.limit {
            if count < limit {
                return PageControl::Finished(PageStop::ShortPage);
            }
        }

        if let Some(total) = self.total {
            if self.fetched >= total {
                return PageControl::Finished(PageStop::TotalReached);
            }
        }

        if let Some(max) = max_pages {
            if self.page >= max {
                return PageControl::Finished(PageStop::MaxPagesReached);
            }
        }

        self.page += 1;
        PageControl::Continue
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
