// ==========================================
// 禅道需求同步工具 - 需求导出器
// ==========================================
// 流程: 分页获取需求列表 → 逐条获取详情 → Story
// 终止: 空页 / 当前页不足 limit / 累计达到 total / 达到 maxPages
// 规则: 列表页失败则整体失败 (不返回部分结果);
//       详情获取失败降级为仅含列表字段的 Story
// ==========================================

use crate::domain::outcome::{ExportOutcome, PageControl, PageState, PageStop};
use crate::domain::story::Story;
use crate::zentao::field_mapper::{list_item_parent_id, story_from_detail, story_from_list_item};
use crate::zentao::models::StoryListItem;
use crate::zentao::story_api_trait::StoryApi;
use std::time::Instant;
use tracing::{debug, error, info, warn, Instrument, Span};

pub struct StoryExporter<A: StoryApi> {
    api: A,
    span: Span,
    max_pages: Option<u32>,
}

impl<A: StoryApi> StoryExporter<A> {
    pub fn new(api: A, span: Span) -> Self {
        Self {
            api,
            span,
            max_pages: None,
        }
    }

    /// 设置最大页数 (None 表示不限制)
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages.filter(|m| *m > 0);
        self
    }

    /// 导出产品下的全部需求
    ///
    /// # 返回
    /// - 成功: (需求列表, 成功结果)
    /// - 失败: (空列表, 失败结果)
    pub async fn export_all(&self, product_id: i64) -> (Vec<Story>, ExportOutcome) {
        self.fetch_all(product_id)
            .instrument(self.span.clone())
            .await
    }

    async fn fetch_all(&self, product_id: i64) -> (Vec<Story>, ExportOutcome) {
        let started = Instant::now();
        let mut state = PageState::new();
        let mut stories = Vec::new();

        info!(product_id = product_id, "开始导出产品需求");

        loop {
            info!(page = state.page, "正在获取第 {} 页需求...", state.page);

            let page = match self.api.list_product_stories(product_id, state.page).await {
                Ok(response) if response.is_success() => response.data,
                Ok(response) => {
                    let message = format!(
                        "获取产品需求列表失败(第{}页): 状态码 {}",
                        state.page, response.status
                    );
                    error!(page = state.page, status = response.status, "{}", message);
                    return (Vec::new(), ExportOutcome::failed(message, started.elapsed()));
                }
                Err(e) => {
                    let message = format!("获取产品需求列表失败(第{}页): {}", state.page, e);
                    error!(page = state.page, error = %e, "{}", message);
                    return (Vec::new(), ExportOutcome::failed(message, started.elapsed()));
                }
            };

            for item in &page.stories {
                stories.push(self.convert_list_item(item).await);
            }

            match state.record_page(page.stories.len(), page.limit, page.total, self.max_pages) {
                PageControl::Continue => continue,
                PageControl::Finished(PageStop::EmptyPage) | PageControl::Finished(PageStop::ShortPage) => {
                    info!(page = state.page, "已到达最后一页");
                }
                PageControl::Finished(PageStop::TotalReached) => {
                    info!(total = state.fetched, "已获取所有 {} 个需求", state.fetched);
                }
                PageControl::Finished(PageStop::MaxPagesReached) => {
                    warn!(
                        max_pages = state.page,
                        fetched = state.fetched,
                        "已达到最大页数限制, 停止获取"
                    );
                }
            }
            break;
        }

        info!(count = stories.len(), "需求导出完成");
        let count = stories.len();
        (stories, ExportOutcome::succeeded(count, started.elapsed()))
    }

    /// 列表项 → Story
    ///
    /// 额外获取一次详情补全需求描述等字段; 父需求ID 始终取自列表项
    pub async fn convert_list_item(&self, item: &StoryListItem) -> Story {
        let parent_id = list_item_parent_id(item);

        match self.api.get_story(item.id).await {
            Ok(response) if response.is_success() => {
                debug!(story_id = item.id, "需求详情获取成功");
                story_from_detail(&response.data, parent_id)
            }
            Ok(response) => {
                warn!(story_id = item.id, status = response.status, "获取需求详细信息失败，ID: {}", item.id);
                story_from_list_item(item)
            }
            Err(e) => {
                warn!(story_id = item.id, error = %e, "获取需求详细信息失败，ID: {}", item.id);
                story_from_list_item(item)
            }
        }
    }
}
