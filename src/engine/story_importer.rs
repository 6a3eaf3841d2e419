// ==========================================
// 禅道需求同步工具 - 需求导入器
// ==========================================
// 流程: Story → 创建请求体 → POST /stories → ImportOutcome
// 规则: 逐条顺序执行, 单条失败不影响后续, 不重试
// ==========================================

use crate::domain::outcome::ImportOutcome;
use crate::domain::story::Story;
use crate::zentao::field_mapper::to_create_payload;
use crate::zentao::story_api_trait::StoryApi;
use std::time::Instant;
use tracing::{error, info, Instrument, Span};

/// 创建需求成功时要求的状态码
pub const CREATE_SUCCESS_STATUS: u16 = 200;

pub struct StoryImporter<A: StoryApi> {
    api: A,
    span: Span,
}

impl<A: StoryApi> StoryImporter<A> {
    /// # 参数
    /// - api: 禅道接口
    /// - span: 本次运行的日志上下文
    pub fn new(api: A, span: Span) -> Self {
        Self { api, span }
    }

    /// 导入单条需求
    pub async fn import_story(&self, index: usize, story: &Story) -> ImportOutcome {
        let started = Instant::now();
        let payload = to_create_payload(story);

        let result = self.api.create_story(&payload).await;
        let elapsed = started.elapsed();

        match result {
            Ok(response) if response.status == CREATE_SUCCESS_STATUS => {
                info!(
                    index = index,
                    story_id = response.data.id,
                    title = %story.title,
                    "需求导入成功"
                );
                ImportOutcome::succeeded(response.data.id, elapsed)
            }
            Ok(response) => {
                let message = format!("创建需求失败: 状态码 {}", response.status);
                error!(index = index, title = %story.title, status = response.status, "{}", message);
                ImportOutcome::failed(message, elapsed)
            }
            Err(e) => {
                let message = format!("创建需求失败: {}", e);
                error!(index = index, title = %story.title, error = %e, "需求导入失败");
                ImportOutcome::failed(message, elapsed)
            }
        }
    }

    /// 按顺序导入全部需求, 结果与输入一一对应
    pub async fn import_all(&self, stories: &[Story]) -> Vec<ImportOutcome> {
        async {
            info!(count = stories.len(), "开始导入需求");

            let mut outcomes = Vec::with_capacity(stories.len());
            for (idx, story) in stories.iter().enumerate() {
                outcomes.push(self.import_story(idx + 1, story).await);
            }

            let success = outcomes.iter().filter(|o| o.success).count();
            info!(
                total = outcomes.len(),
                success = success,
                failed = outcomes.len() - success,
                "需求导入完成"
            );
            outcomes
        }
        .instrument(self.span.clone())
        .await
    }
}
