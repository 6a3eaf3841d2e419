// ==========================================
// 禅道需求同步工具 - 需求接口 Trait
// ==========================================
// 职责: 定义导入/导出引擎所需的远端操作 (不包含实现)
// 实现者: ZentaoClient (HTTP), 测试中的内存实现
// ==========================================

use crate::zentao::error::ZentaoResult;
use crate::zentao::models::{
    CreatedStory, RemoteResponse, StoryCreatePayload, StoryDetail, StoryListPage,
};
use async_trait::async_trait;

#[async_trait]
pub trait StoryApi: Send + Sync {
    /// 分页获取产品需求列表
    ///
    /// # 参数
    /// - product_id: 产品ID
    /// - page: 页码 (从 1 开始)
    ///
    /// # 返回
    /// - Ok: 当前页需求 + 可选的 total/limit
    /// - Err: 网络错误或非成功状态码
    async fn list_product_stories(
        &self,
        product_id: i64,
        page: u32,
    ) -> ZentaoResult<RemoteResponse<StoryListPage>>;

    /// 按ID获取需求详情
    async fn get_story(&self, story_id: i64) -> ZentaoResult<RemoteResponse<StoryDetail>>;

    /// 创建需求
    async fn create_story(
        &self,
        payload: &StoryCreatePayload,
    ) -> ZentaoResult<RemoteResponse<CreatedStory>>;
}
