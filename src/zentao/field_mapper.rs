// ==========================================
// 禅道需求同步工具 - 字段映射器
// ==========================================
// 职责: Story ↔ 禅道 API 数据结构
// 方向: 导入 Story → StoryCreatePayload
//       导出 StoryListItem / StoryDetail → Story
// ==========================================

use crate::domain::story::{normalize_priority, Story};
use crate::zentao::models::{decode_parent, StoryCreatePayload, StoryDetail, StoryListItem};

/// Story → 创建需求请求体 (一一对应, 不做校验)
pub fn to_create_payload(story: &Story) -> StoryCreatePayload {
    StoryCreatePayload {
        product: story.product_id,
        title: story.title.clone(),
        spec: story.spec.clone(),
        verify: story.verify.clone(),
        pri: story.priority,
        category: story.category.clone(),
        parent: story.parent_id,
        source: story.source.clone(),
        source_note: story.source_note.clone(),
        estimate: story.estimate,
        keywords: story.keywords.clone(),
    }
}

/// 远端优先级转换: 超出 i32 或不在 [1,4] 时归一化为 3
fn remote_priority(pri: i64) -> i32 {
    normalize_priority(i32::try_from(pri).unwrap_or(0))
}

/// 列表项中的父需求ID
pub fn list_item_parent_id(item: &StoryListItem) -> i64 {
    decode_parent(item.parent.as_ref())
}

/// 仅凭列表字段构造 Story (详情获取失败时的降级结果)
///
/// 需求描述/验收标准/来源备注/预计工时/关键词 留空
pub fn story_from_list_item(item: &StoryListItem) -> Story {
    Story {
        title: item.title.clone(),
        product_id: item.product,
        priority: remote_priority(item.pri),
        category: item.category.clone(),
        parent_id: list_item_parent_id(item),
        source: item.source.clone(),
        ..Default::default()
    }
}

/// 由需求详情构造 Story
///
/// 父需求ID 由调用方从列表项中取得, 不使用详情中的 parent
pub fn story_from_detail(detail: &StoryDetail, parent_id: i64) -> Story {
    Story {
        title: detail.title.clone(),
        product_id: detail.product,
        priority: remote_priority(detail.pri),
        category: detail.category.clone(),
        spec: detail.spec.clone(),
        parent_id,
        source: detail.source.clone(),
        source_note: detail.source_note.clone(),
        estimate: detail.estimate,
        keywords: detail.keywords.clone(),
        verify: detail.verify.clone(),
    }
}
