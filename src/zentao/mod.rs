// ==========================================
// 禅道需求同步工具 - 禅道接口层
// ==========================================
// 职责: 禅道 REST API 访问, 远端数据 ↔ Story 映射
// ==========================================

pub mod client;
pub mod error;
pub mod field_mapper;
pub mod models;
pub mod story_api_trait;

// 重导出核心类型
pub use client::ZentaoClient;
pub use error::{ZentaoError, ZentaoResult};
pub use models::{
    CreatedStory, ParentRef, RemoteResponse, StoryCreatePayload, StoryDetail, StoryListItem,
    StoryListPage,
};
pub use story_api_trait::StoryApi;
