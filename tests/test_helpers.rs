// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 内存版 StoryApi、测试数据构造、临时表格文件
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;
use zentao_story_sync::domain::Story;
use zentao_story_sync::zentao::models::{
    CreatedStory, ParentRef, RemoteResponse, StoryCreatePayload, StoryDetail, StoryListItem,
    StoryListPage,
};
use zentao_story_sync::zentao::{StoryApi, ZentaoError, ZentaoResult};

// ==========================================
// 脚本化响应
// ==========================================

/// 单次远端调用的预设结果
#[derive(Debug, Clone)]
pub enum Scripted<T> {
    Ok(T),
    /// 返回 Ok, 但状态码为给定值
    Status(u16, T),
    /// 返回网络错误
    Fail(String),
}

impl<T> Scripted<T> {
    fn into_result(self) -> ZentaoResult<RemoteResponse<T>> {
        match self {
            Scripted::Ok(data) => Ok(RemoteResponse::ok(data)),
            Scripted::Status(status, data) => Ok(RemoteResponse::new(status, data)),
            Scripted::Fail(message) => Err(ZentaoError::Network(message)),
        }
    }
}

/// 记录的调用
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List { product_id: i64, page: u32 },
    Get { story_id: i64 },
    Create { title: String },
}

#[derive(Default)]
struct FakeState {
    pages: HashMap<u32, Scripted<StoryListPage>>,
    details: HashMap<i64, Scripted<StoryDetail>>,
    creates: VecDeque<Scripted<CreatedStory>>,
    next_id: i64,
    calls: Vec<ApiCall>,
    payloads: Vec<StoryCreatePayload>,
}

// ==========================================
// FakeStoryApi - 内存版禅道接口
// ==========================================
// 未预设的列表页返回空页; 未预设的详情返回 404;
// 未预设的创建返回 200 与自增ID (从 1001 开始)
#[derive(Clone, Default)]
pub struct FakeStoryApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeStoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, page: u32, script: Scripted<StoryListPage>) -> Self {
        self.state.lock().unwrap().pages.insert(page, script);
        self
    }

    pub fn with_detail(self, story_id: i64, script: Scripted<StoryDetail>) -> Self {
        self.state.lock().unwrap().details.insert(story_id, script);
        self
    }

    pub fn with_create(self, script: Scripted<CreatedStory>) -> Self {
        self.state.lock().unwrap().creates.push_back(script);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn payloads(&self) -> Vec<StoryCreatePayload> {
        self.state.lock().unwrap().payloads.clone()
    }

    pub fn list_calls(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ApiCall::List { page, .. } => Some(page),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl StoryApi for FakeStoryApi {
    async fn list_product_stories(
        &self,
        product_id: i64,
        page: u32,
    ) -> ZentaoResult<RemoteResponse<StoryListPage>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ApiCall::List { product_id, page });
        state
            .pages
            .get(&page)
            .cloned()
            .unwrap_or_else(|| Scripted::Ok(StoryListPage::default()))
            .into_result()
    }

    async fn get_story(&self, story_id: i64) -> ZentaoResult<RemoteResponse<StoryDetail>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ApiCall::Get { story_id });
        match state.details.get(&story_id).cloned() {
            Some(script) => script.into_result(),
            None => Err(ZentaoError::Status {
                status: 404,
                message: "Not Found".to_string(),
            }),
        }
    }

    async fn create_story(
        &self,
        payload: &StoryCreatePayload,
    ) -> ZentaoResult<RemoteResponse<CreatedStory>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(ApiCall::Create {
            title: payload.title.clone(),
        });
        state.payloads.push(payload.clone());

        match state.creates.pop_front() {
            Some(script) => script.into_result(),
            None => {
                state.next_id += 1;
                Scripted::Ok(CreatedStory {
                    id: 1000 + state.next_id,
                    title: payload.title.clone(),
                })
                .into_result()
            }
        }
    }
}

// ==========================================
// 测试数据构造
// ==========================================

pub fn story(title: &str) -> Story {
    Story {
        title: title.to_string(),
        product_id: 1,
        priority: 2,
        category: "feature".to_string(),
        spec: format!("{} 的需求描述", title),
        ..Default::default()
    }
}

pub fn list_item(id: i64, title: &str) -> StoryListItem {
    StoryListItem {
        id,
        product: 1,
        title: title.to_string(),
        pri: 2,
        category: "feature".to_string(),
        parent: Some(ParentRef::Integer(0)),
        source: "po".to_string(),
    }
}

pub fn detail_for(item: &StoryListItem) -> StoryDetail {
    StoryDetail {
        id: item.id,
        product: item.product,
        title: item.title.clone(),
        pri: item.pri,
        category: item.category.clone(),
        spec: format!("{} 的需求描述", item.title),
        verify: format!("{} 的验收标准", item.title),
        parent: None,
        source: item.source.clone(),
        source_note: "备注".to_string(),
        estimate: 2.0,
        keywords: "kw".to_string(),
    }
}

/// 构造一页列表, ID 从 first_id 开始连续编号
pub fn list_page(
    first_id: i64,
    count: usize,
    limit: Option<usize>,
    total: Option<usize>,
) -> StoryListPage {
    StoryListPage {
        page: 0,
        total,
        limit,
        stories: (0..count as i64)
            .map(|i| list_item(first_id + i, &format!("需求{}", first_id + i)))
            .collect(),
    }
}

/// 为给定页中的每一项预设详情
pub fn with_details_for(mut api: FakeStoryApi, page: &StoryListPage) -> FakeStoryApi {
    for item in &page.stories {
        api = api.with_detail(item.id, Scripted::Ok(detail_for(item)));
    }
    api
}

// ==========================================
// 临时表格文件
// ==========================================

pub const CSV_HEADER: &str =
    "标题,产品ID,优先级,分类,需求描述,父需求ID,来源,来源备注,预计工时,关键词,验收标准";

/// 写入带表头的临时 CSV 文件
pub fn write_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "{}", CSV_HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}
