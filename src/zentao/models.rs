// ==========================================
// 禅道需求同步工具 - 禅道 API 数据模型
// ==========================================
// 对齐: 禅道 REST API v1 (/api.php/v1)
// 说明: 禅道不同版本对数值字段的 JSON 类型不统一 (数字/字符串/null),
//       反序列化统一走宽松解析
// ==========================================

use serde::{Deserialize, Deserializer, Serialize};

// ==========================================
// RemoteResponse - 带状态码的响应
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> RemoteResponse<T> {
    pub fn new(status: u16, data: T) -> Self {
        Self { status, data }
    }

    pub fn ok(data: T) -> Self {
        Self::new(200, data)
    }

    /// 状态码 < 400 视为成功
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

// ==========================================
// ParentRef - 父需求引用
// ==========================================
// 禅道返回的 parent 字段可能是整数、浮点数或数字字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParentRef {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl ParentRef {
    /// 解析为父需求ID, 无法解析时返回 0 (无父需求)
    pub fn decode(&self) -> i64 {
        match self {
            ParentRef::Integer(id) => *id,
            ParentRef::Float(id) if id.is_finite() => id.trunc() as i64,
            ParentRef::Text(text) => text.trim().parse::<i64>().unwrap_or(0),
            _ => 0,
        }
    }
}

/// 解析可选父需求引用
pub fn decode_parent(parent: Option<&ParentRef>) -> i64 {
    parent.map(ParentRef::decode).unwrap_or(0)
}

// ==========================================
// 宽松反序列化
// ==========================================

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

/// 数字/数字字符串/null → i64, 无法解析为 0
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LooseNumber>::deserialize(deserializer)? {
        Some(LooseNumber::Int(v)) => v,
        Some(LooseNumber::Float(v)) if v.is_finite() => v.trunc() as i64,
        Some(LooseNumber::Text(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    })
}

/// 数字/数字字符串/null → f64, 无法解析为 0.0
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LooseNumber>::deserialize(deserializer)? {
        Some(LooseNumber::Int(v)) => v as f64,
        Some(LooseNumber::Float(v)) => v,
        Some(LooseNumber::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// 数字字符串/null → usize, 缺失为 None
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_i64(deserializer)?;
    Ok(usize::try_from(value).ok().filter(|v| *v > 0))
}

/// null → 默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ==========================================
// 需求列表 (GET /products/{id}/stories)
// ==========================================
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryListPage {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total: Option<usize>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub limit: Option<usize>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stories: Vec<StoryListItem>,
}

/// 列表中的需求 (不含需求描述/验收标准等详情字段)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryListItem {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub product: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub pri: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub parent: Option<ParentRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
}

// ==========================================
// 需求详情 (GET /stories/{id})
// ==========================================
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDetail {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub product: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub pri: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub verify: String,
    #[serde(default)]
    pub parent: Option<ParentRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_note: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub estimate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: String,
}

// ==========================================
// 创建需求 (POST /stories)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryCreatePayload {
    pub product: i64,
    pub title: String,
    pub spec: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verify: String,
    pub pri: i32,
    pub category: String,
    pub parent: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_note: String,
    pub estimate: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keywords: String,
}

/// 创建成功后返回的需求 (仅关心 ID)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedStory {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

// ==========================================
// 认证 (POST /tokens)
// ==========================================
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub account: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parent_ref_variants() {
        let parse = |v: serde_json::Value| -> i64 {
            let parent: ParentRef = serde_json::from_value(v).unwrap();
            parent.decode()
        };

        assert_eq!(parse(json!(12)), 12);
        assert_eq!(parse(json!(12.0)), 12);
        assert_eq!(parse(json!("34")), 34);
        assert_eq!(parse(json!(" 34 ")), 34);
        assert_eq!(parse(json!("abc")), 0);
        assert_eq!(parse(json!(true)), 0);
        assert_eq!(parse(json!({"id": 3})), 0);
        assert_eq!(decode_parent(None), 0);
    }

    #[test]
    fn test_list_page_with_loose_types() {
        let page: StoryListPage = serde_json::from_value(json!({
            "page": "1",
            "total": 2,
            "limit": "20",
            "stories": [
                {"id": 1, "product": "3", "title": "登录", "pri": "2", "category": "feature", "parent": "0", "source": null},
                {"id": "2", "product": 3, "title": "注册", "pri": 3, "category": "feature", "parent": 1.0}
            ]
        }))
        .unwrap();

        assert_eq!(page.total, Some(2));
        assert_eq!(page.limit, Some(20));
        assert_eq!(page.stories.len(), 2);
        assert_eq!(page.stories[0].product, 3);
        assert_eq!(page.stories[0].pri, 2);
        assert_eq!(page.stories[0].source, "");
        assert_eq!(page.stories[1].id, 2);
        assert_eq!(decode_parent(page.stories[1].parent.as_ref()), 1);
    }

    #[test]
    fn test_list_page_without_hints() {
        let page: StoryListPage = serde_json::from_value(json!({"stories": []})).unwrap();
        assert_eq!(page.total, None);
        assert_eq!(page.limit, None);
        assert!(page.stories.is_empty());
    }

    #[test]
    fn test_detail_null_fields() {
        let detail: StoryDetail = serde_json::from_value(json!({
            "id": 9,
            "product": 1,
            "title": "导出",
            "pri": 1,
            "category": "feature",
            "spec": null,
            "verify": "可下载",
            "sourceNote": "备注",
            "estimate": "1.5",
            "keywords": null
        }))
        .unwrap();

        assert_eq!(detail.spec, "");
        assert_eq!(detail.verify, "可下载");
        assert_eq!(detail.source_note, "备注");
        assert_eq!(detail.estimate, 1.5);
        assert_eq!(detail.keywords, "");
    }

    #[test]
    fn test_create_payload_skips_empty_optional_text() {
        let payload = StoryCreatePayload {
            product: 1,
            title: "登录".to_string(),
            spec: "描述".to_string(),
            verify: String::new(),
            pri: 2,
            category: "feature".to_string(),
            parent: 0,
            source: String::new(),
            source_note: "备注".to_string(),
            estimate: 0.0,
            keywords: String::new(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["pri"], 2);
        assert_eq!(value["sourceNote"], "备注");
        assert!(value.get("verify").is_none());
        assert!(value.get("source").is_none());
    }
}
