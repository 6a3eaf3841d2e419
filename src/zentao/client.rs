// ==========================================
// 禅道需求同步工具 - 禅道 HTTP 客户端
// ==========================================
// 职责: 登录换取 Token, 封装需求相关 REST 调用
// 约定: 所有请求附带 `Token` 头; 非 2xx 状态码一律转为 ZentaoError::Status
// ==========================================

use crate::config::AppConfig;
use crate::zentao::error::{ZentaoError, ZentaoResult};
use crate::zentao::models::{
    CreatedStory, RemoteResponse, StoryCreatePayload, StoryDetail, StoryListPage, TokenRequest,
    TokenResponse,
};
use crate::zentao::story_api_trait::StoryApi;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// API 路径前缀
const API_PREFIX: &str = "/api.php/v1";

/// 认证请求头
const TOKEN_HEADER: &str = "Token";

// ==========================================
// ZentaoClient
// ==========================================
#[derive(Debug, Clone)]
pub struct ZentaoClient {
    http: Client,
    api_base: String,
    token: String,
    page_size: Option<usize>,
}

impl ZentaoClient {
    /// 由配置创建客户端并完成登录
    pub async fn from_config(config: &AppConfig) -> ZentaoResult<Self> {
        let client = Self::connect(
            &config.zentao_url,
            &config.zentao_username,
            &config.zentao_password,
            Duration::from_secs(config.timeout_secs),
        )
        .await?;
        Ok(client.with_page_size(config.page_size))
    }

    /// 创建客户端并登录
    ///
    /// # 参数
    /// - base_url: 禅道地址 (如 http://zentao.example.com, 末尾斜杠可有可无)
    /// - account / password: 登录凭据
    /// - timeout: 单次请求超时
    #[instrument(skip(password))]
    pub async fn connect(
        base_url: &str,
        account: &str,
        password: &str,
        timeout: Duration,
    ) -> ZentaoResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ZentaoError::Configuration(e.to_string()))?;

        let api_base = format!("{}{}", base_url.trim_end_matches('/'), API_PREFIX);
        let token = Self::login(&http, &api_base, account, password).await?;

        debug!(api_base = %api_base, "禅道登录成功");

        Ok(Self {
            http,
            api_base,
            token,
            page_size: None,
        })
    }

    /// 设置分页大小 (作为 limit 查询参数)
    pub fn with_page_size(mut self, page_size: Option<usize>) -> Self {
        self.page_size = page_size.filter(|v| *v > 0);
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    // ===== 内部方法 =====

    async fn login(
        http: &Client,
        api_base: &str,
        account: &str,
        password: &str,
    ) -> ZentaoResult<String> {
        let response = http
            .post(format!("{}/tokens", api_base))
            .json(&TokenRequest { account, password })
            .send()
            .await
            .map_err(|e| ZentaoError::Authentication(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ZentaoError::Authentication(format!(
                "状态码 {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ZentaoError::Authentication(format!("无法解析 Token: {}", e)))?;

        if token.token.trim().is_empty() {
            return Err(ZentaoError::Authentication("服务端返回空 Token".to_string()));
        }

        Ok(token.token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// 发送请求并解析 JSON 响应
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ZentaoResult<RemoteResponse<T>> {
        let response = request.header(TOKEN_HEADER, &self.token).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "禅道返回错误状态");
            return Err(ZentaoError::Status {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let body = response.text().await?;
        let data = serde_json::from_str::<T>(&body)
            .map_err(|e| ZentaoError::InvalidResponse(e.to_string()))?;

        Ok(RemoteResponse::new(status.as_u16(), data))
    }
}

#[async_trait]
impl StoryApi for ZentaoClient {
    #[instrument(skip(self))]
    async fn list_product_stories(
        &self,
        product_id: i64,
        page: u32,
    ) -> ZentaoResult<RemoteResponse<StoryListPage>> {
        let mut query: Vec<(&str, String)> = vec![("page", page.to_string())];
        if let Some(limit) = self.page_size {
            query.push(("limit", limit.to_string()));
        }

        let request = self
            .http
            .get(self.url(&format!("/products/{}/stories", product_id)))
            .query(&query);

        self.send(request).await
    }

    #[instrument(skip(self))]
    async fn get_story(&self, story_id: i64) -> ZentaoResult<RemoteResponse<StoryDetail>> {
        let request = self.http.get(self.url(&format!("/stories/{}", story_id)));
        self.send(request).await
    }

    #[instrument(skip(self, payload), fields(title = %payload.title, product = payload.product))]
    async fn create_story(
        &self,
        payload: &StoryCreatePayload,
    ) -> ZentaoResult<RemoteResponse<CreatedStory>> {
        let request = self.http.post(self.url("/stories")).json(payload);
        self.send(request).await
    }
}
