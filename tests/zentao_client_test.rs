// ==========================================
// 禅道需求同步工具 - ZentaoClient HTTP 测试
// ==========================================
// 工具: wiremock 模拟禅道 REST API v1
// ==========================================

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zentao_story_sync::config::AppConfig;
use zentao_story_sync::zentao::models::StoryCreatePayload;
use zentao_story_sync::zentao::{StoryApi, ZentaoClient, ZentaoError};

const TOKEN: &str = "test-token";

async fn server_with_login() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api.php/v1/tokens"))
        .and(body_json(json!({"account": "admin", "password": "secret"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": TOKEN})))
        .mount(&server)
        .await;

    server
}

async fn connect(server: &MockServer) -> ZentaoClient {
    ZentaoClient::connect(&server.uri(), "admin", "secret", Duration::from_secs(5))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_connect_strips_trailing_slash() {
    let server = server_with_login().await;

    let client = ZentaoClient::connect(
        &format!("{}/", server.uri()),
        "admin",
        "secret",
        Duration::from_secs(5),
    )
    .await
    .unwrap();

    assert_eq!(client.api_base(), format!("{}/api.php/v1", server.uri()));
}

#[tokio::test]
async fn test_login_failure_is_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api.php/v1/tokens"))
        .respond_with(ResponseTemplate::new(401).set_body_string("登录失败"))
        .mount(&server)
        .await;

    let result =
        ZentaoClient::connect(&server.uri(), "admin", "wrong", Duration::from_secs(5)).await;

    match result {
        Err(ZentaoError::Authentication(message)) => assert!(message.contains("401")),
        other => panic!("expected authentication error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_product_stories_sends_token_and_page() {
    let server = server_with_login().await;

    Mock::given(method("GET"))
        .and(path("/api.php/v1/products/3/stories"))
        .and(query_param("page", "2"))
        .and(header("Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 2,
            "total": 21,
            "limit": 20,
            "stories": [
                {"id": 21, "product": 3, "title": "最后一条", "pri": 1, "category": "feature", "parent": "0", "source": ""}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let response = client.list_product_stories(3, 2).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.data.total, Some(21));
    assert_eq!(response.data.limit, Some(20));
    assert_eq!(response.data.stories.len(), 1);
    assert_eq!(response.data.stories[0].title, "最后一条");
}

#[tokio::test]
async fn test_page_size_sent_as_limit() {
    let server = server_with_login().await;

    Mock::given(method("GET"))
        .and(path("/api.php/v1/products/3/stories"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stories": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = AppConfig {
        zentao_url: server.uri(),
        zentao_username: "admin".to_string(),
        zentao_password: "secret".to_string(),
        page_size: Some(50),
        ..Default::default()
    };

    let client = ZentaoClient::from_config(&config).await.unwrap();
    let response = client.list_product_stories(3, 1).await.unwrap();
    assert!(response.data.stories.is_empty());
}

#[tokio::test]
async fn test_error_status_mapped() {
    let server = server_with_login().await;

    Mock::given(method("GET"))
        .and(path("/api.php/v1/stories/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let err = client.get_story(404).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(matches!(err, ZentaoError::Status { ref message, .. } if message == "not found"));
}

#[tokio::test]
async fn test_invalid_json_is_invalid_response() {
    let server = server_with_login().await;

    Mock::given(method("GET"))
        .and(path("/api.php/v1/stories/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let err = client.get_story(1).await.unwrap_err();
    assert!(matches!(err, ZentaoError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_get_story_detail() {
    let server = server_with_login().await;

    Mock::given(method("GET"))
        .and(path("/api.php/v1/stories/9"))
        .and(header("Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9,
            "product": 3,
            "title": "导出",
            "pri": "2",
            "category": "feature",
            "spec": "描述",
            "verify": "验收",
            "parent": -1,
            "source": "customer",
            "sourceNote": "工单",
            "estimate": 1.5,
            "keywords": "excel"
        })))
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let detail = client.get_story(9).await.unwrap().data;

    assert_eq!(detail.pri, 2);
    assert_eq!(detail.spec, "描述");
    assert_eq!(detail.source_note, "工单");
    assert_eq!(detail.estimate, 1.5);
}

#[tokio::test]
async fn test_create_story_posts_payload() {
    let server = server_with_login().await;

    Mock::given(method("POST"))
        .and(path("/api.php/v1/stories"))
        .and(header("Token", TOKEN))
        .and(body_partial_json(json!({
            "product": 1,
            "title": "登录",
            "pri": 2,
            "category": "feature",
            "spec": "描述",
            "parent": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 88, "title": "登录"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let payload = StoryCreatePayload {
        product: 1,
        title: "登录".to_string(),
        spec: "描述".to_string(),
        verify: String::new(),
        pri: 2,
        category: "feature".to_string(),
        parent: 0,
        source: String::new(),
        source_note: String::new(),
        estimate: 0.0,
        keywords: String::new(),
    };

    let response = client.create_story(&payload).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.data.id, 88);
}
