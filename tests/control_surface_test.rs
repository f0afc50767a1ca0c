//! 控制接口端到端测试
//!
//! 通过直接驱动axum路由验证四个控制端点的行为

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use keepalive_agent::config::PingConfig;
use keepalive_agent::ping::{HttpPingAction, PingScheduler};
use keepalive_agent::web::{router, AppState};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// 构建测试用的路由
fn test_app(config: PingConfig) -> Router {
    let action = Arc::new(HttpPingAction::new(&config).unwrap());
    let scheduler = Arc::new(PingScheduler::new(action, config));
    router(AppState::new(scheduler))
}

/// 使用默认配置构建测试路由
fn default_app() -> Router {
    test_app(PingConfig::default())
}

/// 向路由发送一次GET请求，返回状态码和响应体
async fn get(app: &Router, path: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_banner_with_defaults_and_inactive_scheduler() {
    let app = default_app();

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("http://localhost:3001"));
    assert!(body.contains("14"));
    assert!(body.contains("inactive"));

    // 启动时不自动开始ping
    let (_, body) = get(&app, "/ping-status").await;
    assert!(body.contains("inactive"));
}

#[tokio::test]
async fn test_start_then_status_reports_active() {
    let app = default_app();

    let (status, body) = get(&app, "/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("http://localhost:3001"));
    assert!(body.contains("14"));
    assert!(body.contains("Initial ping sent"));

    let (status, body) = get(&app, "/ping-status").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("Pinging is active"));
}

#[tokio::test]
async fn test_stop_after_start_then_stop_again() {
    let app = default_app();

    get(&app, "/ping").await;

    let (status, body) = get(&app, "/stop-ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Pinging stopped.");

    let (status, body) = get(&app, "/stop-ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Pinging is not currently active.");
}

#[tokio::test]
async fn test_double_start_keeps_single_timer() {
    let mut server = mockito::Server::new_async().await;
    // 间隔足够长，观察窗口内只有两次启动时的首发ping
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .expect(2)
        .create_async()
        .await;

    let config = PingConfig {
        target_url: server.url(),
        interval: Duration::from_secs(600),
        timeout: Duration::from_secs(2),
    };
    let app = test_app(config);

    get(&app, "/ping").await;
    get(&app, "/ping").await;

    // 等待两次首发ping落地
    tokio::time::sleep(Duration::from_millis(300)).await;
    mock.assert_async().await;

    // 两次start之后仍然只有一个定时任务：一次stop即回到inactive
    let (_, body) = get(&app, "/stop-ping").await;
    assert_eq!(body, "Pinging stopped.");
    let (_, body) = get(&app, "/ping-status").await;
    assert!(body.contains("inactive"));
}

#[tokio::test]
async fn test_ping_failure_does_not_affect_control_surface() {
    // 目标不可达，出站ping只会在日志中体现失败
    let config = PingConfig {
        target_url: "http://127.0.0.1:9".to_string(),
        interval: Duration::from_secs(600),
        timeout: Duration::from_secs(1),
    };
    let app = test_app(config);

    let (status, body) = get(&app, "/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Initial ping sent"));

    tokio::time::sleep(Duration::from_millis(100)).await;

    let (status, body) = get(&app, "/ping-status").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("Pinging is active"));
}
