use httpmock::prelude::*;
use image::{ImageFormat, RgbImage};
use pin_curator::config::ApiConfig;
use pin_curator::{
    CuratorConfig, CuratorError, CurationEngine, HttpImageInspector, PinterestClient, RunOutcome,
    Selector,
};
use std::io::Cursor;

fn png(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn config_for(server: &MockServer) -> CuratorConfig {
    CuratorConfig {
        api: ApiConfig {
            base_url: server.base_url(),
            access_token: Some("integration-token".to_string()),
            board_id: Some("home-board".to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn engine_for(
    config: CuratorConfig,
) -> CurationEngine<PinterestClient, HttpImageInspector, PinterestClient> {
    let client = PinterestClient::new(config.api.clone()).unwrap();
    let inspector = HttpImageInspector::new(config.api.timeout_seconds).unwrap();
    CurationEngine::new(
        client.clone(),
        Selector::new(config.criteria, inspector),
        client,
    )
}

async fn serve_image(server: &MockServer, path: &str, width: u32, height: u32) {
    let body = png(width, height);
    server
        .mock_async(move |when, then| {
            when.method(GET).path(path);
            then.status(200).header("Content-Type", "image/png").body(body);
        })
        .await;
}

#[tokio::test]
async fn test_end_to_end_publishes_best_pin() {
    let server = MockServer::start_async().await;

    serve_image(&server, "/img/tall.png", 800, 1000).await;
    serve_image(&server, "/img/taller.png", 700, 1000).await;
    serve_image(&server, "/img/wide.png", 1000, 800).await;

    let feed_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/pins")
                .header("authorization", "Bearer integration-token");
            then.status(200).json_body(serde_json::json!({
                "items": [
                    {"title": "Modern Decor Idea", "description": "", "saves": 700,
                     "link": "https://etsy.com/a",
                     "image": {"original": {"url": server.url("/img/tall.png")}}},
                    {"title": "Interior Refresh", "description": "Soft tones", "saves": 900,
                     "link": "https://www.wayfair.com/b",
                     "image": {"original": {"url": server.url("/img/taller.png")}}},
                    {"title": "Modern Decor", "saves": 5000,
                     "link": "https://etsy.com/c",
                     "image": {"original": {"url": server.url("/img/wide.png")}}},
                    {"title": "Cool House", "saves": 10000,
                     "link": "https://etsy.com/d",
                     "image": {"original": {"url": server.url("/img/tall.png")}}},
                    {"title": "Furniture Deals", "saves": 8000,
                     "link": "https://etsy.com/e",
                     "image": {"original": {"url": server.url("/img/unreachable.png")}}}
                ]
            }));
        })
        .await;

    let publish_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/boards/home-board/pins")
                .header("authorization", "Bearer integration-token")
                .json_body(serde_json::json!({
                    "link": "https://www.wayfair.com/b",
                    "title": "Interior Refresh",
                    "description": "Soft tones",
                    "image_url": server.url("/img/taller.png")
                }));
            then.status(201).json_body(serde_json::json!({"id": "pin-999"}));
        })
        .await;

    let outcome = engine_for(config_for(&server)).run().await.unwrap();

    feed_mock.assert_async().await;
    publish_mock.assert_async().await;
    assert_eq!(
        outcome,
        RunOutcome::Published {
            title: "Interior Refresh".to_string(),
            pin_id: Some("pin-999".to_string()),
        }
    );
}

#[tokio::test]
async fn test_empty_feed_ends_without_publishing() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/pins");
            then.status(200).json_body(serde_json::json!({"items": []}));
        })
        .await;
    let publish_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/boards/home-board/pins");
            then.status(201);
        })
        .await;

    let outcome = engine_for(config_for(&server)).run().await.unwrap();

    assert_eq!(outcome, RunOutcome::NoPinsFound);
    publish_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_dry_run_selects_but_does_not_publish() {
    let server = MockServer::start_async().await;
    serve_image(&server, "/img/tall.png", 800, 1000).await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/pins");
            then.status(200).json_body(serde_json::json!({
                "items": [
                    {"title": "Modern Decor Idea", "saves": 600, "link": "https://etsy.com/x",
                     "image": {"original": {"url": server.url("/img/tall.png")}}}
                ]
            }));
        })
        .await;
    let publish_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/boards/home-board/pins");
            then.status(201);
        })
        .await;

    let outcome = engine_for(config_for(&server))
        .with_dry_run(true)
        .run()
        .await
        .unwrap();

    assert_eq!(
        outcome,
        RunOutcome::DryRun {
            title: "Modern Decor Idea".to_string()
        }
    );
    publish_mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_publish_rejection_fails_the_run() {
    let server = MockServer::start_async().await;
    serve_image(&server, "/img/tall.png", 800, 1000).await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/pins");
            then.status(200).json_body(serde_json::json!({
                "items": [
                    {"title": "Modern Decor Idea", "saves": 600, "link": "https://etsy.com/x",
                     "image": {"original": {"url": server.url("/img/tall.png")}}}
                ]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/boards/home-board/pins");
            then.status(403).body("board not writable");
        })
        .await;

    let err = engine_for(config_for(&server)).run().await.unwrap_err();

    match err {
        CuratorError::HttpStatusError { status, body, .. } => {
            assert_eq!(status, 403);
            assert_eq!(body, "board not writable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_feed_auth_failure_fails_the_run() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pins");
            then.status(401).body("missing token");
        })
        .await;

    let mut config = config_for(&server);
    config.api.access_token = None;

    let err = engine_for(config).run().await.unwrap_err();
    assert!(err.recovery_suggestion().contains("ACCESS_TOKEN"));
}
