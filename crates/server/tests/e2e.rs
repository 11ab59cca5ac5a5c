use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::library::LibraryService;
use service::storage::memory::InMemorySongRepository;

struct TestApp {
    base_url: String,
}

/// Serve the router on an ephemeral port against the in-memory repository,
/// so the suite runs without a database.
async fn start_server() -> anyhow::Result<TestApp> {
    let repo = Arc::new(InMemorySongRepository::new());
    let state = ServerState { library: Arc::new(LibraryService::new(repo)) };
    let app: Router = routes::build_router(state, CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_song_crud_roundtrip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/add", app.base_url))
        .json(&json!({"squad": "Metallica", "song": "Enter Sandman", "text": "line1\nline2"}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let id = res.json::<serde_json::Value>().await?["id"].as_i64().unwrap();

    let res = c.get(format!("{}/text/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let lines = res.json::<Vec<String>>().await?;
    assert_eq!(lines, vec!["line1", "line2"]);

    // full replace
    let res = c
        .patch(format!("{}/update/{}", app.base_url, id))
        .json(&json!({"squad": "Metallica", "song": "Nothing Else Matters", "text": "so close no matter how far"}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::NO_CONTENT);

    let res = c.get(format!("{}/text/{}", app.base_url, id)).send().await?;
    let lines = res.json::<Vec<String>>().await?;
    assert_eq!(lines, vec!["so close no matter how far"]);

    let res = c.delete(format!("{}/delete/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::NO_CONTENT);

    // deleting again reports the missing record
    let res = c.delete(format!("{}/delete/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "song not found");
    Ok(())
}

#[tokio::test]
async fn e2e_validation_errors() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/add", app.base_url))
        .json(&json!({"squad": "", "song": "x", "text": ""}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "invalid squad");

    let res = c.get(format!("{}/text/abc", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "invalid id");

    let res = c
        .patch(format!("{}/update/424242", app.base_url))
        .json(&json!({"squad": "a", "song": "b", "text": ""}))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_library_pagination() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    for i in 1..=5 {
        let res = c
            .post(format!("{}/add", app.base_url))
            .json(&json!({"squad": "Squad", "song": format!("Song {}", i), "text": ""}))
            .send()
            .await?;
        assert_eq!(res.status(), reqwest::StatusCode::OK);
    }

    let res = c
        .get(format!("{}/all?pagination=2&order=ASC&field=id", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let pages = res.json::<Vec<Vec<serde_json::Value>>>().await?;
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].len(), 2);
    assert_eq!(pages[1].len(), 2);
    assert_eq!(pages[2].len(), 1);
    let flat: Vec<i64> = pages.iter().flatten().map(|s| s["id"].as_i64().unwrap()).collect();
    let mut sorted = flat.clone();
    sorted.sort_unstable();
    assert_eq!(flat, sorted);

    // whitelist is exact and case-sensitive
    let res = c
        .get(format!("{}/all?pagination=2&order=asc&field=id", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);

    let res = c
        .get(format!("{}/all?pagination=2&order=ASC&field=title", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);

    // zero chunk is rejected instead of looping forever
    let res = c
        .get(format!("{}/all?pagination=0&order=ASC&field=id", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    Ok(())
}
