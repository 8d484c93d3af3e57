//! End-to-end tests for the counter server over real HTTP.
//!
//! Each test binds an ephemeral port, serves the real router, and talks to it
//! with reqwest. The counter file lives in a per-test temporary directory.

use tempfile::TempDir;

use vestibule::config::CounterConfig;
use vestibule::routes::counter_router;
use vestibule::state::CounterState;
use vestibule::store::FileCounterStore;
use vestibule::templates::init_templates;

/// Start a counter server on an ephemeral port.
///
/// Returns the base URL and the temp dir holding the counter file; the dir
/// must stay alive for the duration of the test.
async fn spawn_counter_app() -> (String, TempDir) {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("counter.txt");

    let config = CounterConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_file: data_file.clone(),
    };
    let store = FileCounterStore::open(&data_file).unwrap();
    let tera = init_templates().unwrap();
    let app = counter_router(CounterState::new(config, tera, store));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), dir)
}

#[tokio::test]
async fn sequential_visits_accumulate() {
    let (base, dir) = spawn_counter_app().await;
    let client = reqwest::Client::new();

    for expected in 1..=5u64 {
        let response = client.get(&base).send().await.unwrap();
        assert_eq!(response.status(), 200);

        let body = response.text().await.unwrap();
        assert!(
            body.contains(&format!("Visits: {}", expected)),
            "expected count {} in page, got: {}",
            expected,
            body
        );
    }

    let persisted = std::fs::read_to_string(dir.path().join("counter.txt")).unwrap();
    assert_eq!(persisted, "5");
}

#[tokio::test]
async fn unparsable_counter_file_restarts_from_one() {
    let (base, dir) = spawn_counter_app().await;
    std::fs::write(dir.path().join("counter.txt"), "definitely not a number").unwrap();

    let body = reqwest::get(&base).await.unwrap().text().await.unwrap();
    assert!(body.contains("Visits: 1"));

    let persisted = std::fs::read_to_string(dir.path().join("counter.txt")).unwrap();
    assert_eq!(persisted, "1");
}

#[tokio::test]
async fn unknown_paths_return_404() {
    let (base, _dir) = spawn_counter_app().await;

    let response = reqwest::get(format!("{}/no-such-page", base)).await.unwrap();
    assert_eq!(response.status(), 404);

    // A 404 must not touch the counter
    let body = reqwest::get(&base).await.unwrap().text().await.unwrap();
    assert!(body.contains("Visits: 1"));
}

#[tokio::test]
async fn healthz_always_returns_ok() {
    let (base, dir) = spawn_counter_app().await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{}/healthz", base)).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");

    // Method does not matter, and a corrupt counter file does not either
    std::fs::write(dir.path().join("counter.txt"), "garbage").unwrap();
    let response = client
        .post(format!("{}/healthz", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn counter_page_accepts_any_method() {
    let (base, dir) = spawn_counter_app().await;
    let client = reqwest::Client::new();

    let response = client.post(&base).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("Visits: 1"));

    let persisted = std::fs::read_to_string(dir.path().join("counter.txt")).unwrap();
    assert_eq!(persisted, "1");
}

#[tokio::test]
async fn counter_page_is_never_cached() {
    let (base, _dir) = spawn_counter_app().await;

    let response = reqwest::get(&base).await.unwrap();
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "no-store"
    );
}
