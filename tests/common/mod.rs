use album_catalog::core::AppState;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;

/// Crea un AppState per i test, con lo store in memoria vuoto
pub fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::in_memory())
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = album_catalog::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Body di creazione/modifica di un album
pub fn album_body(title: &str, artist: &str, year: i32, price: f64) -> Value {
    json!({
        "title": title,
        "artist": artist,
        "year": year,
        "price": price
    })
}

/// Crea un album tramite POST /albums e ritorna l'id assegnato
#[allow(dead_code)]
pub async fn create_album(server: &TestServer, title: &str, artist: &str, year: i32, price: f64) -> String {
    let response = server
        .post("/albums")
        .json(&album_body(title, artist, year, price))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["album"]["id"]
        .as_str()
        .expect("created album must carry an id")
        .to_string()
}
