//! A stub words service bound to an ephemeral local port.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use wordsyn::config::ClientConfig;

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "statusCode": status.as_u16(), "error": message })),
    )
        .into_response()
}

async fn add_word(Json(body): Json<Value>) -> Response {
    if body["word"] == "dog" {
        return error(StatusCode::CONFLICT, "Word already exists");
    }
    (
        StatusCode::CREATED,
        Json(json!({ "word": body["word"], "synonym": body["synonym"] })),
    )
        .into_response()
}

async fn add_synonym(Path(word): Path<String>, Json(body): Json<Value>) -> Response {
    if body["synonym"] == word {
        return error(StatusCode::BAD_REQUEST, "A word cannot be its own synonym");
    }
    (StatusCode::CREATED, Json(json!({ "id": 3 }))).into_response()
}

async fn get_synonyms(Path(word): Path<String>) -> Response {
    match word.as_str() {
        "cat" => Json(json!({ "word": "cat", "synonyms": ["feline", "kitty"] })).into_response(),
        "broken" => error(StatusCode::INTERNAL_SERVER_ERROR, "not found"),
        "garbled" => (StatusCode::OK, "this is not json").into_response(),
        _ => error(StatusCode::NOT_FOUND, "not found"),
    }
}

async fn get_words(Path(synonym): Path<String>) -> Response {
    match synonym.as_str() {
        "ice cream" => {
            Json(json!({ "synonym": synonym, "words": ["dessert", "gelato"] })).into_response()
        }
        "plain" => (StatusCode::BAD_GATEWAY, "upstream down").into_response(),
        "silent" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        _ => error(StatusCode::NOT_FOUND, "not found"),
    }
}

/// Start the stub service and return a config pointing at it.
pub async fn spawn_service() -> ClientConfig {
    let app = Router::new()
        .route("/word", post(add_word))
        .route("/synonym/{word}", post(add_synonym))
        .route("/synonyms/{word}", get(get_synonyms))
        .route("/words/{synonym}", get(get_words));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ClientConfig::new(&format!("http://{addr}")).unwrap()
}

/// A config pointing at a port nothing listens on.
pub async fn dead_service() -> ClientConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    ClientConfig::new(&format!("http://{addr}")).unwrap()
}
