//! HTTP handlers for the mock Bookstore API
//!
//! Bodies are validated before row existence is checked, so an invalid
//! update payload is a 400 even when the target id does not exist.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::state::{validate_author, validate_book, ApiState, Rejection};

type Store = Mutex<BTreeMap<i64, Value>>;
type Validator = fn(&Value) -> Result<i64, Rejection>;

pub async fn list_authors(State(state): State<Arc<ApiState>>) -> Response {
    list_in(&state.authors).await
}

pub async fn get_author(State(state): State<Arc<ApiState>>, Path(id): Path<String>) -> Response {
    get_in(&state.authors, &id).await
}

pub async fn create_author(State(state): State<Arc<ApiState>>, body: String) -> Response {
    create_in(&state.authors, validate_author, &body).await
}

pub async fn update_author(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    body: String,
) -> Response {
    update_in(&state.authors, validate_author, &id, &body).await
}

pub async fn delete_author(State(state): State<Arc<ApiState>>, Path(id): Path<String>) -> Response {
    delete_in(&state.authors, &id).await
}

pub async fn list_books(State(state): State<Arc<ApiState>>) -> Response {
    list_in(&state.books).await
}

pub async fn get_book(State(state): State<Arc<ApiState>>, Path(id): Path<String>) -> Response {
    get_in(&state.books, &id).await
}

pub async fn create_book(State(state): State<Arc<ApiState>>, body: String) -> Response {
    create_in(&state.books, validate_book, &body).await
}

pub async fn update_book(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    body: String,
) -> Response {
    update_in(&state.books, validate_book, &id, &body).await
}

pub async fn delete_book(State(state): State<Arc<ApiState>>, Path(id): Path<String>) -> Response {
    delete_in(&state.books, &id).await
}

async fn list_in(store: &Store) -> Response {
    let rows = store.lock().await;
    let items: Vec<Value> = rows.values().cloned().collect();
    (StatusCode::OK, Json(Value::Array(items))).into_response()
}

async fn get_in(store: &Store, raw_id: &str) -> Response {
    let id = match parse_id(raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let rows = store.lock().await;
    match rows.get(&id) {
        Some(row) => (StatusCode::OK, Json(row.clone())).into_response(),
        None => error_body(StatusCode::NOT_FOUND, "no row with that id"),
    }
}

async fn create_in(store: &Store, validate: Validator, body: &str) -> Response {
    let value = match parse_body(body) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let id = match validate(&value) {
        Ok(id) => id,
        Err(rejection) => return rejection_response(rejection),
    };

    let mut rows = store.lock().await;
    if rows.contains_key(&id) {
        return error_body(StatusCode::CONFLICT, "id already exists");
    }
    rows.insert(id, value.clone());

    (StatusCode::CREATED, Json(value)).into_response()
}

async fn update_in(store: &Store, validate: Validator, raw_id: &str, body: &str) -> Response {
    let value = match parse_body(body) {
        Ok(value) => value,
        Err(response) => return response,
    };
    if let Err(rejection) = validate(&value) {
        return rejection_response(rejection);
    }

    let id = match parse_id(raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let mut rows = store.lock().await;
    match rows.get_mut(&id) {
        Some(row) => {
            *row = value.clone();
            (StatusCode::OK, Json(value)).into_response()
        }
        None => error_body(StatusCode::NOT_FOUND, "no row with that id"),
    }
}

async fn delete_in(store: &Store, raw_id: &str) -> Response {
    let id = match parse_id(raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let mut rows = store.lock().await;
    match rows.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => error_body(StatusCode::NOT_FOUND, "no row with that id"),
    }
}

fn parse_id(raw: &str) -> Result<i64, Response> {
    raw.parse::<i64>()
        .map_err(|_| error_body(StatusCode::BAD_REQUEST, "id must be an integer"))
}

fn parse_body(body: &str) -> Result<Value, Response> {
    serde_json::from_str(body)
        .map_err(|_| error_body(StatusCode::BAD_REQUEST, "malformed JSON body"))
}

fn rejection_response(rejection: Rejection) -> Response {
    match rejection {
        Rejection::Invalid(message) => error_body(StatusCode::BAD_REQUEST, &message),
        Rejection::WrongType(message) => error_body(StatusCode::UNPROCESSABLE_ENTITY, &message),
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
