//! # API layer
//!
//! Stateless axum handlers over the [`ContactDatabase`] capability, one
//! route per store operation. JSON bodies use the wire field names
//! (`id`, `name`, `lastName`, `email`).
//!
//! Error surfacing is deliberately generic: malformed id segments,
//! malformed JSON bodies, and validation failures all map to a 500 with
//! the error message as the plain-text body. Not-found is never an error;
//! it is an empty 404. Both choices preserve the contract of the system
//! this replaces.
//!
//! Handlers parse the id segment and the body by hand (`Path<String>` plus
//! raw bytes) so that parse failures take the 500 path instead of axum's
//! built-in 400-class rejections.

use crate::audit::AuditLog;
use crate::error::{ContactsError, Result};
use crate::model::{Contact, ANONYMIZED};
use crate::store::ContactDatabase;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

type Db = Box<dyn ContactDatabase + Send>;

pub struct AppState {
    db: Mutex<Db>,
    audit: AuditLog,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// All store access is serialized behind one mutex: the store's
    /// compound operations are not atomic on their own.
    pub fn shared(db: Db, audit: AuditLog) -> SharedState {
        Arc::new(Self {
            db: Mutex::new(db),
            audit,
        })
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/contacts", get(find_all).post(create))
        .route(
            "/contacts/:id",
            get(find_by_id).put(update_by_id).delete(delete_by_id),
        )
        .route("/contacts/search/email/:email", get(search_by_email))
        .route(
            "/contacts/search/lastNamePart/:part",
            get(search_by_last_name_part),
        )
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: SharedState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("contacts API listening on http://{addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

struct ApiError(ContactsError);

impl From<ContactsError> for ApiError {
    fn from(err: ContactsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::debug!("request failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

fn db(state: &AppState) -> MutexGuard<'_, Db> {
    match state.db.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn parse_id(raw: &str) -> std::result::Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError(ContactsError::InvalidId(raw.to_string())))
}

fn decode_contact(body: &Bytes) -> std::result::Result<Contact, ApiError> {
    let contact: Contact = serde_json::from_slice(body).map_err(ContactsError::from)?;
    Ok(contact)
}

async fn find_all(State(state): State<SharedState>) -> Json<Vec<Contact>> {
    state.audit.record("findAll", Value::Null);
    Json(db(&state).find_all())
}

async fn create(
    State(state): State<SharedState>,
    body: Bytes,
) -> std::result::Result<Json<Contact>, ApiError> {
    let contact = decode_contact(&body)?;
    contact.validate()?;

    state.audit.record(
        "create",
        serde_json::to_value(contact.anonymized()).unwrap_or_default(),
    );
    Ok(Json(db(&state).insert_with_new_id(contact)))
}

async fn find_by_id(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> std::result::Result<Response, ApiError> {
    let id = parse_id(&id)?;
    state.audit.record("findById", json!(id));

    match db(&state).find_by_id(id) {
        Some(contact) => Ok(Json(contact).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

async fn update_by_id(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> std::result::Result<StatusCode, ApiError> {
    // The path id only has to be well-formed; the record id travels in the body
    parse_id(&id)?;
    let contact = decode_contact(&body)?;
    contact.validate()?;

    state.audit.record(
        "updateById",
        serde_json::to_value(contact.anonymized()).unwrap_or_default(),
    );
    if db(&state).update(contact) {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

async fn delete_by_id(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> std::result::Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.audit.record("deleteById", json!(id));

    let target = Contact {
        id,
        ..Contact::default()
    };
    if db(&state).delete(&target) {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

async fn search_by_email(
    State(state): State<SharedState>,
    Path(email): Path<String>,
) -> Json<Vec<Contact>> {
    // Never the raw search term; emails do not belong in the audit trail
    state.audit.record("searchByEmail", json!(ANONYMIZED));
    Json(db(&state).find_by_email(&email))
}

async fn search_by_last_name_part(
    State(state): State<SharedState>,
    Path(part): Path<String>,
) -> Json<Vec<Contact>> {
    state.audit.record("searchByLastNamePart", json!(ANONYMIZED));
    Json(db(&state).find_by_last_name_contains(&part))
}
