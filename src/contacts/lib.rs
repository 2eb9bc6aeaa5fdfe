//! # Contacts
//!
//! An in-memory contacts directory exposed over HTTP, with a companion
//! command-line client. This crate is a library first; the two binaries
//! (`contacts-server`, `contacts`) are thin wiring around it.
//!
//! ## Layering
//!
//! ```text
//! CLI (cli/, wired by the client binary)
//!   │  parses arguments, prints result lines
//!   ▼
//! Client facade (client/)
//!   │  ContactsClient trait; HTTP binding or direct in-process binding
//!   ▼
//! API layer (server.rs)
//!   │  axum routes, JSON mapping, audit trail, status-code contract
//!   ▼
//! Storage (store/)
//!   │  ContactDatabase trait, in-memory implementation
//!   ▼
//! Record (model.rs)
//!      Contact value type, validation, anonymized projection
//! ```
//!
//! From the facade inward, code takes regular arguments, returns regular
//! `Result` types, and never touches stdout/stderr or the process exit
//! code; only the binaries do terminal I/O.
//!
//! ## Semantics worth knowing
//!
//! - Ids are assigned server-side, starting at 1 and strictly increasing.
//! - Not-found is a first-class outcome (`false`/`None`/HTTP 404), never
//!   an error.
//! - Every handled API request appends one anonymized line to the audit
//!   log; raw names, emails, and search terms never reach it.
//! - The store hands out copies; mutating a returned contact never
//!   changes stored state.
//!
//! ## Module Overview
//!
//! - [`model`]: the `Contact` value type
//! - [`store`]: storage abstraction and the in-memory implementation
//! - [`fixtures`]: the built-in seed table
//! - [`audit`]: append-only audit log sink
//! - [`server`]: the HTTP API layer
//! - [`client`]: the client facade and its two bindings
//! - [`cli`]: argument surface and command handlers for the client binary
//! - [`error`]: error types

pub mod audit;
pub mod cli;
pub mod client;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod server;
pub mod store;
