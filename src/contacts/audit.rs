//! Append-only audit trail for API operations.
//!
//! One JSON object per line, prefixed with an RFC 3339 UTC timestamp.
//! Payloads follow the anonymization policy: ids are logged in plaintext,
//! contact fields and search terms never are (callers pass anonymized
//! projections or the redaction marker).

use crate::error::Result;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

#[derive(Serialize)]
struct AuditEntry<'a> {
    op: &'a str,
    data: Value,
}

pub struct AuditLog {
    file: Mutex<File>,
}

impl AuditLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Append one line for an operation. The line is formatted up front and
    /// written with a single call, so concurrent handlers cannot interleave
    /// partial lines. Write failures are logged and swallowed; auditing
    /// must not fail a request the store already handled.
    pub fn record(&self, op: &str, data: Value) {
        let entry = AuditEntry { op, data };
        let json = match serde_json::to_string(&entry) {
            Ok(json) => json,
            Err(err) => {
                log::error!("audit entry for {op} not serializable: {err}");
                return;
            }
        };
        let line = format!("{} {}\n", Utc::now().to_rfc3339(), json);

        let mut file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = file.write_all(line.as_bytes()) {
            log::error!("audit write for {op} failed: {err}");
        }
    }
}
