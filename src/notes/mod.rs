//! Notes system — append-only notes persisted as one JSON array on disk
//!
//! The container file is human-readable and rewritten in full on every
//! append, so it can live on a bind mount and be inspected with any editor.
//! All mutation goes through [`NoteStore`], which serializes writers.

pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use store::{NoteStore, StoreError};

/// A single user-submitted text record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Millisecond timestamp at creation, bumped to stay strictly increasing
    pub id: i64,
    pub text: String,
    pub created: DateTime<Utc>,
}
