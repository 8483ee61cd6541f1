//! The `faceValidity` collection
//!
//! Insert-only store of submission documents. Each row holds the JSON
//! document exactly as received plus the server-assigned `submittedAt`.
//! There is no update or delete path.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::time::to_rfc3339;
use crate::{Error, Result};

/// Collection name inside the `Forms-data` database
pub const SUBMISSIONS_COLLECTION: &str = "faceValidity";

/// Key the server timestamp is stored under
pub const SUBMITTED_AT_KEY: &str = "submittedAt";

/// A persisted submission document
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSubmission {
    pub id: Uuid,
    pub document: Value,
    pub submitted_at: DateTime<Utc>,
}

/// Store `body` with `submittedAt` attached and return the new identifier
///
/// A client-supplied `submittedAt` is overwritten by the server timestamp.
pub async fn insert_submission(
    pool: &SqlitePool,
    mut body: Map<String, Value>,
    submitted_at: DateTime<Utc>,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let timestamp = to_rfc3339(&submitted_at);
    body.insert(SUBMITTED_AT_KEY.to_string(), Value::String(timestamp.clone()));
    let document = serde_json::to_string(&Value::Object(body))?;

    let sql = format!(
        "INSERT INTO {} (id, document, submitted_at) VALUES (?, ?, ?)",
        SUBMISSIONS_COLLECTION
    );
    sqlx::query(&sql)
        .bind(id.to_string())
        .bind(document)
        .bind(timestamp)
        .execute(pool)
        .await?;

    Ok(id)
}

/// Fetch one submission by identifier
pub async fn get_submission(pool: &SqlitePool, id: Uuid) -> Result<Option<StoredSubmission>> {
    let sql = format!(
        "SELECT id, document, submitted_at FROM {} WHERE id = ?",
        SUBMISSIONS_COLLECTION
    );
    let row = sqlx::query_as::<_, (String, String, String)>(&sql)
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    row.map(|(id, document, submitted_at)| -> Result<StoredSubmission> {
        Ok(StoredSubmission {
            id: Uuid::parse_str(&id)
                .map_err(|e| Error::Internal(format!("Corrupt submission id {}: {}", id, e)))?,
            document: serde_json::from_str(&document)?,
            submitted_at: DateTime::parse_from_rfc3339(&submitted_at)
                .map_err(|e| Error::Internal(format!("Corrupt timestamp {}: {}", submitted_at, e)))?
                .with_timezone(&Utc),
        })
    })
    .transpose()
}

/// Number of stored submissions
pub async fn count_submissions(pool: &SqlitePool) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", SUBMISSIONS_COLLECTION);
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(pool).await?;
    Ok(count)
}
