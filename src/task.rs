// Task model: the single record exchanged with the task service. A plain
// data holder; everything beyond the JSON encoding lives in the calling
// layers.

use serde::{Deserialize, Serialize};

/// One to-do item as the task service stores it. Field names and order
/// mirror the service's JSON schema exactly.
///
/// `id`, `created_ts` and `due_ts` are assigned by the server; a create
/// payload carries them at their zero values. Every field falls back to its
/// zero value when missing from a response, so a sparse server payload still
/// decodes instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub name: String,
    /// Free-form due date text, passed through as the caller typed it.
    pub due: String,
    pub created_ts: i64,
    pub due_ts: i64,
    pub priority: i32,
    /// Caller-given order is preserved; duplicates are allowed.
    pub topics: Vec<String>,
}
