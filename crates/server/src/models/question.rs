//! Question records and their read-side projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quorum_core::QuestionId;

use super::Answer;

/// A persisted question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique, generated identifier (`q-` prefixed).
    pub question_id: QuestionId,
    /// Non-blank title.
    pub title: String,
    /// Free-form body, may be empty.
    #[serde(default)]
    pub body: String,
    /// Caller identity at creation time, `"anon"` when absent.
    pub author: String,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Placeholder; no endpoint populates this.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Placeholder; no endpoint populates this.
    #[serde(default)]
    pub locations: Vec<String>,
}

/// A question annotated with its answer count, as returned by the listing.
///
/// The count is recomputed from the answers collection on every read; it is
/// never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    #[serde(flatten)]
    pub question: Question,
    pub answers_count: usize,
}

/// A question with its answers embedded, as returned by the detail route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetail {
    #[serde(flatten)]
    pub question: Question,
    pub answers: Vec<Answer>,
}
