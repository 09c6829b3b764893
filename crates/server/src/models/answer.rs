//! Answer records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quorum_core::{AnswerId, QuestionId};

/// A persisted answer.
///
/// The foreign key is canonically `questionId`. Documents written by older
/// variants of the service used `qid` or `question_id` instead; those aliases
/// are migrated to the canonical name at read time, so the rest of the code
/// never branches on the field name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Unique, generated identifier (`a-` prefixed).
    pub answer_id: AnswerId,
    /// The question this answers.
    #[serde(alias = "qid", alias = "question_id")]
    pub question_id: QuestionId,
    /// Non-empty answer text.
    pub body: String,
    /// Caller identity at creation time, `"anon"` when absent.
    pub author: String,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}
