//! Answer routes.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use quorum_core::QuestionId;

use crate::error::Result;
use crate::models::Answer;
use crate::services::ForumService;
use crate::state::AppState;

/// Query filter for the answers listing.
///
/// The foreign-key parameter historically went by three names; all are
/// accepted and normalized to the canonical one, checked in canonical-name
/// order.
#[derive(Debug, Default, Deserialize)]
pub struct AnswersQuery {
    #[serde(rename = "questionId")]
    question_id: Option<String>,
    qid: Option<String>,
    #[serde(rename = "question_id")]
    question_id_snake: Option<String>,
}

impl AnswersQuery {
    /// The question filter, if any alias was supplied with a non-blank value.
    fn target(&self) -> Option<QuestionId> {
        [&self.question_id, &self.qid, &self.question_id_snake]
            .into_iter()
            .flatten()
            .map(|raw| raw.trim())
            .find(|raw| !raw.is_empty())
            .map(QuestionId::from)
    }
}

/// List answers, filtered by question when a filter parameter is given.
///
/// `GET /answers?questionId=...` (aliases `qid`, `question_id`)
///
/// # Errors
///
/// Returns `AppError::Store` on storage failure.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<AnswersQuery>,
) -> Result<Json<Vec<Answer>>> {
    let forum = ForumService::new(state.store());

    let answers = match query.target() {
        Some(question_id) => forum.answers_for_question(&question_id).await?,
        None => forum.list_answers().await?,
    };

    Ok(Json(answers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_prefers_canonical_name() {
        let query = AnswersQuery {
            question_id: Some("q-canonical".to_string()),
            qid: Some("q-legacy".to_string()),
            question_id_snake: None,
        };
        assert_eq!(query.target(), Some(QuestionId::from("q-canonical")));
    }

    #[test]
    fn test_target_accepts_each_alias() {
        let query = AnswersQuery {
            qid: Some("q-1".to_string()),
            ..AnswersQuery::default()
        };
        assert_eq!(query.target(), Some(QuestionId::from("q-1")));

        let query = AnswersQuery {
            question_id_snake: Some("q-2".to_string()),
            ..AnswersQuery::default()
        };
        assert_eq!(query.target(), Some(QuestionId::from("q-2")));
    }

    #[test]
    fn test_target_trims_whitespace() {
        let query = AnswersQuery {
            question_id: Some("  q-3  ".to_string()),
            ..AnswersQuery::default()
        };
        assert_eq!(query.target(), Some(QuestionId::from("q-3")));
    }

    #[test]
    fn test_blank_filter_means_no_filter() {
        let query = AnswersQuery {
            question_id: Some("   ".to_string()),
            ..AnswersQuery::default()
        };
        assert_eq!(query.target(), None);
        assert_eq!(AnswersQuery::default().target(), None);
    }
}
