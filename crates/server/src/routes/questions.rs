//! Question routes.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use quorum_core::{AnswerId, QuestionId};

use crate::error::Result;
use crate::middleware::CallerIdentity;
use crate::models::{Answer, QuestionDetail, QuestionSummary};
use crate::services::ForumService;
use crate::state::AppState;

/// Request body for creating a question.
///
/// Presence checks happen in the domain layer so that a missing field is a
/// 400 validation error, not a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Response for a created question.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionResponse {
    pub status: &'static str,
    pub question_id: QuestionId,
}

/// Request body for creating an answer.
#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    #[serde(default)]
    pub body: String,
}

/// Response for a created answer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnswerResponse {
    pub answer_id: AnswerId,
}

/// List all questions with answer counts, newest first.
///
/// `GET /questions` and `GET /search` (query parameters, if any, are
/// accepted and ignored).
///
/// # Errors
///
/// Returns `AppError::Store` on storage failure.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<QuestionSummary>>> {
    let listed = ForumService::new(state.store()).list_questions().await?;
    Ok(Json(listed))
}

/// Create a question.
///
/// `POST /questions`
///
/// # Errors
///
/// Returns `AppError::Validation` for a blank title, `AppError::Store` on
/// storage failure.
pub async fn create(
    State(state): State<AppState>,
    CallerIdentity(author): CallerIdentity,
    Json(request): Json<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>> {
    let question_id = ForumService::new(state.store())
        .create_question(&request.title, &request.body, &author)
        .await?;

    Ok(Json(CreateQuestionResponse {
        status: "ok",
        question_id,
    }))
}

/// Question detail with embedded answers.
///
/// `GET /questions/{qid}`
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown question, `AppError::Store`
/// on storage failure.
pub async fn show(
    State(state): State<AppState>,
    Path(qid): Path<String>,
) -> Result<Json<QuestionDetail>> {
    let detail = ForumService::new(state.store())
        .question_detail(&QuestionId::from(qid))
        .await?;
    Ok(Json(detail))
}

/// Answers for one question.
///
/// `GET /questions/{qid}/answers`
///
/// # Errors
///
/// Returns `AppError::Store` on storage failure.
pub async fn list_answers(
    State(state): State<AppState>,
    Path(qid): Path<String>,
) -> Result<Json<Vec<Answer>>> {
    let answers = ForumService::new(state.store())
        .answers_for_question(&QuestionId::from(qid))
        .await?;
    Ok(Json(answers))
}

/// Create an answer to an existing question.
///
/// `POST /questions/{qid}/answers`
///
/// # Errors
///
/// Returns `AppError::Validation` for an empty body, `AppError::NotFound`
/// if the question does not exist, `AppError::Store` on storage failure.
pub async fn create_answer(
    State(state): State<AppState>,
    Path(qid): Path<String>,
    CallerIdentity(author): CallerIdentity,
    Json(request): Json<CreateAnswerRequest>,
) -> Result<Json<CreateAnswerResponse>> {
    let answer_id = ForumService::new(state.store())
        .create_answer(&QuestionId::from(qid), &request.body, &author)
        .await?;

    Ok(Json(CreateAnswerResponse { answer_id }))
}
