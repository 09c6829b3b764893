//! Question and answer operations.

use std::collections::HashMap;

use chrono::Utc;

use quorum_core::{AnswerId, QuestionId};

use crate::error::{AppError, Result};
use crate::models::{Answer, Question, QuestionDetail, QuestionSummary};
use crate::store::{DocumentStore, keys};

/// Forum domain operations.
///
/// Borrows the document store; construct one per request.
pub struct ForumService<'a> {
    store: &'a DocumentStore,
}

impl<'a> ForumService<'a> {
    /// Create a new forum service.
    #[must_use]
    pub const fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// List all questions, newest first, each annotated with its answer
    /// count. The count is computed from a single pass over the answers
    /// collection; nothing is paginated.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if either collection cannot be loaded.
    pub async fn list_questions(&self) -> Result<Vec<QuestionSummary>> {
        let questions: Vec<Question> = self.store.load(keys::QUESTIONS).await?;
        let answers: Vec<Answer> = self.store.load(keys::ANSWERS).await?;

        let mut counts: HashMap<&QuestionId, usize> = HashMap::new();
        for answer in &answers {
            *counts.entry(&answer.question_id).or_insert(0) += 1;
        }

        // Reverse insertion order: the persisted array is append-only
        Ok(questions
            .iter()
            .rev()
            .map(|question| QuestionSummary {
                answers_count: counts.get(&question.question_id).copied().unwrap_or(0),
                question: question.clone(),
            })
            .collect())
    }

    /// Create a question and persist the updated collection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the title is blank after trimming,
    /// `AppError::Store` on persistence failure.
    pub async fn create_question(
        &self,
        title: &str,
        body: &str,
        author: &str,
    ) -> Result<QuestionId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("title is required".to_string()));
        }

        let question = Question {
            question_id: QuestionId::generate(),
            title: title.to_owned(),
            body: body.to_owned(),
            author: author.to_owned(),
            created_at: Utc::now(),
            topics: Vec::new(),
            locations: Vec::new(),
        };
        let question_id = question.question_id.clone();

        let mut questions: Vec<Question> = self.store.load(keys::QUESTIONS).await?;
        questions.push(question);
        self.store.save(keys::QUESTIONS, &questions).await?;

        tracing::info!(question_id = %question_id, author, "question created");
        Ok(question_id)
    }

    /// Create an answer to an existing question.
    ///
    /// The target question must exist; answers never dangle.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the body is empty after trimming,
    /// `AppError::NotFound` if the question does not exist, and
    /// `AppError::Store` on persistence failure.
    pub async fn create_answer(
        &self,
        question_id: &QuestionId,
        body: &str,
        author: &str,
    ) -> Result<AnswerId> {
        let body = body.trim();
        if body.is_empty() {
            return Err(AppError::Validation("body is required".to_string()));
        }

        let questions: Vec<Question> = self.store.load(keys::QUESTIONS).await?;
        if !questions.iter().any(|q| &q.question_id == question_id) {
            return Err(AppError::NotFound(format!(
                "question {question_id} does not exist"
            )));
        }

        let answer = Answer {
            answer_id: AnswerId::generate(),
            question_id: question_id.clone(),
            body: body.to_owned(),
            author: author.to_owned(),
            created_at: Utc::now(),
        };
        let answer_id = answer.answer_id.clone();

        let mut answers: Vec<Answer> = self.store.load(keys::ANSWERS).await?;
        answers.push(answer);
        self.store.save(keys::ANSWERS, &answers).await?;

        tracing::info!(answer_id = %answer_id, question_id = %question_id, author, "answer created");
        Ok(answer_id)
    }

    /// Look up a question and attach its answers.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the question does not exist,
    /// `AppError::Store` on load failure.
    pub async fn question_detail(&self, question_id: &QuestionId) -> Result<QuestionDetail> {
        let questions: Vec<Question> = self.store.load(keys::QUESTIONS).await?;
        let question = questions
            .into_iter()
            .find(|q| &q.question_id == question_id)
            .ok_or_else(|| AppError::NotFound(format!("question {question_id} does not exist")))?;

        let answers = self.answers_for_question(question_id).await?;

        Ok(QuestionDetail { question, answers })
    }

    /// All answers for one question, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the answers collection cannot be loaded.
    pub async fn answers_for_question(&self, question_id: &QuestionId) -> Result<Vec<Answer>> {
        let answers: Vec<Answer> = self.store.load(keys::ANSWERS).await?;
        Ok(answers
            .into_iter()
            .filter(|a| &a.question_id == question_id)
            .collect())
    }

    /// The whole answers collection, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the answers collection cannot be loaded.
    pub async fn list_answers(&self) -> Result<Vec<Answer>> {
        Ok(self.store.load(keys::ANSWERS).await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;

    fn local_store(dir: &std::path::Path) -> DocumentStore {
        DocumentStore::from_config(&StorageConfig::Local {
            data_dir: dir.to_path_buf(),
        })
    }

    #[tokio::test]
    async fn test_list_questions_empty_store() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let forum = ForumService::new(&store);

        assert!(forum.list_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_question_then_list() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let forum = ForumService::new(&store);

        let id = forum
            .create_question("Hello", "World", "alice")
            .await
            .unwrap();

        let listed = forum.list_questions().await.unwrap();
        assert_eq!(listed.len(), 1);
        let first = listed.first().unwrap();
        assert_eq!(first.question.question_id, id);
        assert_eq!(first.question.title, "Hello");
        assert_eq!(first.question.author, "alice");
        assert_eq!(first.answers_count, 0);
    }

    #[tokio::test]
    async fn test_create_question_trims_title() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let forum = ForumService::new(&store);

        forum.create_question("  padded  ", "", "anon").await.unwrap();

        let listed = forum.list_questions().await.unwrap();
        assert_eq!(listed.first().unwrap().question.title, "padded");
    }

    #[tokio::test]
    async fn test_create_question_blank_title_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let forum = ForumService::new(&store);

        let result = forum.create_question("   ", "body", "anon").await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        // Collection must be unmutated
        assert!(forum.list_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listing_is_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let forum = ForumService::new(&store);

        forum.create_question("first", "", "anon").await.unwrap();
        forum.create_question("second", "", "anon").await.unwrap();

        let listed = forum.list_questions().await.unwrap();
        assert_eq!(listed.first().unwrap().question.title, "second");
        assert_eq!(listed.get(1).unwrap().question.title, "first");
    }

    #[tokio::test]
    async fn test_answer_counts_per_question() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let forum = ForumService::new(&store);

        let q1 = forum.create_question("one", "", "anon").await.unwrap();
        let q2 = forum.create_question("two", "", "anon").await.unwrap();
        forum.create_answer(&q1, "a", "bob").await.unwrap();
        forum.create_answer(&q1, "b", "carol").await.unwrap();

        let listed = forum.list_questions().await.unwrap();
        let count_of = |id: &QuestionId| {
            listed
                .iter()
                .find(|s| &s.question.question_id == id)
                .unwrap()
                .answers_count
        };
        assert_eq!(count_of(&q1), 2);
        assert_eq!(count_of(&q2), 0);
    }

    #[tokio::test]
    async fn test_create_answer_unknown_question() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let forum = ForumService::new(&store);

        let missing = QuestionId::from("q-nope");
        let result = forum.create_answer(&missing, "body", "anon").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // Answers collection must be unmutated
        assert!(forum.list_answers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_answer_empty_body_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let forum = ForumService::new(&store);

        let q = forum.create_question("q", "", "anon").await.unwrap();
        let result = forum.create_answer(&q, "  ", "anon").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_question_detail_embeds_answers() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let forum = ForumService::new(&store);

        let q = forum.create_question("q", "", "alice").await.unwrap();
        let a = forum.create_answer(&q, "the answer", "bob").await.unwrap();

        let detail = forum.question_detail(&q).await.unwrap();
        assert_eq!(detail.question.question_id, q);
        assert_eq!(detail.answers.len(), 1);
        assert_eq!(detail.answers.first().unwrap().answer_id, a);
    }

    #[tokio::test]
    async fn test_question_detail_unknown_id() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let forum = ForumService::new(&store);

        let result = forum.question_detail(&QuestionId::from("q-missing")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_answers_filtered_by_question() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());
        let forum = ForumService::new(&store);

        let q1 = forum.create_question("one", "", "anon").await.unwrap();
        let q2 = forum.create_question("two", "", "anon").await.unwrap();
        forum.create_answer(&q1, "for one", "anon").await.unwrap();
        forum.create_answer(&q2, "for two", "anon").await.unwrap();

        let answers = forum.answers_for_question(&q1).await.unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.first().unwrap().body, "for one");

        assert_eq!(forum.list_answers().await.unwrap().len(), 2);
    }
}
