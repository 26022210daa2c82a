//! Axum route handlers for the interview API.
//!
//! Blank-input gating happens here, before any prompt is built — a rejected
//! request never reaches the completion backend. Completion failures are not
//! HTTP errors: the rendered diagnostic comes back in the same `result` field
//! a success uses, so the UI always has text to display.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::{prompts, Round};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RoundQuestionsRequest {
    pub job_description: String,
    pub round: Round,
}

#[derive(Debug, Serialize)]
pub struct RoundQuestionsResponse {
    pub round: Round,
    pub result: String,
}

#[derive(Debug, Deserialize)]
pub struct AllRoundsRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AllRoundsResponse {
    pub result: String,
}

#[derive(Debug, Deserialize)]
pub struct RandomQuestionRequest {
    pub round: Round,
}

#[derive(Debug, Serialize)]
pub struct RandomQuestionResponse {
    pub round: Round,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct CurrentQuestionResponse {
    pub question: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub question: String,
    pub result: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/questions/round
///
/// Generates 4 questions of the selected round from a job description.
pub async fn handle_round_questions(
    State(state): State<AppState>,
    Json(request): Json<RoundQuestionsRequest>,
) -> Result<Json<RoundQuestionsResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    info!("Generating {} questions", request.round);
    let prompt = prompts::questions_for_round(&request.job_description, request.round);
    let result = complete_as_text(&state, &prompt).await;

    Ok(Json(RoundQuestionsResponse {
        round: request.round,
        result,
    }))
}

/// POST /api/v1/questions/all
///
/// Generates 4 Behavioral + 4 Technical + 4 HR Round questions in one call.
pub async fn handle_all_rounds(
    State(state): State<AppState>,
    Json(request): Json<AllRoundsRequest>,
) -> Result<Json<AllRoundsResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    info!("Generating questions for all rounds");
    let prompt = prompts::all_rounds_questions(&request.job_description);
    let result = complete_as_text(&state, &prompt).await;

    Ok(Json(AllRoundsResponse { result }))
}

/// POST /api/v1/practice/question
///
/// Fetches one random question for the round and stores it as the current
/// question. On completion failure the previous question is kept and the
/// diagnostic is returned in its place.
pub async fn handle_random_question(
    State(state): State<AppState>,
    Json(request): Json<RandomQuestionRequest>,
) -> Result<Json<RandomQuestionResponse>, AppError> {
    info!("Fetching random {} question", request.round);
    let prompt = prompts::single_random_question(request.round);

    let question = match state.completion.complete(&prompt).await {
        Ok(text) => {
            let question = text.trim().to_string();
            state.session.set_question(question.clone());
            question
        }
        Err(e) => {
            warn!("random question generation failed: {e}");
            e.render()
        }
    };

    Ok(Json(RandomQuestionResponse {
        round: request.round,
        question,
    }))
}

/// GET /api/v1/practice/question
///
/// Returns the currently held question, if any.
pub async fn handle_current_question(
    State(state): State<AppState>,
) -> Json<CurrentQuestionResponse> {
    Json(CurrentQuestionResponse {
        question: state.session.question(),
    })
}

/// POST /api/v1/practice/feedback
///
/// Evaluates the answer against whichever question is currently held.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let question = state.session.question().ok_or_else(|| {
        AppError::Validation("no question has been generated yet".to_string())
    })?;

    if request.answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    info!("Generating feedback");
    let prompt = prompts::feedback(&question, &request.answer);
    let result = complete_as_text(&state, &prompt).await;

    Ok(Json(FeedbackResponse { question, result }))
}

/// Calls the completion backend and renders either branch as display text.
async fn complete_as_text(state: &AppState, prompt: &str) -> String {
    match state.completion.complete(prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("completion failed: {e}");
            e.render()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::config::Config;
    use crate::llm_client::{Completion, CompletionError};
    use crate::session::SessionStore;

    enum StubReply {
        Text(&'static str),
        ApiError(u16, &'static str),
    }

    /// Counting completion stub — records every prompt it receives.
    struct StubCompletion {
        reply: StubReply,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl StubCompletion {
        fn new(reply: StubReply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_prompt(&self) -> Option<String> {
            self.last_prompt.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Completion for StubCompletion {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.reply {
                StubReply::Text(text) => Ok((*text).to_string()),
                StubReply::ApiError(status, body) => Err(CompletionError::Api {
                    status: *status,
                    body: (*body).to_string(),
                }),
            }
        }
    }

    fn test_state(reply: StubReply) -> (AppState, Arc<StubCompletion>) {
        let stub = Arc::new(StubCompletion::new(reply));
        let state = AppState {
            completion: stub.clone(),
            session: Arc::new(SessionStore::new()),
            config: Config::for_tests(),
        };
        (state, stub)
    }

    #[tokio::test]
    async fn test_round_questions_returns_completion_text() {
        let (state, stub) = test_state(StubReply::Text("- Q1\n- Q2\n- Q3\n- Q4"));

        let response = handle_round_questions(
            State(state),
            Json(RoundQuestionsRequest {
                job_description: "Senior Rust Engineer".to_string(),
                round: Round::Technical,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.result, "- Q1\n- Q2\n- Q3\n- Q4");
        assert_eq!(response.round, Round::Technical);
        assert_eq!(stub.calls(), 1);
        assert!(stub.last_prompt().unwrap().contains("Senior Rust Engineer"));
    }

    #[tokio::test]
    async fn test_blank_job_description_skips_completion_call() {
        let (state, stub) = test_state(StubReply::Text("unused"));

        let err = handle_round_questions(
            State(state.clone()),
            Json(RoundQuestionsRequest {
                job_description: "   \n".to_string(),
                round: Round::Behavioral,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = handle_all_rounds(
            State(state),
            Json(AllRoundsRequest {
                job_description: String::new(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_completion_error_is_rendered_as_result_text() {
        let (state, stub) = test_state(StubReply::ApiError(429, "rate limited"));

        let response = handle_all_rounds(
            State(state),
            Json(AllRoundsRequest {
                job_description: "any role".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(response.result.contains("429"));
        assert!(response.result.contains("rate limited"));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_random_question_is_trimmed_and_stored() {
        let (state, _stub) = test_state(StubReply::Text("  What is ownership in Rust?  \n"));

        let response = handle_random_question(
            State(state.clone()),
            Json(RandomQuestionRequest {
                round: Round::Technical,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.question, "What is ownership in Rust?");
        assert_eq!(
            state.session.question().as_deref(),
            Some("What is ownership in Rust?")
        );
    }

    #[tokio::test]
    async fn test_failed_random_question_keeps_previous_question() {
        let (state, _stub) = test_state(StubReply::ApiError(500, "upstream down"));
        state.session.set_question("old question".to_string());

        let response = handle_random_question(
            State(state.clone()),
            Json(RandomQuestionRequest {
                round: Round::Behavioral,
            }),
        )
        .await
        .unwrap();

        assert!(response.question.contains("500"));
        assert_eq!(state.session.question().as_deref(), Some("old question"));
    }

    #[tokio::test]
    async fn test_feedback_with_blank_answer_skips_completion_call() {
        let (state, stub) = test_state(StubReply::Text("unused"));
        state.session.set_question("Why this role?".to_string());

        let err = handle_feedback(
            State(state),
            Json(FeedbackRequest {
                answer: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_feedback_without_question_skips_completion_call() {
        let (state, stub) = test_state(StubReply::Text("unused"));

        let err = handle_feedback(
            State(state),
            Json(FeedbackRequest {
                answer: "a real answer".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_feedback_prompt_uses_stored_question_and_answer() {
        let (state, stub) = test_state(StubReply::Text("- Good Points ..."));
        state.session.set_question("Why this role?".to_string());

        let response = handle_feedback(
            State(state),
            Json(FeedbackRequest {
                answer: "Because storage engines.".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.question, "Why this role?");
        assert_eq!(response.result, "- Good Points ...");
        let prompt = stub.last_prompt().unwrap();
        assert!(prompt.contains("Why this role?"));
        assert!(prompt.contains("Because storage engines."));
    }

    #[tokio::test]
    async fn test_current_question_reflects_session() {
        let (state, _stub) = test_state(StubReply::Text("unused"));

        let response = handle_current_question(State(state.clone())).await;
        assert_eq!(response.question, None);

        state.session.set_question("stored".to_string());
        let response = handle_current_question(State(state)).await;
        assert_eq!(response.question.as_deref(), Some("stored"));
    }
}
