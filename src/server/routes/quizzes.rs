use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{get_all_questions, get_questions_for_category},
        Question,
    },
    server::{app::AppState, error::ApiError, extract::ApiJson},
    telemetry::QUIZ_QUESTIONS_SERVED,
};

use super::ApiResponse;

/// Category id the quiz client sends for "all categories".
const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

// clients also send the category `type`, which is ignored
#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
}

/// Picks a random question whose id is not in `previous`.
pub fn pick_question(candidates: Vec<Question>, previous: &[i64]) -> Option<Question> {
    let asked: HashSet<i64> = previous.iter().copied().collect();
    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !asked.contains(&q.id))
        .collect();
    remaining.choose(&mut rand::thread_rng()).cloned()
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    ApiJson(request): ApiJson<QuizRequest>,
) -> ApiResponse<QuizQuestion> {
    let category = request.quiz_category.id;
    let fetched = if category == ALL_CATEGORIES {
        get_all_questions(&pool).await
    } else {
        get_questions_for_category(&pool, category).await
    };
    let candidates = fetched.map_err(ApiError::unprocessable)?;

    let question = pick_question(candidates, &request.previous_questions);
    match &question {
        Some(q) => {
            let label = if category == ALL_CATEGORIES {
                "all".to_owned()
            } else {
                category.to_string()
            };
            QUIZ_QUESTIONS_SERVED.with_label_values(&[label.as_str()]).inc();
            tracing::debug!("Quiz in category {category} serves question {}", q.id);
        }
        None => tracing::debug!(
            "Quiz in category {category} exhausted after {} questions",
            request.previous_questions.len()
        ),
    }

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
