use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions::get_questions_for_category},
        Question,
    },
    server::{app::AppState, error::ApiError, extract::ApiPath},
};

use super::ApiResponse;

#[derive(Serialize)]
struct CategoriesList {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
}

/// Category id to name, read fresh from the store on every call.
pub async fn category_index(pool: &SqlitePool) -> sqlx::Result<BTreeMap<i64, String>> {
    Ok(get_all_categories(pool)
        .await?
        .into_iter()
        .map(|c| (c.id, c.kind))
        .collect())
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesList> {
    Ok(Json(CategoriesList {
        success: true,
        categories: category_index(&pool).await?,
    }))
}

// No check that the category exists: an unknown id is just an empty list.
async fn questions_by_category(
    State(pool): State<SqlitePool>,
    ApiPath(category_id): ApiPath<i64>,
) -> ApiResponse<CategoryQuestions> {
    let questions = get_questions_for_category(&pool, category_id)
        .await
        .map_err(ApiError::unprocessable)?;
    Ok(Json(CategoryQuestions {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
        .with_state(state)
}
