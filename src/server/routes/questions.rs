use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{self, get_all_questions, get_question_by_id},
        NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::QueryParams,
        error::ApiError,
        extract::{ApiJson, ApiPath, ApiQuery},
        pagination::paginate,
    },
};

use super::{category_index, ApiResponse};

// category and difficulty arrive as numbers or as strings from html forms
#[derive(Deserialize)]
struct CreateQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(alias = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<String>,
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct QuestionCreated {
    success: bool,
    #[serde(rename = "created question")]
    created_question: i64,
}

#[derive(Serialize)]
struct QuestionDeleted {
    success: bool,
    #[serde(rename = "deleted question")]
    deleted_question: i64,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<QueryParams>,
) -> ApiResponse<QuestionsPage> {
    let questions = get_all_questions(&pool).await?;
    let page_questions = paginate(&questions, params.page()).to_vec();
    let categories = category_index(&pool).await?;

    // an empty page is reported the same way whether the table is empty or
    // the page index is past the end
    if page_questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions: page_questions,
        total_questions: questions.len(),
        categories: categories.into_values().collect(),
        current_category: None,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResponse<QuestionDeleted> {
    get_question_by_id(&pool, id)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or(ApiError::NotFound)?;
    questions::delete_question(&pool, id)
        .await
        .map_err(ApiError::unprocessable)?;

    tracing::info!("Deleted question {id}");
    Ok(Json(QuestionDeleted {
        success: true,
        deleted_question: id,
    }))
}

async fn search(pool: &SqlitePool, term: &str, page: Option<i64>) -> ApiResponse<SearchResults> {
    let found = questions::search_questions(pool, term)
        .await
        .map_err(ApiError::unprocessable)?;
    tracing::debug!("Search for {term:?} matched {} questions", found.len());
    Ok(Json(SearchResults {
        success: true,
        questions: paginate(&found, page).to_vec(),
        total_questions: found.len(),
    }))
}

async fn create(pool: &SqlitePool, body: &[u8]) -> ApiResponse<QuestionCreated> {
    let body: CreateQuestionBody = serde_json::from_slice(body).map_err(ApiError::unprocessable)?;
    let new_question = NewQuestion {
        question: body.question,
        answer: body.answer,
        category: body.category,
        difficulty: body.difficulty,
    };
    let id = questions::create_question(pool, &new_question)
        .await
        .map_err(ApiError::unprocessable)?;

    tracing::info!("Created question {id}");
    Ok(Json(QuestionCreated {
        success: true,
        created_question: id,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<QueryParams>,
    ApiJson(body): ApiJson<SearchBody>,
) -> ApiResponse<SearchResults> {
    search(&pool, &body.search_term, params.page()).await
}

// Older clients search through `POST /questions?search=term`, so a present
// `search` parameter (even an empty one) selects search over create.
async fn create_or_search(
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<QueryParams>,
    body: Bytes,
) -> Result<Response, ApiError> {
    match params.first("search") {
        Some(term) => Ok(search(&pool, term, params.page()).await?.into_response()),
        None => Ok(create(&pool, &body).await?.into_response()),
    }
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
