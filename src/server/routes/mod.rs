mod categories;
mod questions;
mod quizzes;

use axum::Json;

use super::error::ApiError;

pub use categories::{category_index, category_router};
pub use questions::questions_router;
pub use quizzes::quizzes_router;

pub type ApiResponse<T> = Result<Json<T>, ApiError>;
