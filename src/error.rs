use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Database(sqlx::Error),
}

impl ApiError {
    pub fn user_not_found(id: i64) -> Self {
        ApiError::NotFound(format!("User {} not found", id))
    }

    pub fn project_not_found(id: i64) -> Self {
        ApiError::NotFound(format!("Project {} not found", id))
    }

    pub fn task_not_found(id: i64) -> Self {
        ApiError::NotFound(format!("Task {} not found", id))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                ApiError::Conflict("Record already exists".into())
            }
            // A referenced row vanished between the existence check and the write
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                ApiError::NotFound("Referenced record not found".into())
            }
            _ => ApiError::Database(err),
        }
    }
}

// Same shape as the other write responses in the API
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Database(e) => {
                error!("Failed to execute query: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_variant() {
        assert_eq!(ApiError::user_not_found(3).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Conflict("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::BadRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn foreign_key_violation_maps_to_not_found() {
        use crate::models::task::{NewTask, Task};
        use crate::models::task_type::TaskType;

        let pool = crate::db::connect_in_memory().await.unwrap();
        let task = NewTask {
            title: "dangling".into(),
            description: None,
            task_type: TaskType::Todo,
            project_id: None,
            user_id: Some(555),
        };

        let err = ApiError::from(Task::create(&pool, &task).await.unwrap_err());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Referenced record not found");
    }

    #[test]
    fn not_found_message_names_the_entity() {
        assert_eq!(ApiError::project_not_found(7).to_string(), "Project 7 not found");
        assert_eq!(ApiError::task_not_found(2).to_string(), "Task 2 not found");
    }
}
