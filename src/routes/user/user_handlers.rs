use actix_web::{web, HttpResponse};
use log::info;
use sqlx::SqlitePool;

use super::user_models::UserRequest;
use crate::error::ApiError;
use crate::models::user::User;

// Handler to create a user
pub async fn create_user(
    pool: web::Data<SqlitePool>,
    request: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    let username = &request.username;
    info!("Received request to create user: {}", username);

    let user = User::create(pool.get_ref(), username).await?;
    info!("User {} created with id {}", user.username, user.id);
    Ok(HttpResponse::Created().json(user))
}

// Handler to get the user list
pub async fn get_users(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let users = User::find_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}

// Handler to get a single user
pub async fn get_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    match User::find_by_id(pool.get_ref(), id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => {
            info!("User not found: {}", id);
            Err(ApiError::user_not_found(id))
        }
    }
}

// Handler to rename a user
pub async fn update_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    request: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    info!("Received request to rename user {} to {}", id, request.username);

    match User::update(pool.get_ref(), id, &request.username).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => {
            info!("User not found: {}", id);
            Err(ApiError::user_not_found(id))
        }
    }
}

// Handler to delete a user; memberships go with it
pub async fn delete_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if !User::delete(pool.get_ref(), id).await? {
        info!("User not found: {}", id);
        return Err(ApiError::user_not_found(id));
    }

    info!("User {} deleted", id);
    Ok(HttpResponse::NoContent().finish())
}
