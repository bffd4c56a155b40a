use actix_web::{web, HttpResponse};
use log::info;
use sqlx::SqlitePool;

use super::project_user_models::{AssignUserRequest, ProjectUserResponse};
use crate::error::ApiError;
use crate::models::{project::Project, project_user::ProjectUser, user::User};

// Handler to assign a user to a project
pub async fn assign_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    request: web::Json<AssignUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();
    let user_id = request.user_id;
    info!("Received request to assign user {} to project {}", user_id, project_id);

    // Both sides of the membership must exist
    if !Project::exists(pool.get_ref(), project_id).await? {
        info!("Project not found: {}", project_id);
        return Err(ApiError::project_not_found(project_id));
    }

    let user = match User::find_by_id(pool.get_ref(), user_id).await? {
        Some(user) => user,
        None => {
            info!("User not found: {}", user_id);
            return Err(ApiError::user_not_found(user_id));
        }
    };

    // Insert the mapping; the unique index rejects a second assignment
    let membership = match ProjectUser::create(pool.get_ref(), project_id, user_id).await {
        Ok(membership) => membership,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            info!("User {} is already assigned to project {}", user_id, project_id);
            return Err(ApiError::Conflict(format!(
                "User {} is already assigned to project {}",
                user_id, project_id
            )));
        }
        Err(e) => return Err(e.into()),
    };

    info!("User {} assigned to project {}", user.username, project_id);
    Ok(HttpResponse::Created().json(ProjectUserResponse {
        id: membership.id,
        user,
        assigned_at: membership.assigned_at,
    }))
}

// Handler to remove a user from a project
pub async fn unassign_user(
    pool: web::Data<SqlitePool>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, ApiError> {
    let (project_id, user_id) = path.into_inner();

    if !ProjectUser::delete(pool.get_ref(), project_id, user_id).await? {
        info!("No membership of user {} in project {}", user_id, project_id);
        return Err(ApiError::NotFound(format!(
            "User {} is not assigned to project {}",
            user_id, project_id
        )));
    }

    info!("User {} removed from project {}", user_id, project_id);
    Ok(HttpResponse::NoContent().finish())
}
