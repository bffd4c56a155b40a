use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use log::info;
use sqlx::SqlitePool;

use super::project_models::{ProjectRequest, ProjectResponse};
use crate::error::ApiError;
use crate::models::{project::Project, project_user::Membership};
use crate::routes::project_user::project_user_models::ProjectUserResponse;

async fn load_members(
    pool: &SqlitePool,
    project_id: i64,
) -> Result<Vec<ProjectUserResponse>, ApiError> {
    let members = Membership::find_by_project(pool, project_id).await?;
    Ok(members.into_iter().map(ProjectUserResponse::from).collect())
}

// Handler to add a project
pub async fn create_project(
    pool: web::Data<SqlitePool>,
    request: web::Json<ProjectRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Received request to create project: {}", request.name);

    let project = Project::create(pool.get_ref(), &request.name).await?;
    info!("Project {} created with id {}", project.name, project.id);
    Ok(HttpResponse::Created().json(ProjectResponse::new(project, Vec::new())))
}

// Handler to get the project list with members
pub async fn get_projects(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let projects = Project::find_all(pool.get_ref()).await?;

    // Group every membership by project in one pass
    let mut members_by_project: HashMap<i64, Vec<ProjectUserResponse>> = HashMap::new();
    for membership in Membership::find_all(pool.get_ref()).await? {
        members_by_project
            .entry(membership.project_id)
            .or_default()
            .push(membership.into());
    }

    let projects: Vec<ProjectResponse> = projects
        .into_iter()
        .map(|project| {
            let members = members_by_project.remove(&project.id).unwrap_or_default();
            ProjectResponse::new(project, members)
        })
        .collect();

    Ok(HttpResponse::Ok().json(projects))
}

// Handler to get project details
pub async fn get_project(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let project = match Project::find_by_id(pool.get_ref(), id).await? {
        Some(project) => project,
        None => {
            info!("Project not found: {}", id);
            return Err(ApiError::project_not_found(id));
        }
    };

    let members = load_members(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(ProjectResponse::new(project, members)))
}

// Handler to rename a project
pub async fn update_project(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    request: web::Json<ProjectRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    info!("Received request to rename project {} to {}", id, request.name);

    let project = match Project::update(pool.get_ref(), id, &request.name).await? {
        Some(project) => project,
        None => {
            info!("Project not found: {}", id);
            return Err(ApiError::project_not_found(id));
        }
    };

    let members = load_members(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(ProjectResponse::new(project, members)))
}

// Handler to delete a project
pub async fn delete_project(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if !Project::delete(pool.get_ref(), id).await? {
        info!("Project not found: {}", id);
        return Err(ApiError::project_not_found(id));
    }

    info!("Project {} deleted", id);
    Ok(HttpResponse::NoContent().finish())
}
