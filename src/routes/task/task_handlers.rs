use actix_web::{web, HttpResponse};
use log::info;
use sqlx::SqlitePool;

use super::task_models::{TaskRequest, TaskResponse};
use crate::error::ApiError;
use crate::models::{
    project::Project,
    task::{NewTask, Task, TaskDetail},
    user::User,
};

// Check the referenced project and user before touching the tasks table
async fn resolve_task(pool: &SqlitePool, request: TaskRequest) -> Result<NewTask, ApiError> {
    let project_id = request.project.map(|p| p.id);
    if let Some(id) = project_id {
        if !Project::exists(pool, id).await? {
            info!("Project not found: {}", id);
            return Err(ApiError::project_not_found(id));
        }
    }

    let user_id = request.user.map(|u| u.id);
    if let Some(id) = user_id {
        if !User::exists(pool, id).await? {
            info!("User not found: {}", id);
            return Err(ApiError::user_not_found(id));
        }
    }

    Ok(NewTask {
        title: request.title,
        description: request.description,
        task_type: request.task_type,
        project_id,
        user_id,
    })
}

async fn load_task(pool: &SqlitePool, id: i64) -> Result<TaskResponse, ApiError> {
    match TaskDetail::find_by_id(pool, id).await? {
        Some(detail) => Ok(detail.into()),
        None => {
            info!("Task not found: {}", id);
            Err(ApiError::task_not_found(id))
        }
    }
}

// Handler to add a task
pub async fn create_task(
    pool: web::Data<SqlitePool>,
    request: web::Json<TaskRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Received request to create task: {}", request.title);

    let new_task = resolve_task(pool.get_ref(), request.into_inner()).await?;
    let task = Task::create(pool.get_ref(), &new_task).await?;
    info!("Task {} created with id {}", task.title, task.id);

    // Read it back with project and user resolved
    let response = load_task(pool.get_ref(), task.id).await?;
    Ok(HttpResponse::Created().json(response))
}

// Handler to get the task list
pub async fn get_tasks(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let tasks: Vec<TaskResponse> = TaskDetail::find_all(pool.get_ref())
        .await?
        .into_iter()
        .map(TaskResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(tasks))
}

pub async fn get_task(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let response = load_task(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

// Handler to replace a task
pub async fn update_task(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    request: web::Json<TaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    info!("Received request to update task {}", id);

    let new_task = resolve_task(pool.get_ref(), request.into_inner()).await?;
    if Task::update(pool.get_ref(), id, &new_task).await?.is_none() {
        info!("Task not found: {}", id);
        return Err(ApiError::task_not_found(id));
    }

    let response = load_task(pool.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(response))
}

// Handler to delete a task
pub async fn delete_task(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if !Task::delete(pool.get_ref(), id).await? {
        info!("Task not found: {}", id);
        return Err(ApiError::task_not_found(id));
    }

    info!("Task {} deleted", id);
    Ok(HttpResponse::NoContent().finish())
}

// Handler to get the tasks of one project
pub async fn get_project_tasks(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();
    if !Project::exists(pool.get_ref(), project_id).await? {
        info!("Project not found: {}", project_id);
        return Err(ApiError::project_not_found(project_id));
    }

    let tasks: Vec<TaskResponse> = TaskDetail::find_by_project(pool.get_ref(), project_id)
        .await?
        .into_iter()
        .map(TaskResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(tasks))
}
