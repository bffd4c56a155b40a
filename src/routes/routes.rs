use actix_web::web;

use crate::error::ApiError;

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _| ApiError::BadRequest(format!("Invalid request body: {}", err)).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _| ApiError::BadRequest(format!("Invalid path: {}", err)).into())
}

pub fn api_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .app_data(path_config())
            .configure(user_configure)
            .configure(project_configure)
            .configure(task_configure),
    );
}

use super::user::user_handlers;

pub fn user_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(user_handlers::create_user))
            .route("", web::get().to(user_handlers::get_users))
            .route("/{id}", web::get().to(user_handlers::get_user))
            .route("/{id}", web::put().to(user_handlers::update_user))
            .route("/{id}", web::delete().to(user_handlers::delete_user)),
    );
}

use super::project::project_handlers;
use super::project_user::project_user_handlers;

pub fn project_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .route("", web::post().to(project_handlers::create_project))
            .route("", web::get().to(project_handlers::get_projects))
            .route("/{id}", web::get().to(project_handlers::get_project))
            .route("/{id}", web::put().to(project_handlers::update_project))
            .route("/{id}", web::delete().to(project_handlers::delete_project))
            .route("/{id}/tasks", web::get().to(task_handlers::get_project_tasks))
            .route("/{id}/users", web::post().to(project_user_handlers::assign_user))
            .route(
                "/{id}/users/{user_id}",
                web::delete().to(project_user_handlers::unassign_user),
            ),
    );
}

use super::task::task_handlers;

pub fn task_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tasks")
            .route("", web::post().to(task_handlers::create_task))
            .route("", web::get().to(task_handlers::get_tasks))
            .route("/{id}", web::get().to(task_handlers::get_task))
            .route("/{id}", web::put().to(task_handlers::update_task))
            .route("/{id}", web::delete().to(task_handlers::delete_task)),
    );
}
