pub mod routes;

pub mod user {
    pub mod user_handlers;
    pub mod user_models;
}

pub mod project {
    pub mod project_handlers;
    pub mod project_models;
}

pub mod project_user {
    pub mod project_user_handlers;
    pub mod project_user_models;
}

pub mod task {
    pub mod task_handlers;
    pub mod task_models;
}
