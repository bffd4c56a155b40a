// src/models/mod.rs

pub mod user;
pub mod project;
pub mod project_user;
pub mod task;
pub mod task_type;
