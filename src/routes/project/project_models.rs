use serde::{Deserialize, Serialize};

use crate::models::project::Project;
use crate::routes::project_user::project_user_models::ProjectUserResponse;

#[derive(Deserialize)]
pub struct ProjectRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub project_users: Vec<ProjectUserResponse>,
}

impl ProjectResponse {
    pub fn new(project: Project, project_users: Vec<ProjectUserResponse>) -> Self {
        ProjectResponse {
            id: project.id,
            name: project.name,
            project_users,
        }
    }
}
