use serde::{Deserialize, Serialize};

use crate::models::{project::Project, task::TaskDetail, task_type::TaskType, user::User};

/// Reference to another entity by id. Other fields sent alongside the id
/// (a project's `name`, say) are ignored.
#[derive(Debug, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(alias = "tasktype")]
    pub task_type: TaskType,
    #[serde(default)]
    pub project: Option<EntityRef>,
    #[serde(default)]
    pub user: Option<EntityRef>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub project: Option<Project>,
    pub user: Option<User>,
}

impl From<TaskDetail> for TaskResponse {
    fn from(detail: TaskDetail) -> Self {
        let project = match (detail.project_id, detail.project_name) {
            (Some(id), Some(name)) => Some(Project { id, name }),
            _ => None,
        };
        let user = match (detail.user_id, detail.username) {
            (Some(id), Some(username)) => Some(User { id, username }),
            _ => None,
        };

        TaskResponse {
            id: detail.id,
            title: detail.title,
            description: detail.description,
            task_type: detail.task_type,
            project,
            user,
        }
    }
}
