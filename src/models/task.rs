use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::task_type::TaskType;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub project_id: Option<i64>,
    pub user_id: Option<i64>,
}

/// Task row with the referenced project name and username resolved.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TaskDetail {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub project_id: Option<i64>,
    pub project_name: Option<String>,
    pub user_id: Option<i64>,
    pub username: Option<String>,
}

/// Writable columns of a task, used for both insert and full update.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub project_id: Option<i64>,
    pub user_id: Option<i64>,
}

const DETAIL_SELECT: &str = "
    SELECT t.id, t.title, t.description, t.task_type,
           t.project_id, p.name AS project_name,
           t.user_id, u.username
    FROM tasks t
    LEFT JOIN projects p ON t.project_id = p.id
    LEFT JOIN users u ON t.user_id = u.id
";

impl Task {
    pub async fn create(pool: &SqlitePool, task: &NewTask) -> Result<Task, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, description, task_type, project_id, user_id)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, title, description, task_type, project_id, user_id",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.task_type)
        .bind(task.project_id)
        .bind(task.user_id)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        task: &NewTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks
             SET title = ?, description = ?, task_type = ?, project_id = ?, user_id = ?
             WHERE id = ?
             RETURNING id, title, description, task_type, project_id, user_id",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.task_type)
        .bind(task.project_id)
        .bind(task.user_id)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl TaskDetail {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<TaskDetail>, sqlx::Error> {
        sqlx::query_as::<_, TaskDetail>(&format!("{DETAIL_SELECT} WHERE t.id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<TaskDetail>, sqlx::Error> {
        sqlx::query_as::<_, TaskDetail>(&format!("{DETAIL_SELECT} ORDER BY t.id"))
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_project(
        pool: &SqlitePool,
        project_id: i64,
    ) -> Result<Vec<TaskDetail>, sqlx::Error> {
        sqlx::query_as::<_, TaskDetail>(&format!(
            "{DETAIL_SELECT} WHERE t.project_id = ? ORDER BY t.id"
        ))
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
