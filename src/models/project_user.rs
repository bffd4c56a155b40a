use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProjectUser {
    pub id: i64,
    pub project_id: i64,
    pub user_id: i64,
    pub assigned_at: DateTime<Utc>,
}

/// Membership row joined with the member's username.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Membership {
    pub id: i64,
    pub project_id: i64,
    pub user_id: i64,
    pub username: String,
    pub assigned_at: DateTime<Utc>,
}

impl ProjectUser {
    /// Fails with a unique violation if the user is already a member.
    pub async fn create(
        pool: &SqlitePool,
        project_id: i64,
        user_id: i64,
    ) -> Result<ProjectUser, sqlx::Error> {
        sqlx::query_as::<_, ProjectUser>(
            "INSERT INTO project_users (project_id, user_id, assigned_at) VALUES (?, ?, ?)
             RETURNING id, project_id, user_id, assigned_at",
        )
        .bind(project_id)
        .bind(user_id)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
    }

    pub async fn delete(
        pool: &SqlitePool,
        project_id: i64,
        user_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_users WHERE project_id = ? AND user_id = ?")
            .bind(project_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl Membership {
    pub async fn find_by_project(
        pool: &SqlitePool,
        project_id: i64,
    ) -> Result<Vec<Membership>, sqlx::Error> {
        sqlx::query_as::<_, Membership>(
            "
            SELECT pu.id, pu.project_id, pu.user_id, u.username, pu.assigned_at
            FROM project_users pu
            JOIN users u ON pu.user_id = u.id
            WHERE pu.project_id = ?
            ORDER BY pu.id
            ",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Membership>, sqlx::Error> {
        sqlx::query_as::<_, Membership>(
            "
            SELECT pu.id, pu.project_id, pu.user_id, u.username, pu.assigned_at
            FROM project_users pu
            JOIN users u ON pu.user_id = u.id
            ORDER BY pu.id
            ",
        )
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;
    use crate::models::{project::Project, user::User};

    #[actix_web::test]
    async fn memberships_are_listed_in_creation_order() {
        let pool = connect_in_memory().await.unwrap();
        let project = Project::create(&pool, "Gemini").await.unwrap();
        let zed = User::create(&pool, "zed").await.unwrap();
        let amy = User::create(&pool, "amy").await.unwrap();

        ProjectUser::create(&pool, project.id, zed.id).await.unwrap();
        ProjectUser::create(&pool, project.id, amy.id).await.unwrap();

        let members = Membership::find_by_project(&pool, project.id).await.unwrap();
        let names: Vec<&str> = members.iter().map(|m| m.username.as_str()).collect();
        assert_eq!(names, ["zed", "amy"]);
    }

    #[actix_web::test]
    async fn duplicate_membership_is_a_unique_violation() {
        let pool = connect_in_memory().await.unwrap();
        let project = Project::create(&pool, "Mercury").await.unwrap();
        let user = User::create(&pool, "dana").await.unwrap();

        ProjectUser::create(&pool, project.id, user.id).await.unwrap();
        let err = ProjectUser::create(&pool, project.id, user.id).await.unwrap_err();
        match err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[actix_web::test]
    async fn deleting_either_side_removes_the_membership() {
        let pool = connect_in_memory().await.unwrap();
        let project = Project::create(&pool, "Vostok").await.unwrap();
        let user = User::create(&pool, "yuri").await.unwrap();
        let other = User::create(&pool, "valentina").await.unwrap();
        ProjectUser::create(&pool, project.id, user.id).await.unwrap();
        ProjectUser::create(&pool, project.id, other.id).await.unwrap();

        User::delete(&pool, user.id).await.unwrap();
        assert_eq!(Membership::find_by_project(&pool, project.id).await.unwrap().len(), 1);

        Project::delete(&pool, project.id).await.unwrap();
        assert!(Membership::find_all(&pool).await.unwrap().is_empty());
    }
}
