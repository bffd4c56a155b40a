use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

impl User {
    pub async fn create(pool: &SqlitePool, username: &str) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>("INSERT INTO users (username) VALUES (?) RETURNING id, username")
            .bind(username)
            .fetch_one(pool)
            .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, username FROM users ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET username = ? WHERE id = ? RETURNING id, username",
        )
        .bind(username)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Returns false if no user had this id.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;

    #[actix_web::test]
    async fn ids_are_generated_in_insert_order() {
        let pool = connect_in_memory().await.unwrap();
        let first = User::create(&pool, "alice").await.unwrap();
        let second = User::create(&pool, "bob").await.unwrap();

        assert!(second.id > first.id);
        let all = User::find_all(&pool).await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[actix_web::test]
    async fn update_and_delete_report_missing_rows() {
        let pool = connect_in_memory().await.unwrap();
        assert_eq!(User::update(&pool, 42, "ghost").await.unwrap(), None);
        assert!(!User::delete(&pool, 42).await.unwrap());

        let user = User::create(&pool, "carol").await.unwrap();
        let renamed = User::update(&pool, user.id, "caroline").await.unwrap().unwrap();
        assert_eq!(renamed.id, user.id);
        assert_eq!(renamed.username, "caroline");

        assert!(User::delete(&pool, user.id).await.unwrap());
        assert!(!User::exists(&pool, user.id).await.unwrap());
    }
}
