use sqlx::{postgres::PgConnectOptions, PgConnection};
use tracing::{debug, instrument};

use crate::config::DbConfig;
use crate::db;
use crate::users::{error::UserStoreError, repo_types::User};

pub type StoreResult<T> = Result<T, UserStoreError>;

/// CRUD access to the `users` table. Holds connection parameters only; every
/// operation opens its own connection and closes it before returning.
#[derive(Clone)]
pub struct UserStore {
    options: PgConnectOptions,
}

impl UserStore {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &DbConfig) -> Self {
        Self::new(config.connect_options())
    }

    pub async fn connect(&self) -> StoreResult<PgConnection> {
        db::connect(&self.options).await
    }

    /// Insert a user; the database assigns the id.
    #[instrument(skip(self, email))]
    pub async fn create(&self, username: &str, email: &str) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            "#,
        )
        .bind(username)
        .bind(email)
        .execute(&mut conn)
        .await;
        db::close(conn).await;

        result.map_err(|e| UserStoreError::from_query(e, None))?;
        debug!("user created");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn read_one(&self, user_id: i32) -> StoreResult<User> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut conn)
        .await;
        db::close(conn).await;

        result.map_err(|e| UserStoreError::from_query(e, Some(user_id)))
    }

    /// All users in whatever order the database returns them. The first row
    /// that fails to map aborts the whole read.
    #[instrument(skip(self))]
    pub async fn read_all(&self) -> StoreResult<Vec<User>> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, User>("SELECT * FROM users")
            .fetch_all(&mut conn)
            .await;
        db::close(conn).await;

        let users = result.map_err(|e| UserStoreError::from_query(e, None))?;
        debug!(count = users.len(), "users loaded");
        Ok(users)
    }

    /// Overwrite username and email of `user.id`. Matching no row is not an error.
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn update(&self, user: &User) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(
            r#"
            UPDATE users
               SET username = $1, email = $2
             WHERE id = $3
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.id)
        .execute(&mut conn)
        .await;
        db::close(conn).await;

        let done = result.map_err(|e| UserStoreError::from_query(e, None))?;
        debug!(rows_affected = done.rows_affected(), "user updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i32) -> StoreResult<()> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut conn)
            .await;
        db::close(conn).await;

        let done = result.map_err(|e| UserStoreError::from_query(e, None))?;
        debug!(rows_affected = done.rows_affected(), "user deleted");
        Ok(())
    }
}
