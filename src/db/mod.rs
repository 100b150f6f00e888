use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::SecurityConfig;

pub mod migrator;
pub mod repositories;

pub use repositories::changelog::{ChangelogDraft, ChangelogEntry};
pub use repositories::loadout::{LoadoutDraft, LoadoutItem};
pub use repositories::post::{BlogPost, PostDraft};
pub use repositories::user::User;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
    security: SecurityConfig,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    /// Replace the password hashing params (defaults otherwise).
    #[must_use]
    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self {
            conn,
            security: SecurityConfig::default(),
        })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn post_repo(&self) -> repositories::post::PostRepository {
        repositories::post::PostRepository::new(self.conn.clone())
    }

    fn loadout_repo(&self) -> repositories::loadout::LoadoutRepository {
        repositories::loadout::LoadoutRepository::new(self.conn.clone())
    }

    fn changelog_repo(&self) -> repositories::changelog::ChangelogRepository {
        repositories::changelog::ChangelogRepository::new(self.conn.clone())
    }

    // ========== Users ==========

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.user_repo().list().await
    }

    pub async fn create_user(&self, username: &str, password: &str) -> Result<i32> {
        self.user_repo()
            .create(username, password, &self.security)
            .await
    }

    pub async fn verify_user_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>> {
        self.user_repo().verify_credentials(username, password).await
    }

    pub async fn update_username(&self, id: i32, username: &str) -> Result<bool> {
        self.user_repo().update_username(id, username).await
    }

    pub async fn delete_user(&self, id: i32) -> Result<bool> {
        self.user_repo().delete(id).await
    }

    pub async fn delete_users(&self, ids: &[i32]) -> Result<u64> {
        self.user_repo().delete_many(ids).await
    }

    // ========== Blog posts ==========

    pub async fn list_posts(
        &self,
        published_only: bool,
        search: Option<&str>,
    ) -> Result<Vec<BlogPost>> {
        self.post_repo().list(published_only, search).await
    }

    pub async fn get_post_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> Result<Option<BlogPost>> {
        self.post_repo().get_by_slug(slug, published_only).await
    }

    pub async fn create_post(&self, draft: &PostDraft) -> Result<i32> {
        self.post_repo().create(draft).await
    }

    pub async fn update_post(&self, id: i32, draft: &PostDraft) -> Result<bool> {
        self.post_repo().update(id, draft).await
    }

    pub async fn delete_post(&self, id: i32) -> Result<bool> {
        self.post_repo().delete(id).await
    }

    // ========== Loadout ==========

    pub async fn list_loadout_items(&self) -> Result<Vec<LoadoutItem>> {
        self.loadout_repo().list().await
    }

    pub async fn create_loadout_item(&self, draft: &LoadoutDraft) -> Result<i32> {
        self.loadout_repo().create(draft).await
    }

    pub async fn update_loadout_item(&self, id: i32, draft: &LoadoutDraft) -> Result<bool> {
        self.loadout_repo().update(id, draft).await
    }

    pub async fn delete_loadout_item(&self, id: i32) -> Result<bool> {
        self.loadout_repo().delete(id).await
    }

    // ========== Changelog ==========

    pub async fn list_changelog(&self) -> Result<Vec<ChangelogEntry>> {
        self.changelog_repo().list().await
    }

    pub async fn create_changelog_entry(&self, draft: &ChangelogDraft) -> Result<i32> {
        self.changelog_repo().create(draft).await
    }

    pub async fn update_changelog_entry(&self, id: i32, draft: &ChangelogDraft) -> Result<bool> {
        self.changelog_repo().update(id, draft).await
    }

    pub async fn delete_changelog_entry(&self, id: i32) -> Result<bool> {
        self.changelog_repo().delete(id).await
    }
}

/// True when the error chain bottoms out in a unique-constraint violation,
/// so callers can report a conflict instead of a generic store failure.
#[must_use]
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<sea_orm::DbErr>()
            .and_then(sea_orm::DbErr::sql_err)
            .is_some_and(|sql_err| {
                matches!(sql_err, sea_orm::SqlErr::UniqueConstraintViolation(_))
            })
    })
}
