use anyhow::Result;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post, put},
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer, cookie::SameSite};
use tracing::warn;

pub mod auth;
pub mod changelog;
pub mod error;
pub mod loadout;
pub mod posts;
pub mod upload;
pub mod users;
pub mod validation;

use crate::config::Config;
use crate::constants::uploads::MAX_UPLOAD_BYTES;
use crate::db::Store;
use crate::services::UploadService;

pub struct AppState {
    config: Arc<Config>,
    store: Store,
    uploads: Arc<UploadService>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<Config>, store: Store, uploads: Arc<UploadService>) -> Self {
        Self {
            config,
            store,
            uploads,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn uploads(&self) -> &UploadService {
        &self.uploads
    }
}

/// Connect the store and upload directories described by the config and
/// bundle them into the shared state.
pub async fn create_app_state_from_config(config: Config) -> Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?
    .with_security(config.security.clone());

    let uploads = UploadService::new(&config.uploads);
    uploads.ensure_dirs().await?;

    Ok(Arc::new(AppState::new(
        Arc::new(config),
        store,
        Arc::new(uploads),
    )))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let db_ok = state.store().ping().await.is_ok();
    Json(json!({
        "status": if db_ok { "ok" } else { "degraded" },
        "database": db_ok,
    }))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = &config.server.cors_allowed_origins;

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "Ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();
        layer.allow_origin(parsed)
    }
}

/// Build the full application router. Everything under `/api/admin` (plus
/// the upload endpoint) sits behind the admin session guard.
pub fn router(state: Arc<AppState>) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(state.config().server.secure_cookies)
        .with_same_site(SameSite::Lax);

    // Body limit above the service's own ceiling so an oversized file is
    // rejected by the upload check, not the extractor.
    let admin_routes = Router::new()
        .route(
            "/upload",
            post(upload::upload_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES * 2)),
        )
        .route("/admin/posts", get(posts::list_all).post(posts::create))
        .route("/admin/posts/{id}", put(posts::update).delete(posts::delete))
        .route("/admin/loadout", get(loadout::list).post(loadout::create))
        .route(
            "/admin/loadout/{id}",
            put(loadout::update).delete(loadout::delete),
        )
        .route(
            "/admin/changelog",
            get(changelog::list).post(changelog::create),
        )
        .route(
            "/admin/changelog/{id}",
            put(changelog::update).delete(changelog::delete),
        )
        .route("/admin/users", get(users::list))
        .route("/admin/users/bulk-delete", post(users::bulk_delete))
        .route("/admin/users/{id}", put(users::update).delete(users::delete))
        .route_layer(middleware::from_fn(auth::require_admin));

    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/auth/status", get(auth::auth_status))
        .route("/posts", get(posts::list_published))
        .route("/posts/{slug}", get(posts::get_published))
        .route("/loadout", get(loadout::list))
        .route("/changelog", get(changelog::list))
        .merge(admin_routes)
        .layer(session_layer)
        .with_state(state.clone());

    Router::new()
        .nest("/api", api_routes)
        .layer(cors_layer(state.config()))
        .layer(TraceLayer::new_for_http())
}
