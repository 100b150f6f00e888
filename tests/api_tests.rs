use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sinsane::config::Config;
use sinsane::constants::uploads::MAX_UPLOAD_BYTES;
use tower::ServiceExt;

/// Seeded by the initial migration.
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "password";

fn test_config(upload_root: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.uploads.root_path = upload_root.to_string_lossy().into_owned();
    config
}

async fn spawn_app_with(config: Config) -> Router {
    let state = sinsane::api::create_app_state_from_config(config)
        .await
        .expect("Failed to create app state");
    sinsane::api::router(state)
}

async fn spawn_app(upload_root: &std::path::Path) -> Router {
    spawn_app_with(test_config(upload_root)).await
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn json_request_with_cookie(
    method: &str,
    uri: &str,
    cookie: &str,
    body: &serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

/// Log in and return the session cookie pair for follow-up requests.
async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            &serde_json::json!({ "username": username, "password": password }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK, "login failed");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login set no session cookie")
        .to_str()
        .unwrap();

    set_cookie
        .split(';')
        .next()
        .expect("malformed set-cookie")
        .to_string()
}

async fn login_admin(app: &Router) -> String {
    login(app, ADMIN_USERNAME, ADMIN_PASSWORD).await
}

fn sample_post(slug: &str, published: bool) -> serde_json::Value {
    serde_json::json!({
        "title": "Patch notes roundup",
        "slug": slug,
        "description": "What changed this month",
        "content": "Full writeup body",
        "date": "2026-02-01T00:00:00Z",
        "published": published,
    })
}

// ---------- auth ----------

#[tokio::test]
async fn test_register_then_duplicate_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;

    let payload = serde_json::json!({ "username": "reader", "password": "secret1" });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/register", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["userId"].is_number());

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/register", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_register_rejects_short_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/register",
            &serde_json::json!({ "username": "ab", "password": "secret1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/register",
            &serde_json::json!({ "username": "reader", "password": "short" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            &serde_json::json!({ "username": ADMIN_USERNAME, "password": "wrong" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            &serde_json::json!({ "username": "ghost", "password": "whatever" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_reports_identity() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            &serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["username"], ADMIN_USERNAME);
    assert_eq!(body["isAdmin"], true);
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn test_auth_status_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["authenticated"], false);

    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(get_with_cookie("/api/auth/status", &cookie))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["username"], ADMIN_USERNAME);
    assert_eq!(body["isAdmin"], true);

    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/logout",
            &cookie,
            &serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_with_cookie("/api/auth/status", &cookie))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn test_admin_routes_require_admin_session() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;

    // No session at all
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/admin/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A plain registered user is not enough
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/register",
            &serde_json::json!({ "username": "reader", "password": "secret1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let cookie = login(&app, "reader", "secret1").await;
    let response = app
        .clone()
        .oneshot(get_with_cookie("/api/admin/posts", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_session_expiry_is_absolute() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.session.ttl_hours = 0;
    let app = spawn_app_with(config).await;

    let cookie = login_admin(&app).await;

    // The lifetime was fixed at login, so the session is already dead.
    let response = app
        .clone()
        .oneshot(get_with_cookie("/api/admin/posts", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------- blog posts ----------

#[tokio::test]
async fn test_post_visibility_and_slug_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    for (slug, published) in [("live-post", true), ("draft-post", false)] {
        let response = app
            .clone()
            .oneshot(json_request_with_cookie(
                "POST",
                "/api/admin/posts",
                &cookie,
                &sample_post(slug, published),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Public listing hides the draft
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["slug"], "live-post");

    // Admin listing shows both
    let response = app
        .clone()
        .oneshot(get_with_cookie("/api/admin/posts", &cookie))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 2);

    // Slug lookup honors publication state
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/posts/live-post")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/posts/draft-post")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_search_filters_listing() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    let mut first = sample_post("awp-guide", true);
    first["title"] = serde_json::json!("AWP positioning guide");
    let mut second = sample_post("eco-rounds", true);
    second["title"] = serde_json::json!("Winning eco rounds");

    for post in [&first, &second] {
        let response = app
            .clone()
            .oneshot(json_request_with_cookie(
                "POST",
                "/api/admin/posts",
                &cookie,
                post,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/posts?search=AWP")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["slug"], "awp-guide");
}

#[tokio::test]
async fn test_duplicate_slug_conflict_leaves_original_intact() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/admin/posts",
            &cookie,
            &sample_post("unique-slug", true),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let mut duplicate = sample_post("unique-slug", true);
    duplicate["title"] = serde_json::json!("Impostor");
    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/admin/posts",
            &cookie,
            &duplicate,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/posts/unique-slug")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["post"]["title"], "Patch notes roundup");
}

#[tokio::test]
async fn test_update_and_delete_missing_post() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "PUT",
            "/api/admin/posts/9999",
            &cookie,
            &sample_post("anything", true),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/admin/posts/9999")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------- loadout ----------

#[tokio::test]
async fn test_loadout_crud_and_screenshot_default() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    // Screenshots omitted entirely
    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/admin/loadout",
            &cookie,
            &serde_json::json!({
                "weapon_name": "AWP",
                "skin_name": "Dragon Lore",
                "category": "Sniper",
                "side": "Both",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    let item_id = body["itemId"].as_i64().unwrap();

    // Public catalogue returns a list, never null
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/loadout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["screenshots"], serde_json::json!([]));
    assert_eq!(items[0]["stattrak"], false);

    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "PUT",
            &format!("/api/admin/loadout/{item_id}"),
            &cookie,
            &serde_json::json!({
                "weapon_name": "AWP",
                "skin_name": "Asiimov",
                "category": "Sniper",
                "side": "Both",
                "stattrak": true,
                "screenshots": ["skins/img/1.png"],
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/loadout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["items"][0]["skin_name"], "Asiimov");
    assert_eq!(
        body["items"][0]["screenshots"],
        serde_json::json!(["skins/img/1.png"])
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admin/loadout/{item_id}"))
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------- changelog ----------

#[tokio::test]
async fn test_changelog_crud_and_missing_delete() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/admin/changelog/424242")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/admin/changelog",
            &cookie,
            &serde_json::json!({
                "version": "1.2.0",
                "date": "2026-03-01",
                "added": "Loadout screenshots",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["entryId"].is_number());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/changelog")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["version"], "1.2.0");
    assert!(entries[0]["changed"].is_null());
}

// ---------- users ----------

#[tokio::test]
async fn test_user_listing_hides_password_material() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(get_with_cookie("/api/admin/users", &cookie))
        .await
        .unwrap();
    let body = body_json(response).await;
    let users = body["users"].as_array().unwrap();
    assert!(!users.is_empty());
    assert!(users[0].get("password_hash").is_none());
    assert!(users[0].get("password").is_none());
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(get_with_cookie("/api/admin/users", &cookie))
        .await
        .unwrap();
    let body = body_json(response).await;
    let admin_id = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == ADMIN_USERNAME)
        .and_then(|u| u["id"].as_i64())
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admin/users/{admin_id}"))
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Bulk delete with the caller in the batch is rejected wholesale
    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/admin/users/bulk-delete",
            &cookie,
            &serde_json::json!({ "userIds": [admin_id] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Empty batch is rejected too
    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/admin/users/bulk-delete",
            &cookie,
            &serde_json::json!({ "userIds": [] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_management_flow() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/register",
            &serde_json::json!({ "username": "reader", "password": "secret1" }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    let user_id = body["userId"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "PUT",
            &format!("/api/admin/users/{user_id}"),
            &cookie,
            &serde_json::json!({ "username": "renamed" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Renaming onto an existing username conflicts
    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "PUT",
            &format!("/api/admin/users/{user_id}"),
            &cookie,
            &serde_json::json!({ "username": ADMIN_USERNAME }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/admin/users/bulk-delete",
            &cookie,
            &serde_json::json!({ "userIds": [user_id] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["count"], 1);
}

// ---------- uploads ----------

fn multipart_request(
    uri: &str,
    cookie: &str,
    filename: &str,
    content_type: &str,
    bytes: &[u8],
    upload_type: Option<&str>,
) -> Request<Body> {
    let boundary = "sinsane-test-boundary";
    let mut body = Vec::new();

    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(b"\r\n");

    if let Some(tag) = upload_type {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"uploadType\"\r\n\r\n");
        body.extend_from_slice(tag.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(header::COOKIE, cookie)
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_upload_stores_image_under_kind_directory() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(multipart_request(
            "/api/upload",
            &cookie,
            "screenshot.png",
            "image/png",
            b"not really a png",
            Some("skin"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let path = body["path"].as_str().unwrap();
    assert!(path.starts_with("skins/img/"));
    assert!(dir.path().join(path).exists());
}

#[tokio::test]
async fn test_upload_rejects_non_image() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(multipart_request(
            "/api/upload",
            &cookie,
            "payload.exe",
            "application/octet-stream",
            b"MZ",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_rejects_oversized_image() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    let oversized = vec![0_u8; MAX_UPLOAD_BYTES + 1];
    let response = app
        .clone()
        .oneshot(multipart_request(
            "/api/upload",
            &cookie,
            "huge.jpg",
            "image/jpeg",
            &oversized,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_rejects_unknown_kind() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app(dir.path()).await;
    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(multipart_request(
            "/api/upload",
            &cookie,
            "shot.png",
            "image/png",
            b"png bytes",
            Some("banner"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
