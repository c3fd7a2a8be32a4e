//! HTTP server: runtime env, health check and the SPA bundle

use crate::{Result, Settings, WebError};
use axum::{Json, Router, extract::State, routing::get};
use lmm_http::types::RuntimeEnv;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

async fn runtime_env(State(env): State<RuntimeEnv>) -> Json<RuntimeEnv> {
    Json(env)
}

async fn health() -> &'static str {
    "ok"
}

/// Build the router for a bundle in `dist`.
///
/// Paths that match no file fall back to `index.html` so the client router
/// can resolve them.
pub fn router(dist: &Path, env: RuntimeEnv) -> Router {
    let serve_dir = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route(RuntimeEnv::PATH, get(runtime_env))
        .route("/health", get(health))
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(env)
}

/// Bind and serve until Ctrl+C
///
/// # Errors
///
/// Returns an error if the bundle directory is missing or the listener
/// cannot be bound
pub async fn serve(settings: Settings) -> Result<()> {
    if !settings.dist_dir.is_dir() {
        return Err(WebError::MissingBundle(settings.dist_dir));
    }

    let app = router(&settings.dist_dir, settings.runtime_env());
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(
        dist = %settings.dist_dir.display(),
        "Server listening on http://{}", addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received shutdown signal");
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn bundle() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();
        std::fs::write(dir.path().join("app.css"), "body {}").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn env_json_exposes_runtime_env() {
        let dist = bundle();
        let env = RuntimeEnv {
            api_url: "https://api.example".into(),
            asset_url: "https://assets.example".into(),
        };
        let (status, body) = get_body(router(dist.path(), env.clone()), "/env.json").await;

        assert_eq!(status, StatusCode::OK);
        let served: RuntimeEnv = serde_json::from_str(&body).unwrap();
        assert_eq!(served, env);
    }

    #[tokio::test]
    async fn static_files_are_served() {
        let dist = bundle();
        let (status, body) = get_body(router(dist.path(), RuntimeEnv::default()), "/app.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let dist = bundle();
        let (status, body) =
            get_body(router(dist.path(), RuntimeEnv::default()), "/login?redirect=/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>app</html>");
    }

    #[tokio::test]
    async fn health_check() {
        let dist = bundle();
        let (status, body) = get_body(router(dist.path(), RuntimeEnv::default()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn missing_bundle_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            host: "127.0.0.1".into(),
            port: 0,
            api_url: String::new(),
            api_url_browser: String::new(),
            asset_url: String::new(),
            dist_dir: dir.path().join("missing"),
        };
        assert!(matches!(
            serve(settings).await,
            Err(WebError::MissingBundle(_))
        ));
    }
}
