use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

const INDEX: &str = "index.html";

/// Serves the page shell and its assets; unknown paths fall back to `index.html`.
pub(crate) async fn serve_asset(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return not_found();
    }

    let requested = uri.path().trim_start_matches('/');
    let requested = if requested.is_empty() { INDEX } else { requested };

    if let Some(path) = resolve(&state.static_dir, requested) {
        if let Ok(body) = tokio::fs::read(&path).await {
            return file_response(&path, body);
        }
    }

    let index = state.static_dir.join(INDEX);
    match tokio::fs::read(&index).await {
        Ok(body) => file_response(&index, body),
        Err(err) => {
            debug!(path = %index.display(), error = %err, "page shell unavailable");
            not_found()
        }
    }
}

/// Joins a request path onto the root, rejecting anything that could escape it.
fn resolve(root: &Path, requested: &str) -> Option<PathBuf> {
    let relative = Path::new(requested);
    if relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        Some(root.join(relative))
    } else {
        None
    }
}

fn file_response(path: &Path, body: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime.to_string())],
        body,
    )
        .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_rejects_parent_segments() {
        let root = Path::new("dist");
        assert_eq!(
            resolve(root, "assets/app.js"),
            Some(PathBuf::from("dist/assets/app.js"))
        );
        assert!(resolve(root, "../secrets.txt").is_none());
        assert!(resolve(root, "assets/../../etc/passwd").is_none());
    }
}
