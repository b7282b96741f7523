use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use configs::BasicAuthConfig;
use service::movie::{InMemoryMovieRepository, MovieService};

/// 注入到全部路由的共享状态：显式依赖注入，不使用进程级单例
#[derive(Clone)]
pub struct ServerState {
    pub movies: Arc<MovieService<InMemoryMovieRepository>>,
    pub auth: BasicAuthConfig,
}

fn unauthorized() -> Response {
    let mut res = (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({"error": "Unauthorized"})),
    )
        .into_response();
    res.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"Authorization Required\""),
    );
    res
}

/// Middleware: require HTTP basic credentials for the /movies routes
pub async fn require_basic_auth(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    let credentials = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Basic "))
        .and_then(|encoded| BASE64.decode(encoded.trim()).ok())
        .and_then(|raw| String::from_utf8(raw).ok());

    let ok = match credentials {
        Some(pair) => {
            let mut it = pair.splitn(2, ':');
            matches!(
                (it.next(), it.next()),
                (Some(user), Some(pass))
                    if user == state.auth.username && pass == state.auth.password
            )
        }
        None => false,
    };

    if !ok {
        return unauthorized();
    }

    next.run(req).await
}
