use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, info};

use models::movie::Movie;
use service::errors::ServiceError;

use crate::auth::ServerState;
use crate::errors::JsonApiError;

/// 列出所有 movie
///
/// 演示:
/// curl -i -u admin:password http://localhost:8080/movies
pub async fn list_movies(State(state): State<ServerState>) -> Json<Vec<Movie>> {
    let movies = state.movies.get_all();
    info!(count = movies.len(), "list movies");
    Json(movies)
}

/// 获取指定 movie
///
/// 演示:
/// curl -i -u admin:password http://localhost:8080/movies/1
pub async fn get_movie(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, StatusCode> {
    match state.movies.get_by_id(id) {
        Some(movie) => Ok(Json(movie)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// 更新指定 movie 的 poster 与 genre
///
/// 表单上传：文件域 `poster` 的文件名会成为新的 poster 值，
/// 文本域 `genre` 为新的类型（空值不覆盖）。
///
/// 演示:
/// curl -i -X PUT -u admin:password -F "genre=Thriller" -F "poster=@./out.gif" http://localhost:8080/movies/1
pub async fn update_movie(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    mut form: Multipart,
) -> Result<Json<Movie>, JsonApiError> {
    let mut poster: Option<String> = None;
    let mut genre = String::new();

    while let Some(field) = form.next_field().await.map_err(|e| {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Malformed Form", Some(e.to_string()))
    })? {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("poster") => {
                // 只取文件名作为 poster 值，文件内容本身不落盘
                let file_name = field.file_name().map(|s| s.to_string());
                field.bytes().await.map_err(|e| {
                    JsonApiError::new(StatusCode::BAD_REQUEST, "Malformed Form", Some(e.to_string()))
                })?;
                poster = file_name;
            }
            Some("genre") => {
                genre = field.text().await.map_err(|e| {
                    JsonApiError::new(StatusCode::BAD_REQUEST, "Malformed Form", Some(e.to_string()))
                })?;
            }
            _ => {}
        }
    }

    let poster = poster.ok_or_else(|| {
        JsonApiError::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            Some("form file 'poster' missing".into()),
        )
    })?;

    state
        .movies
        .update_poster_and_genre_by_id(id, poster, genre)
        .map(Json)
        .map_err(|e| match e {
            ServiceError::NotFound(_) => {
                JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))
            }
        })
}

/// 删除指定 movie
///
/// 演示:
/// curl -i -X DELETE -u admin:password http://localhost:8080/movies/1
pub async fn delete_movie(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if state.movies.delete_by_id(id) {
        Ok(Json(serde_json::json!({ "deleted_id": id })))
    } else {
        error!(id, "delete movie missed");
        Err(StatusCode::NOT_FOUND)
    }
}
