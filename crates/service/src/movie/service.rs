use std::sync::Arc;

use tracing::{info, instrument};

use models::movie::Movie;

use crate::errors::ServiceError;
use crate::movie::repository::MovieRepository;

/// MovieService 处理 movie 数据模型层的 CRUD 操作
///
/// 纯转发门面：把四个领域操作翻译成仓储的谓词查询，自身不做
/// 校验、缓存或批处理。高层组件只依赖这四个操作，仓储实现可以
/// 随时替换。
pub struct MovieService<R: MovieRepository> {
    repo: Arc<R>,
}

impl<R: MovieRepository> MovieService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 返回全部记录
    pub fn get_all(&self) -> Vec<Movie> {
        self.repo.select_many(&|_: &Movie| true, -1)
    }

    /// 按 id 查询单条记录
    pub fn get_by_id(&self, id: i64) -> Option<Movie> {
        self.repo.select(&|m: &Movie| m.id == id)
    }

    /// 按 id 更新 poster 与 genre（空值不覆盖），返回合并后的记录
    #[instrument(skip(self, poster, genre))]
    pub fn update_poster_and_genre_by_id(
        &self,
        id: i64,
        poster: String,
        genre: String,
    ) -> Result<Movie, ServiceError> {
        let merged = self.repo.insert_or_update(Movie {
            id,
            poster,
            genre,
            ..Movie::default()
        })?;
        info!(id, "movie_updated");
        Ok(merged)
    }

    /// 按 id 删除单条记录，返回是否删除成功
    pub fn delete_by_id(&self, id: i64) -> bool {
        self.repo.delete(&|m: &Movie| m.id == id, 1)
    }
}
