use std::collections::HashMap;

use parking_lot::RwLock;

use models::movie::Movie;

use crate::errors::ServiceError;

/// 查询谓词：仓储对外唯一的查询入口，由调用方提供
pub type Selector<'a> = dyn Fn(&Movie) -> bool + 'a;

/// MovieRepository 处理 movie 记录的基本操作
///
/// 接口化是为了可替换：当前实现是内存 map，之后可以换成
/// 数据库实现而不影响服务层。
pub trait MovieRepository: Send + Sync {
    /// 返回第一条命中的记录；无命中返回 `None`
    fn select(&self, selector: &Selector<'_>) -> Option<Movie>;
    /// 返回所有命中的记录；`limit <= 0` 表示不限制数量
    fn select_many(&self, selector: &Selector<'_>, limit: i64) -> Vec<Movie>;
    /// `id == 0` 走插入（由仓储分配 id），否则按 id 合并更新
    fn insert_or_update(&self, movie: Movie) -> Result<Movie, ServiceError>;
    /// 删除至多 `limit` 条命中的记录（`limit <= 0` 不限制），返回是否删到
    fn delete(&self, selector: &Selector<'_>, limit: i64) -> bool;
}

/// Lock mode for a whole traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanMode {
    /// Shared lock; concurrent read traversals may overlap.
    ReadOnly,
    /// Exclusive lock; serialized against all other store access.
    ReadWrite,
}

/// What a scan action did with one matched record.
enum ScanOutcome {
    /// Declined; does not count toward the limit.
    Skipped,
    /// Consumed the record.
    Acted,
    /// Consumed the record and asks the scan to remove it.
    Remove,
}

/// 基于内存 map 的 `MovieRepository` 实现
///
/// 整个 map 由一把读写锁保护（仓储粒度，而非逐条记录），所有
/// 读/更新/删除操作都经由同一个私有遍历原语 `scan` 完成。
pub struct InMemoryMovieRepository {
    source: RwLock<HashMap<i64, Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new(source: HashMap<i64, Movie>) -> Self {
        Self { source: RwLock::new(source) }
    }

    /// 通用遍历原语：`selector` 决定记录是否参与，`action` 对命中记录执行
    /// 动作，累计 `limit` 次成功动作后提前终止（`limit <= 0` 则遍历全部）。
    ///
    /// 遍历顺序是 map 的原生（无序）迭代顺序，调用方不能依赖任何
    /// 特定顺序。动作在持锁期间执行；`Remove` 请求的删除在锁释放前生效。
    /// 返回是否至少有一条记录被成功执行了动作。
    fn scan<S, A>(&self, selector: S, mut action: A, limit: i64, mode: ScanMode) -> bool
    where
        S: Fn(&Movie) -> bool,
        A: FnMut(&Movie) -> ScanOutcome,
    {
        let mut acted: i64 = 0;

        match mode {
            ScanMode::ReadOnly => {
                let source = self.source.read();
                for movie in source.values() {
                    if !selector(movie) {
                        continue;
                    }
                    match action(movie) {
                        ScanOutcome::Skipped => {}
                        // 只读遍历中动作不应请求删除，按普通动作计数
                        ScanOutcome::Acted | ScanOutcome::Remove => {
                            acted += 1;
                            if limit > 0 && acted >= limit {
                                break;
                            }
                        }
                    }
                }
            }
            ScanMode::ReadWrite => {
                let mut source = self.source.write();
                let mut doomed: Vec<i64> = Vec::new();
                for movie in source.values() {
                    if !selector(movie) {
                        continue;
                    }
                    match action(movie) {
                        ScanOutcome::Skipped => {}
                        ScanOutcome::Acted => {
                            acted += 1;
                            if limit > 0 && acted >= limit {
                                break;
                            }
                        }
                        ScanOutcome::Remove => {
                            doomed.push(movie.id);
                            acted += 1;
                            if limit > 0 && acted >= limit {
                                break;
                            }
                        }
                    }
                }
                for id in doomed {
                    source.remove(&id);
                }
            }
        }

        acted > 0
    }
}

impl MovieRepository for InMemoryMovieRepository {
    fn select(&self, selector: &Selector<'_>) -> Option<Movie> {
        let mut found: Option<Movie> = None;
        self.scan(
            selector,
            |movie| {
                found = Some(movie.clone());
                ScanOutcome::Acted
            },
            1,
            ScanMode::ReadOnly,
        );
        found
    }

    fn select_many(&self, selector: &Selector<'_>, limit: i64) -> Vec<Movie> {
        let mut results: Vec<Movie> = Vec::new();
        self.scan(
            selector,
            |movie| {
                results.push(movie.clone());
                ScanOutcome::Acted
            },
            limit,
            ScanMode::ReadOnly,
        );
        results
    }

    fn insert_or_update(&self, movie: Movie) -> Result<Movie, ServiceError> {
        // 插入与更新共用一个独占临界区：
        // - 插入时 max+1 的计算和写入之间不会被并发插入穿插，id 不会撞车
        // - 更新时查找与写回之间目标不会被并发删除
        let mut source = self.source.write();

        if movie.is_unassigned() {
            let next_id = source.keys().copied().max().unwrap_or(0) + 1;
            let mut created = movie;
            created.id = next_id;
            source.insert(next_id, created.clone());
            return Ok(created);
        }

        let current = source
            .get_mut(&movie.id)
            .ok_or_else(|| ServiceError::not_found("movie"))?;

        // 只允许更新 poster 和 genre，且空值不覆盖已有字段
        if !movie.poster.is_empty() {
            current.poster = movie.poster;
        }
        if !movie.genre.is_empty() {
            current.genre = movie.genre;
        }

        Ok(current.clone())
    }

    fn delete(&self, selector: &Selector<'_>, limit: i64) -> bool {
        self.scan(selector, |_| ScanOutcome::Remove, limit, ScanMode::ReadWrite)
    }
}
