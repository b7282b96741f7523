use thiserror::Error;

/// 服务层唯一的领域错误：更新目标不存在
///
/// 其余操作以 `None` / `false` / 空集合表达"未命中"，不走错误通道。
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }
}
