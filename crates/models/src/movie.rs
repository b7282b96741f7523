use serde::{Deserialize, Serialize};

/// Movie 记录：整个服务唯一的实体
///
/// - `id` 为 0 表示"尚未分配"，插入时由仓储生成（max + 1）
/// - `genre` / `poster` 为空字符串表示"未设置"，更新时空值不会覆盖已有字段
/// - `year` / `rating` / `cast` 为不参与更新逻辑的附加字段
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub poster: String,
}

/// insert 路径的 id 哨兵值
pub const UNASSIGNED_ID: i64 = 0;

impl Movie {
    /// Whether this record still needs an id from the store.
    pub fn is_unassigned(&self) -> bool {
        self.id == UNASSIGNED_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unassigned() {
        let m = Movie::default();
        assert!(m.is_unassigned());
        assert!(m.genre.is_empty());
    }

    #[test]
    fn serde_json_shape() {
        let m = Movie {
            id: 1,
            title: "Casablanca".into(),
            year: 1942,
            rating: 8.5,
            cast: vec!["Humphrey Bogart".into(), "Ingrid Bergman".into()],
            genre: "Romance".into(),
            poster: "casablanca.jpg".into(),
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["id"], 1);
        assert_eq!(v["title"], "Casablanca");
        let back: Movie = serde_json::from_value(v).unwrap();
        assert_eq!(back, m);
    }
}
