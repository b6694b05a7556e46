use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::internal::bscw::structs::object_id::ObjectId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryEntry {
    pub id: ObjectId,
    pub name: String,       // 显示名
    pub path: String,       // 展示用路径，由所在文件夹名拼接，不能用于访问
    pub is_dir: bool,       // 严格由 `__class__` 决定
    pub modified: Option<DateTime<Utc>>, // ctime
    pub size: Option<u64>,  // 文件夹没有
    pub content_type: Option<String>, // 文件夹没有
}

impl DirectoryEntry {
    /// 修改时间的 unix 时间戳
    pub fn modified_timestamp(&self) -> Option<i64> {
        self.modified.map(|dt| dt.timestamp())
    }
}
