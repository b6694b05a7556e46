use std::path::PathBuf;

use serde::Serialize;

use crate::internal::bscw::structs::object_id::ObjectId;

/// 下载结果：本地保存位置与来源对象 id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchedFile {
    pub path: PathBuf,
    pub object_id: ObjectId,
}
