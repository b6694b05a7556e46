use std::fmt;

use serde::{Deserialize, Serialize};

use crate::internal::xmlrpc::structs::xml_rpc_value::XmlRpcValue;

/// BSCW 对象 id
///
/// 线上一般是字符串，也可能以 `<int>` 出现。只有大于 0 的数字 id 才是唯一的，才会进入缓存。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 数字形式（> 0），用作缓存 key
    pub fn numeric(&self) -> Option<u64> {
        self.0.trim().parse::<u64>().ok().filter(|id| *id > 0)
    }

    /// 空字符串或 `/` 表示用户根目录
    pub fn is_root_alias(&self) -> bool {
        let id = self.0.trim();
        id.is_empty() || id == "/"
    }

    pub(crate) fn from_value(value: &XmlRpcValue) -> Option<Self> {
        value.scalar_to_string().map(Self)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ObjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for ObjectId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&ObjectId> for XmlRpcValue {
    fn from(value: &ObjectId) -> Self {
        XmlRpcValue::String(value.0.clone())
    }
}
