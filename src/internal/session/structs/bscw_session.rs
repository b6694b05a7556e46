use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::internal::auth::structs::credential::Credential;
use crate::internal::bscw::structs::object_id::ObjectId;

/// 单个用户会话的 BSCW 状态
///
/// 显式传入 [`BscwClient`](crate::client::BscwClient) 的每次调用，不依赖任何全局存储：
/// - `credential`：认证凭据，登出时清除
/// - `root_id`：用户工作区根对象 id，每个会话只获取一次
/// - `id_cache`：对象 id → 显示名，无上限、不淘汰，随会话结束而失效
///
/// 实现了 serde，宿主可以把整个会话存进自己的 session 存储
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BscwSession {
    credential: Option<Credential>,
    root_id: Option<ObjectId>,
    #[serde(default)]
    id_cache: HashMap<u64, String>,
}

impl BscwSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// 设置凭据；凭据变化时根 id 随之失效
    pub fn set_credential(&mut self, credential: Credential) {
        if self.credential.as_ref() != Some(&credential) {
            self.root_id = None;
        }
        self.credential = Some(credential);
    }

    pub fn root_id(&self) -> Option<&ObjectId> {
        self.root_id.as_ref()
    }

    pub(crate) fn set_root_id(&mut self, root_id: ObjectId) {
        self.root_id = Some(root_id);
    }

    /// 读取缓存的显示名，只有数字 id 会被缓存
    pub fn cached_name(&self, object_id: &ObjectId) -> Option<&str> {
        let key = object_id.numeric()?;
        self.id_cache.get(&key).map(String::as_str)
    }

    /// 写入缓存，非数字 id 直接忽略
    pub fn cache_name(&mut self, object_id: &ObjectId, name: &str) {
        if let Some(key) = object_id.numeric() {
            self.id_cache.insert(key, name.to_string());
        }
    }

    pub fn cache_len(&self) -> usize {
        self.id_cache.len()
    }

    /// 会话结束：凭据、根 id、缓存全部清除
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
