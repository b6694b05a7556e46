use crate::internal::session::structs::bscw_session::BscwSession;

/// 宿主的会话存储
///
/// 每次页面请求都会重新构造适配器，会话状态靠它在请求之间保留。
/// key 形如 `bscw_key_<repository_id>`，不同仓库实例互不影响。
pub trait SessionStore: Send + Sync {
    fn load(&self, key: &str) -> Option<BscwSession>;

    fn save(&self, key: &str, session: &BscwSession);

    fn remove(&self, key: &str);
}
