use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::internal::session::structs::bscw_session::BscwSession;
use crate::internal::session::traits::session_store::SessionStore;

/// 内存会话存储，clone 后共享同一份数据
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<Mutex<HashMap<String, BscwSession>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, BscwSession>> {
        // 锁中毒时数据仍可用
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> Option<BscwSession> {
        self.lock().get(key).cloned()
    }

    fn save(&self, key: &str, session: &BscwSession) {
        self.lock().insert(key.to_string(), session.clone());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}
