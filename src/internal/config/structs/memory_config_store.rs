use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::internal::config::traits::config_store::ConfigStore;
use crate::internal::errors::config_error::ConfigError;

/// 内存配置存储，clone 后共享同一份数据
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, name: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: &str) -> Result<(), ConfigError> {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
