use crate::internal::errors::config_error::ConfigError;

/// 插件级配置存储（所有仓库实例共享）
pub trait ConfigStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;

    fn set(&self, name: &str, value: &str) -> Result<(), ConfigError>;
}
