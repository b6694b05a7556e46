use serde::{Deserialize, Serialize};
use url::Url;

use crate::internal::config::traits::config_store::ConfigStore;
use crate::internal::errors::config_error::ConfigError;

/// 配置项名：BSCW XML-RPC 地址
pub const OPTION_BSCW_URL: &str = "bscw_url";
/// 配置项名：强制使用宿主用户名作为 BSCW 登录名
pub const OPTION_FORCE_HOST_USERNAME: &str = "bscw_forcemoodlename";
/// 配置项名：插件显示名（由宿主自己保存）
pub const OPTION_PLUGIN_NAME: &str = "pluginname";
/// 配置项名：User-Agent
pub const OPTION_USER_AGENT: &str = "bscw_user_agent";

pub const ENV_BSCW_URL: &str = "BSCW_URL";
pub const ENV_FORCE_HOST_USERNAME: &str = "BSCW_FORCE_HOST_USERNAME";
pub const ENV_USER_AGENT: &str = "BSCW_USER_AGENT";

/// BSCW 只接受 client map 中登记过的 User-Agent，这是服务器默认允许的值
pub const DEFAULT_USER_AGENT: &str = "XML-RPC for PHP 3.0.0.beta";

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// 解析开关类配置值
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// 插件级配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// BSCW XML-RPC 地址（必填）
    pub bscw_url: String,
    /// 强制使用宿主用户名登录 BSCW
    #[serde(default)]
    pub force_host_username: bool,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            bscw_url: String::new(),
            force_host_username: false,
            user_agent: default_user_agent(),
        }
    }
}

impl RepositoryConfig {
    pub fn new(bscw_url: impl Into<String>) -> Self {
        Self {
            bscw_url: bscw_url.into(),
            ..Self::default()
        }
    }

    pub fn with_force_host_username(mut self, force: bool) -> Self {
        self.force_host_username = force;
        self
    }

    /// 校验并解析服务器地址，只接受 http / https
    pub fn server_url(&self) -> Result<Url, ConfigError> {
        let raw = self.bscw_url.trim();
        if raw.is_empty() {
            return Err(ConfigError::MissingUrl);
        }

        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(format!("{raw}: {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidUrl(format!("不支持的协议 {other}"))),
        }
    }

    /// 从环境变量读取
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意 key-value 来源读取，`BSCW_URL` 必填
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bscw_url = lookup(ENV_BSCW_URL)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingUrl)?;

        let config = Self {
            bscw_url,
            force_host_username: lookup(ENV_FORCE_HOST_USERNAME)
                .map(|raw| parse_flag(&raw))
                .unwrap_or(false),
            user_agent: lookup(ENV_USER_AGENT)
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or_else(default_user_agent),
        };

        config.server_url()?;
        Ok(config)
    }

    /// 从插件配置存储读取，缺失的项使用默认值
    pub fn from_store(store: &dyn ConfigStore) -> Self {
        Self {
            bscw_url: store
                .get(OPTION_BSCW_URL)
                .map(|url| url.trim().to_string())
                .unwrap_or_default(),
            force_host_username: store
                .get(OPTION_FORCE_HOST_USERNAME)
                .map(|raw| parse_flag(&raw))
                .unwrap_or(false),
            user_agent: store
                .get(OPTION_USER_AGENT)
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or_else(default_user_agent),
        }
    }

    /// 写入插件配置存储
    pub fn save_to(&self, store: &dyn ConfigStore) -> Result<(), ConfigError> {
        store.set(OPTION_BSCW_URL, self.bscw_url.trim())?;
        store.set(
            OPTION_FORCE_HOST_USERNAME,
            if self.force_host_username { "1" } else { "0" },
        )?;
        store.set(OPTION_USER_AGENT, &self.user_agent)?;
        Ok(())
    }
}
