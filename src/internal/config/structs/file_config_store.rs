use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use quick_xml::de::from_str;
use quick_xml::se::to_string;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::internal::config::traits::config_store::ConfigStore;
use crate::internal::errors::config_error::ConfigError;

const CONFIG_DIR_NAME: &str = "bscw_repository";
const CONFIG_FILE_NAME: &str = "config.xml";

/// 配置文件根节点 `<config>`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "config")]
struct StoredOptions {
    #[serde(rename = "option", default)]
    options: Vec<StoredOption>,
}

/// `<option name="...">value</option>`
#[derive(Debug, Serialize, Deserialize)]
struct StoredOption {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "$text", default)]
    value: String,
}

/// 基于 XML 文件的配置存储
///
/// 每次读写都直接访问文件，写入时整体覆盖；同一进程内的写入由互斥锁串行化。
#[derive(Debug)]
pub struct FileConfigStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// 默认位置：系统配置目录下的 `bscw_repository/config.xml`
    pub fn default_location() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::new(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StoredOptions, ConfigError> {
        if !self.path.exists() {
            return Ok(StoredOptions::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StoredOptions::default());
        }

        from_str(&content).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    fn write(&self, stored: &StoredOptions) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = to_string(stored).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, name: &str) -> Option<String> {
        match self.read() {
            Ok(stored) => stored
                .options
                .into_iter()
                .find(|option| option.name == name)
                .map(|option| option.value),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "读取配置文件失败");
                None
            }
        }
    }

    fn set(&self, name: &str, value: &str) -> Result<(), ConfigError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut stored = self.read()?;
        match stored.options.iter_mut().find(|option| option.name == name) {
            Some(option) => option.value = value.to_string(),
            None => stored.options.push(StoredOption {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }

        self.write(&stored)
    }
}
