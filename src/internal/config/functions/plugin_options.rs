//! 插件配置项的读写与配置表单。

use std::collections::BTreeMap;

use crate::internal::config::structs::config_form::{ConfigField, ConfigForm};
use crate::internal::config::structs::repository_config::{
    OPTION_BSCW_URL, OPTION_FORCE_HOST_USERNAME, OPTION_PLUGIN_NAME, RepositoryConfig,
};
use crate::internal::config::traits::config_store::ConfigStore;
use crate::internal::errors::config_error::ConfigError;

pub const LABEL_URL: &str = "BSCW API URL";
pub const LABEL_FORCE_HOST_USERNAME: &str = "Force host user name for BSCW login";
pub const INSTRUCTION: &str =
    "Enter the XML-RPC address of your BSCW server, e.g. https://bscw.example.org/bscw/bscw.cgi";

/// 插件自己保存的配置项名
pub fn type_option_names() -> &'static [&'static str] {
    &[OPTION_BSCW_URL, OPTION_FORCE_HOST_USERNAME, OPTION_PLUGIN_NAME]
}

/// 保存配置项
///
/// 地址与开关写入插件配置存储（地址去掉首尾空白，空值忽略）；
/// 其余项原样返回，由宿主自行保存。
pub fn set_options(
    store: &dyn ConfigStore,
    options: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>, ConfigError> {
    let mut rest = options.clone();

    if let Some(url) = rest.remove(OPTION_BSCW_URL) {
        let url = url.trim();
        if !url.is_empty() {
            store.set(OPTION_BSCW_URL, url)?;
        }
    }

    if let Some(flag) = rest.remove(OPTION_FORCE_HOST_USERNAME) {
        if !flag.trim().is_empty() {
            store.set(OPTION_FORCE_HOST_USERNAME, flag.trim())?;
        }
    }

    Ok(rest)
}

/// 读取单个配置项，地址会去掉首尾空白
pub fn get_option(store: &dyn ConfigStore, name: &str) -> Option<String> {
    let value = store.get(name)?;
    if name == OPTION_BSCW_URL {
        Some(value.trim().to_string())
    } else {
        Some(value)
    }
}

/// 读取插件保存的全部配置项
pub fn get_options(store: &dyn ConfigStore) -> BTreeMap<String, String> {
    [OPTION_BSCW_URL, OPTION_FORCE_HOST_USERNAME]
        .into_iter()
        .filter_map(|name| get_option(store, name).map(|value| (name.to_string(), value)))
        .collect()
}

/// 插件配置表单：必填的地址、强制用户名开关、说明文字
pub fn type_config_form(store: &dyn ConfigStore) -> ConfigForm {
    let config = RepositoryConfig::from_store(store);

    ConfigForm {
        fields: vec![
            ConfigField::Text {
                name: OPTION_BSCW_URL.to_string(),
                label: LABEL_URL.to_string(),
                value: config.bscw_url,
                size: 40,
                required: true,
            },
            ConfigField::Checkbox {
                name: OPTION_FORCE_HOST_USERNAME.to_string(),
                label: LABEL_FORCE_HOST_USERNAME.to_string(),
                checked: config.force_host_username,
            },
            ConfigField::Static {
                text: INSTRUCTION.to_string(),
            },
        ],
    }
}
