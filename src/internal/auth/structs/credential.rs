use core::fmt;

use base64::Engine;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::internal::errors::bscw_error::BscwError;

/// BSCW 认证凭据
///
/// 该结构体定位
/// - 内容为 `base64(username:password)`，作为 `Authorization: Basic` 头部的值
/// - 保存在会话中（见 [`BscwSession`](crate::session::BscwSession)），登出时清除
///
/// Debug 时只输出指纹，不输出凭据本身
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// 根据账号密码生成凭据
    pub fn new(username: &str, password: &str) -> Self {
        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{password}"));

        Self { token }
    }

    /// 从已保存的凭据字符串恢复，例如宿主会话中存储的值
    pub fn from_token(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    /// 凭据的 sha256 指纹，用于日志与比较
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 指纹前 8 位，日志中使用
    pub(crate) fn short_fingerprint(&self) -> String {
        self.fingerprint().chars().take(8).collect()
    }

    /// 组装 `Basic xxx` 头部值
    pub(crate) fn header_value(&self) -> Result<HeaderValue, BscwError> {
        let mut value = HeaderValue::from_str(&format!("Basic {}", self.token))
            .map_err(|e| BscwError::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// 防止debug泄漏账号
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("fingerprint", &self.short_fingerprint())
            .finish()
    }
}
