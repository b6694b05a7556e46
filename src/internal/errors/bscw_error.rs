//! BSCW 访问相关错误类型。
//!
//! 所有远程错误都视为本次操作的终止错误，不做自动重试，由用户重新发起操作。

use std::path::PathBuf;

use thiserror::Error;

use super::config_error::ConfigError;

#[derive(Debug, Error)]
pub enum BscwError {
    /// 会话中没有认证凭据，调用前即失败，不会发出任何请求
    #[error("BSCW 认证密钥未设置")]
    AuthNotSet,

    /// 没有拿到服务器响应（网络错误或 HTTP 状态异常），携带本次请求体
    #[error("BSCW 请求失败: {message}")]
    RequestFailed { request: String, message: String },

    /// 服务器返回了 XML-RPC fault
    #[error("BSCW XML-RPC 远程错误 {code}: {message}")]
    RemoteFault { code: i64, message: String },

    #[error("无法写入文件 {}: {source}", .path.display())]
    CannotWriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("下载文件失败: {0}")]
    DownloadFailed(String),

    #[error("XML-RPC 请求编码失败: {0}")]
    Encode(String),

    #[error("XML-RPC 响应解析失败: {0}")]
    Decode(String),

    #[error("BSCW 响应结构异常: {0}")]
    UnexpectedResponse(String),

    #[error("无法获取用户根目录 id")]
    RootNotFound,

    #[error("认证头无效: {0}")]
    InvalidHeader(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BscwError {
    /// 是否为认证缺失（宿主应重新展示登录表单）
    pub fn is_auth_not_set(&self) -> bool {
        matches!(self, BscwError::AuthNotSet)
    }
}
