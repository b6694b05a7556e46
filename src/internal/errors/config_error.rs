//! 配置相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BSCW 服务器地址未配置")]
    MissingUrl,

    #[error("BSCW 服务器地址无效: {0}")]
    InvalidUrl(String),

    #[error("无法确定配置目录")]
    NoConfigDir,

    #[error("配置文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置序列化失败: {0}")]
    Serialize(String),

    #[error("HTTP 客户端创建失败: {0}")]
    HttpClient(String),
}
