//! XML-RPC 传输层 trait：把编码好的请求体发给 BSCW 并取回响应文本。

use async_trait::async_trait;

use crate::internal::auth::structs::credential::Credential;
use crate::internal::errors::bscw_error::BscwError;

/// 传输层只负责“发出请求、拿回文本”，编解码与认证检查由调用方完成。
///
/// 默认实现为 [`HttpTransport`](crate::transport::HttpTransport)，测试中可替换为内存实现。
#[async_trait]
pub trait XmlRpcTransport: Send + Sync {
    /// 发送一次 XML-RPC 请求。
    ///
    /// 拿不到响应（网络错误、HTTP 状态异常）时返回 [`BscwError::RequestFailed`]，并携带本次请求体。
    async fn post(&self, credential: &Credential, request: &str) -> Result<String, BscwError>;
}
