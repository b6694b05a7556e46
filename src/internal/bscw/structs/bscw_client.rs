use core::fmt;
use std::sync::Arc;

use url::Url;

use crate::internal::config::structs::repository_config::RepositoryConfig;
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::session::structs::bscw_session::BscwSession;
use crate::internal::transport::structs::http_transport::HttpTransport;
use crate::internal::transport::traits::xml_rpc_transport::XmlRpcTransport;
use crate::internal::xmlrpc::enums::BscwMethod;
use crate::internal::xmlrpc::functions::call_api::call_api;
use crate::internal::xmlrpc::structs::xml_rpc_value::XmlRpcValue;

/// BSCW API 客户端
///
/// 客户端本身不持有任何用户状态，凭据、根 id、id 缓存都在 [`BscwSession`] 里，
/// 由调用方在每次操作时传入。一个客户端可以服务多个会话。
#[derive(Clone)]
pub struct BscwClient {
    transport: Arc<dyn XmlRpcTransport>,
    server_url: Url,
}

impl BscwClient {
    /// 按配置创建基于 HTTP 的客户端
    pub fn new(config: &RepositoryConfig) -> Result<Self, BscwError> {
        let transport = HttpTransport::new(config)?;
        let server_url = transport.endpoint().clone();

        Ok(Self {
            transport: Arc::new(transport),
            server_url,
        })
    }

    /// 使用自定义传输层
    pub fn with_transport(server_url: Url, transport: Arc<dyn XmlRpcTransport>) -> Self {
        Self {
            transport,
            server_url,
        }
    }

    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    pub(crate) async fn call(
        &self,
        session: &BscwSession,
        method: BscwMethod,
        params: &[XmlRpcValue],
    ) -> Result<XmlRpcValue, BscwError> {
        call_api(self.transport.as_ref(), session, method, params).await
    }
}

impl fmt::Debug for BscwClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BscwClient")
            .field("server_url", &self.server_url.as_str())
            .finish()
    }
}
