use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use url::Url;

use crate::internal::auth::structs::credential::Credential;
use crate::internal::config::structs::repository_config::RepositoryConfig;
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::errors::config_error::ConfigError;
use crate::internal::transport::traits::xml_rpc_transport::XmlRpcTransport;

/// 基于 reqwest 的 XML-RPC 传输
///
/// - 每次请求单独带上 `Authorization: Basic <credential>`，凭据来自会话而不是客户端
/// - User-Agent 必须在 BSCW 的 client map 中被允许，默认值见 [`RepositoryConfig`]
/// - 不重试，不单独设置超时
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client, // 内部是Arc，clone 代价很小
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(config: &RepositoryConfig) -> Result<Self, ConfigError> {
        let endpoint = config.server_url()?;

        let client = Client::builder()
            .http1_only()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl XmlRpcTransport for HttpTransport {
    async fn post(&self, credential: &Credential, request: &str) -> Result<String, BscwError> {
        let request_failed = |message: String| BscwError::RequestFailed {
            request: request.to_string(),
            message,
        };

        // 组装请求头
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/xml"));
        headers.insert(AUTHORIZATION, credential.header_value()?);

        let res = self
            .client
            .post(self.endpoint.clone())
            .headers(headers)
            .body(request.to_string())
            .send()
            .await
            .map_err(|e| request_failed(e.to_string()))?;

        let status = res.status();

        let xml_text = res.text().await.map_err(|e| request_failed(e.to_string()))?;

        if !status.is_success() {
            return Err(request_failed(format!("HTTP 状态异常 {status}")));
        }

        Ok(xml_text)
    }
}
