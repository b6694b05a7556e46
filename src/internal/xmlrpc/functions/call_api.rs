use tracing::{debug, warn};

use crate::internal::errors::bscw_error::BscwError;
use crate::internal::session::structs::bscw_session::BscwSession;
use crate::internal::transport::traits::xml_rpc_transport::XmlRpcTransport;
use crate::internal::xmlrpc::enums::BscwMethod;
use crate::internal::xmlrpc::functions::decode_method_response::decode_method_response;
use crate::internal::xmlrpc::functions::encode_method_call::encode_method_call;
use crate::internal::xmlrpc::structs::xml_rpc_value::XmlRpcValue;

/// 调用 BSCW XML-RPC API
///
/// 会话中没有凭据时直接返回 [`BscwError::AuthNotSet`]，不发出请求。
/// 对外开放，便于调用未封装的 BSCW 方法。
pub async fn call_api(
    transport: &dyn XmlRpcTransport,
    session: &BscwSession,
    method: BscwMethod,
    params: &[XmlRpcValue],
) -> Result<XmlRpcValue, BscwError> {
    let credential = session.credential().ok_or(BscwError::AuthNotSet)?;

    let request = encode_method_call(method.as_str(), params)?;

    debug!(
        method = method.as_str(),
        credential = %credential.short_fingerprint(),
        "调用 BSCW API"
    );

    let response = transport.post(credential, &request).await.inspect_err(|e| {
        warn!(method = method.as_str(), error = %e, "BSCW 请求失败");
    })?;

    decode_method_response(&response).inspect_err(|e| {
        warn!(method = method.as_str(), error = %e, "BSCW 响应异常");
    })
}
