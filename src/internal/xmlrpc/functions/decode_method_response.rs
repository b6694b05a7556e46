use quick_xml::de::from_str;

use crate::internal::errors::bscw_error::BscwError;
use crate::internal::xmlrpc::raw_xml::raw_response::RawMethodResponse;
use crate::internal::xmlrpc::structs::xml_rpc_value::XmlRpcValue;

/// 把 fault 的 struct 转换成 [`BscwError::RemoteFault`]
fn fault_to_error(fault: XmlRpcValue) -> BscwError {
    let code = fault.get("faultCode").and_then(XmlRpcValue::as_i64).unwrap_or(0);
    let message = fault
        .get("faultString")
        .and_then(XmlRpcValue::as_str)
        .unwrap_or_default()
        .to_string();

    BscwError::RemoteFault { code, message }
}

/// 解析 XML-RPC 响应体
///
/// - 成功：返回第一个 `<param>` 的值，没有 param 时返回 `Nil`
/// - `<fault>`：返回 [`BscwError::RemoteFault`]
/// - XML 或值格式错误：返回 [`BscwError::Decode`]
pub fn decode_method_response(xml: &str) -> Result<XmlRpcValue, BscwError> {
    let raw: RawMethodResponse = from_str(xml).map_err(|e| BscwError::Decode(e.to_string()))?;

    if let Some(fault) = raw.fault {
        let fault = XmlRpcValue::try_from(fault.value).map_err(BscwError::Decode)?;
        return Err(fault_to_error(fault));
    }

    let params = raw
        .params
        .ok_or_else(|| BscwError::Decode("响应中既没有 params 也没有 fault".to_string()))?;

    match params.params.into_iter().next() {
        Some(param) => XmlRpcValue::try_from(param.value).map_err(BscwError::Decode),
        None => Ok(XmlRpcValue::Nil),
    }
}
