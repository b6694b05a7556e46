use std::collections::BTreeMap;

use base64::Engine;

use crate::internal::xmlrpc::raw_xml::raw_response::{RawValue, RawValueKind};
use crate::internal::xmlrpc::structs::xml_rpc_value::{parse_datetime, XmlRpcValue};

fn parse_int(raw: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| format!("整数格式错误 {raw:?}: {e}"))
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(format!("布尔值格式错误: {other:?}")),
    }
}

fn decode_base64(raw: &str) -> Result<Vec<u8>, String> {
    // base64 内容常被折行，先去掉所有空白
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    base64::engine::general_purpose::STANDARD
        .decode(cleaned)
        .map_err(|e| format!("base64 解码失败: {e}"))
}

impl TryFrom<RawValue> for XmlRpcValue {
    type Error = String;

    fn try_from(raw: RawValue) -> Result<Self, Self::Error> {
        let value = match raw.kind {
            RawValueKind::I4(s) | RawValueKind::I8(s) | RawValueKind::Int(s) => {
                XmlRpcValue::Int(parse_int(&s)?)
            }
            RawValueKind::Boolean(s) => XmlRpcValue::Bool(parse_bool(&s)?),
            RawValueKind::Str(s) | RawValueKind::Text(s) => XmlRpcValue::String(s),
            RawValueKind::Double(s) => XmlRpcValue::Double(
                s.trim()
                    .parse::<f64>()
                    .map_err(|e| format!("浮点数格式错误 {s:?}: {e}"))?,
            ),
            RawValueKind::DateTime(s) => XmlRpcValue::DateTime(
                parse_datetime(&s).ok_or_else(|| format!("时间格式错误: {s:?}"))?,
            ),
            RawValueKind::Base64(s) => XmlRpcValue::Base64(decode_base64(&s)?),
            RawValueKind::Struct { members } => {
                let mut map = BTreeMap::new();
                for member in members {
                    map.insert(member.name, XmlRpcValue::try_from(member.value)?);
                }
                XmlRpcValue::Struct(map)
            }
            RawValueKind::Array { data } => XmlRpcValue::Array(
                data.values
                    .into_iter()
                    .map(XmlRpcValue::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            RawValueKind::Nil => XmlRpcValue::Nil,
        };

        Ok(value)
    }
}
