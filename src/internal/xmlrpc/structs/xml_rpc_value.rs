use std::collections::BTreeMap;

use chrono::NaiveDateTime;

/// XML-RPC `dateTime.iso8601` 的标准格式（无时区）
pub const DATETIME_FORMAT: &str = "%Y%m%dT%H:%M:%S";

/// 部分服务器会输出带分隔符的格式，解析时一并兼容
pub(crate) const DATETIME_FORMAT_DASHED: &str = "%Y-%m-%dT%H:%M:%S";

/// 解码后的 XML-RPC 值
#[derive(Debug, Clone, PartialEq)]
pub enum XmlRpcValue {
    Int(i64),
    Bool(bool),
    String(String),
    Double(f64),
    DateTime(NaiveDateTime),
    Base64(Vec<u8>),
    Struct(BTreeMap<String, XmlRpcValue>),
    Array(Vec<XmlRpcValue>),
    Nil,
}

impl XmlRpcValue {
    /// 字符串数组，常用于 get_attributes 的属性列表参数
    pub fn string_array(items: &[&str]) -> Self {
        XmlRpcValue::Array(items.iter().map(|s| XmlRpcValue::from(*s)).collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            XmlRpcValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// 整数值；字符串形式的数字也接受（BSCW 的 size 等字段可能以字符串返回）
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            XmlRpcValue::Int(i) => Some(*i),
            XmlRpcValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            XmlRpcValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            XmlRpcValue::DateTime(dt) => Some(*dt),
            XmlRpcValue::String(s) => parse_datetime(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[XmlRpcValue]> {
        match self {
            XmlRpcValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&BTreeMap<String, XmlRpcValue>> {
        match self {
            XmlRpcValue::Struct(members) => Some(members),
            _ => None,
        }
    }

    /// 读取 struct 成员
    pub fn get(&self, key: &str) -> Option<&XmlRpcValue> {
        self.as_struct().and_then(|members| members.get(key))
    }

    /// 标量转字符串（字符串或整数），用于对象 id 这类两种形式都可能出现的字段
    pub fn scalar_to_string(&self) -> Option<String> {
        match self {
            XmlRpcValue::String(s) => Some(s.clone()),
            XmlRpcValue::Int(i) => Some(i.to_string()),
            _ => None,
        }
    }

    /// 取出二进制内容；base64 直接返回，字符串按 UTF-8 字节返回
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            XmlRpcValue::Base64(bytes) => Some(bytes),
            XmlRpcValue::String(s) => Some(s.into_bytes()),
            _ => None,
        }
    }
}

pub(crate) fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT_DASHED))
        .ok()
}

impl From<&str> for XmlRpcValue {
    fn from(value: &str) -> Self {
        XmlRpcValue::String(value.to_string())
    }
}

impl From<String> for XmlRpcValue {
    fn from(value: String) -> Self {
        XmlRpcValue::String(value)
    }
}

impl From<i64> for XmlRpcValue {
    fn from(value: i64) -> Self {
        XmlRpcValue::Int(value)
    }
}

impl From<u32> for XmlRpcValue {
    fn from(value: u32) -> Self {
        XmlRpcValue::Int(i64::from(value))
    }
}

impl From<bool> for XmlRpcValue {
    fn from(value: bool) -> Self {
        XmlRpcValue::Bool(value)
    }
}

impl From<Vec<XmlRpcValue>> for XmlRpcValue {
    fn from(value: Vec<XmlRpcValue>) -> Self {
        XmlRpcValue::Array(value)
    }
}
