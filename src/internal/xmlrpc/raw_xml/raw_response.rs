use serde::Deserialize;

/// 对应 XML-RPC 响应顶层的 `<methodResponse>` 节点
///
/// 成功时只有 `<params>`，失败时只有 `<fault>`
#[derive(Debug, Deserialize)]
pub struct RawMethodResponse {
    pub params: Option<RawParams>,
    pub fault: Option<RawFault>,
}

/// `<params>` 节点，响应中通常只有一个 `<param>`
#[derive(Debug, Deserialize)]
pub struct RawParams {
    #[serde(rename = "param", default)]
    pub params: Vec<RawParam>,
}

#[derive(Debug, Deserialize)]
pub struct RawParam {
    pub value: RawValue,
}

/// `<fault>` 节点：内容是带 faultCode / faultString 的 struct
#[derive(Debug, Deserialize)]
pub struct RawFault {
    pub value: RawValue,
}

/// `<value>` 节点：子元素决定类型，没有子元素时内容按字符串处理
#[derive(Debug, Deserialize)]
pub struct RawValue {
    #[serde(rename = "$value", default)]
    pub kind: RawValueKind,
}

/// `<value>` 内部的类型节点
///
/// 数字、布尔等标量统一先按字符串读出，转换时再解析，便于给出明确的错误信息
#[derive(Debug, Deserialize)]
pub enum RawValueKind {
    #[serde(rename = "i4")]
    I4(String),

    #[serde(rename = "i8")]
    I8(String),

    #[serde(rename = "int")]
    Int(String),

    #[serde(rename = "boolean")]
    Boolean(String),

    #[serde(rename = "string")]
    Str(String),

    #[serde(rename = "double")]
    Double(String),

    #[serde(rename = "dateTime.iso8601")]
    DateTime(String),

    #[serde(rename = "base64")]
    Base64(String),

    /// `<struct>`：若干 `<member>`
    #[serde(rename = "struct")]
    Struct {
        #[serde(rename = "member", default)]
        members: Vec<RawMember>,
    },

    /// `<array><data>...</data></array>`
    #[serde(rename = "array")]
    Array {
        #[serde(default)]
        data: RawData,
    },

    #[serde(rename = "nil")]
    Nil,

    /// 无类型标签的 `<value>text</value>`，按字符串处理
    #[serde(rename = "$text")]
    Text(String),
}

impl Default for RawValueKind {
    fn default() -> Self {
        RawValueKind::Text(String::new())
    }
}

/// `<member>` 节点：`<name>` + `<value>`
#[derive(Debug, Deserialize)]
pub struct RawMember {
    pub name: String,
    pub value: RawValue,
}

/// `<data>` 节点：数组元素列表
#[derive(Debug, Default, Deserialize)]
pub struct RawData {
    #[serde(rename = "value", default)]
    pub values: Vec<RawValue>,
}
