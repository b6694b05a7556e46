use chrono::{DateTime, TimeZone, Utc};

use crate::internal::bscw::enums::ObjectClass;
use crate::internal::bscw::structs::object_id::ObjectId;
use crate::internal::xmlrpc::structs::xml_rpc_value::XmlRpcValue;

/// 目录列表请求的属性集合
pub const LISTING_ATTRIBUTES: &[&str] = &[
    "__id__",
    "icon_path",
    "name",
    "content_size",
    "reference",
    "url_link",
    "special_doc_ref",
    "may_adddocument",
    "__class__",
    "type",
    "ctime",
    "size",
];

/// id 解析只需要 id 与名称
pub const NAME_ATTRIBUTES: &[&str] = &["__id__", "name"];

/// 外链只需要 id 与文档引用
pub const LINK_ATTRIBUTES: &[&str] = &["__id__", "special_doc_ref"];

/// get_attributes 返回的单条属性记录
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRecord {
    pub id: ObjectId,
    pub name: String,
    /// 没有 `__class__` 属性时为 None
    pub class: Option<ObjectClass>,
    pub size: Option<u64>,
    pub content_size: Option<u64>,
    pub content_type: Option<String>,
    pub ctime: Option<DateTime<Utc>>,
    pub special_doc_ref: Option<String>,
}

impl AttributeRecord {
    /// 从 struct 值解码；不是 struct 或缺少 `__id__` 时返回 None
    pub fn from_value(value: &XmlRpcValue) -> Option<Self> {
        value.as_struct()?;

        let id = value.get("__id__").and_then(ObjectId::from_value)?;

        let name = value
            .get("name")
            .and_then(XmlRpcValue::as_str)
            .unwrap_or_default()
            .to_string();

        let class = value
            .get("__class__")
            .and_then(XmlRpcValue::as_str)
            .map(ObjectClass::from_tag);

        let as_u64 = |key: &str| {
            value
                .get(key)
                .and_then(XmlRpcValue::as_i64)
                .and_then(|v| u64::try_from(v).ok())
        };

        let as_string = |key: &str| {
            value
                .get(key)
                .and_then(XmlRpcValue::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Some(Self {
            id,
            name,
            class,
            size: as_u64("size"),
            content_size: as_u64("content_size"),
            content_type: as_string("type"),
            ctime: value
                .get("ctime")
                .and_then(XmlRpcValue::as_datetime)
                .map(|naive| Utc.from_utc_datetime(&naive)),
            special_doc_ref: as_string("special_doc_ref"),
        })
    }
}

/// 取响应中的第一条记录（兼容直接返回 struct 与嵌套数组两种形式）
pub(crate) fn first_record(value: &XmlRpcValue) -> Option<&XmlRpcValue> {
    match value {
        XmlRpcValue::Struct(_) => Some(value),
        XmlRpcValue::Array(items) => items.iter().find_map(first_record),
        _ => None,
    }
}

/// 把嵌套数组展开成记录列表，保持原有顺序
pub(crate) fn flatten_records<'a>(value: &'a XmlRpcValue, out: &mut Vec<&'a XmlRpcValue>) {
    match value {
        XmlRpcValue::Struct(_) => out.push(value),
        XmlRpcValue::Array(items) => {
            for item in items {
                flatten_records(item, out);
            }
        }
        _ => {}
    }
}
