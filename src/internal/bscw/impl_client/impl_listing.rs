//! 目录列表。

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use tracing::debug;

use crate::internal::bscw::enums::ObjectClass;
use crate::internal::bscw::structs::attribute_record::{
    AttributeRecord, LISTING_ATTRIBUTES, flatten_records,
};
use crate::internal::bscw::structs::{BscwClient, DirectoryEntry, ObjectId};
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::session::structs::bscw_session::BscwSession;
use crate::internal::xmlrpc::enums::BscwMethod;
use crate::internal::xmlrpc::structs::xml_rpc_value::XmlRpcValue;

/// 展示路径中一段名称需要转义的字符，保证名称里的 `/` 不会拆出新的层级
const SEGMENT: &AsciiSet = &CONTROLS.add(b'/').add(b'%');

fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT).to_string()
}

/// 所在文件夹的展示路径；以 `:` 开头的名称是用户根目录
fn folder_path(current: &AttributeRecord) -> String {
    if current.name.starts_with(':') {
        String::new()
    } else {
        format!("/{}", encode_segment(&current.name))
    }
}

impl BscwClient {
    /// 读取文件夹内容
    ///
    /// - `object_id` 为空或 `/` 时使用会话中缓存的根目录 id
    /// - `depth` 为 BSCW 的递归深度，1 表示只读取直接子对象
    /// - 返回扁平列表，不含文件夹本身；非文件夹、非文档的对象被丢弃
    /// - 列表中出现的文件夹都会写入会话的 id 缓存
    pub async fn get_listing(
        &self,
        session: &mut BscwSession,
        object_id: &str,
        depth: u32,
    ) -> Result<Vec<DirectoryEntry>, BscwError> {
        let requested = ObjectId::new(object_id);
        let target = if requested.is_root_alias() {
            self.ensure_root_id(session).await?
        } else {
            requested
        };

        let params = [
            XmlRpcValue::from(&target),
            XmlRpcValue::string_array(LISTING_ATTRIBUTES),
            XmlRpcValue::from(depth),
            XmlRpcValue::from(false),
        ];

        let data = self
            .call(session, BscwMethod::GetAttributes, &params)
            .await?;

        Ok(build_directory_entries(session, &data))
    }
}

/// 把 get_attributes 的响应整理成目录条目
///
/// 第一条记录是被列出的文件夹本身，其余为子对象；嵌套数组按顺序展开。
pub(crate) fn build_directory_entries(
    session: &mut BscwSession,
    data: &XmlRpcValue,
) -> Vec<DirectoryEntry> {
    let mut records = Vec::new();
    flatten_records(data, &mut records);

    let mut iter = records.into_iter();

    let current = match iter.next().and_then(AttributeRecord::from_value) {
        Some(record) => record,
        None => return Vec::new(),
    };
    let base_path = folder_path(&current);

    let mut entries = Vec::new();

    for value in iter {
        let record = match AttributeRecord::from_value(value) {
            Some(record) => record,
            None => continue,
        };

        let is_dir = match &record.class {
            Some(class @ ObjectClass::Unknown(_)) => {
                debug!(id = %record.id, class = class.as_tag(), "跳过未知类型对象");
                continue;
            }
            Some(class) => class.is_folder(),
            None => continue,
        };

        if is_dir {
            session.cache_name(&record.id, &record.name);
        }

        let AttributeRecord {
            id,
            name,
            size,
            content_type,
            ctime,
            ..
        } = record;

        let path = format!("{base_path}/{}", encode_segment(&name));

        entries.push(DirectoryEntry {
            id,
            name,
            path,
            is_dir,
            modified: ctime,
            size: if is_dir { None } else { size },
            content_type: if is_dir { None } else { content_type },
        });
    }

    entries
}
