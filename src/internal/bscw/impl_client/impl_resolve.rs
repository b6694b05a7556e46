//! id 解析与面包屑路径。

use crate::internal::bscw::structs::attribute_record::{
    AttributeRecord, NAME_ATTRIBUTES, first_record,
};
use crate::internal::bscw::structs::{BscwClient, ObjectId, PathCrumb};
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::session::structs::bscw_session::BscwSession;
use crate::internal::xmlrpc::enums::BscwMethod;
use crate::internal::xmlrpc::structs::xml_rpc_value::XmlRpcValue;

impl BscwClient {
    /// 把对象 id 解析为显示名，优先使用会话缓存
    pub async fn resolve_id(
        &self,
        session: &mut BscwSession,
        object_id: &ObjectId,
    ) -> Result<String, BscwError> {
        if let Some(name) = session.cached_name(object_id) {
            return Ok(name.to_string());
        }

        let params = [
            XmlRpcValue::from(object_id),
            XmlRpcValue::string_array(NAME_ATTRIBUTES),
        ];
        let data = self
            .call(session, BscwMethod::GetAttributes, &params)
            .await?;

        let record = first_record(&data)
            .and_then(AttributeRecord::from_value)
            .ok_or_else(|| {
                BscwError::UnexpectedResponse(format!("对象 {object_id} 没有返回属性记录"))
            })?;

        session.cache_name(object_id, &record.name);
        session.cache_name(&record.id, &record.name);

        Ok(record.name)
    }

    /// 生成对象的面包屑路径：祖先 id 链，每级解析为显示名
    ///
    /// `object_id` 为空或 `/` 时使用根目录 id
    pub async fn generate_path_array(
        &self,
        session: &mut BscwSession,
        object_id: &str,
    ) -> Result<Vec<PathCrumb>, BscwError> {
        let requested = ObjectId::new(object_id);
        let target = if requested.is_root_alias() {
            self.ensure_root_id(session).await?
        } else {
            requested
        };

        let data = self
            .call(session, BscwMethod::GetPath, &[XmlRpcValue::from(&target)])
            .await?;

        let levels = data.as_array().ok_or_else(|| {
            BscwError::UnexpectedResponse(format!("get_path 返回的不是数组: {data:?}"))
        })?;

        let mut crumbs = Vec::with_capacity(levels.len());
        for level in levels {
            let level_id = ObjectId::from_value(level).ok_or_else(|| {
                BscwError::UnexpectedResponse(format!("get_path 中的 id 格式错误: {level:?}"))
            })?;
            let name = self.resolve_id(session, &level_id).await?;
            crumbs.push(PathCrumb::new(name, level_id.as_str()));
        }

        Ok(crumbs)
    }
}
