//! 认证与根目录 id。

use tracing::{debug, info};

use crate::internal::auth::structs::credential::Credential;
use crate::internal::bscw::structs::attribute_record::first_record;
use crate::internal::bscw::structs::{BscwClient, ObjectId};
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::session::structs::bscw_session::BscwSession;
use crate::internal::xmlrpc::enums::BscwMethod;

impl BscwClient {
    /// 用账号密码登录：生成凭据写入会话，并获取一次根目录 id。
    ///
    /// 远程调用失败时返回错误，凭据仍留在会话中，由调用方决定是否登出。
    pub async fn authenticate(
        &self,
        session: &mut BscwSession,
        username: &str,
        password: &str,
    ) -> Result<Credential, BscwError> {
        let credential = Credential::new(username, password);
        session.set_credential(credential.clone());

        self.ensure_root_id(session).await?;

        info!(
            credential = %credential.short_fingerprint(),
            "BSCW 登录成功"
        );

        Ok(credential)
    }

    /// 恢复已保存的凭据，并确保根目录 id 已获取
    pub async fn set_key(
        &self,
        session: &mut BscwSession,
        credential: Credential,
    ) -> Result<(), BscwError> {
        session.set_credential(credential);
        self.ensure_root_id(session).await?;
        Ok(())
    }

    /// 凭据存在且服务器能正常返回根目录 id
    pub async fn is_authenticated(&self, session: &BscwSession) -> bool {
        match session.credential() {
            Some(credential) if !credential.is_empty() => {
                self.fetch_root_id(session).await.is_ok()
            }
            _ => false,
        }
    }

    /// 会话中已有根 id 时直接返回，否则获取一次并写入会话
    pub(crate) async fn ensure_root_id(
        &self,
        session: &mut BscwSession,
    ) -> Result<ObjectId, BscwError> {
        if let Some(root_id) = session.root_id() {
            return Ok(root_id.clone());
        }

        let root_id = self.fetch_root_id(session).await?;
        debug!(root_id = %root_id, "获取 BSCW 根目录 id");
        session.set_root_id(root_id.clone());

        Ok(root_id)
    }

    /// 无参数的 get_attributes 返回当前用户的工作区根对象
    async fn fetch_root_id(&self, session: &BscwSession) -> Result<ObjectId, BscwError> {
        let data = self.call(session, BscwMethod::GetAttributes, &[]).await?;

        first_record(&data)
            .and_then(|record| record.get("__id__"))
            .and_then(ObjectId::from_value)
            .filter(|id| !id.as_str().is_empty())
            .ok_or(BscwError::RootNotFound)
    }
}

