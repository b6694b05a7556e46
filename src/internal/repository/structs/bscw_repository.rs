use std::sync::Arc;

use tracing::{info, warn};

use crate::internal::bscw::structs::{BscwClient, ObjectId};
use crate::internal::config::functions::plugin_options;
use crate::internal::config::structs::config_form::ConfigForm;
use crate::internal::config::structs::repository_config::RepositoryConfig;
use crate::internal::config::traits::config_store::ConfigStore;
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::repository::structs::host_context::{
    FIELD_PASSWORD, FIELD_USERNAME, LoginSubmission, RepositoryOptions,
};
use crate::internal::repository::structs::login_form::{LoginField, LoginFieldType, LoginForm};
use crate::internal::session::structs::bscw_session::BscwSession;
use crate::internal::session::traits::session_store::SessionStore;

pub const LABEL_USERNAME: &str = "Username: ";
pub const LABEL_PASSWORD: &str = "Password: ";
pub const LABEL_LOGIN: &str = "Login";
pub const LABEL_ROOT: &str = "BSCW";
pub const LOGOUT_HINT: &str = "(Logout when you finish using BSCW)";

/// 会话存储中的 key
pub fn session_key(repository_id: u64) -> String {
    format!("bscw_key_{repository_id}")
}

/// BSCW 仓库适配器
///
/// 宿主每次页面请求构造一次：从会话存储恢复凭据，或用本次提交的登录表单登录。
/// 操作完成后会话（含 id 缓存）写回会话存储。
pub struct BscwRepository {
    pub(crate) repository_id: u64,
    pub(crate) session_key: String,
    pub(crate) client: BscwClient,
    pub(crate) session: BscwSession,
    pub(crate) session_store: Arc<dyn SessionStore>,
    pub(crate) config_store: Arc<dyn ConfigStore>,
    pub(crate) config: RepositoryConfig,
    pub(crate) options: RepositoryOptions,
    pub(crate) logged: bool,
}

impl BscwRepository {
    /// 按插件配置创建基于 HTTP 的适配器
    ///
    /// 服务器地址未配置或无效时返回错误；登录失败不会返回错误，只是处于未登录状态。
    pub async fn new(
        repository_id: u64,
        config_store: Arc<dyn ConfigStore>,
        session_store: Arc<dyn SessionStore>,
        options: RepositoryOptions,
        login: LoginSubmission,
    ) -> Result<Self, BscwError> {
        let config = RepositoryConfig::from_store(config_store.as_ref());
        let client = BscwClient::new(&config)?;

        Ok(Self::with_client(
            repository_id,
            client,
            config_store,
            session_store,
            options,
            login,
        )
        .await)
    }

    /// 使用指定的客户端创建适配器
    pub async fn with_client(
        repository_id: u64,
        client: BscwClient,
        config_store: Arc<dyn ConfigStore>,
        session_store: Arc<dyn SessionStore>,
        options: RepositoryOptions,
        login: LoginSubmission,
    ) -> Self {
        let config = RepositoryConfig::from_store(config_store.as_ref());
        let session_key = session_key(repository_id);
        let session = session_store.load(&session_key).unwrap_or_default();

        let mut repository = Self {
            repository_id,
            session_key,
            client,
            session,
            session_store,
            config_store,
            config,
            options,
            logged: false,
        };

        repository.restore_or_login(login).await;
        repository
    }

    /// 会话中没有凭据且提交了完整的登录表单时登录；否则恢复已保存的凭据。
    /// 任一步失败都会登出。
    async fn restore_or_login(&mut self, login: LoginSubmission) {
        let result = if self.session.credential().is_none() && login.is_complete() {
            let username = self.login_username(&login);
            self.client
                .authenticate(&mut self.session, &username, &login.password)
                .await
                .map(|_| ())
        } else if let Some(credential) = self.session.credential().cloned() {
            self.client.set_key(&mut self.session, credential).await
        } else {
            Ok(())
        };

        match result {
            Ok(()) => {
                if self.session.credential().is_some() {
                    self.persist_session();
                }
            }
            Err(e) => {
                warn!(
                    repository_id = self.repository_id,
                    error = %e,
                    "BSCW 登录失败"
                );
                self.clear_session();
            }
        }

        self.logged = self
            .session
            .credential()
            .is_some_and(|credential| !credential.is_empty());
    }

    /// 强制使用宿主用户名时忽略提交的用户名
    fn login_username(&self, login: &LoginSubmission) -> String {
        let host_username = &self.options.host_user.username;
        if self.config.force_host_username && !host_username.is_empty() {
            host_username.clone()
        } else {
            login.username.clone()
        }
    }

    pub(crate) fn persist_session(&self) {
        self.session_store.save(&self.session_key, &self.session);
    }

    pub(crate) fn clear_session(&mut self) {
        self.session_store.remove(&self.session_key);
        self.session.clear();
        self.logged = false;
        info!(repository_id = self.repository_id, "BSCW 会话已清除");
    }

    pub(crate) fn build_login_form(&self) -> LoginForm {
        LoginForm {
            fields: vec![
                LoginField {
                    id: FIELD_USERNAME.to_string(),
                    name: FIELD_USERNAME.to_string(),
                    label: LABEL_USERNAME.to_string(),
                    field_type: LoginFieldType::Text,
                    value: Some(self.options.host_user.username.clone()),
                    readonly: self.config.force_host_username,
                },
                LoginField {
                    id: FIELD_PASSWORD.to_string(),
                    name: FIELD_PASSWORD.to_string(),
                    label: LABEL_PASSWORD.to_string(),
                    field_type: LoginFieldType::Password,
                    value: None,
                    readonly: false,
                },
            ],
            button_label: LABEL_LOGIN.to_string(),
        }
    }

    /// 插件配置表单
    pub fn type_config_form(config_store: &dyn ConfigStore) -> ConfigForm {
        plugin_options::type_config_form(config_store)
    }

    /// 插件自己保存的配置项名
    pub fn type_option_names() -> &'static [&'static str] {
        plugin_options::type_option_names()
    }

    pub fn repository_id(&self) -> u64 {
        self.repository_id
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn session(&self) -> &BscwSession {
        &self.session
    }

    /// 文档在 BSCW 上的直接访问地址，供外链返回方式使用
    pub async fn get_file_link(&self, object_id: &str) -> Result<Option<String>, BscwError> {
        if !self.logged {
            return Err(BscwError::AuthNotSet);
        }
        self.client
            .get_file_link(&self.session, &ObjectId::new(object_id))
            .await
    }
}
