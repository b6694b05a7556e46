use std::collections::HashMap;

/// 登录表单中用户名字段的名称
pub const FIELD_USERNAME: &str = "bscw_username";
/// 登录表单中密码字段的名称
pub const FIELD_PASSWORD: &str = "bscw_password";

/// 当前宿主用户
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostUser {
    /// 宿主登录名，登录表单默认填入该值
    pub username: String,
    /// 显示用全名
    pub full_name: String,
}

impl HostUser {
    pub fn new(username: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            full_name: full_name.into(),
        }
    }
}

/// 本次请求提交的登录表单
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginSubmission {
    pub username: String,
    pub password: String,
}

impl LoginSubmission {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// 从宿主提交的表单字段中读取
    pub fn from_form(fields: &HashMap<String, String>) -> Self {
        Self {
            username: fields.get(FIELD_USERNAME).cloned().unwrap_or_default(),
            password: fields.get(FIELD_PASSWORD).cloned().unwrap_or_default(),
        }
    }

    /// 用户名与密码都非空
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// 防止debug泄漏密码
impl std::fmt::Debug for LoginSubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginSubmission")
            .field("username", &self.username)
            .field("password", &"<hidden>")
            .finish()
    }
}

/// 宿主传入的仓库实例选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOptions {
    pub host_user: HostUser,
    /// 文件选择器接受的类型（如 `.pdf`），包含 `*` 或为空时不过滤
    pub accepted_types: Vec<String>,
}

impl Default for RepositoryOptions {
    fn default() -> Self {
        Self {
            host_user: HostUser::default(),
            accepted_types: vec!["*".to_string()],
        }
    }
}

impl RepositoryOptions {
    pub fn new(host_user: HostUser) -> Self {
        Self {
            host_user,
            ..Self::default()
        }
    }

    pub fn with_accepted_types(mut self, types: &[&str]) -> Self {
        self.accepted_types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    /// 文件名是否符合接受的类型（按扩展名，忽略大小写）
    pub fn accepts(&self, file_name: &str) -> bool {
        if self.accepted_types.is_empty() || self.accepted_types.iter().any(|t| t == "*") {
            return true;
        }

        let file_name = file_name.to_lowercase();
        self.accepted_types.iter().any(|t| {
            let t = t.trim().to_lowercase();
            let ext = t.trim_start_matches('.');
            !ext.is_empty() && file_name.ends_with(&format!(".{ext}"))
        })
    }
}
