use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginFieldType {
    Text,
    Password,
}

/// 登录表单字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginField {
    pub id: String,
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: LoginFieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// 强制使用宿主用户名时，用户名字段只读
    pub readonly: bool,
}

/// 未登录时返回给宿主的登录表单
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub fields: Vec<LoginField>,
    pub button_label: String,
}

impl LoginForm {
    pub fn field(&self, name: &str) -> Option<&LoginField> {
        self.fields.iter().find(|field| field.name == name)
    }
}
