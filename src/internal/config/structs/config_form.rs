use serde::Serialize;

/// 配置表单中的一个字段，由宿主渲染
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConfigField {
    Text {
        name: String,
        label: String,
        value: String,
        size: u32,
        required: bool,
    },
    Checkbox {
        name: String,
        label: String,
        checked: bool,
    },
    /// 纯说明文字
    Static { text: String },
}

/// 插件配置表单描述
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ConfigForm {
    pub fields: Vec<ConfigField>,
}

impl ConfigForm {
    pub fn field(&self, name: &str) -> Option<&ConfigField> {
        self.fields.iter().find(|field| match field {
            ConfigField::Text { name: n, .. } | ConfigField::Checkbox { name: n, .. } => n == name,
            ConfigField::Static { .. } => false,
        })
    }
}
