/// BSCW 文件夹的 `__class__` 标签
pub const FOLDER_CLASS: &str = "bscw.core.cl_folder.Folder";

/// BSCW 文档的 `__class__` 标签
pub const DOCUMENT_CLASS: &str = "bscw.core.cl_document.Document";

/// 对象类型，在 API 边界由 `__class__` 标签解码一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectClass {
    Folder,
    Document,
    /// 其它类型（链接、讨论区等），列表中会被丢弃
    Unknown(String),
}

impl ObjectClass {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            FOLDER_CLASS => ObjectClass::Folder,
            DOCUMENT_CLASS => ObjectClass::Document,
            other => ObjectClass::Unknown(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            ObjectClass::Folder => FOLDER_CLASS,
            ObjectClass::Document => DOCUMENT_CLASS,
            ObjectClass::Unknown(tag) => tag,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, ObjectClass::Folder)
    }
}
