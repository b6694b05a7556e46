use serde::Serialize;

/// 支持的文件类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FileTypes {
    /// 所有类型
    All,
    Only(Vec<String>),
}

/// 支持的返回方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReturnTypes {
    /// 下载到宿主内部存储
    pub internal: bool,
    /// 以外链形式引用
    pub external: bool,
}
