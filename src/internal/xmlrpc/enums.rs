/// BSCW 用到的 XML-RPC 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BscwMethod {
    /// 读取对象属性；带 depth 参数时返回对象及其子对象
    GetAttributes,
    /// 读取文档内容（base64）
    GetDocument,
    /// 读取对象的祖先 id 链
    GetPath,
}

impl BscwMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BscwMethod::GetAttributes => "get_attributes",
            BscwMethod::GetDocument => "get_document",
            BscwMethod::GetPath => "get_path",
        }
    }
}

impl std::fmt::Display for BscwMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
