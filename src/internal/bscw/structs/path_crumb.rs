use serde::Serialize;

/// 面包屑导航的一级
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCrumb {
    pub name: String,
    pub path: String,
}

impl PathCrumb {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
