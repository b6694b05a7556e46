use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::internal::bscw::structs::{DirectoryEntry, ObjectId, PathCrumb};
use crate::internal::repository::structs::login_form::LoginForm;

/// 文件选择器中的一项
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListItem {
    /// 文件夹，`path` 是继续浏览时传回的对象 id
    Folder {
        title: String,
        path: ObjectId,
        date: Option<DateTime<Utc>>,
    },
    /// 文件，`source` 是下载时传回的对象 id
    File {
        title: String,
        source: ObjectId,
        size: Option<u64>,
        date: Option<DateTime<Utc>>,
        content_type: Option<String>,
    },
}

impl ListItem {
    pub fn title(&self) -> &str {
        match self {
            ListItem::Folder { title, .. } | ListItem::File { title, .. } => title,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, ListItem::Folder { .. })
    }
}

impl From<DirectoryEntry> for ListItem {
    fn from(entry: DirectoryEntry) -> Self {
        if entry.is_dir {
            ListItem::Folder {
                title: entry.name,
                path: entry.id,
                date: entry.modified,
            }
        } else {
            ListItem::File {
                title: entry.name,
                source: entry.id,
                size: entry.size,
                date: entry.modified,
                content_type: entry.content_type,
            }
        }
    }
}

/// 一次目录浏览的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderListing {
    /// 子文件夹按需加载
    pub dynload: bool,
    /// BSCW 服务器地址，宿主可提供“在 BSCW 中管理”的入口
    pub manage: String,
    /// 不支持搜索
    pub nosearch: bool,
    pub message: String,
    /// 面包屑导航
    pub path: Vec<PathCrumb>,
    /// 文件夹在前，文件在后
    pub list: Vec<ListItem>,
}

/// get_listing 的结果：未登录时是登录表单
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListingResponse {
    Login(LoginForm),
    Listing(FolderListing),
}
