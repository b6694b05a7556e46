//! 宿主文件仓库的能力接口。
//!
//! 宿主自己的驱动（见 [`handle_request`](crate::handle_request)）只依赖这个 trait，
//! 不关心背后是哪种远程服务。

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;

use crate::internal::bscw::structs::FetchedFile;
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::errors::config_error::ConfigError;
use crate::internal::repository::structs::capabilities::{FileTypes, ReturnTypes};
use crate::internal::repository::structs::folder_listing::ListingResponse;
use crate::internal::repository::structs::login_form::LoginForm;

#[async_trait]
pub trait Repository: Send {
    /// 列出目录；未登录时返回登录表单
    ///
    /// - `object_id`：要列出的对象，空字符串或 `/` 表示根目录
    /// - `path`：宿主记录的展示路径，用于补充面包屑
    async fn get_listing(&mut self, object_id: &str, path: &str)
    -> Result<ListingResponse, BscwError>;

    /// 下载文件到 `save_as`
    async fn get_file(&mut self, object_id: &str, save_as: &Path)
    -> Result<FetchedFile, BscwError>;

    /// 登录表单
    fn print_login(&self) -> LoginForm;

    /// 清除会话中的凭据并返回登录表单
    fn logout(&mut self) -> LoginForm;

    /// 宿主会话中是否已有凭据
    fn check_login(&self) -> bool;

    /// 保存配置项，返回本仓库不处理、需宿主自行保存的项
    fn set_option(
        &mut self,
        options: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, String>, ConfigError>;

    /// 读取配置项
    fn get_option(&self, name: &str) -> Option<String>;

    fn supported_filetypes(&self) -> FileTypes;

    fn supported_returntypes(&self) -> ReturnTypes;

    /// 文件来源说明，宿主展示在文件信息里
    fn get_file_source_info(&self, source: &str) -> String;

    /// 外链地址
    fn get_link(&self, url: &str) -> String;
}
