//! 宿主回调的分发入口。

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::internal::bscw::structs::FetchedFile;
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::repository::structs::folder_listing::ListingResponse;
use crate::internal::repository::structs::login_form::LoginForm;
use crate::internal::repository::traits::repository::Repository;

/// 宿主发来的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    /// 浏览目录
    List { object_id: String, path: String },
    /// 下载文件
    Download { object_id: String, save_as: PathBuf },
    /// 显示登录表单
    PrintLogin,
    Logout,
    /// 文件来源说明
    SourceInfo { source: String },
}

/// 返回给宿主的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HostResponse {
    Listing(ListingResponse),
    File(FetchedFile),
    Login(LoginForm),
    SourceInfo(String),
}

/// 把一次宿主请求分发到仓库的对应操作
pub async fn handle_request<R>(
    repository: &mut R,
    request: HostRequest,
) -> Result<HostResponse, BscwError>
where
    R: Repository + ?Sized,
{
    debug!(request = ?request, "处理宿主请求");

    match request {
        HostRequest::List { object_id, path } => repository
            .get_listing(&object_id, &path)
            .await
            .map(HostResponse::Listing),
        HostRequest::Download { object_id, save_as } => repository
            .get_file(&object_id, &save_as)
            .await
            .map(HostResponse::File),
        HostRequest::PrintLogin => Ok(HostResponse::Login(repository.print_login())),
        HostRequest::Logout => Ok(HostResponse::Login(repository.logout())),
        HostRequest::SourceInfo { source } => Ok(HostResponse::SourceInfo(
            repository.get_file_source_info(&source),
        )),
    }
}
