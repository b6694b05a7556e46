use crate::internal::bscw::structs::{BscwClient, DirectoryEntry, PathCrumb};
use crate::internal::config::structs::repository_config::RepositoryConfig;
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::session::structs::bscw_session::BscwSession;

/// 登录 BSCW 服务器，返回客户端和已认证的会话
///
/// 会话中已包含凭据和根目录 id，后续调用直接传入即可
///
/// example:
/// ```
/// use bscw_repository::config::RepositoryConfig;
/// use bscw_repository::{connect, list_folder};
///
/// let config = RepositoryConfig::new("https://bscw.example.org/bscw/bscw.cgi");
/// let (client, mut session) = connect(&config, "account", "password").await?;
///
/// let root = list_folder(&client, &mut session, "/").await?;
/// ```
pub async fn connect(
    config: &RepositoryConfig,
    username: &str,
    password: &str,
) -> Result<(BscwClient, BscwSession), BscwError> {
    let client = BscwClient::new(config)?;
    let mut session = BscwSession::new();
    client.authenticate(&mut session, username, password).await?;

    Ok((client, session))
}

/// 列出一层目录，`object_id` 为空或 `/` 时列出根目录
///
/// - 注意：只读取一层，需要递归请自行处理
pub async fn list_folder(
    client: &BscwClient,
    session: &mut BscwSession,
    object_id: &str,
) -> Result<Vec<DirectoryEntry>, BscwError> {
    client.get_listing(session, object_id, 1).await
}

/// 对象的祖先链，根在前
pub async fn folder_trail(
    client: &BscwClient,
    session: &mut BscwSession,
    object_id: &str,
) -> Result<Vec<PathCrumb>, BscwError> {
    client.generate_path_array(session, object_id).await
}
