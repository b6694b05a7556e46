//! 文件下载与外链。

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::internal::bscw::structs::attribute_record::{
    AttributeRecord, LINK_ATTRIBUTES, first_record,
};
use crate::internal::bscw::structs::{BscwClient, FetchedFile, ObjectId};
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::session::structs::bscw_session::BscwSession;
use crate::internal::xmlrpc::enums::BscwMethod;
use crate::internal::xmlrpc::structs::xml_rpc_value::XmlRpcValue;

impl BscwClient {
    /// 下载文档并保存到 `destination`
    ///
    /// - 先创建目标文件，创建失败返回 [`BscwError::CannotWriteFile`]
    /// - 之后任何一步失败（远程错误、内容不是二进制、写入失败）都会删除目标文件，不留下半个文件
    pub async fn get_file(
        &self,
        session: &BscwSession,
        object_id: &ObjectId,
        destination: &Path,
    ) -> Result<FetchedFile, BscwError> {
        let mut file = File::create(destination)
            .await
            .map_err(|source| BscwError::CannotWriteFile {
                path: destination.to_path_buf(),
                source,
            })?;

        let outcome = self
            .write_document(session, object_id, &mut file, destination)
            .await;

        drop(file);

        match outcome {
            Ok(bytes_written) => {
                info!(
                    object_id = %object_id,
                    bytes = bytes_written,
                    path = %destination.display(),
                    "BSCW 文件下载完成"
                );
                Ok(FetchedFile {
                    path: destination.to_path_buf(),
                    object_id: object_id.clone(),
                })
            }
            Err(err) => {
                if let Err(remove_err) = tokio::fs::remove_file(destination).await {
                    warn!(
                        path = %destination.display(),
                        error = %remove_err,
                        "删除未完成的下载文件失败"
                    );
                }
                Err(err)
            }
        }
    }

    async fn write_document(
        &self,
        session: &BscwSession,
        object_id: &ObjectId,
        file: &mut File,
        destination: &Path,
    ) -> Result<usize, BscwError> {
        let data = self
            .call(session, BscwMethod::GetDocument, &[XmlRpcValue::from(object_id)])
            .await?;

        let bytes = data.into_bytes().ok_or_else(|| {
            BscwError::DownloadFailed(format!("对象 {object_id} 没有返回文档内容"))
        })?;

        let cannot_write = |source| BscwError::CannotWriteFile {
            path: destination.to_path_buf(),
            source,
        };

        file.write_all(&bytes).await.map_err(cannot_write)?;
        file.flush().await.map_err(cannot_write)?;

        Ok(bytes.len())
    }

    /// 文档在 BSCW 上的直接访问地址
    ///
    /// 对象没有 `special_doc_ref` 属性时返回 None
    pub async fn get_file_link(
        &self,
        session: &BscwSession,
        object_id: &ObjectId,
    ) -> Result<Option<String>, BscwError> {
        let params = [
            XmlRpcValue::from(object_id),
            XmlRpcValue::string_array(LINK_ATTRIBUTES),
        ];
        let data = self
            .call(session, BscwMethod::GetAttributes, &params)
            .await?;

        let link = first_record(&data)
            .and_then(AttributeRecord::from_value)
            .and_then(|record| record.special_doc_ref)
            .map(|doc_ref| {
                format!(
                    "{}/{}",
                    self.server_url().as_str().trim_end_matches('/'),
                    doc_ref.trim_start_matches('/')
                )
            });

        Ok(link)
    }
}
