//! BSCW API 客户端：认证、目录列表、id 解析、文件下载。

pub mod enums;
pub mod impl_client;
pub mod structs;
