//! XML-RPC 编解码：请求体编码、响应解析、以及带认证的 API 调用。
//!
//! 线上格式完全由 BSCW 服务器决定，这里只实现 BSCW 用到的那部分。

pub mod enums;
pub mod functions;
pub mod raw_xml;
pub mod structs;
