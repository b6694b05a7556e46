//! 宿主适配层：把宿主的回调（列目录、下载、登录表单、配置）翻译成 BSCW 客户端调用。

pub mod impl_traits;
pub mod structs;
pub mod traits;
