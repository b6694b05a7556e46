//! 插件级配置：BSCW 服务器地址、是否强制使用宿主用户名登录。

pub mod functions;
pub mod structs;
pub mod traits;
