/// 内部导出的模块
mod internal;


/// 导出核心入口函数
pub use internal::entrance::driver::*;
pub use internal::entrance::remote::*;

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::credential::Credential;
}

pub mod errors {
    use crate::internal;
    pub use internal::errors::bscw_error::BscwError;
    pub use internal::errors::config_error::ConfigError;
}

/// 对外提供 XML-RPC 编解码能力，以防有人要调用客户端没有封装的方法
pub mod xmlrpc {
    pub mod functions {
        use crate::internal;
        pub use internal::xmlrpc::functions::call_api::*;
        pub use internal::xmlrpc::functions::decode_method_response::*;
        pub use internal::xmlrpc::functions::encode_method_call::*;
    }

    pub mod enums {
        use crate::internal;
        pub use internal::xmlrpc::enums::*;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::xmlrpc::structs::xml_rpc_value::*;
    }
}

pub mod transport {
    use crate::internal;
    pub use internal::transport::structs::http_transport::HttpTransport;
    pub use internal::transport::traits::xml_rpc_transport::XmlRpcTransport;
}

pub mod client {
    use crate::internal;
    pub use internal::bscw::enums::*;
    pub use internal::bscw::structs::attribute_record::{
        LINK_ATTRIBUTES, LISTING_ATTRIBUTES, NAME_ATTRIBUTES,
    };
    pub use internal::bscw::structs::*;
}

pub mod session {
    use crate::internal;
    pub use internal::session::structs::bscw_session::BscwSession;
    pub use internal::session::structs::memory_session_store::MemorySessionStore;
    pub use internal::session::traits::session_store::SessionStore;
}

pub mod config {
    use crate::internal;
    pub use internal::config::functions::plugin_options::*;
    pub use internal::config::structs::config_form::*;
    pub use internal::config::structs::file_config_store::FileConfigStore;
    pub use internal::config::structs::memory_config_store::MemoryConfigStore;
    pub use internal::config::structs::repository_config::*;
    pub use internal::config::traits::config_store::ConfigStore;
}

pub mod repository {
    use crate::internal;
    pub use internal::repository::structs::bscw_repository::*;
    pub use internal::repository::structs::capabilities::*;
    pub use internal::repository::structs::folder_listing::*;
    pub use internal::repository::structs::host_context::*;
    pub use internal::repository::structs::login_form::*;
    pub use internal::repository::traits::repository::Repository;
}
