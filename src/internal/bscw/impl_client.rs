//! [`BscwClient`](super::structs::BscwClient) 的各项操作，按功能拆分。

pub mod impl_auth;
pub mod impl_download;
pub mod impl_listing;
pub mod impl_resolve;
