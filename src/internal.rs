pub mod auth;
pub mod bscw;
pub mod config;
pub mod entrance;
pub mod errors;
pub mod repository;
pub mod session;
pub mod transport;
pub mod xmlrpc;
