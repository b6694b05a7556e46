pub mod bscw_session;
pub mod memory_session_store;
