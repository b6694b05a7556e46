pub mod bscw_error;
pub mod config_error;
