pub mod config_form;
pub mod file_config_store;
pub mod memory_config_store;
pub mod repository_config;
