pub mod bscw_repository;
pub mod capabilities;
pub mod folder_listing;
pub mod host_context;
pub mod login_form;
