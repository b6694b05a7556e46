pub mod driver;
pub mod remote;
