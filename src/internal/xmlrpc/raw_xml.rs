pub mod impl_raw_value;
pub mod raw_response;
