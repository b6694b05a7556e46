pub mod call_api;
pub mod decode_method_response;
pub mod encode_method_call;
