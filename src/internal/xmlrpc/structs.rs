pub mod xml_rpc_value;
