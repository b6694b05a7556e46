pub mod xml_rpc_transport;
