pub mod http_transport;
